//! PGN reader and writer tests
//!
//! # Test Organization
//!
//! - `test_read_*` - tokenising movetext, tags, comments and variations
//! - `test_write_*` - rendering a history back to PGN
//! - `test_round_trip_*` - written PGN loads back into the same game

use super::*;
use crate::game::error::ImportError;
use crate::game::resources::{ChessEngine, MoveHistory, MoveRequest, RulesEngine};
use shakmaty::Square;

fn sans(text: &str) -> Vec<String> {
    read_pgn(text).expect("valid PGN").sans
}

#[test]
fn test_read_plain_movetext() {
    assert_eq!(sans("1. e4 e5 2. Nf3 Nc6"), vec!["e4", "e5", "Nf3", "Nc6"]);
}

#[test]
fn test_read_compact_move_numbers() {
    //! Numbers glued to the move and black-to-move ellipses are stripped
    assert_eq!(sans("1.e4 e5 2.Nf3 2...Nc6"), vec!["e4", "e5", "Nf3", "Nc6"]);
}

#[test]
fn test_read_tags() {
    let game = read_pgn(
        "[Event \"Club \\\"Open\\\"\"]\n[White \"Ana\"]\n[Result \"1-0\"]\n\n1. d4 1-0",
    )
    .unwrap();

    assert_eq!(game.tag("event"), Some("Club \"Open\""));
    assert_eq!(game.tag("White"), Some("Ana"));
    assert_eq!(game.start_fen(), None);
    assert_eq!(game.sans, vec!["d4"]);
}

#[test]
fn test_read_skips_comments_variations_and_nags() {
    let text = "1. e4 {best by test} e5 (1... c5 2. Nf3 (2. c3) d6) 2. Nf3 $1 ; rest of line\n\
                Nc6!? 3. Bb5?! a6";

    assert_eq!(sans(text), vec!["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"]);
}

#[test]
fn test_read_stops_at_result() {
    assert_eq!(sans("1. f3 e5 2. g4 Qh4# 0-1 3. a3"), vec!["f3", "e5", "g4", "Qh4#"]);
}

#[test]
fn test_read_normalises_zero_castling_and_en_passant_marker() {
    assert_eq!(sans("10. 0-0 0-0-0 11. exd6 e.p."), vec!["O-O", "O-O-O", "exd6"]);
}

#[test]
fn test_read_tags_only_is_an_empty_game() {
    let game = read_pgn("[Event \"?\"]\n\n*").unwrap();

    assert!(game.sans.is_empty());
    assert_eq!(game.tags.len(), 1);
}

#[test]
fn test_read_rejects_malformed_text() {
    for text in ["", "   ", "*", "1. e4 {never closed", "1. e4 (1. d4", "1. e4 )", "[Event \"x\""] {
        assert!(
            matches!(read_pgn(text), Err(ImportError::InvalidPgn { .. })),
            "{text:?} should be rejected"
        );
    }
}

#[test]
fn test_write_standard_game() {
    let mut engine = ChessEngine::default();
    engine.load_pgn("1. e4 e5 2. Nf3").unwrap();
    let history = MoveHistory::from_moves(engine.initial_fen(), engine.history_verbose().to_vec());

    assert_eq!(write_pgn(&history), "1. e4 e5 2. Nf3 *");
}

#[test]
fn test_write_empty_history() {
    assert_eq!(write_pgn(&MoveHistory::default()), "*");
}

#[test]
fn test_write_custom_start_with_black_to_move() {
    let fen = "r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 7";
    let mut engine = ChessEngine::from_fen(fen).unwrap();
    engine.make_move(MoveRequest::new(Square::E8, Square::G8)).unwrap();
    engine.make_move(MoveRequest::new(Square::E1, Square::C1)).unwrap();
    let history = MoveHistory::from_moves(engine.initial_fen(), engine.history_verbose().to_vec());

    let pgn = write_pgn(&history);

    assert_eq!(
        pgn,
        format!("[SetUp \"1\"]\n[FEN \"{fen}\"]\n\n7... O-O 8. O-O-O *")
    );
}

#[test]
fn test_round_trip_through_engine() {
    let mut engine = ChessEngine::default();
    engine
        .load_pgn("1. d4 Nf6 2. c4 e6 3. Nc3 Bb4 4. Qc2 O-O 5. a3 Bxc3+ 6. Qxc3")
        .unwrap();
    let history = MoveHistory::from_moves(engine.initial_fen(), engine.history_verbose().to_vec());

    let mut reloaded = ChessEngine::default();
    reloaded.load_pgn(&write_pgn(&history)).unwrap();

    assert_eq!(reloaded.history_verbose(), engine.history_verbose());
}
