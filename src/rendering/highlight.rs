//! Square styling
//!
//! Turns the current selection, the move being shown and the user's
//! right-click marks into a square → style map for the board widget.
//!
//! Layers are applied in order, later ones overwrite earlier ones on the same
//! square:
//!
//! 1. selected square and legal destinations of the selected piece
//! 2. last-move source and destination
//! 3. right-click marks
//!
//! The map is rebuilt from scratch on every change; it never holds more than a
//! few dozen entries.

use crate::game::resources::{MoveRecord, RulesEngine};
use shakmaty::Square;
use std::collections::{BTreeSet, HashMap};

/// Visual tag for one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SquareStyle {
    Selected,
    LegalMove,
    LegalCapture,
    LastMoveFrom,
    LastMoveTo,
    Marked,
}

pub type SquareStyles = HashMap<Square, SquareStyle>;

/// Which layers are switched on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightOptions {
    pub show_legal_moves: bool,
    pub highlight_last_move: bool,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            show_legal_moves: true,
            highlight_last_move: true,
        }
    }
}

/// Everything the styling depends on apart from the engine
#[derive(Debug, Clone, Copy)]
pub struct HighlightInput<'a> {
    pub selected: Option<Square>,
    pub shown_move: Option<&'a MoveRecord>,
    pub marked: &'a BTreeSet<Square>,
    /// Legal destinations are only meaningful on the live position
    pub at_tip: bool,
    pub options: HighlightOptions,
}

/// Build the style map for the board
pub fn compute_square_styles<E: RulesEngine + ?Sized>(
    engine: &E,
    input: HighlightInput<'_>,
) -> SquareStyles {
    let mut styles = SquareStyles::new();

    if let Some(selected) = input.selected {
        styles.insert(selected, SquareStyle::Selected);

        let own_piece = engine
            .piece_at(selected)
            .is_some_and(|piece| piece.color == engine.side_to_move());
        if input.options.show_legal_moves && input.at_tip && own_piece {
            for destination in engine.legal_destinations(selected) {
                let style = if engine.piece_at(destination).is_some() {
                    SquareStyle::LegalCapture
                } else {
                    SquareStyle::LegalMove
                };
                styles.insert(destination, style);
            }
        }
    }

    if input.options.highlight_last_move {
        if let Some(record) = input.shown_move {
            styles.insert(record.from, SquareStyle::LastMoveFrom);
            styles.insert(record.to, SquareStyle::LastMoveTo);
        }
    }

    for &square in input.marked {
        styles.insert(square, SquareStyle::Marked);
    }

    styles
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::{ChessEngine, MoveRequest};

    fn input<'a>(selected: Option<Square>, marked: &'a BTreeSet<Square>) -> HighlightInput<'a> {
        HighlightInput {
            selected,
            shown_move: None,
            marked,
            at_tip: true,
            options: HighlightOptions::default(),
        }
    }

    #[test]
    fn test_own_piece_gets_legal_destinations() {
        let engine = ChessEngine::default();
        let marked = BTreeSet::new();

        let styles = compute_square_styles(&engine, input(Some(Square::E2), &marked));

        assert_eq!(styles.get(&Square::E2), Some(&SquareStyle::Selected));
        for destination in engine.legal_destinations(Square::E2) {
            assert_eq!(styles.get(&destination), Some(&SquareStyle::LegalMove));
        }
        assert_eq!(styles.len(), 3);
    }

    #[test]
    fn test_opponent_piece_and_empty_square_get_no_markers() {
        let engine = ChessEngine::default();
        let marked = BTreeSet::new();

        let opponent = compute_square_styles(&engine, input(Some(Square::E7), &marked));
        assert_eq!(opponent.len(), 1);
        assert_eq!(opponent.get(&Square::E7), Some(&SquareStyle::Selected));

        let empty = compute_square_styles(&engine, input(Some(Square::E4), &marked));
        assert_eq!(empty.len(), 1);
    }

    #[test]
    fn test_capture_destinations_are_marked_as_captures() {
        let mut engine = ChessEngine::default();
        engine.make_move(MoveRequest::new(Square::E2, Square::E4));
        engine.make_move(MoveRequest::new(Square::D7, Square::D5));
        let marked = BTreeSet::new();

        let styles = compute_square_styles(&engine, input(Some(Square::E4), &marked));

        assert_eq!(styles.get(&Square::D5), Some(&SquareStyle::LegalCapture));
        assert_eq!(styles.get(&Square::E5), Some(&SquareStyle::LegalMove));
    }

    #[test]
    fn test_browsing_suppresses_legal_markers() {
        let engine = ChessEngine::default();
        let marked = BTreeSet::new();
        let mut browsing = input(Some(Square::G1), &marked);
        browsing.at_tip = false;

        let styles = compute_square_styles(&engine, browsing);

        assert_eq!(styles.len(), 1);
    }

    #[test]
    fn test_layers_overwrite_in_order() {
        let mut engine = ChessEngine::default();
        let record = engine
            .make_move(MoveRequest::new(Square::G1, Square::F3))
            .unwrap();
        let marked: BTreeSet<Square> = [Square::F3, Square::A1].into_iter().collect();

        let styles = compute_square_styles(
            &engine,
            HighlightInput {
                selected: Some(Square::G1),
                shown_move: Some(&record),
                marked: &marked,
                at_tip: true,
                options: HighlightOptions::default(),
            },
        );

        // Last move beats selection, marks beat everything
        assert_eq!(styles.get(&Square::G1), Some(&SquareStyle::LastMoveFrom));
        assert_eq!(styles.get(&Square::F3), Some(&SquareStyle::Marked));
        assert_eq!(styles.get(&Square::A1), Some(&SquareStyle::Marked));
    }

    #[test]
    fn test_options_switch_layers_off() {
        let mut engine = ChessEngine::default();
        let record = engine
            .make_move(MoveRequest::new(Square::E2, Square::E4))
            .unwrap();
        let marked = BTreeSet::new();

        let styles = compute_square_styles(
            &engine,
            HighlightInput {
                selected: Some(Square::E7),
                shown_move: Some(&record),
                marked: &marked,
                at_tip: true,
                options: HighlightOptions {
                    show_legal_moves: false,
                    highlight_last_move: false,
                },
            },
        );

        assert_eq!(styles.len(), 1);
        assert_eq!(styles.get(&Square::E7), Some(&SquareStyle::Selected));
    }

    #[test]
    fn test_same_input_same_output() {
        let engine = ChessEngine::default();
        let marked: BTreeSet<Square> = [Square::H8].into_iter().collect();

        let first = compute_square_styles(&engine, input(Some(Square::B1), &marked));
        let second = compute_square_styles(&engine, input(Some(Square::B1), &marked));

        assert_eq!(first, second);
    }
}
