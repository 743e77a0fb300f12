//! Move history tracking
//!
//! Keeps the position a game started from and a chronological record of
//! every move played since. Each record carries the FEN after the move so the
//! board can jump to any point without replaying.
//!
//! # Architecture
//!
//! `MoveHistory` stores the initial FEN and a `Vec<MoveRecord>`:
//!
//! - index 0 = first half-move after the initial position
//! - `moves[i].fen_after` = position after replaying `moves[0..=i]`
//!
//! The sequence is append-only while playing and replaced wholesale on import.

use shakmaty::{Color, Role, Square};

/// Standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Special-move tags attached to a move record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveFlags {
    pub capture: bool,
    pub en_passant: bool,
    pub castle: bool,
    pub promotion: Option<Role>,
    pub check: bool,
    pub checkmate: bool,
}

impl MoveFlags {
    /// Capture in the audible sense: en passant takes a pawn too
    pub fn takes_piece(&self) -> bool {
        self.capture || self.en_passant
    }
}

/// One half-move, in verbose form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// Square the moving piece left
    pub from: Square,
    /// Square the moving piece landed on (king destination when castling)
    pub to: Square,
    /// Standard Algebraic Notation, including `+`/`#`
    pub san: String,
    /// Side that made the move
    pub color: Color,
    /// Full-move number of the position the move was played from
    pub fullmove: u32,
    pub flags: MoveFlags,
    /// Position after the move
    pub fen_after: String,
}

/// Initial position plus ordered move list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveHistory {
    initial_fen: String,
    moves: Vec<MoveRecord>,
}

impl Default for MoveHistory {
    fn default() -> Self {
        Self::new(STARTING_FEN)
    }
}

impl MoveHistory {
    pub fn new(initial_fen: impl Into<String>) -> Self {
        Self {
            initial_fen: initial_fen.into(),
            moves: Vec::new(),
        }
    }

    /// Build a history from an already replayed move list
    pub fn from_moves(initial_fen: impl Into<String>, moves: Vec<MoveRecord>) -> Self {
        Self {
            initial_fen: initial_fen.into(),
            moves,
        }
    }

    pub fn initial_fen(&self) -> &str {
        &self.initial_fen
    }

    pub fn starts_from_standard_position(&self) -> bool {
        self.initial_fen == STARTING_FEN
    }

    pub fn add_move(&mut self, record: MoveRecord) {
        self.moves.push(record);
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.moves.last()
    }

    pub fn get_move(&self, index: usize) -> Option<&MoveRecord> {
        self.moves.get(index)
    }

    /// Number of half-moves played
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Index of the newest move, `None` when no move has been played
    pub fn tip(&self) -> Option<usize> {
        self.moves.len().checked_sub(1)
    }

    /// FEN shown when the cursor sits at `index` (`None` = initial position)
    pub fn fen_at(&self, index: Option<usize>) -> &str {
        match index.and_then(|i| self.moves.get(i)) {
            Some(record) => &record.fen_after,
            None => &self.initial_fen,
        }
    }

    pub fn moves(&self) -> &[MoveRecord] {
        &self.moves
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MoveRecord> {
        self.moves.iter()
    }
}
