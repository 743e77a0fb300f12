//! Error types for game module
//!
//! The only failure the board can report is bad import text. Illegal moves are
//! not errors: they come back as `None` / [`MoveOutcome::Rejected`].
//!
//! [`MoveOutcome::Rejected`]: crate::game::resources::MoveOutcome::Rejected

/// Message shown by the import panel when neither parser accepts the text
pub const UNRECOGNISED_INPUT_MESSAGE: &str = "Input is not in valid FEN or PGN notation";

/// Errors that can occur while importing a position or game
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    /// Text is not a FEN the rules engine accepts
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// Text is not a PGN the rules engine can replay
    #[error("Invalid PGN: {reason}")]
    InvalidPgn { reason: String },

    /// Both the FEN and the PGN attempt failed
    #[error("{}", UNRECOGNISED_INPUT_MESSAGE)]
    Unrecognised,
}

impl ImportError {
    pub fn fen(reason: impl Into<String>) -> Self {
        Self::InvalidFen {
            reason: reason.into(),
        }
    }

    pub fn pgn(reason: impl Into<String>) -> Self {
        Self::InvalidPgn {
            reason: reason.into(),
        }
    }
}

/// Result type alias for import operations
pub type ImportResult<T> = Result<T, ImportError>;
