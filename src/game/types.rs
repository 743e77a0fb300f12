//! Small value types shared by the board view, the widget and the UI
//!
//! Squares, colours and pieces come straight from `shakmaty`; only the
//! view-level concepts live here.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use shakmaty::{Color, Square};

/// Which side is drawn at the bottom of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Reflect)]
pub enum Orientation {
    #[default]
    White,
    Black,
}

impl Orientation {
    pub fn flipped(self) -> Self {
        match self {
            Orientation::White => Orientation::Black,
            Orientation::Black => Orientation::White,
        }
    }

    pub fn bottom_color(self) -> Color {
        match self {
            Orientation::White => Color::White,
            Orientation::Black => Color::Black,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Orientation::White => "white",
            Orientation::Black => "black",
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Orientation::White),
            "black" | "b" => Ok(Orientation::Black),
            other => Err(format!("unknown orientation '{other}', expected white or black")),
        }
    }
}

/// Click-to-move state
///
/// Separate from the history: a click on one square arms a selection, the
/// next click either clears it or tries a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClickState {
    #[default]
    Idle,
    PieceSelected(Square),
}

impl ClickState {
    pub fn selected(self) -> Option<Square> {
        match self {
            ClickState::Idle => None,
            ClickState::PieceSelected(square) => Some(square),
        }
    }
}

/// How a move attempt was produced, which decides what happens when it fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOrigin {
    /// Drag and drop: a failed attempt leaves everything as it was
    Drag,
    /// Second click of a click pair: a failed attempt selects the destination
    Click,
}
