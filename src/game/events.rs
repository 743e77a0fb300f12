//! Messages flowing between the UI, the board view and audio
//!
//! The egui systems only ever write messages; a single input system owns the
//! board view and the engine and applies them in order.

use crate::game::resources::MoveFlags;
use bevy::prelude::*;
use shakmaty::Square;

/// Pointer gesture on the board widget
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardGesture {
    /// Primary button pressed and dragged away from a square
    DragStart(Square),
    /// Pointer moved over a square (or off the board) while dragging
    DragOver(Option<Square>),
    /// Dragged piece released (`None` = outside the board)
    Drop(Option<Square>),
    /// Primary click without dragging
    Click(Square),
    /// Secondary click
    RightClick(Square),
}

/// Commands from the side panels and the keyboard
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    /// Jump to a history index, `-1` = initial position
    Navigate(isize),
    /// Move the cursor relative to where it is
    Step(isize),
    /// Jump to the newest move
    GoToEnd,
    Flip,
    Import(String),
    NewGame,
}

/// A move was accepted and appended to the history
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovePlayed {
    pub flags: MoveFlags,
}

/// Result of the most recent import, for the import panel
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct ImportFinished {
    pub error: Option<String>,
}
