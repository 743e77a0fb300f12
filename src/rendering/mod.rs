//! Rendering module - 2D board drawn with egui
//!
//! # Architecture
//!
//! - `highlight` - Square style map computed from selection, last move and marks
//! - `board` - egui board widget, geometry and piece glyphs
//! - `board_theme` - Square and overlay colours
//!
//! The board is immediate-mode: every frame it is painted from the
//! [`BoardView`](crate::game::resources::BoardView) resource, and pointer input
//! comes back out as [`BoardGesture`](crate::game::events::BoardGesture)
//! messages.

pub mod board;
pub mod board_theme;
pub mod highlight;

pub use board::{BoardGeometry, BoardWidget};
pub use board_theme::BoardPalette;
pub use highlight::{compute_square_styles, HighlightOptions, SquareStyle, SquareStyles};
