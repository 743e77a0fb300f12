//! Board systems
//!
//! # System Execution Order
//!
//! ```text
//! ┌─────────────────┐
//! │ Input           │  keyboard_navigation, sync_highlight_options
//! │                 │  → ViewCommand messages, highlight options
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Execution       │  process_board_gestures, apply_view_commands
//! │                 │  → BoardView + ChessEngine updated, MovePlayed
//! └────────┬────────┘
//!          ↓
//! ┌─────────────────┐
//! │ Feedback        │  sound cues (see crate::audio)
//! └─────────────────┘
//! ```
//!
//! Gestures come from the egui board widget, which runs in
//! `EguiPrimaryContextPass` and is therefore applied on the following frame.

pub mod input;
pub mod keyboard;

pub use input::*;
pub use keyboard::*;
