//! System organization using SystemSets
//!
//! Defines execution order for game systems so that a gesture written by the
//! UI in one frame is applied and heard in the same frame.
//!
//! # Execution Order
//!
//! Systems run in this order each frame:
//! 1. **Input** - Keyboard mapping, settings sync
//! 2. **Execution** - Apply gestures and commands to the board view
//! 3. **Feedback** - Sound cues for played moves, settings persistence

use bevy::prelude::*;

/// System execution order for board logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Input handling (keyboard) and settings → view sync
    Input,

    /// Board view updates
    ///
    /// Systems: gesture processing, view commands
    Execution,

    /// Side effects of state changes
    ///
    /// Systems: sound cue scheduling
    Feedback,
}
