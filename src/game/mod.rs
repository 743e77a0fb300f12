//! Chess board logic
//!
//! Pure board state lives in resources that can be driven without an `App`;
//! systems only translate messages into calls on them.
//!
//! # Module Organization
//!
//! - `resources` - [`ChessEngine`](resources::ChessEngine), [`BoardView`](resources::BoardView), history
//! - `rules` - PGN reading and writing
//! - `systems` - Gesture, command and keyboard systems
//! - `events` - Messages between UI, board and audio
//! - `types` - Orientation and click state
//! - `error` - Import errors
//! - `plugin` - [`GamePlugin`]

pub mod error;
pub mod events;
pub mod plugin;
pub mod resources;
pub mod rules;
pub mod system_sets;
pub mod systems;
pub mod types;

pub use plugin::GamePlugin;
