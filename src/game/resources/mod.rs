//! Chess game resources - Global game state management
//!
//! Resources are ECS singletons shared across systems.
//!
//! # Resource Categories
//!
//! ## Rules
//! - [`ChessEngine`] - Live position, legality, FEN/PGN loading ([`RulesEngine`])
//!
//! ## Display
//! - [`BoardView`] - History cursor, selection, marks, orientation and square styles
//! - [`MoveHistory`] - Initial FEN plus verbose move records
//!
//! ## Audio
//! - [`GameSounds`] - Move and capture sound handles
//!
//! # Integration
//!
//! All resources are registered in [`crate::game::plugin::GamePlugin`] and
//! accessed via system parameters:
//!
//! ```rust,ignore
//! fn my_system(mut view: ResMut<BoardView>, mut engine: ResMut<ChessEngine>) {
//!     view.navigate_history(&*engine, -1);
//! }
//! ```

pub mod board_view;
pub mod engine;
pub mod history;
pub mod sounds;


pub use board_view::*;
pub use engine::*;
pub use history::*;
pub use sounds::*;
