//! DDChess - a desktop chessboard with move history and FEN/PGN import
//!
//! # Plugins
//!
//! - [`core::CorePlugin`] - settings, window config, command-line options
//! - [`game::GamePlugin`] - rules engine, board view, gesture and command systems
//! - [`audio::AudioCuePlugin`] - move and capture sounds
//! - [`ui::UIPlugin`] - egui layout: board, history, import

pub mod audio;
pub mod core;
pub mod game;
pub mod rendering;
pub mod ui;
