//! Game plugin - board state, rules and input systems
//!
//! Registers the rules engine, the board view and the messages that connect
//! the UI to them, and orders the systems that apply those messages.
//!
//! # Plugin Dependencies
//!
//! This plugin depends on:
//! - [`crate::core::CorePlugin`] - Settings and start-up options
//! - [`bevy::DefaultPlugins`] or `MinimalPlugins` + `InputPlugin`
//!
//! # System Organization
//!
//! Systems are organized into sets with explicit ordering:
//! - `Input` - Keyboard shortcuts, settings → view sync
//! - `Execution` - Gestures and commands applied to the board view
//! - `Feedback` - Sound cues (added by [`crate::audio::AudioCuePlugin`])
//!
//! # See Also
//!
//! - [`super::resources`] - Game resource definitions
//! - [`super::systems`] - Game system implementations
//! - [`super::system_sets`] - System set definitions

use super::events::{BoardGesture, ImportFinished, MovePlayed, ViewCommand};
use super::resources::{BoardView, ChessEngine};
use super::system_sets::GameSystems;
use super::systems::*;
use super::types::Orientation;
use crate::core::BoardSettings;
use bevy::prelude::*;

/// Game plugin for DDChess
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let engine = ChessEngine::default();
        let view = BoardView::new(&engine);
        app.insert_resource(engine).insert_resource(view);

        app.add_message::<BoardGesture>()
            .add_message::<ViewCommand>()
            .add_message::<MovePlayed>()
            .add_message::<ImportFinished>();

        app.register_type::<Orientation>();

        // Input → Execution → Feedback
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Feedback,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                keyboard_navigation
                    .in_set(GameSystems::Input)
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
                sync_highlight_options
                    .in_set(GameSystems::Input)
                    .run_if(resource_exists::<BoardSettings>),
                (process_board_gestures, apply_view_commands)
                    .chain()
                    .in_set(GameSystems::Execution),
            ),
        );
    }
}
