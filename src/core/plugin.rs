//! Core plugin for DDChess
//!
//! Provides fundamental application setup:
//! - Window configuration
//! - Settings loading and persistence
//! - Command-line start-up options
//!
//! # Plugin Order
//!
//! Recommended plugin order:
//! 1. [`CorePlugin`] - Foundation (settings, window config)
//! 2. [`bevy::DefaultPlugins`] - Core Bevy functionality
//! 3. [`bevy_egui::EguiPlugin`] - UI framework
//! 4. [`crate::game::GamePlugin`] - Board logic
//! 5. [`crate::audio::AudioCuePlugin`], [`crate::ui::UIPlugin`]

use bevy::prelude::*;

use super::{
    launch::apply_launch_options,
    settings_persistence::{load_settings_system, save_settings_system, SettingsPath},
    BoardSettings, WindowConfig,
};

/// Core plugin for DDChess
///
/// # Usage
///
/// ```rust,ignore
/// App::new()
///     .add_plugins(CorePlugin)
///     .add_plugins(DefaultPlugins)
///     // ... other plugins
/// ```
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowConfig>()
            .init_resource::<SettingsPath>();

        app.register_type::<WindowConfig>()
            .register_type::<BoardSettings>();

        // Settings must exist before launch options read the default orientation
        app.add_systems(Startup, (load_settings_system, apply_launch_options).chain());

        app.add_systems(
            Update,
            save_settings_system.run_if(resource_exists::<BoardSettings>),
        );
    }
}
