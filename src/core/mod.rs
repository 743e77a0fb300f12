//! Core module - Application infrastructure
//!
//! # Architecture Overview
//!
//! The [`CorePlugin`] sets up what every other plugin relies on:
//! - Window configuration via [`WindowConfig`]
//! - User preferences via [`BoardSettings`], persisted as JSON
//! - Command-line start-up options via [`LaunchOptions`]
//!
//! # Usage Example
//!
//! ```rust,ignore
//! use bevy::prelude::*;
//! use ddchess::core::{CorePlugin, WindowConfig};
//!
//! let window_config = WindowConfig::default();
//! App::new()
//!     .add_plugins(CorePlugin)
//!     .add_plugins(DefaultPlugins.set(WindowPlugin {
//!         primary_window: Some(window_config.to_window()),
//!         ..default()
//!     }))
//!     // ... other plugins
//! ```

pub mod error;
pub mod launch;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use error::{CoreError, CoreResult};
pub use launch::{LaunchArgs, LaunchOptions};
pub use plugin::CorePlugin;
pub use resources::*;
pub use window_config::WindowConfig;
