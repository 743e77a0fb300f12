//! Settings persistence system
//!
//! Saves and loads [`BoardSettings`] to/from a JSON file so preferences
//! survive restarts.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the platform configuration
//! directory (e.g. `~/.config/ddchess/settings.json`), falling back to the
//! working directory when no config directory can be resolved.
//!
//! # Error Handling
//!
//! - Load failures fall back to default settings with a warning
//! - Save failures are logged and never interrupt the board

use crate::core::error::CoreResult;
use crate::core::BoardSettings;
use bevy::prelude::*;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Where settings are read from and written to
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SettingsPath(pub PathBuf);

impl Default for SettingsPath {
    fn default() -> Self {
        Self(default_settings_path())
    }
}

/// Resolve `settings.json` in the user's configuration directory
pub fn default_settings_path() -> PathBuf {
    match ProjectDirs::from("org", "ddchess", "ddchess") {
        Some(proj_dirs) => proj_dirs.config_dir().join(SETTINGS_FILENAME),
        None => PathBuf::from(SETTINGS_FILENAME),
    }
}

/// Read settings from `path`
pub fn read_settings(path: &Path) -> CoreResult<BoardSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write settings to `path` as pretty JSON, creating the directory if needed
pub fn write_settings(path: &Path, settings: &BoardSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from file on startup
///
/// Inserts [`BoardSettings`], using defaults when the file is missing or
/// cannot be parsed.
pub fn load_settings_system(mut commands: Commands, path: Res<SettingsPath>) {
    let settings = if path.0.exists() {
        match read_settings(&path.0) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path.0);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to load settings at {:?}: {}. Using defaults.",
                    path.0, e
                );
                BoardSettings::default()
            }
        }
    } else {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path.0);
        BoardSettings::default()
    };

    commands.insert_resource(settings);
}

/// Save settings to file when they change
pub fn save_settings_system(settings: Res<BoardSettings>, path: Res<SettingsPath>) {
    // Freshly inserted by the loader, nothing new to write
    if !settings.is_changed() || settings.is_added() {
        return;
    }

    match write_settings(&path.0, &settings) {
        Ok(()) => info!("[SETTINGS] Saved settings to {:?}", path.0),
        Err(e) => error!("[SETTINGS] Failed to save settings to {:?}: {}", path.0, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use crate::game::types::Orientation;

    fn scratch_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("ddchess-settings-{}-{name}", std::process::id()))
            .join(SETTINGS_FILENAME)
    }

    #[test]
    fn test_settings_survive_write_and_read() {
        let path = scratch_path("write-read");
        let settings = BoardSettings {
            master_volume: 0.3,
            show_legal_moves: false,
            default_orientation: Orientation::Black,
            ..BoardSettings::default()
        };

        write_settings(&path, &settings).unwrap();
        let loaded = read_settings(&path).unwrap();

        assert_eq!(loaded, settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let path = scratch_path("missing");

        assert!(matches!(read_settings(&path), Err(CoreError::SettingsIo(_))));
    }

    #[test]
    fn test_read_garbage_is_serialization_error() {
        let path = scratch_path("garbage");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            read_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
