//! Core resources for application-wide configuration
//!
//! [`BoardSettings`] is loaded from disk at startup and written back whenever
//! it changes. See [`super::settings_persistence`].

use crate::game::types::Orientation;
use crate::rendering::highlight::HighlightOptions;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// User preferences that survive restarts
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize, Reflect)]
#[reflect(Resource)]
#[serde(default)]
pub struct BoardSettings {
    /// Master volume (0.0 to 1.0)
    pub master_volume: f32,

    /// Whether move and capture sounds play at all
    pub sound_enabled: bool,

    /// Whether legal destinations are marked for the selected piece
    pub show_legal_moves: bool,

    /// Whether the last move's squares are highlighted
    pub highlight_last_move: bool,

    /// Gap between the two sounds of a castle, in milliseconds
    pub castle_cue_delay_ms: u64,

    /// Side drawn at the bottom when the app starts
    pub default_orientation: Orientation,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            master_volume: 0.7,
            sound_enabled: true,
            show_legal_moves: true,
            highlight_last_move: true,
            castle_cue_delay_ms: 150,
            default_orientation: Orientation::White,
        }
    }
}

impl BoardSettings {
    pub fn highlight_options(&self) -> HighlightOptions {
        HighlightOptions {
            show_legal_moves: self.show_legal_moves,
            highlight_last_move: self.highlight_last_move,
        }
    }

    pub fn castle_cue_delay(&self) -> Duration {
        Duration::from_millis(self.castle_cue_delay_ms)
    }

    /// Volume actually applied to new sounds, `0.0` when muted
    pub fn effective_volume(&self) -> f32 {
        if self.sound_enabled {
            self.master_volume.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board_behaviour() {
        let settings = BoardSettings::default();

        assert_eq!(settings.castle_cue_delay(), Duration::from_millis(150));
        assert_eq!(settings.highlight_options(), HighlightOptions::default());
        assert_eq!(settings.default_orientation, Orientation::White);
    }

    #[test]
    fn test_effective_volume_respects_mute_and_range() {
        let mut settings = BoardSettings {
            master_volume: 1.7,
            ..BoardSettings::default()
        };
        assert_eq!(settings.effective_volume(), 1.0);

        settings.sound_enabled = false;
        assert_eq!(settings.effective_volume(), 0.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let settings: BoardSettings = serde_json::from_str(r#"{"master_volume": 0.25}"#).unwrap();

        assert_eq!(settings.master_volume, 0.25);
        assert!(settings.show_legal_moves);
        assert_eq!(settings.castle_cue_delay_ms, 150);
    }
}
