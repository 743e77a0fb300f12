//! Game sounds resource for move and capture audio feedback
//!
//! Loads and stores handles to the two sound effects played after a move.

use crate::audio::SoundCue;
use bevy::audio::AudioSource;
use bevy::prelude::*;

/// Resource storing handles to all game sound effects
///
/// Loaded once at startup by [`crate::audio::AudioCuePlugin`].
#[derive(Resource, Debug, Clone)]
pub struct GameSounds {
    /// Sound played when a piece moves
    pub move_piece: Handle<AudioSource>,
    /// Sound played when a piece is captured (and for the rook hop of a castle)
    pub capture_piece: Handle<AudioSource>,
}

impl GameSounds {
    /// Load all game sounds from the asset server
    pub fn new(asset_server: &AssetServer) -> Self {
        Self {
            move_piece: asset_server.load("game_sounds/move_piece.mp3"),
            capture_piece: asset_server.load("game_sounds/capture_piece.mp3"),
        }
    }

    pub fn handle(&self, cue: SoundCue) -> Handle<AudioSource> {
        match cue {
            SoundCue::Move => self.move_piece.clone(),
            SoundCue::Capture => self.capture_piece.clone(),
        }
    }
}
