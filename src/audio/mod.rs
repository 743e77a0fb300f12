//! Audio - move sounds and volume control
//!
//! Loads [`GameSounds`], turns [`MovePlayed`](crate::game::events::MovePlayed)
//! messages into sound cues, and applies the master volume setting to sounds
//! that are already playing.

pub mod cues;

pub use cues::{
    sound_cues, sound_cues_with_delay, CueFired, PendingCue, ScheduledCue, SoundCue,
    CASTLE_CUE_DELAY,
};

use crate::core::BoardSettings;
use crate::game::resources::GameSounds;
use crate::game::system_sets::GameSystems;
use bevy::audio::Volume;
use bevy::prelude::*;

/// Audio plugin: sound loading, cue scheduling and volume
pub struct AudioCuePlugin;

impl Plugin for AudioCuePlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<CueFired>();

        app.add_systems(Startup, load_game_sounds);

        app.add_systems(
            Update,
            (cues::schedule_move_cues, cues::tick_pending_cues)
                .chain()
                .in_set(GameSystems::Feedback),
        );

        app.add_systems(
            Update,
            apply_master_volume_system.run_if(resource_exists::<BoardSettings>),
        );
    }
}

/// Load sound handles; headless apps without an asset server play nothing
fn load_game_sounds(mut commands: Commands, asset_server: Option<Res<AssetServer>>) {
    match asset_server {
        Some(asset_server) => {
            commands.insert_resource(GameSounds::new(&asset_server));
            info!("[AUDIO] Game sounds loading");
        }
        None => debug!("[AUDIO] No asset server, sounds disabled"),
    }
}

/// System that applies master volume to all audio sinks
///
/// Watches for changes to the effective volume and updates every AudioSink.
pub fn apply_master_volume_system(
    settings: Res<BoardSettings>,
    mut audio_sinks: Query<&mut AudioSink>,
    mut last_volume: Local<Option<f32>>,
) {
    let current_volume = settings.effective_volume();
    if let Some(prev_volume) = *last_volume {
        if (prev_volume - current_volume).abs() < 0.001 {
            return;
        }
    }
    *last_volume = Some(current_volume);

    for mut sink in audio_sinks.iter_mut() {
        sink.set_volume(Volume::Linear(current_volume));
    }

    if !audio_sinks.is_empty() {
        info!(
            "[AUDIO] Applied master volume: {:.0}%",
            current_volume * 100.0
        );
    }
}
