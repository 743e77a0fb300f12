//! Sound cues for played moves
//!
//! [`sound_cues`] maps a move's flags to the sounds it should make. Cues with
//! no delay play in the frame the move lands; delayed ones are spawned as
//! [`PendingCue`] entities and fire once their timer runs out. A pending cue
//! is never cancelled, even if the board changes in the meantime.

use crate::core::BoardSettings;
use crate::game::events::MovePlayed;
use crate::game::resources::{GameSounds, MoveFlags};
use bevy::audio::Volume;
use bevy::prelude::*;
use std::time::Duration;

/// Gap between the capture-like thud of a castle and its move sound
pub const CASTLE_CUE_DELAY: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Move,
    Capture,
}

/// A cue and how long after the move it should sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledCue {
    pub cue: SoundCue,
    pub delay: Duration,
}

impl ScheduledCue {
    pub fn now(cue: SoundCue) -> Self {
        Self {
            cue,
            delay: Duration::ZERO,
        }
    }
}

/// Cue sequence for a move, with the default castle delay
pub fn sound_cues(flags: &MoveFlags) -> Vec<ScheduledCue> {
    sound_cues_with_delay(flags, CASTLE_CUE_DELAY)
}

/// Cue sequence for a move
///
/// Captures (en passant included) thud once, castles thud then slide, every
/// other move slides.
pub fn sound_cues_with_delay(flags: &MoveFlags, castle_delay: Duration) -> Vec<ScheduledCue> {
    if flags.takes_piece() {
        vec![ScheduledCue::now(SoundCue::Capture)]
    } else if flags.castle {
        vec![
            ScheduledCue::now(SoundCue::Capture),
            ScheduledCue {
                cue: SoundCue::Move,
                delay: castle_delay,
            },
        ]
    } else {
        vec![ScheduledCue::now(SoundCue::Move)]
    }
}

/// A cue waiting for its delay to elapse
#[derive(Component, Debug, Clone)]
pub struct PendingCue {
    pub cue: SoundCue,
    pub timer: Timer,
}

/// Written whenever a cue sounds (or would sound, when audio is unavailable)
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CueFired {
    pub cue: SoundCue,
}

fn fire_cue(
    commands: &mut Commands,
    fired: &mut MessageWriter<CueFired>,
    sounds: Option<&GameSounds>,
    volume: f32,
    cue: SoundCue,
) {
    fired.write(CueFired { cue });
    let Some(sounds) = sounds else {
        return;
    };
    if volume <= 0.0 {
        return;
    }
    commands.spawn((
        AudioPlayer::new(sounds.handle(cue)),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
    ));
}

fn volume_of(settings: Option<&BoardSettings>) -> f32 {
    settings.map_or(1.0, BoardSettings::effective_volume)
}

/// Turn every played move into its cue sequence
pub fn schedule_move_cues(
    mut commands: Commands,
    mut played: MessageReader<MovePlayed>,
    mut fired: MessageWriter<CueFired>,
    sounds: Option<Res<GameSounds>>,
    settings: Option<Res<BoardSettings>>,
) {
    let castle_delay = settings
        .as_deref()
        .map_or(CASTLE_CUE_DELAY, BoardSettings::castle_cue_delay);
    let volume = volume_of(settings.as_deref());

    for MovePlayed { flags } in played.read() {
        for scheduled in sound_cues_with_delay(flags, castle_delay) {
            if scheduled.delay.is_zero() {
                fire_cue(&mut commands, &mut fired, sounds.as_deref(), volume, scheduled.cue);
            } else {
                debug!("[AUDIO] Deferring {:?} by {:?}", scheduled.cue, scheduled.delay);
                commands.spawn(PendingCue {
                    cue: scheduled.cue,
                    timer: Timer::new(scheduled.delay, TimerMode::Once),
                });
            }
        }
    }
}

/// Fire pending cues whose delay has elapsed
pub fn tick_pending_cues(
    mut commands: Commands,
    time: Res<Time>,
    mut pending: Query<(Entity, &mut PendingCue)>,
    mut fired: MessageWriter<CueFired>,
    sounds: Option<Res<GameSounds>>,
    settings: Option<Res<BoardSettings>>,
) {
    let volume = volume_of(settings.as_deref());
    for (entity, mut cue) in pending.iter_mut() {
        cue.timer.tick(time.delta());
        if cue.timer.is_finished() {
            fire_cue(&mut commands, &mut fired, sounds.as_deref(), volume, cue.cue);
            commands.entity(entity).despawn();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Role;

    fn cues(flags: MoveFlags) -> Vec<SoundCue> {
        sound_cues(&flags).into_iter().map(|s| s.cue).collect()
    }

    #[test]
    fn test_quiet_move_slides() {
        assert_eq!(sound_cues(&MoveFlags::default()), vec![ScheduledCue::now(SoundCue::Move)]);
    }

    #[test]
    fn test_capture_and_en_passant_thud() {
        let capture = MoveFlags {
            capture: true,
            ..MoveFlags::default()
        };
        let en_passant = MoveFlags {
            en_passant: true,
            ..MoveFlags::default()
        };

        assert_eq!(cues(capture), vec![SoundCue::Capture]);
        assert_eq!(cues(en_passant), vec![SoundCue::Capture]);
    }

    #[test]
    fn test_castle_thuds_then_slides_later() {
        let castle = MoveFlags {
            castle: true,
            ..MoveFlags::default()
        };

        let scheduled = sound_cues(&castle);

        assert_eq!(
            scheduled,
            vec![
                ScheduledCue::now(SoundCue::Capture),
                ScheduledCue {
                    cue: SoundCue::Move,
                    delay: CASTLE_CUE_DELAY,
                },
            ]
        );
    }

    #[test]
    fn test_capturing_promotion_is_a_capture() {
        let flags = MoveFlags {
            capture: true,
            promotion: Some(Role::Queen),
            check: true,
            ..MoveFlags::default()
        };

        assert_eq!(cues(flags), vec![SoundCue::Capture]);
    }

    #[test]
    fn test_custom_castle_delay() {
        let castle = MoveFlags {
            castle: true,
            ..MoveFlags::default()
        };

        let scheduled = sound_cues_with_delay(&castle, Duration::from_millis(40));

        assert_eq!(scheduled[1].delay, Duration::from_millis(40));
    }
}
