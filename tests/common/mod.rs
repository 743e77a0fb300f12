//! Shared setup for integration tests
//!
//! Builds a headless app with every DDChess plugin except the egui window:
//! no asset server (so no sounds load) and a throwaway settings file.

#![allow(dead_code)]

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use ddchess::audio::{AudioCuePlugin, CueFired, SoundCue};
use ddchess::core::settings_persistence::SettingsPath;
use ddchess::core::CorePlugin;
use ddchess::game::events::{BoardGesture, ViewCommand};
use ddchess::game::resources::BoardView;
use ddchess::game::GamePlugin;
use ddchess::ui::UIPlugin;
use std::time::Duration;

/// Fixed frame length used by every test app
pub const FRAME: Duration = Duration::from_millis(50);

/// Every cue fired so far, in order
#[derive(Resource, Default, Debug)]
pub struct CueLog(pub Vec<SoundCue>);

fn record_cues(mut fired: MessageReader<CueFired>, mut log: ResMut<CueLog>) {
    log.0.extend(fired.read().map(|f| f.cue));
}

pub fn test_app(name: &str) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.insert_resource(TimeUpdateStrategy::ManualDuration(FRAME));
    app.insert_resource(SettingsPath(
        std::env::temp_dir()
            .join(format!("ddchess-it-{}-{name}", std::process::id()))
            .join("settings.json"),
    ));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins((CorePlugin, GamePlugin, AudioCuePlugin, UIPlugin));
    app.init_resource::<CueLog>();
    app.add_systems(PostUpdate, record_cues);
    app
}

pub fn gesture(app: &mut App, gesture: BoardGesture) {
    app.world_mut().write_message(gesture);
    app.update();
}

pub fn command(app: &mut App, command: ViewCommand) {
    app.world_mut().write_message(command);
    app.update();
}

/// Drag a piece from one square to another over three frames
pub fn drag(app: &mut App, from: shakmaty::Square, to: shakmaty::Square) {
    gesture(app, BoardGesture::DragStart(from));
    gesture(app, BoardGesture::DragOver(Some(to)));
    gesture(app, BoardGesture::Drop(Some(to)));
}

pub fn view(app: &App) -> &BoardView {
    app.world().resource::<BoardView>()
}

pub fn cues(app: &App) -> Vec<SoundCue> {
    app.world().resource::<CueLog>().0.clone()
}
