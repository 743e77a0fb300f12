use anyhow::Context;
use bevy::prelude::*;
use bevy_egui::EguiPlugin;
use clap::Parser;

use ddchess::audio::AudioCuePlugin;
use ddchess::core::{CorePlugin, LaunchArgs, WindowConfig};
use ddchess::game::GamePlugin;
use ddchess::ui::UIPlugin;

fn main() -> anyhow::Result<()> {
    let launch = LaunchArgs::parse()
        .into_options()
        .context("failed to read start-up options")?;
    let window_config = WindowConfig::default();

    let exit = App::new()
        .insert_resource(launch)
        .add_plugins(CorePlugin)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(window_config.to_window()),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .add_plugins(GamePlugin)
        .add_plugins(AudioCuePlugin)
        .add_plugins(UIPlugin)
        .add_systems(Startup, setup_camera)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("ddchess exited with code {code}"),
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
