//! Keyboard shortcut integration tests
//!
//! Keys are pressed directly on `ButtonInput<KeyCode>`; without the input
//! plugin nothing clears them, so each test clears after every frame.

mod common;

use bevy::prelude::*;
use common::*;
use ddchess::game::events::ViewCommand;
use ddchess::game::types::Orientation;
use ddchess::ui::ImportPanelState;

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn app_with_game(name: &str) -> App {
    let mut app = test_app(name);
    app.update();
    command(&mut app, ViewCommand::Import("1. d4 d5 2. c4 e6 3. Nc3".to_string()));
    app
}

#[test]
fn test_arrows_step_through_history() {
    let mut app = app_with_game("arrows");
    assert_eq!(view(&app).selected_index(), Some(4));

    press(&mut app, KeyCode::ArrowLeft);
    assert_eq!(view(&app).selected_index(), Some(3));

    press(&mut app, KeyCode::ArrowRight);
    press(&mut app, KeyCode::ArrowRight);
    assert_eq!(view(&app).selected_index(), Some(4));
}

#[test]
fn test_home_and_end_jump() {
    let mut app = app_with_game("home-end");

    press(&mut app, KeyCode::Home);
    assert_eq!(view(&app).selected_index(), None);
    press(&mut app, KeyCode::ArrowLeft);
    assert_eq!(view(&app).selected_index(), None);

    press(&mut app, KeyCode::End);
    assert_eq!(view(&app).selected_index(), Some(4));
}

#[test]
fn test_f_flips_board() {
    let mut app = app_with_game("flip");

    press(&mut app, KeyCode::KeyF);
    assert_eq!(view(&app).orientation(), Orientation::Black);
    press(&mut app, KeyCode::KeyF);
    assert_eq!(view(&app).orientation(), Orientation::White);
}

#[test]
fn test_keys_ignored_while_typing() {
    let mut app = app_with_game("focus");
    app.world_mut().resource_mut::<ImportPanelState>().has_focus = true;

    press(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::KeyF);

    assert_eq!(view(&app).selected_index(), Some(4));
    assert_eq!(view(&app).orientation(), Orientation::White);
}
