//! Applies board gestures and view commands to the board view
//!
//! These are the only systems holding `ResMut<BoardView>` and
//! `ResMut<ChessEngine>` at the same time; everything else writes messages.

use crate::core::BoardSettings;
use crate::game::events::{BoardGesture, ImportFinished, MovePlayed, ViewCommand};
use crate::game::resources::{BoardView, ChessEngine, MoveOutcome};
use bevy::prelude::*;

/// Apply pointer gestures from the board widget, in the order they happened
pub fn process_board_gestures(
    mut gestures: MessageReader<BoardGesture>,
    mut view: ResMut<BoardView>,
    mut engine: ResMut<ChessEngine>,
    mut played: MessageWriter<MovePlayed>,
) {
    for gesture in gestures.read() {
        let outcome = match *gesture {
            BoardGesture::DragStart(square) => {
                view.begin_drag(&*engine, square);
                None
            }
            BoardGesture::DragOver(square) => {
                view.drag_over(square);
                None
            }
            BoardGesture::Drop(square) => Some(view.drop_piece(&mut *engine, square)),
            BoardGesture::Click(square) => Some(view.select_square(&mut *engine, square)),
            BoardGesture::RightClick(square) => {
                view.toggle_mark(&*engine, square);
                None
            }
        };

        if let Some(MoveOutcome::Played(record)) = outcome {
            played.write(MovePlayed {
                flags: record.flags,
            });
        }
    }
}

/// Apply navigation, flip, import and new-game commands
pub fn apply_view_commands(
    mut view_commands: MessageReader<ViewCommand>,
    mut view: ResMut<BoardView>,
    mut engine: ResMut<ChessEngine>,
    mut finished: MessageWriter<ImportFinished>,
) {
    for command in view_commands.read() {
        match command {
            ViewCommand::Navigate(index) => view.navigate_history(&*engine, *index),
            ViewCommand::Step(delta) => {
                let target = view.cursor_index().saturating_add(*delta);
                view.navigate_history(&*engine, target);
            }
            ViewCommand::GoToEnd => {
                let last = view.history().len() as isize - 1;
                view.navigate_history(&*engine, last);
            }
            ViewCommand::Flip => {
                view.flip_orientation();
                debug!("[VIEW] Orientation now {}", view.orientation().label());
            }
            ViewCommand::Import(text) => {
                let error = view
                    .import_position(&mut *engine, text)
                    .err()
                    .map(|e| e.to_string());
                finished.write(ImportFinished { error });
            }
            ViewCommand::NewGame => {
                info!("[VIEW] New game");
                view.reset(&mut *engine);
            }
        }
    }
}

/// Push highlight preferences into the view whenever the settings change
pub fn sync_highlight_options(
    settings: Res<BoardSettings>,
    mut view: ResMut<BoardView>,
    engine: Res<ChessEngine>,
) {
    if settings.is_changed() {
        view.set_highlight_options(&*engine, settings.highlight_options());
    }
}
