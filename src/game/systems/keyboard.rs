//! Keyboard shortcuts for history navigation and flipping
//!
//! | Key            | Action                |
//! |----------------|-----------------------|
//! | Left / Right   | one ply back/forward  |
//! | Up / Home      | initial position      |
//! | Down / End     | newest move           |
//! | F              | flip the board        |
//!
//! Keys are ignored while the import text box has keyboard focus.

use crate::game::events::ViewCommand;
use crate::ui::import_panel::ImportPanelState;
use bevy::prelude::*;

/// What a key press asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Step(isize),
    ToStart,
    ToEnd,
    Flip,
}

impl KeyAction {
    pub fn command(self) -> ViewCommand {
        match self {
            KeyAction::Step(delta) => ViewCommand::Step(delta),
            KeyAction::ToStart => ViewCommand::Navigate(-1),
            KeyAction::ToEnd => ViewCommand::GoToEnd,
            KeyAction::Flip => ViewCommand::Flip,
        }
    }
}

pub fn key_action(key: KeyCode) -> Option<KeyAction> {
    match key {
        KeyCode::ArrowLeft => Some(KeyAction::Step(-1)),
        KeyCode::ArrowRight => Some(KeyAction::Step(1)),
        KeyCode::ArrowUp | KeyCode::Home => Some(KeyAction::ToStart),
        KeyCode::ArrowDown | KeyCode::End => Some(KeyAction::ToEnd),
        KeyCode::KeyF => Some(KeyAction::Flip),
        _ => None,
    }
}

/// Translate freshly pressed keys into view commands
pub fn keyboard_navigation(
    keys: Res<ButtonInput<KeyCode>>,
    import_panel: Option<Res<ImportPanelState>>,
    mut view_commands: MessageWriter<ViewCommand>,
) {
    if import_panel.is_some_and(|panel| panel.has_focus) {
        return;
    }

    for key in keys.get_just_pressed() {
        if let Some(action) = key_action(*key) {
            view_commands.write(action.command());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_keys_step_and_jump() {
        assert_eq!(key_action(KeyCode::ArrowLeft), Some(KeyAction::Step(-1)));
        assert_eq!(key_action(KeyCode::ArrowRight), Some(KeyAction::Step(1)));
        assert_eq!(key_action(KeyCode::ArrowUp), Some(KeyAction::ToStart));
        assert_eq!(key_action(KeyCode::Home), Some(KeyAction::ToStart));
        assert_eq!(key_action(KeyCode::ArrowDown), Some(KeyAction::ToEnd));
        assert_eq!(key_action(KeyCode::End), Some(KeyAction::ToEnd));
    }

    #[test]
    fn test_f_flips_and_other_keys_do_nothing() {
        assert_eq!(key_action(KeyCode::KeyF), Some(KeyAction::Flip));
        assert_eq!(key_action(KeyCode::KeyA), None);
        assert_eq!(key_action(KeyCode::Space), None);
    }

    #[test]
    fn test_start_maps_to_initial_position() {
        assert_eq!(KeyAction::ToStart.command(), ViewCommand::Navigate(-1));
    }
}
