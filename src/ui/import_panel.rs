//! FEN/PGN import box
//!
//! A multi-line text box and an Import button. The text is handed to the
//! board as a [`ViewCommand::Import`]; when neither FEN nor PGN fits, a fixed
//! error line appears under the box until the next attempt.

use crate::game::error::UNRECOGNISED_INPUT_MESSAGE;
use crate::game::events::{ImportFinished, ViewCommand};
use crate::ui::styles::UiColors;
use bevy::prelude::*;
use bevy_egui::egui;

/// Contents and status of the import box
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportPanelState {
    pub text: String,
    /// Whether the last import failed
    pub failed: bool,
    /// Text box has keyboard focus; board shortcuts are suspended
    pub has_focus: bool,
}

impl ImportPanelState {
    /// Start an import of the current text
    pub fn submit(&mut self) -> ViewCommand {
        self.failed = false;
        ViewCommand::Import(self.text.clone())
    }

    pub fn error_message(&self) -> Option<&'static str> {
        self.failed.then_some(UNRECOGNISED_INPUT_MESSAGE)
    }
}

/// Draw the import box; an import request is pushed onto `commands`
pub fn import_panel(ui: &mut egui::Ui, state: &mut ImportPanelState, commands: &mut Vec<ViewCommand>) {
    let response = ui.add(
        egui::TextEdit::multiline(&mut state.text)
            .hint_text("Input PGN or FEN notation")
            .desired_rows(2)
            .desired_width(f32::INFINITY),
    );
    state.has_focus = response.has_focus();

    match state.error_message() {
        Some(message) => {
            ui.colored_label(UiColors::DANGER, message);
        }
        None => ui.add_space(ui.spacing().interact_size.y),
    }

    if ui.button("Import").clicked() {
        commands.push(state.submit());
    }
}

/// Record the outcome of imports for the panel
pub fn apply_import_results(
    mut results: MessageReader<ImportFinished>,
    mut state: ResMut<ImportPanelState>,
) {
    for result in results.read() {
        state.failed = result.error.is_some();
        if let Some(error) = &result.error {
            debug!("[IMPORT] Panel shows failure: {}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_clears_previous_error() {
        let mut state = ImportPanelState {
            text: "1. e4".to_string(),
            failed: true,
            has_focus: false,
        };

        let command = state.submit();

        assert_eq!(command, ViewCommand::Import("1. e4".to_string()));
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_failed_import_shows_fixed_message() {
        let state = ImportPanelState {
            failed: true,
            ..ImportPanelState::default()
        };

        assert_eq!(
            state.error_message(),
            Some("Input is not in valid FEN or PGN notation")
        );
    }
}
