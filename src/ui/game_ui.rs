//! Main window layout
//!
//! - Top bar: whose move it is, check/mate/draw status, browsing notice
//! - Right panel: move history, history controls, settings
//! - Bottom panel: FEN/PGN import
//! - Centre: the board
//!
//! Runs in `EguiPrimaryContextPass`. Nothing here mutates the board view;
//! gestures and commands are written as messages and applied in `Update`.

use crate::core::BoardSettings;
use crate::game::events::ViewCommand;
use crate::game::resources::{color_name, parse_fen, BoardView, GameStatus};
use crate::rendering::board::BoardWidget;
use crate::ui::history_panel::history_panel;
use crate::ui::import_panel::import_panel;
use crate::ui::styles::UiColors;
use crate::ui::system_params::BoardUiParams;
use bevy::prelude::*;
use bevy_egui::egui;
use shakmaty::Position;

/// Text for the status bar describing the displayed position
pub fn status_line(fen: &str) -> String {
    let Ok(position) = parse_fen(fen) else {
        return String::new();
    };
    let turn = position.turn();
    match GameStatus::of(&position).message(turn) {
        Some(message) => message,
        None => format!("{} to move", color_name(turn)),
    }
}

/// Browsing notice, `None` while the newest move is shown
pub fn browsing_notice(view: &BoardView) -> Option<String> {
    if view.is_at_tip() {
        return None;
    }
    let shown = view.selected_index().map_or(0, |i| i + 1);
    Some(format!("Viewing move {} of {}", shown, view.history().len()))
}

/// System drawing the whole window
pub fn board_ui_system(mut params: BoardUiParams) {
    let Ok(ctx) = params.contexts.ctx_mut() else {
        return;
    };

    let mut commands: Vec<ViewCommand> = Vec::new();
    let view: &BoardView = &params.view;

    egui::TopBottomPanel::top("status_bar")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(status_line(view.displayed_fen()))
                        .size(18.0)
                        .color(UiColors::TEXT_PRIMARY),
                );
                if let Some(notice) = browsing_notice(view) {
                    ui.separator();
                    ui.colored_label(UiColors::ACCENT_GOLD, notice);
                }
            });
            ui.add_space(5.0);
        });

    egui::SidePanel::right("move_history_panel")
        .resizable(true)
        .default_width(260.0)
        .min_width(200.0)
        .frame(egui::Frame::default().fill(UiColors::BG_DARK).inner_margin(10.0))
        .show(ctx, |ui| {
            history_panel(ui, view, &mut commands);
            if let Some(settings) = params.settings.as_mut() {
                ui.separator();
                settings_section(ui, settings);
            }
        });

    egui::TopBottomPanel::bottom("import_panel")
        .resizable(false)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            import_panel(ui, &mut params.import_panel, &mut commands);
            ui.add_space(5.0);
        });

    let mut gestures = Vec::new();
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(UiColors::BG_MID).inner_margin(16.0))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                gestures = BoardWidget::new(view).show(ui);
            });
        });

    params.gestures.write_batch(gestures);
    params.view_commands.write_batch(commands);
}

fn settings_section(ui: &mut egui::Ui, settings: &mut ResMut<BoardSettings>) {
    egui::CollapsingHeader::new("Settings")
        .default_open(false)
        .show(ui, |ui| {
            let mut edited = (**settings).clone();
            ui.checkbox(&mut edited.sound_enabled, "Sound");
            ui.add_enabled(
                edited.sound_enabled,
                egui::Slider::new(&mut edited.master_volume, 0.0..=1.0).text("Volume"),
            );
            ui.checkbox(&mut edited.show_legal_moves, "Show legal moves");
            ui.checkbox(&mut edited.highlight_last_move, "Highlight last move");
            ui.add(
                egui::Slider::new(&mut edited.castle_cue_delay_ms, 0..=500)
                    .text("Castle sound gap (ms)"),
            );
            // Only touch the resource on a real edit so persistence stays quiet
            settings.set_if_neq(edited);
        });
}
