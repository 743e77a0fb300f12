//! Move history sidebar
//!
//! One row per full move: turn number, white's SAN, black's SAN. A game that
//! starts with black to move shows `...` in the first white cell. Clicking a
//! cell jumps the board to the position after that move.

use crate::game::events::ViewCommand;
use crate::game::resources::{BoardView, MoveHistory};
use crate::game::rules::write_pgn;
use crate::ui::styles::UiColors;
use bevy_egui::egui;
use shakmaty::Color;

/// Placeholder for a missing white move
pub const EMPTY_MOVE: &str = "...";

/// One clickable move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryCell {
    pub san: String,
    /// Index into the history
    pub index: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRow {
    pub turn: u32,
    pub white: Option<HistoryCell>,
    pub black: Option<HistoryCell>,
}

/// Group a history into table rows
pub fn history_rows(history: &MoveHistory) -> Vec<HistoryRow> {
    let mut rows: Vec<HistoryRow> = Vec::with_capacity(history.len() / 2 + 1);
    for (index, record) in history.iter().enumerate() {
        let cell = HistoryCell {
            san: record.san.clone(),
            index,
        };
        match record.color {
            Color::White => rows.push(HistoryRow {
                turn: record.fullmove,
                white: Some(cell),
                black: None,
            }),
            Color::Black => match rows.last_mut() {
                Some(row) if row.black.is_none() && row.turn == record.fullmove => {
                    row.black = Some(cell);
                }
                _ => rows.push(HistoryRow {
                    turn: record.fullmove,
                    white: None,
                    black: Some(cell),
                }),
            },
        }
    }
    rows
}

/// Draw the sidebar; navigation requests are pushed onto `commands`
pub fn history_panel(ui: &mut egui::Ui, view: &BoardView, commands: &mut Vec<ViewCommand>) {
    ui.heading("Move History");
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        let at_start = view.selected_index().is_none();
        let at_tip = view.is_at_tip();
        if ui.add_enabled(!at_start, egui::Button::new("|<")).clicked() {
            commands.push(ViewCommand::Navigate(-1));
        }
        if ui.add_enabled(!at_start, egui::Button::new("<")).clicked() {
            commands.push(ViewCommand::Step(-1));
        }
        if ui.add_enabled(!at_tip, egui::Button::new(">")).clicked() {
            commands.push(ViewCommand::Step(1));
        }
        if ui.add_enabled(!at_tip, egui::Button::new(">|")).clicked() {
            commands.push(ViewCommand::GoToEnd);
        }
    });
    ui.separator();

    let selected = view.selected_index();
    egui::ScrollArea::vertical()
        .max_height(ui.available_height() - 60.0)
        .auto_shrink([false, true])
        .show(ui, |ui| {
            egui::Grid::new("move_history_grid")
                .num_columns(3)
                .striped(true)
                .min_col_width(60.0)
                .show(ui, |ui| {
                    for row in history_rows(view.history()) {
                        ui.colored_label(UiColors::TEXT_TERTIARY, format!("{}.", row.turn));
                        move_cell(ui, row.white.as_ref(), selected, commands);
                        move_cell(ui, row.black.as_ref(), selected, commands);
                        ui.end_row();
                    }
                });
        });

    ui.separator();
    ui.horizontal(|ui| {
        if ui.button("Copy PGN").clicked() {
            ui.ctx().copy_text(write_pgn(view.history()));
        }
        if ui.button("New game").clicked() {
            commands.push(ViewCommand::NewGame);
        }
        if ui.button("Flip board").clicked() {
            commands.push(ViewCommand::Flip);
        }
    });
}

fn move_cell(
    ui: &mut egui::Ui,
    cell: Option<&HistoryCell>,
    selected: Option<usize>,
    commands: &mut Vec<ViewCommand>,
) {
    match cell {
        Some(cell) => {
            let is_selected = selected == Some(cell.index);
            if ui.selectable_label(is_selected, cell.san.as_str()).clicked() {
                commands.push(ViewCommand::Navigate(cell.index as isize));
            }
        }
        None => {
            ui.colored_label(UiColors::TEXT_TERTIARY, EMPTY_MOVE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::{ChessEngine, RulesEngine};

    fn history_of(pgn: &str) -> MoveHistory {
        let mut engine = ChessEngine::default();
        engine.load_pgn(pgn).unwrap();
        MoveHistory::from_moves(engine.initial_fen(), engine.history_verbose().to_vec())
    }

    fn sans(cell: &Option<HistoryCell>) -> Option<(&str, usize)> {
        cell.as_ref().map(|c| (c.san.as_str(), c.index))
    }

    #[test]
    fn test_rows_pair_white_and_black() {
        let rows = history_rows(&history_of("1. e4 e5 2. Nf3"));

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].turn, 1);
        assert_eq!(sans(&rows[0].white), Some(("e4", 0)));
        assert_eq!(sans(&rows[0].black), Some(("e5", 1)));
        assert_eq!(rows[1].turn, 2);
        assert_eq!(sans(&rows[1].white), Some(("Nf3", 2)));
        assert_eq!(rows[1].black, None);
    }

    #[test]
    fn test_black_first_leaves_white_cell_empty() {
        let rows = history_of(
            "[SetUp \"1\"]\n[FEN \"4k3/8/8/8/8/8/4P3/4K3 b - - 0 12\"]\n\n12... Kd7 13. e4 Ke6",
        );
        let rows = history_rows(&rows);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].turn, 12);
        assert_eq!(rows[0].white, None);
        assert_eq!(sans(&rows[0].black), Some(("Kd7", 0)));
        assert_eq!(sans(&rows[1].white), Some(("e4", 1)));
        assert_eq!(sans(&rows[1].black), Some(("Ke6", 2)));
    }

    #[test]
    fn test_empty_history_has_no_rows() {
        assert!(history_rows(&MoveHistory::default()).is_empty());
    }
}
