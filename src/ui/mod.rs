//! UI module - Egui-based user interface
//!
//! - **game_ui**: window layout, status bar, settings section
//! - **history_panel**: move list and history controls
//! - **import_panel**: FEN/PGN import box
//!
//! # Bevy Egui Integration
//!
//! Uses `bevy_egui` which provides:
//! - `EguiContexts` system parameter for accessing egui context
//! - Automatic input handling and rendering
//! - Integration with Bevy's window and input systems

pub mod game_ui;
pub mod history_panel;
pub mod import_panel;
pub mod styles;
pub mod system_params;

use crate::game::system_sets::GameSystems;
use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

pub use game_ui::board_ui_system;
pub use import_panel::ImportPanelState;

/// UI plugin: window layout and panels
///
/// Requires [`bevy_egui::EguiPlugin`] and [`crate::game::GamePlugin`].
pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ImportPanelState>();

        app.add_systems(EguiPrimaryContextPass, board_ui_system);
        app.add_systems(
            Update,
            import_panel::apply_import_results.after(GameSystems::Execution),
        );
    }
}
