//! System parameter groups for UI systems
//!
//! Groups what the layout system needs into one SystemParam, following the
//! bevy_egui pattern of using SystemParams for cleaner APIs.

use crate::core::BoardSettings;
use crate::game::events::{BoardGesture, ViewCommand};
use crate::game::resources::BoardView;
use crate::ui::import_panel::ImportPanelState;
use bevy::ecs::system::SystemParam;
use bevy::prelude::*;
use bevy_egui::EguiContexts;

/// System parameter grouping UI-related resources
///
/// # Resources Included
///
/// - [`EguiContexts`] - Egui context for UI rendering
/// - [`BoardView`] - What the board shows (read-only: changes go through messages)
/// - [`ImportPanelState`] - Import box contents
/// - [`BoardSettings`] - Preferences edited from the side panel
#[derive(SystemParam)]
pub struct BoardUiParams<'w, 's> {
    /// Egui contexts for UI rendering
    pub contexts: EguiContexts<'w, 's>,
    pub view: Res<'w, BoardView>,
    pub import_panel: ResMut<'w, ImportPanelState>,
    pub settings: Option<ResMut<'w, BoardSettings>>,
    pub gestures: MessageWriter<'w, BoardGesture>,
    pub view_commands: MessageWriter<'w, ViewCommand>,
}
