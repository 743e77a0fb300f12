//! Color palette for DDChess panels
//!
//! Colors are defined as egui::Color32 for direct use in UI code. Board
//! colours live in [`crate::rendering::board_theme`].

use bevy_egui::egui;

/// Primary UI color palette
pub struct UiColors;

impl UiColors {
    // === Background Colors ===

    /// Primary dark background (main panels)
    pub const BG_DARK: egui::Color32 = egui::Color32::from_rgb(20, 20, 25);

    /// Secondary background (board area)
    pub const BG_MID: egui::Color32 = egui::Color32::from_rgb(30, 30, 35);

    // === Accent Colors ===

    /// Game-over and browsing notices
    pub const ACCENT_GOLD: egui::Color32 = egui::Color32::from_rgb(218, 165, 32);

    /// Error/danger color (red)
    pub const DANGER: egui::Color32 = egui::Color32::from_rgb(220, 50, 50);

    // === Text Colors ===

    /// Primary text (headings, important text)
    pub const TEXT_PRIMARY: egui::Color32 = egui::Color32::from_rgb(240, 240, 245);

    /// Tertiary text (turn numbers, placeholders)
    pub const TEXT_TERTIARY: egui::Color32 = egui::Color32::from_rgb(150, 150, 155);
}
