//! Board palette
//!
//! Square colours and the overlay used for each [`SquareStyle`].

use crate::rendering::highlight::SquareStyle;
use bevy_egui::egui::Color32;

/// Colours used by the board widget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardPalette {
    pub light_square: Color32,
    pub dark_square: Color32,
    pub white_piece: Color32,
    pub black_piece: Color32,
    pub coordinate_on_light: Color32,
    pub coordinate_on_dark: Color32,
    /// Outline of the square under a dragged piece
    pub drag_target: Color32,
}

impl Default for BoardPalette {
    fn default() -> Self {
        Self {
            light_square: Color32::from_rgb(240, 217, 181),
            dark_square: Color32::from_rgb(181, 136, 99),
            white_piece: Color32::from_rgb(250, 250, 245),
            black_piece: Color32::from_rgb(30, 30, 35),
            coordinate_on_light: Color32::from_rgb(181, 136, 99),
            coordinate_on_dark: Color32::from_rgb(240, 217, 181),
            drag_target: Color32::from_rgba_unmultiplied(255, 255, 255, 200),
        }
    }
}

impl BoardPalette {
    pub fn square(&self, is_light: bool) -> Color32 {
        if is_light {
            self.light_square
        } else {
            self.dark_square
        }
    }

    pub fn coordinate(&self, is_light: bool) -> Color32 {
        if is_light {
            self.coordinate_on_light
        } else {
            self.coordinate_on_dark
        }
    }

    /// Overlay painted on top of the square colour
    pub fn style_overlay(&self, style: SquareStyle) -> Color32 {
        match style {
            SquareStyle::Selected => Color32::from_rgba_unmultiplied(20, 85, 30, 110),
            SquareStyle::LegalMove | SquareStyle::LegalCapture => {
                Color32::from_rgba_unmultiplied(20, 85, 30, 90)
            }
            SquareStyle::LastMoveFrom | SquareStyle::LastMoveTo => {
                Color32::from_rgba_unmultiplied(155, 199, 0, 105)
            }
            SquareStyle::Marked => Color32::from_rgba_unmultiplied(235, 97, 80, 200),
        }
    }
}
