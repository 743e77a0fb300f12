//! egui board widget
//!
//! Paints the displayed position with its square styles and turns pointer
//! input into [`BoardGesture`]s. The widget never changes state itself.
//!
//! # Geometry
//!
//! [`BoardGeometry`] maps squares to screen rectangles and back, following
//! the orientation: with white at the bottom a1 is the bottom-left square,
//! with black at the bottom h8 is.

use crate::game::events::BoardGesture;
use crate::game::resources::BoardView;
use crate::game::types::Orientation;
use crate::rendering::board_theme::BoardPalette;
use crate::rendering::highlight::SquareStyle;
use bevy_egui::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use shakmaty::fen::Fen;
use shakmaty::{Board, Color, Piece, Role, Square};

/// Screen placement of the 64 squares
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub rect: Rect,
    pub orientation: Orientation,
}

impl BoardGeometry {
    pub fn new(rect: Rect, orientation: Orientation) -> Self {
        Self { rect, orientation }
    }

    pub fn square_size(&self) -> f32 {
        self.rect.width().min(self.rect.height()) / 8.0
    }

    /// (column, row) on screen, counted from the top-left
    fn cell(&self, square: Square) -> (u32, u32) {
        let file = square.file() as u32;
        let rank = square.rank() as u32;
        match self.orientation {
            Orientation::White => (file, 7 - rank),
            Orientation::Black => (7 - file, rank),
        }
    }

    pub fn square_rect(&self, square: Square) -> Rect {
        let size = self.square_size();
        let (col, row) = self.cell(square);
        Rect::from_min_size(
            self.rect.min + Vec2::new(col as f32 * size, row as f32 * size),
            Vec2::splat(size),
        )
    }

    pub fn square_at(&self, pos: Pos2) -> Option<Square> {
        let size = self.square_size();
        let board = Rect::from_min_size(self.rect.min, Vec2::splat(size * 8.0));
        if size <= 0.0 || !board.contains(pos) {
            return None;
        }
        let col = (((pos.x - board.min.x) / size) as u32).min(7);
        let row = (((pos.y - board.min.y) / size) as u32).min(7);
        let (file, rank) = match self.orientation {
            Orientation::White => (col, 7 - row),
            Orientation::Black => (7 - col, row),
        };
        Some(Square::new(rank * 8 + file))
    }

    /// Whether the square sits on the bottom row or the left column, where
    /// coordinates are drawn
    fn edge(&self, square: Square) -> (bool, bool) {
        let (col, row) = self.cell(square);
        (row == 7, col == 0)
    }
}

/// Board of a FEN produced by the engine
pub fn board_from_fen(fen: &str) -> Option<Board> {
    let fen: Fen = fen.parse().ok()?;
    Some(fen.into_setup().board)
}

/// Solid glyph for a piece; colour is applied when painting
pub fn piece_glyph(role: Role) -> &'static str {
    match role {
        Role::King => "♚",
        Role::Queen => "♛",
        Role::Rook => "♜",
        Role::Bishop => "♝",
        Role::Knight => "♞",
        Role::Pawn => "♟",
    }
}

fn is_light(square: Square) -> bool {
    (square.file() as u32 + square.rank() as u32) % 2 == 1
}

/// Board widget over a [`BoardView`]
pub struct BoardWidget<'a> {
    view: &'a BoardView,
    palette: BoardPalette,
    show_coordinates: bool,
}

impl<'a> BoardWidget<'a> {
    pub fn new(view: &'a BoardView) -> Self {
        Self {
            view,
            palette: BoardPalette::default(),
            show_coordinates: true,
        }
    }

    pub fn palette(mut self, palette: BoardPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn show_coordinates(mut self, show: bool) -> Self {
        self.show_coordinates = show;
        self
    }

    /// Paint the board into `ui` and collect this frame's gestures
    pub fn show(self, ui: &mut egui::Ui) -> Vec<BoardGesture> {
        let side = ui.available_width().min(ui.available_height()).max(64.0);
        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click_and_drag());
        let geometry = BoardGeometry::new(response.rect, self.view.orientation());
        let board = board_from_fen(self.view.displayed_fen()).unwrap_or_else(Board::empty);
        let drag = self.view.drag().copied();
        let size = geometry.square_size();

        for square in Square::ALL {
            let rect = geometry.square_rect(square);
            let light = is_light(square);
            painter.rect_filled(rect, 0.0, self.palette.square(light));

            match self.view.square_styles().get(&square) {
                Some(SquareStyle::LegalMove) => {
                    painter.circle_filled(
                        rect.center(),
                        size * 0.16,
                        self.palette.style_overlay(SquareStyle::LegalMove),
                    );
                }
                Some(SquareStyle::LegalCapture) => {
                    painter.circle_stroke(
                        rect.center(),
                        size * 0.44,
                        Stroke::new(size * 0.08, self.palette.style_overlay(SquareStyle::LegalCapture)),
                    );
                }
                Some(&style) => {
                    painter.rect_filled(rect, 0.0, self.palette.style_overlay(style));
                }
                None => {}
            }

            if self.show_coordinates {
                let (bottom, left) = geometry.edge(square);
                let font = FontId::proportional(size * 0.18);
                let color = self.palette.coordinate(light);
                if bottom {
                    painter.text(
                        rect.right_bottom() + Vec2::new(-size * 0.06, -size * 0.04),
                        Align2::RIGHT_BOTTOM,
                        square.file().char().to_string(),
                        font.clone(),
                        color,
                    );
                }
                if left {
                    painter.text(
                        rect.left_top() + Vec2::new(size * 0.06, size * 0.04),
                        Align2::LEFT_TOP,
                        square.rank().char().to_string(),
                        font,
                        color,
                    );
                }
            }

            let dragged_from_here = drag.is_some_and(|d| d.from == square);
            if let Some(piece) = board.piece_at(square) {
                if !dragged_from_here {
                    self.paint_piece(&painter, rect.center(), size, piece);
                }
            }
        }

        if let Some(drag) = drag {
            if let Some(over) = drag.over {
                painter.rect_stroke(
                    geometry.square_rect(over),
                    0.0,
                    Stroke::new(size * 0.05, self.palette.drag_target),
                    egui::StrokeKind::Inside,
                );
            }
            if let Some(pos) = ui.ctx().pointer_latest_pos() {
                self.paint_piece(&painter, pos, size, drag.piece);
            }
        }

        collect_gestures(ui, &response, &geometry, drag.and_then(|d| d.over))
    }

    fn paint_piece(&self, painter: &egui::Painter, center: Pos2, size: f32, piece: Piece) {
        let glyph = piece_glyph(piece.role);
        let font = FontId::proportional(size * 0.8);
        let (fill, outline) = match piece.color {
            Color::White => (self.palette.white_piece, self.palette.black_piece),
            Color::Black => (self.palette.black_piece, self.palette.white_piece),
        };
        let offset = size * 0.02;
        for shift in [Vec2::new(-offset, 0.0), Vec2::new(offset, 0.0), Vec2::new(0.0, -offset), Vec2::new(0.0, offset)] {
            painter.text(center + shift, Align2::CENTER_CENTER, glyph, font.clone(), outline.gamma_multiply(0.6));
        }
        painter.text(center, Align2::CENTER_CENTER, glyph, font, fill);
    }
}

fn collect_gestures(
    ui: &egui::Ui,
    response: &egui::Response,
    geometry: &BoardGeometry,
    current_target: Option<Square>,
) -> Vec<BoardGesture> {
    let mut gestures = Vec::new();
    let pointer = response.interact_pointer_pos().or_else(|| ui.ctx().pointer_latest_pos());
    let square_under = |pos: Option<Pos2>| pos.and_then(|p| geometry.square_at(p));

    if response.drag_started() {
        let origin = ui.input(|i| i.pointer.press_origin()).or(pointer);
        if let Some(square) = square_under(origin) {
            gestures.push(BoardGesture::DragStart(square));
        }
    } else if response.dragged() {
        let over = square_under(pointer);
        if over != current_target {
            gestures.push(BoardGesture::DragOver(over));
        }
    }

    if response.drag_stopped() {
        gestures.push(BoardGesture::Drop(square_under(pointer)));
    }

    if response.clicked() {
        if let Some(square) = square_under(pointer) {
            gestures.push(BoardGesture::Click(square));
        }
    }

    if response.secondary_clicked() {
        if let Some(square) = square_under(pointer) {
            gestures.push(BoardGesture::RightClick(square));
        }
    }

    gestures
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::resources::STARTING_FEN;

    fn geometry(orientation: Orientation) -> BoardGeometry {
        BoardGeometry::new(
            Rect::from_min_size(Pos2::new(10.0, 20.0), Vec2::splat(400.0)),
            orientation,
        )
    }

    #[test]
    fn test_white_orientation_puts_a1_bottom_left() {
        let g = geometry(Orientation::White);

        assert_eq!(g.square_size(), 50.0);
        assert_eq!(g.square_rect(Square::A1).min, Pos2::new(10.0, 370.0));
        assert_eq!(g.square_rect(Square::H8).min, Pos2::new(360.0, 20.0));
    }

    #[test]
    fn test_black_orientation_puts_h8_bottom_left() {
        let g = geometry(Orientation::Black);

        assert_eq!(g.square_rect(Square::H8).min, Pos2::new(10.0, 370.0));
        assert_eq!(g.square_rect(Square::A1).min, Pos2::new(360.0, 20.0));
    }

    #[test]
    fn test_square_at_inverts_square_rect() {
        for orientation in [Orientation::White, Orientation::Black] {
            let g = geometry(orientation);
            for square in Square::ALL {
                assert_eq!(g.square_at(g.square_rect(square).center()), Some(square));
            }
        }
    }

    #[test]
    fn test_square_at_outside_board() {
        let g = geometry(Orientation::White);

        assert_eq!(g.square_at(Pos2::new(5.0, 30.0)), None);
        assert_eq!(g.square_at(Pos2::new(100.0, 421.0)), None);
    }

    #[test]
    fn test_coordinates_follow_orientation() {
        let white = geometry(Orientation::White);
        let black = geometry(Orientation::Black);

        assert_eq!(white.edge(Square::A1), (true, true));
        assert_eq!(white.edge(Square::H8), (false, false));
        assert_eq!(black.edge(Square::H8), (true, true));
        assert_eq!(black.edge(Square::E1), (false, false));
    }

    #[test]
    fn test_board_from_fen() {
        let board = board_from_fen(STARTING_FEN).unwrap();

        assert_eq!(board.piece_at(Square::E1), Some(Color::White.king()));
        assert_eq!(board.piece_at(Square::D8), Some(Color::Black.queen()));
        assert!(board_from_fen("garbage").is_none());
    }

    #[test]
    fn test_square_colours() {
        assert!(!is_light(Square::A1));
        assert!(is_light(Square::H1));
        assert!(is_light(Square::A8));
    }
}
