//! Board view resource - what the board currently shows
//!
//! Single owner of the displayed state: move history, history cursor,
//! click-to-move selection, right-click marks, drag state, orientation and
//! the square style map. Every change goes through a method here, and every
//! method that can affect styling rebuilds the style map before returning.
//!
//! # History cursor
//!
//! The cursor is `None` for the initial position and `Some(i)` for the
//! position after move `i`. Moves are only accepted while the cursor sits on
//! the newest move (the tip); browsing older positions is read-only.
//!
//! # Engine access
//!
//! The rules engine is passed in by reference on every call. The view never
//! edits a position itself; it only stores FEN strings the engine produced.

use crate::game::error::{ImportError, ImportResult};
use crate::game::resources::engine::{MoveRequest, RulesEngine};
use crate::game::resources::history::{MoveHistory, MoveRecord};
use crate::game::types::{ClickState, MoveOrigin, Orientation};
use crate::rendering::board::board_from_fen;
use crate::rendering::highlight::{
    compute_square_styles, HighlightInput, HighlightOptions, SquareStyles,
};
use bevy::prelude::*;
use shakmaty::{Piece, Square};
use std::collections::BTreeSet;

/// Why a move attempt did not go through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// The engine does not allow the move
    Illegal,
    /// The cursor is not on the newest move
    Browsing,
}

/// Result of a gesture that may play a move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    Played(MoveRecord),
    Selected(Square),
    Deselected,
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn played(&self) -> Option<&MoveRecord> {
        match self {
            MoveOutcome::Played(record) => Some(record),
            _ => None,
        }
    }
}

/// What an import was recognised as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Fen,
    Pgn { moves: usize },
}

/// A piece being dragged across the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub from: Square,
    pub piece: Piece,
    /// Square currently under the pointer
    pub over: Option<Square>,
}

/// Board view resource - single source of truth for what is displayed
#[derive(Resource, Debug, Clone)]
pub struct BoardView {
    history: MoveHistory,
    cursor: Option<usize>,
    click: ClickState,
    marked: BTreeSet<Square>,
    drag: Option<DragState>,
    orientation: Orientation,
    options: HighlightOptions,
    styles: SquareStyles,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            history: MoveHistory::default(),
            cursor: None,
            click: ClickState::Idle,
            marked: BTreeSet::new(),
            drag: None,
            orientation: Orientation::White,
            options: HighlightOptions::default(),
            styles: SquareStyles::new(),
        }
    }
}

impl BoardView {
    /// View showing the engine's current game, cursor on the tip
    pub fn new<E: RulesEngine + ?Sized>(engine: &E) -> Self {
        let mut view = Self::default();
        view.adopt_engine_game(engine);
        view
    }

    // === Queries ===

    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Cursor position; `None` is the initial position
    pub fn selected_index(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_at_tip(&self) -> bool {
        self.cursor == self.history.tip()
    }

    pub fn displayed_fen(&self) -> &str {
        self.history.fen_at(self.cursor)
    }

    /// Move that produced the displayed position
    pub fn shown_move(&self) -> Option<&MoveRecord> {
        self.cursor.and_then(|i| self.history.get_move(i))
    }

    pub fn click_state(&self) -> ClickState {
        self.click
    }

    pub fn marked_squares(&self) -> &BTreeSet<Square> {
        &self.marked
    }

    pub fn drag(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn highlight_options(&self) -> HighlightOptions {
        self.options
    }

    pub fn square_styles(&self) -> &SquareStyles {
        &self.styles
    }

    // === Moves ===

    /// Try to play `from` → `to`
    ///
    /// A failed click attempt treats the destination as a fresh selection; a
    /// failed drag changes nothing.
    pub fn attempt_move<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        from: Square,
        to: Square,
        origin: MoveOrigin,
    ) -> MoveOutcome {
        let outcome = if !self.is_at_tip() {
            debug!("[VIEW] Move {from}-{to} rejected while browsing history");
            self.after_failed_attempt(to, origin, RejectReason::Browsing)
        } else {
            match engine.make_move(MoveRequest::new(from, to)) {
                Some(record) => {
                    info!("[VIEW] Played {} ({from}-{to})", record.san);
                    self.history.add_move(record.clone());
                    self.cursor = self.history.tip();
                    self.click = ClickState::Idle;
                    MoveOutcome::Played(record)
                }
                None => {
                    debug!("[VIEW] Illegal move {from}-{to}");
                    self.after_failed_attempt(to, origin, RejectReason::Illegal)
                }
            }
        };
        self.refresh_styles(engine);
        outcome
    }

    fn after_failed_attempt(
        &mut self,
        to: Square,
        origin: MoveOrigin,
        reason: RejectReason,
    ) -> MoveOutcome {
        match origin {
            MoveOrigin::Drag => MoveOutcome::Rejected(reason),
            MoveOrigin::Click => {
                self.click = ClickState::PieceSelected(to);
                MoveOutcome::Selected(to)
            }
        }
    }

    /// Left click on a square
    pub fn select_square<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        square: Square,
    ) -> MoveOutcome {
        self.marked.clear();
        match self.click {
            ClickState::Idle => {
                self.click = ClickState::PieceSelected(square);
                self.refresh_styles(engine);
                MoveOutcome::Selected(square)
            }
            ClickState::PieceSelected(current) if current == square => {
                self.click = ClickState::Idle;
                self.refresh_styles(engine);
                MoveOutcome::Deselected
            }
            ClickState::PieceSelected(from) => {
                self.attempt_move(engine, from, square, MoveOrigin::Click)
            }
        }
    }

    // === Drag and drop ===

    /// Pointer started dragging from `square`
    ///
    /// Clears marks and any click selection. Only squares holding a piece in
    /// the displayed position start a drag.
    pub fn begin_drag<E: RulesEngine + ?Sized>(&mut self, engine: &E, square: Square) -> bool {
        self.marked.clear();
        self.click = ClickState::Idle;
        self.drag = piece_on(self.displayed_fen(), square).map(|piece| DragState {
            from: square,
            piece,
            over: Some(square),
        });
        self.refresh_styles(engine);
        self.drag.is_some()
    }

    /// Pointer is over `square` while dragging
    pub fn drag_over(&mut self, square: Option<Square>) {
        if let Some(drag) = self.drag.as_mut() {
            drag.over = square;
        }
    }

    /// Dragged piece released over `to` (`None` = off the board)
    pub fn drop_piece<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        to: Option<Square>,
    ) -> MoveOutcome {
        let Some(drag) = self.drag.take() else {
            return MoveOutcome::Rejected(RejectReason::Illegal);
        };
        match to {
            Some(to) if to != drag.from => self.attempt_move(engine, drag.from, to, MoveOrigin::Drag),
            _ => MoveOutcome::Rejected(RejectReason::Illegal),
        }
    }

    // === Marks ===

    /// Right click: toggle the user's marker on `square`
    pub fn toggle_mark<E: RulesEngine + ?Sized>(&mut self, engine: &E, square: Square) {
        if !self.marked.remove(&square) {
            self.marked.insert(square);
        }
        self.refresh_styles(engine);
    }

    // === History ===

    /// Move the cursor; `-1` is the initial position, values are clamped
    pub fn navigate_history<E: RulesEngine + ?Sized>(&mut self, engine: &E, index: isize) {
        let last = self.history.len() as isize - 1;
        let clamped = index.clamp(-1, last);
        self.cursor = usize::try_from(clamped).ok();
        self.click = ClickState::Idle;
        self.drag = None;
        debug!("[VIEW] Showing ply {:?} of {}", self.cursor, self.history.len());
        self.refresh_styles(engine);
    }

    /// Cursor as the signed index used by navigation (`-1` = initial)
    pub fn cursor_index(&self) -> isize {
        self.cursor.map_or(-1, |i| i as isize)
    }

    // === Import / new game ===

    /// Load FEN or PGN text, FEN first
    ///
    /// On failure nothing changes, neither here nor in the engine.
    pub fn import_position<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &mut E,
        text: &str,
    ) -> ImportResult<ImportKind> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ImportError::Unrecognised);
        }

        let kind = match engine.load(text) {
            Ok(()) => ImportKind::Fen,
            Err(fen_err) => match engine.load_pgn(text) {
                Ok(moves) => ImportKind::Pgn { moves },
                Err(pgn_err) => {
                    warn!("[IMPORT] Rejected input ({fen_err}; {pgn_err})");
                    return Err(ImportError::Unrecognised);
                }
            },
        };

        info!("[IMPORT] Imported {:?}", kind);
        self.adopt_engine_game(engine);
        Ok(kind)
    }

    /// Start over from the standard position
    pub fn reset<E: RulesEngine + ?Sized>(&mut self, engine: &mut E) {
        engine.reset();
        self.adopt_engine_game(engine);
    }

    fn adopt_engine_game<E: RulesEngine + ?Sized>(&mut self, engine: &E) {
        self.history = MoveHistory::from_moves(
            engine.initial_fen(),
            engine.history_verbose().to_vec(),
        );
        self.cursor = self.history.tip();
        self.click = ClickState::Idle;
        self.marked.clear();
        self.drag = None;
        self.refresh_styles(engine);
    }

    // === Presentation ===

    pub fn flip_orientation(&mut self) {
        self.orientation = self.orientation.flipped();
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.orientation = orientation;
    }

    pub fn set_highlight_options<E: RulesEngine + ?Sized>(
        &mut self,
        engine: &E,
        options: HighlightOptions,
    ) {
        if self.options != options {
            self.options = options;
            self.refresh_styles(engine);
        }
    }

    fn refresh_styles<E: RulesEngine + ?Sized>(&mut self, engine: &E) {
        self.styles = compute_square_styles(
            engine,
            HighlightInput {
                selected: self.click.selected(),
                shown_move: self.shown_move(),
                marked: &self.marked,
                at_tip: self.is_at_tip(),
                options: self.options,
            },
        );
    }
}

/// Piece on `square` in a FEN produced by the engine
pub fn piece_on(fen: &str, square: Square) -> Option<Piece> {
    board_from_fen(fen)?.piece_at(square)
}
