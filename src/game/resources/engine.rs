//! Chess engine resource - rules library wrapper
//!
//! Provides the [`RulesEngine`] contract the board view talks to, and
//! [`ChessEngine`], its implementation over `shakmaty::Chess`.
//!
//! # Architecture
//!
//! The engine is authoritative for:
//! - Move legality and the resulting position
//! - FEN validation and PGN replay
//! - SAN generation and check/checkmate detection
//!
//! The board view owns everything visual (history cursor, selection,
//! highlights). It receives the engine by reference and never touches the
//! position directly.
//!
//! # Positions
//!
//! Positions cross the boundary as FEN strings produced by the engine. The
//! engine keeps the live position (the history tip), the position the game
//! started from, and the verbose move list.

use crate::game::error::{ImportError, ImportResult};
use crate::game::resources::history::{MoveFlags, MoveRecord};
use crate::game::rules::pgn;
use bevy::prelude::Resource;
use shakmaty::fen::Fen;
use shakmaty::san::{San, SanPlus};
use shakmaty::{
    CastlingMode, Chess, Color, EnPassantMode, File, Move, Piece, Position, Role, Square,
};
use tracing::debug;

/// A move as the board asks for it: two squares and a promotion choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub from: Square,
    pub to: Square,
    /// Piece to promote to; queen when `None`
    pub promotion: Option<Role>,
}

impl MoveRequest {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            promotion: None,
        }
    }

    pub fn with_promotion(mut self, role: Role) -> Self {
        self.promotion = Some(role);
        self
    }
}

/// Summary of a position for the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
}

impl GameStatus {
    pub fn of(position: &Chess) -> Self {
        if position.is_checkmate() {
            GameStatus::Checkmate
        } else if position.is_stalemate() {
            GameStatus::Stalemate
        } else if position.is_insufficient_material() {
            GameStatus::InsufficientMaterial
        } else if position.is_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// Status of an engine-produced FEN, `None` if it does not parse
    pub fn from_fen(fen: &str) -> Option<Self> {
        parse_fen(fen).ok().map(|position| Self::of(&position))
    }

    /// Status line text, `None` while the game simply goes on
    pub fn message(self, side_to_move: Color) -> Option<String> {
        let side = color_name(side_to_move);
        match self {
            GameStatus::Ongoing => None,
            GameStatus::Check => Some(format!("{side} is in check")),
            GameStatus::Checkmate => Some(format!("Checkmate, {} wins", color_name(!side_to_move))),
            GameStatus::Stalemate => Some("Stalemate".to_string()),
            GameStatus::InsufficientMaterial => Some("Draw by insufficient material".to_string()),
        }
    }
}

pub fn color_name(color: Color) -> &'static str {
    match color {
        Color::White => "White",
        Color::Black => "Black",
    }
}

/// Operations the board view needs from a chess rules implementation
pub trait RulesEngine {
    /// Check that `text` is a FEN of a legal position
    fn validate_fen(&self, text: &str) -> ImportResult<()>;

    /// Replace the game with the position in `text`; history becomes empty
    fn load(&mut self, text: &str) -> ImportResult<()>;

    /// Replace the game with the PGN in `text`; returns the number of moves
    fn load_pgn(&mut self, text: &str) -> ImportResult<usize>;

    /// Play a move if legal; `None` leaves the engine unchanged
    fn make_move(&mut self, request: MoveRequest) -> Option<MoveRecord>;

    /// Destination squares of every legal move starting on `square`
    fn legal_destinations(&self, square: Square) -> Vec<Square>;

    fn current_fen(&self) -> String;

    /// Position the current game started from
    fn initial_fen(&self) -> String;

    fn history_verbose(&self) -> &[MoveRecord];

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<Piece>;

    fn status(&self) -> GameStatus;

    /// Start a new game from the standard position
    fn reset(&mut self);
}

/// Chess engine resource - single source of truth for chess rules
#[derive(Resource, Debug, Clone, Default)]
pub struct ChessEngine {
    initial: Chess,
    position: Chess,
    history: Vec<MoveRecord>,
}

impl ChessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Engine positioned at `fen`
    pub fn from_fen(fen: &str) -> ImportResult<Self> {
        let position = parse_fen(fen)?;
        Ok(Self {
            initial: position.clone(),
            position,
            history: Vec::new(),
        })
    }

    pub fn position(&self) -> &Chess {
        &self.position
    }

    fn find_move(&self, request: MoveRequest) -> Option<Move> {
        let promotion = request.promotion.unwrap_or(Role::Queen);
        self.position.legal_moves().into_iter().find(|m| {
            move_squares(m) == Some((request.from, request.to))
                && m.promotion().map_or(true, |role| role == promotion)
        })
    }
}

impl RulesEngine for ChessEngine {
    fn validate_fen(&self, text: &str) -> ImportResult<()> {
        parse_fen(text).map(|_| ())
    }

    fn load(&mut self, text: &str) -> ImportResult<()> {
        let position = parse_fen(text)?;
        self.initial = position.clone();
        self.position = position;
        self.history.clear();
        debug!("[ENGINE] Loaded FEN {}", self.current_fen());
        Ok(())
    }

    fn load_pgn(&mut self, text: &str) -> ImportResult<usize> {
        let game = pgn::read_pgn(text)?;
        let start = match game.start_fen() {
            Some(fen) => parse_fen(fen)
                .map_err(|err| ImportError::pgn(format!("bad FEN tag: {err}")))?,
            None => Chess::default(),
        };

        let mut position = start.clone();
        let mut records = Vec::with_capacity(game.sans.len());
        for (ply, token) in game.sans.iter().enumerate() {
            let san_plus: SanPlus = token
                .parse()
                .map_err(|_| ImportError::pgn(format!("'{token}' is not SAN (ply {})", ply + 1)))?;
            let m = san_plus.san.to_move(&position).map_err(|_| {
                ImportError::pgn(format!("illegal move '{token}' at ply {}", ply + 1))
            })?;
            let (next, record) = play_and_record(&position, &m)
                .ok_or_else(|| ImportError::pgn(format!("unsupported move '{token}'")))?;
            position = next;
            records.push(record);
        }

        // Only commit once every move replayed
        self.initial = start;
        self.position = position;
        self.history = records;
        debug!("[ENGINE] Loaded PGN with {} moves", self.history.len());
        Ok(self.history.len())
    }

    fn make_move(&mut self, request: MoveRequest) -> Option<MoveRecord> {
        let m = self.find_move(request)?;
        let (next, record) = play_and_record(&self.position, &m)?;
        self.position = next;
        self.history.push(record.clone());
        Some(record)
    }

    fn legal_destinations(&self, square: Square) -> Vec<Square> {
        let mut destinations = Vec::new();
        for m in self.position.legal_moves() {
            if let Some((from, to)) = move_squares(&m) {
                if from == square && !destinations.contains(&to) {
                    destinations.push(to);
                }
            }
        }
        destinations
    }

    fn current_fen(&self) -> String {
        fen_of(&self.position)
    }

    fn initial_fen(&self) -> String {
        fen_of(&self.initial)
    }

    fn history_verbose(&self) -> &[MoveRecord] {
        &self.history
    }

    fn side_to_move(&self) -> Color {
        self.position.turn()
    }

    fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square)
    }

    fn status(&self) -> GameStatus {
        GameStatus::of(&self.position)
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Parse and validate a FEN into a standard chess position
pub fn parse_fen(text: &str) -> ImportResult<Chess> {
    let fen: Fen = text
        .trim()
        .parse()
        .map_err(|err: shakmaty::fen::ParseFenError| ImportError::fen(err.to_string()))?;
    fen.into_position::<Chess>(CastlingMode::Standard)
        .map_err(|err| ImportError::fen(err.to_string()))
}

pub fn fen_of(position: &Chess) -> String {
    Fen::from_position(position.clone(), EnPassantMode::Legal).to_string()
}

/// Squares the user drags between for a move
///
/// Castling is reported as the king's two-square hop (e1 to g1 or c1).
pub fn move_squares(m: &Move) -> Option<(Square, Square)> {
    match *m {
        Move::Normal { from, to, .. } | Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() {
                File::G
            } else {
                File::C
            };
            Some((king, Square::from_coords(file, king.rank())))
        }
        Move::Put { .. } => None,
    }
}

fn play_and_record(position: &Chess, m: &Move) -> Option<(Chess, MoveRecord)> {
    let (from, to) = move_squares(m)?;
    let san = San::from_move(position, m);

    let mut next = position.clone();
    next.play_unchecked(m);

    let checkmate = next.is_checkmate();
    let check = next.is_check();
    let suffix = if checkmate {
        "#"
    } else if check {
        "+"
    } else {
        ""
    };

    let record = MoveRecord {
        from,
        to,
        san: format!("{san}{suffix}"),
        color: position.turn(),
        fullmove: position.fullmoves().get(),
        flags: MoveFlags {
            capture: m.is_capture(),
            en_passant: m.is_en_passant(),
            castle: m.is_castle(),
            promotion: m.promotion(),
            check,
            checkmate,
        },
        fen_after: fen_of(&next),
    };
    Some((next, record))
}
