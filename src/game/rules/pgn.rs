//! PGN movetext reader and writer
//!
//! The reader only splits text into tag pairs and SAN tokens; turning SAN into
//! moves is left to the rules engine, which replays them from the start
//! position. Comments, variations, NAGs, move numbers and annotation suffixes
//! are dropped. Reading stops at the first game termination marker.

use crate::game::error::{ImportError, ImportResult};
use crate::game::resources::MoveHistory;
use shakmaty::Color;
use std::fmt::Write as _;
use std::iter::Peekable;
use std::str::Chars;

const RESULT_TOKENS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// Tag pairs and main-line SAN tokens of one game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgnGame {
    pub tags: Vec<(String, String)>,
    pub sans: Vec<String>,
}

impl PgnGame {
    pub fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Start position given by a `[FEN]` tag, if any
    pub fn start_fen(&self) -> Option<&str> {
        self.tag("FEN")
    }
}

/// Split PGN text into tags and main-line SAN tokens
pub fn read_pgn(text: &str) -> ImportResult<PgnGame> {
    let mut game = PgnGame::default();
    let mut chars = text.chars().peekable();

    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '[' => {
                chars.next();
                game.tags.push(read_tag(&mut chars)?);
            }
            '{' => {
                chars.next();
                skip_comment(&mut chars)?;
            }
            ';' | '%' => skip_line(&mut chars),
            '(' => {
                chars.next();
                skip_variation(&mut chars)?;
            }
            '$' => {
                chars.next();
                while chars.peek().is_some_and(|c| c.is_ascii_digit()) {
                    chars.next();
                }
            }
            ')' | ']' | '}' => {
                return Err(ImportError::pgn(format!("unbalanced '{c}'")));
            }
            _ => {
                let token = read_token(&mut chars);
                if RESULT_TOKENS.contains(&token.as_str()) {
                    break;
                }
                if let Some(san) = san_from_token(&token) {
                    game.sans.push(san);
                }
            }
        }
    }

    if game.tags.is_empty() && game.sans.is_empty() {
        return Err(ImportError::pgn("no tag pairs or moves"));
    }
    Ok(game)
}

fn read_tag(chars: &mut Peekable<Chars<'_>>) -> ImportResult<(String, String)> {
    let mut name = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || c == '"' || c == ']' {
            break;
        }
        name.push(c);
        chars.next();
    }
    if name.is_empty() {
        return Err(ImportError::pgn("tag pair without a name"));
    }

    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
    if chars.next() != Some('"') {
        return Err(ImportError::pgn(format!("tag '{name}' has no quoted value")));
    }

    let mut value = String::new();
    loop {
        match chars.next() {
            Some('\\') => match chars.next() {
                Some(escaped) => value.push(escaped),
                None => break,
            },
            Some('"') => break,
            Some(c) => value.push(c),
            None => return Err(ImportError::pgn(format!("unterminated value for tag '{name}'"))),
        }
    }

    while chars.peek().is_some_and(|c| c.is_whitespace()) {
        chars.next();
    }
    if chars.next() != Some(']') {
        return Err(ImportError::pgn(format!("tag '{name}' is not closed")));
    }
    Ok((name, value))
}

fn skip_comment(chars: &mut Peekable<Chars<'_>>) -> ImportResult<()> {
    for c in chars.by_ref() {
        if c == '}' {
            return Ok(());
        }
    }
    Err(ImportError::pgn("unterminated comment"))
}

fn skip_line(chars: &mut Peekable<Chars<'_>>) {
    for c in chars.by_ref() {
        if c == '\n' {
            break;
        }
    }
}

fn skip_variation(chars: &mut Peekable<Chars<'_>>) -> ImportResult<()> {
    let mut depth = 1usize;
    while let Some(c) = chars.next() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok(());
                }
            }
            '{' => skip_comment(chars)?,
            ';' => skip_line(chars),
            _ => {}
        }
    }
    Err(ImportError::pgn("unterminated variation"))
}

fn read_token(chars: &mut Peekable<Chars<'_>>) -> String {
    let mut token = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_whitespace() || matches!(c, '[' | ']' | '{' | '}' | '(' | ')' | ';' | '$') {
            break;
        }
        token.push(c);
        chars.next();
    }
    token
}

/// Strip move numbers (`12.`, `12...`, `12.e4`), `!`/`?` suffixes and `e.p.`
///
/// Zero-style castling (`0-0`) is rewritten to `O-O`.
fn san_from_token(token: &str) -> Option<String> {
    let without_number = match token.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) if token[idx..].starts_with('.') => token[idx..].trim_start_matches('.'),
        Some(_) => token,
        None => "",
    };
    let san = without_number.trim_end_matches(['!', '?']);
    if san.is_empty() || san == "e.p." {
        return None;
    }
    if san.starts_with("0-0") {
        return Some(san.replace('0', "O"));
    }
    Some(san.to_string())
}

/// Render a history as PGN, with `[SetUp]`/`[FEN]` tags for non-standard starts
pub fn write_pgn(history: &MoveHistory) -> String {
    let mut out = String::new();
    if !history.starts_from_standard_position() {
        let _ = writeln!(out, "[SetUp \"1\"]");
        let _ = writeln!(out, "[FEN \"{}\"]", history.initial_fen());
        out.push('\n');
    }

    let mut tokens: Vec<String> = Vec::with_capacity(history.len() * 2 + 1);
    for (i, record) in history.iter().enumerate() {
        match record.color {
            Color::White => tokens.push(format!("{}.", record.fullmove)),
            Color::Black if i == 0 => tokens.push(format!("{}...", record.fullmove)),
            Color::Black => {}
        }
        tokens.push(record.san.clone());
    }
    tokens.push("*".to_string());

    out.push_str(&tokens.join(" "));
    out
}
