//! Chess rules module - Pure notation handling without ECS coupling
//!
//! Move generation, FEN validation and SAN live in `shakmaty`; this module
//! only carries what the rules library does not: splitting PGN text into tags
//! and SAN tokens, and writing a history back out as PGN.
//!
//! # Module Structure
//!
//! - `pgn` - PGN movetext reader and writer

pub mod pgn;

#[cfg(test)]
mod tests;

pub use pgn::{read_pgn, write_pgn, PgnGame};
