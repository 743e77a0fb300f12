//! UI styling for DDChess
//!
//! Centralized colors shared by the side panels.

pub mod colors;

pub use colors::*;
