//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Rolls are
//! entered the way they are written on a scoresheet: a digit for a pin count,
//! `x` for a strike, `/` for a spare and `-` for a gutter ball.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
