//! Terminal scoreboard module.
//!
//! A small rendering layer for the bowling scoresheet. It renders into a
//! framebuffer of styled cells that can be flushed to a terminal backend or
//! turned into plain text lines.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so the layout can be unit-tested
//! - Share one rendering path between the interactive and the plain-text binary

pub mod fb;
pub mod marks;
pub mod renderer;
pub mod scoreboard;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use marks::{format_marks, frame_marks, Mark};
pub use renderer::{
    encode_changed_rows_into, encode_full_into, with_terminal, TerminalRenderer, TerminalSession,
};
pub use scoreboard::{status_line, AnchorY, ScoreboardView, Viewport, BOARD_HEIGHT, TABLE_WIDTH};
