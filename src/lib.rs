//! TUI Bowling (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_bowling::{core,input,term,types}` and
//! hosts the pieces shared by both binaries: environment configuration, the
//! JSON-lines roll log and the action-driven [`Session`].

pub mod config;
pub mod roll_log;
pub mod session;

pub use tui_bowling_core as core;
pub use tui_bowling_input as input;
pub use tui_bowling_term as term;
pub use tui_bowling_types as types;

pub use config::Config;
pub use roll_log::{RollLog, RollRecord};
pub use session::Session;
