//! Core bowling logic - pure, deterministic, and testable
//!
//! This crate contains the scoring engine: frame state machines, the ten-frame
//! game aggregate and the scorer. It has **zero dependencies** on terminals or
//! I/O, and it never logs; errors are returned to the caller.
//!
//! # Module Structure
//!
//! - [`frame`]: frames 1-9, the [`FrameView`] query trait and [`FrameSlot`]
//! - [`final_frame`]: frame 10 with its bonus-roll completion rule
//! - [`game`]: routes rolls to the active frame and advances frames
//! - [`scoring`]: per-frame scores and running totals with lookahead
//! - [`snapshot`]: serializable read-only view for renderers and logs
//!
//! # Rules
//!
//! - A strike ends frames 1-9 after one roll and scores 10 plus the next two rolls
//! - A spare scores 10 plus the next roll
//! - An open frame scores its pins
//! - Frame 10 grants a third roll after a strike or spare and scores its own rolls
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::Game;
//!
//! let mut game = Game::new();
//! for _ in 0..12 {
//!     game.bowl(10).unwrap();
//! }
//!
//! assert!(game.is_game_over());
//! assert_eq!(game.score().total(), Some(300));
//! ```

pub mod final_frame;
pub mod frame;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used types for convenience
pub use final_frame::FinalFrame;
pub use frame::{Frame, FrameSlot, FrameView};
pub use game::Game;
pub use scoring::{cumulative_totals, frame_scores, score, Scorecard};
pub use snapshot::{FrameSnapshot, GameSnapshot};
pub use types::{BowlingError, FrameOutcome, Pinfall};
