//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no I/O, making them usable in any context
//! (scoring engine, terminal rendering, roll logging).
//!
//! # Game Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `PIN_COUNT` | 10 | Pins in a full rack |
//! | `FRAME_COUNT` | 10 | Frames in one game |
//! | `FINAL_FRAME_NUMBER` | 10 | 1-based number of the final frame |
//! | `MAX_FRAME_ROLLS` | 2 | Rolls in frames 1-9 |
//! | `MAX_FINAL_FRAME_ROLLS` | 3 | Rolls in frame 10 |
//! | `MAX_GAME_ROLLS` | 21 | Upper bound on rolls in one game |
//! | `PERFECT_SCORE` | 300 | Twelve strikes |
//!
//! # Errors
//!
//! Every rejected roll or query maps to one [`BowlingError`] variant. Errors are
//! raised before any state is touched, so callers may retry with corrected input.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pins in a full rack.
pub const PIN_COUNT: u8 = 10;

/// Frames in one game.
pub const FRAME_COUNT: usize = 10;

/// 1-based number of the last frame.
pub const FINAL_FRAME_NUMBER: u8 = 10;

/// Roll capacity of frames 1-9.
pub const MAX_FRAME_ROLLS: usize = 2;

/// Roll capacity of frame 10 (two plus one bonus roll).
pub const MAX_FINAL_FRAME_ROLLS: usize = 3;

/// Nine regular frames of two rolls plus three rolls in the final frame.
pub const MAX_GAME_ROLLS: usize = (FRAME_COUNT - 1) * MAX_FRAME_ROLLS + MAX_FINAL_FRAME_ROLLS;

/// Score of a game of twelve strikes.
pub const PERFECT_SCORE: u16 = 300;

/// Number of pins knocked down by a single roll.
///
/// Always within `0..=PIN_COUNT`; the only constructor validates the range.
///
/// # Examples
///
/// ```
/// use tui_bowling_types::{BowlingError, Pinfall};
///
/// assert_eq!(Pinfall::new(7).unwrap().count(), 7);
/// assert!(Pinfall::new(10).unwrap().is_strike());
/// assert_eq!(Pinfall::new(11), Err(BowlingError::InvalidPinfall(11)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Pinfall(u8);

impl Pinfall {
    /// Every pin down.
    pub const STRIKE: Pinfall = Pinfall(PIN_COUNT);

    pub fn new(pins: u8) -> Result<Self, BowlingError> {
        if pins > PIN_COUNT {
            return Err(BowlingError::InvalidPinfall(pins));
        }
        Ok(Self(pins))
    }

    pub fn count(self) -> u8 {
        self.0
    }

    pub fn is_strike(self) -> bool {
        self.0 == PIN_COUNT
    }
}

impl TryFrom<u8> for Pinfall {
    type Error = BowlingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Pinfall::new(value)
    }
}

impl From<Pinfall> for u8 {
    fn from(value: Pinfall) -> Self {
        value.0
    }
}

impl fmt::Display for Pinfall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of a frame, derived purely from its rolls.
///
/// - **Strike**: first roll knocked down every pin
/// - **Spare**: two rolls cleared the rack, first roll < 10
/// - **Open**: two rolls left pins standing (includes the all-gutter frame)
/// - **InProgress**: not enough rolls yet to classify the frame
///
/// The final frame is classified from its first two rolls only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameOutcome {
    Strike,
    Spare,
    Open,
    InProgress,
}

impl FrameOutcome {
    /// Classify a roll sequence by its first two rolls.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::{FrameOutcome, Pinfall};
    ///
    /// let p = |n| Pinfall::new(n).unwrap();
    /// assert_eq!(FrameOutcome::classify(&[p(10)]), FrameOutcome::Strike);
    /// assert_eq!(FrameOutcome::classify(&[p(3), p(7)]), FrameOutcome::Spare);
    /// assert_eq!(FrameOutcome::classify(&[p(3), p(4)]), FrameOutcome::Open);
    /// assert_eq!(FrameOutcome::classify(&[p(3)]), FrameOutcome::InProgress);
    /// ```
    pub fn classify(rolls: &[Pinfall]) -> Self {
        match rolls {
            [first, ..] if first.is_strike() => FrameOutcome::Strike,
            [first, second, ..] if first.count() + second.count() == PIN_COUNT => {
                FrameOutcome::Spare
            }
            [_, _, ..] => FrameOutcome::Open,
            _ => FrameOutcome::InProgress,
        }
    }

    /// Whether this outcome needs rolls beyond the frame's own two to be scored.
    pub fn earns_bonus(self) -> bool {
        matches!(self, FrameOutcome::Strike | FrameOutcome::Spare)
    }
}

/// Errors raised by the scoring engine.
///
/// Every variant is raised before the frame or game is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// Pinfall outside `0..=10`.
    #[error("invalid pinfall {0}: a roll knocks down between 0 and 10 pins")]
    InvalidPinfall(u8),
    /// More pins than are standing on the current rack.
    #[error("invalid roll: {pinfall} pins knocked down but only {standing} standing")]
    InvalidRoll { pinfall: u8, standing: u8 },
    /// The frame has already met its completion condition.
    #[error("frame {0} is already complete")]
    FrameComplete(u8),
    /// The tenth frame is complete.
    #[error("game is over")]
    GameOver,
    /// Query on a frame that has no rolls yet.
    #[error("frame {0} has no rolls recorded")]
    NoRollsRecorded(u8),
}

/// Player actions, independent of how they were entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Knock down an exact number of pins (may be out of range; the engine rejects it)
    Pins(u8),
    /// Knock down every pin standing on a fresh rack
    Strike,
    /// Knock down every pin left standing
    Spare,
    /// Miss every pin
    Gutter,
    /// Throw the current game away and start over
    Restart,
}

impl GameAction {
    /// Pin count to bowl for this action, given the pins standing.
    ///
    /// Returns `None` for actions that are not rolls.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::GameAction;
    ///
    /// assert_eq!(GameAction::Spare.pinfall(3), Some(3));
    /// assert_eq!(GameAction::Strike.pinfall(3), Some(10));
    /// assert_eq!(GameAction::Restart.pinfall(3), None);
    /// ```
    pub fn pinfall(self, pins_standing: u8) -> Option<u8> {
        match self {
            GameAction::Pins(n) => Some(n),
            GameAction::Strike => Some(PIN_COUNT),
            GameAction::Spare => Some(pins_standing),
            GameAction::Gutter => Some(0),
            GameAction::Restart => None,
        }
    }

    /// Parse an action from a scoresheet token: `0`-`10`, `X`, `/`, `-`, `restart`.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" | "strike" => Some(GameAction::Strike),
            "/" | "spare" => Some(GameAction::Spare),
            "-" | "gutter" => Some(GameAction::Gutter),
            "restart" => Some(GameAction::Restart),
            other => other.parse::<u8>().ok().map(GameAction::Pins),
        }
    }
}

/// Maximum length of a player name.
pub const PLAYER_NAME_MAX_LEN: usize = 3;

/// Player name shown on the scoreboard: 1-3 ASCII letters, stored upper-case.
///
/// The scoring engine never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlayerName(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayerNameError {
    #[error("player name is empty")]
    Empty,
    #[error("player name {0:?} is longer than {} letters", PLAYER_NAME_MAX_LEN)]
    TooLong(String),
    #[error("player name {0:?} must contain only ASCII letters")]
    NotAlphabetic(String),
}

impl PlayerName {
    /// Parse a player name (case-insensitive, surrounding whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_bowling_types::PlayerName;
    ///
    /// assert_eq!(PlayerName::parse(" pjs ").unwrap().as_str(), "PJS");
    /// assert!(PlayerName::parse("toolong").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, PlayerNameError> {
        let name = s.trim();
        if name.is_empty() {
            return Err(PlayerNameError::Empty);
        }
        if !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(PlayerNameError::NotAlphabetic(name.to_string()));
        }
        if name.len() > PLAYER_NAME_MAX_LEN {
            return Err(PlayerNameError::TooLong(name.to_string()));
        }
        Ok(Self(name.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for PlayerName {
    fn default() -> Self {
        Self("PLY".to_string())
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
