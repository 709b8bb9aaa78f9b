//! Snapshot module - serializable read model for renderers and roll logs

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::types::{FrameOutcome, FRAME_COUNT, MAX_FINAL_FRAME_ROLLS};

/// Read-only view of one frame, with its resolved score.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FrameSnapshot {
    pub number: u8,
    pub rolls: ArrayVec<u8, MAX_FINAL_FRAME_ROLLS>,
    pub outcome: FrameOutcome,
    pub complete: bool,
    pub score: Option<u16>,
    pub cumulative: Option<u16>,
}

impl FrameSnapshot {
    pub fn is_final(&self) -> bool {
        self.number as usize == FRAME_COUNT
    }
}

/// Everything a renderer or roll log needs, detached from the live `Game`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    pub frames: ArrayVec<FrameSnapshot, FRAME_COUNT>,
    pub current_frame: u8,
    pub pins_standing: u8,
    pub game_over: bool,
    /// Highest resolved running total.
    pub total: u16,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            frames: ArrayVec::new(),
            current_frame: 1,
            pins_standing: 0,
            game_over: false,
            total: 0,
        }
    }
}
