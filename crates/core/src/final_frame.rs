//! Final frame module - frame 10
//!
//! The tenth frame has its own completion rule:
//!
//! - one roll never completes it (a strike still earns two more rolls)
//! - two rolls complete it unless they contain a strike or a spare
//! - a third roll, when earned, always completes it
//!
//! The rack is reset after a strike or a spare, so the pins standing for the
//! next roll depend on which rolls cleared the deck.

use arrayvec::ArrayVec;

use crate::frame::{check_roll, FrameView};
use crate::types::{BowlingError, Pinfall, FINAL_FRAME_NUMBER, MAX_FINAL_FRAME_ROLLS, PIN_COUNT};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FinalFrame {
    rolls: ArrayVec<Pinfall, MAX_FINAL_FRAME_ROLLS>,
}

impl FinalFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one roll. Same error contract as [`crate::Frame::record`].
    pub fn record(&mut self, pins: u8) -> Result<(), BowlingError> {
        let pinfall = check_roll(&*self, pins)?;
        self.rolls.push(pinfall);
        Ok(())
    }

    fn first_two_total(&self) -> Option<u8> {
        match self.rolls.as_slice() {
            [a, b, ..] => Some(a.count() + b.count()),
            _ => None,
        }
    }
}

impl FrameView for FinalFrame {
    fn number(&self) -> u8 {
        FINAL_FRAME_NUMBER
    }

    fn rolls(&self) -> &[Pinfall] {
        &self.rolls
    }

    fn is_complete(&self) -> bool {
        match self.rolls.len() {
            3 => true,
            // A strike makes the pair total at least 10, so one check covers both.
            2 => self.first_two_total().is_some_and(|total| total < PIN_COUNT),
            _ => false,
        }
    }

    fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.rolls.as_slice() {
            [] => PIN_COUNT,
            [first] if first.is_strike() => PIN_COUNT,
            [first] => PIN_COUNT - first.count(),
            // Strike then a non-strike leaves the remainder of the fresh rack.
            [first, second] if first.is_strike() && !second.is_strike() => {
                PIN_COUNT - second.count()
            }
            // Strike-strike or spare: full rack for the bonus roll.
            _ => PIN_COUNT,
        }
    }
}
