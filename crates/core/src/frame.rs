//! Frame module - regular frames (1-9) and the shared frame query contract
//!
//! A frame accepts one roll at a time until it is complete: after a strike, or
//! after two rolls. Every roll is validated against the pins still standing, so
//! a rejected roll never changes the frame.

use arrayvec::ArrayVec;

use crate::final_frame::FinalFrame;
use crate::types::{BowlingError, FrameOutcome, Pinfall, MAX_FRAME_ROLLS, PIN_COUNT};

/// Read-only query contract shared by [`Frame`] and [`FinalFrame`].
pub trait FrameView {
    /// 1-based frame number.
    fn number(&self) -> u8;

    /// Rolls recorded so far, in the order they were thrown.
    fn rolls(&self) -> &[Pinfall];

    fn is_complete(&self) -> bool;

    /// Pins available to the next roll (0 once the frame is complete).
    fn pins_standing(&self) -> u8;

    fn outcome(&self) -> FrameOutcome {
        FrameOutcome::classify(self.rolls())
    }

    fn first_roll(&self) -> Result<Pinfall, BowlingError> {
        self.rolls()
            .first()
            .copied()
            .ok_or(BowlingError::NoRollsRecorded(self.number()))
    }

    /// Sum of the pins knocked down by this frame's own rolls.
    fn pin_total(&self) -> u16 {
        self.rolls().iter().map(|r| r.count() as u16).sum()
    }
}

/// Validate a raw pin count against the frame state.
///
/// Order matters: the pin range is checked first, then completion, then the rack.
pub(crate) fn check_roll<F: FrameView + ?Sized>(
    frame: &F,
    pins: u8,
) -> Result<Pinfall, BowlingError> {
    let pinfall = Pinfall::new(pins)?;
    if frame.is_complete() {
        return Err(BowlingError::FrameComplete(frame.number()));
    }
    let standing = frame.pins_standing();
    if pins > standing {
        return Err(BowlingError::InvalidRoll {
            pinfall: pins,
            standing,
        });
    }
    Ok(pinfall)
}

/// One of frames 1-9.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    number: u8,
    rolls: ArrayVec<Pinfall, MAX_FRAME_ROLLS>,
}

impl Frame {
    /// Create an empty frame with a 1-based number.
    pub fn new(number: u8) -> Self {
        Self {
            number,
            rolls: ArrayVec::new(),
        }
    }

    /// Record one roll.
    ///
    /// Fails with `InvalidPinfall` for more than 10 pins, `FrameComplete` once the
    /// frame is closed, and `InvalidRoll` when the pins exceed what is standing.
    pub fn record(&mut self, pins: u8) -> Result<(), BowlingError> {
        let pinfall = check_roll(&*self, pins)?;
        self.rolls.push(pinfall);
        Ok(())
    }

    pub fn is_strike(&self) -> bool {
        self.outcome() == FrameOutcome::Strike
    }

    pub fn is_spare(&self) -> bool {
        self.outcome() == FrameOutcome::Spare
    }
}

impl FrameView for Frame {
    fn number(&self) -> u8 {
        self.number
    }

    fn rolls(&self) -> &[Pinfall] {
        &self.rolls
    }

    fn is_complete(&self) -> bool {
        match self.rolls.as_slice() {
            [first] => first.is_strike(),
            [_, _] => true,
            _ => false,
        }
    }

    fn pins_standing(&self) -> u8 {
        if self.is_complete() {
            return 0;
        }
        match self.rolls.first() {
            Some(first) => PIN_COUNT - first.count(),
            None => PIN_COUNT,
        }
    }
}

/// A slot in the game's ten-frame sequence.
///
/// Frames 1-9 are [`Frame`]s and frame 10 is a [`FinalFrame`]; both answer the
/// same [`FrameView`] queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSlot {
    Regular(Frame),
    Final(FinalFrame),
}

impl FrameSlot {
    pub fn record(&mut self, pins: u8) -> Result<(), BowlingError> {
        match self {
            FrameSlot::Regular(frame) => frame.record(pins),
            FrameSlot::Final(frame) => frame.record(pins),
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, FrameSlot::Final(_))
    }

    fn view(&self) -> &dyn FrameView {
        match self {
            FrameSlot::Regular(frame) => frame,
            FrameSlot::Final(frame) => frame,
        }
    }
}

impl FrameView for FrameSlot {
    fn number(&self) -> u8 {
        self.view().number()
    }

    fn rolls(&self) -> &[Pinfall] {
        self.view().rolls()
    }

    fn is_complete(&self) -> bool {
        self.view().is_complete()
    }

    fn pins_standing(&self) -> u8 {
        self.view().pins_standing()
    }

    fn outcome(&self) -> FrameOutcome {
        self.view().outcome()
    }
}
