//! Scoresheet marks for a frame's rolls.
//!
//! `X` strike, `/` spare, `-` gutter, a digit otherwise. A roll is a strike only
//! when it clears a fresh rack, and a spare when it clears what the previous roll
//! on the same rack left standing; this reads the same for frames 1-9 and for
//! the bonus rolls of frame 10.

use arrayvec::ArrayVec;

use crate::types::{MAX_FINAL_FRAME_ROLLS, PIN_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Strike,
    Spare,
    Gutter,
    Pins(u8),
}

impl Mark {
    pub fn as_char(self) -> char {
        match self {
            Mark::Strike => 'X',
            Mark::Spare => '/',
            Mark::Gutter => '-',
            Mark::Pins(n) => char::from_digit(n as u32, 10).unwrap_or('?'),
        }
    }
}

/// Marks for one frame's rolls, in order.
pub fn frame_marks(rolls: &[u8]) -> ArrayVec<Mark, MAX_FINAL_FRAME_ROLLS> {
    let mut out = ArrayVec::new();
    // First roll on the current rack, if the rack is not fresh.
    let mut rack_first: Option<u8> = None;
    for &pins in rolls.iter().take(MAX_FINAL_FRAME_ROLLS) {
        let mark = match rack_first {
            None if pins == PIN_COUNT => Mark::Strike,
            None => {
                rack_first = Some(pins);
                pin_mark(pins)
            }
            Some(first) => {
                rack_first = None;
                if first + pins == PIN_COUNT {
                    Mark::Spare
                } else {
                    pin_mark(pins)
                }
            }
        };
        out.push(mark);
    }
    out
}

/// Marks joined with `|`, e.g. `X|X|X`, `5|/|5`, `4|4`.
pub fn format_marks(rolls: &[u8]) -> String {
    let mut s = String::with_capacity(rolls.len() * 2);
    for (i, mark) in frame_marks(rolls).iter().enumerate() {
        if i > 0 {
            s.push('|');
        }
        s.push(mark.as_char());
    }
    s
}

fn pin_mark(pins: u8) -> Mark {
    if pins == 0 {
        Mark::Gutter
    } else {
        Mark::Pins(pins)
    }
}
