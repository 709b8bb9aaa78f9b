//! Scoring module - frame scores and running totals
//!
//! Scores are computed from the frame sequence alone; nothing is cached between
//! calls, so scoring the same frames twice always gives the same card.
//!
//! The frames' rolls are flattened into bowling order and each frame is scored
//! by looking ahead from its first roll:
//! - open frame: its own two rolls
//! - spare: its two rolls plus the next roll
//! - strike: its roll plus the next two rolls
//!
//! Spares and strikes therefore both sum the three rolls starting at the frame.
//! In frame 10 those "next" rolls are the frame's own bonus rolls, which sit right
//! behind it in the flattened sequence, so the final frame needs no special case.
//!
//! A frame whose rolls or lookahead rolls are not thrown yet is pending (`None`),
//! and so is every running total from the first pending frame onwards.

use crate::frame::FrameView;
use crate::types::MAX_GAME_ROLLS;

/// Rolls summed for a strike or spare, counting from the frame's first roll.
const BONUS_WINDOW: usize = 3;

/// Per-frame scores and running totals for a frame sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scorecard {
    /// Score of each frame, `None` while pending.
    pub frames: Vec<Option<u16>>,
    /// Running total at each frame, `None` from the first pending frame on.
    pub cumulative: Vec<Option<u16>>,
}

impl Scorecard {
    /// Final total, once every frame is resolved.
    pub fn total(&self) -> Option<u16> {
        self.cumulative.last().copied().flatten()
    }

    /// Highest resolved running total so far (0 before anything resolves).
    pub fn resolved_total(&self) -> u16 {
        self.cumulative.iter().map_while(|c| *c).last().unwrap_or(0)
    }

    /// Number of frames whose score is still pending.
    pub fn pending_frames(&self) -> usize {
        self.frames.iter().filter(|s| s.is_none()).count()
    }
}

/// Score every frame and accumulate running totals.
///
/// # Examples
///
/// ```
/// use tui_bowling_core::{scoring, Game};
///
/// let mut game = Game::new();
/// for pins in [7, 3, 4, 2] {
///     game.bowl(pins).unwrap();
/// }
/// let card = scoring::score(game.frames());
/// assert_eq!(card.frames[0], Some(14));
/// assert_eq!(card.cumulative[1], Some(20));
/// assert_eq!(card.frames[2], None);
/// ```
pub fn score<F: FrameView>(frames: &[F]) -> Scorecard {
    let frame_scores = frame_scores(frames);
    let cumulative = cumulative_totals(&frame_scores);
    Scorecard {
        frames: frame_scores,
        cumulative,
    }
}

/// Score of each frame, `None` where it cannot be resolved yet.
pub fn frame_scores<F: FrameView>(frames: &[F]) -> Vec<Option<u16>> {
    let mut rolls: Vec<u16> = Vec::with_capacity(MAX_GAME_ROLLS);
    let mut starts = Vec::with_capacity(frames.len());
    for frame in frames {
        starts.push(rolls.len());
        rolls.extend(frame.rolls().iter().map(|r| r.count() as u16));
    }

    frames
        .iter()
        .zip(starts)
        .map(|(frame, start)| {
            if !frame.is_complete() {
                return None;
            }
            // A complete frame is never InProgress.
            if frame.outcome().earns_bonus() {
                sum_window(&rolls, start, BONUS_WINDOW)
            } else {
                Some(frame.pin_total())
            }
        })
        .collect()
}

/// Running totals over frame scores; pending from the first `None` onwards.
pub fn cumulative_totals(scores: &[Option<u16>]) -> Vec<Option<u16>> {
    let mut running = Some(0u16);
    scores
        .iter()
        .map(|score| {
            running = running.zip(*score).map(|(total, s)| total + s);
            running
        })
        .collect()
}

fn sum_window(rolls: &[u16], start: usize, len: usize) -> Option<u16> {
    rolls.get(start..start + len).map(|w| w.iter().sum())
}
