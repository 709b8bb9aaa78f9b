//! Game module - the ten-frame aggregate
//!
//! `Game` owns all ten frames and is the only writer: every roll goes through
//! [`Game::bowl`], which routes it to the active frame and moves on once that
//! frame is complete. Frames before the active one are complete, frames after it
//! are empty.

use crate::final_frame::FinalFrame;
use crate::frame::{Frame, FrameSlot, FrameView};
use crate::scoring::{self, Scorecard};
use crate::snapshot::{FrameSnapshot, GameSnapshot};
use crate::types::{BowlingError, Pinfall, FRAME_COUNT, MAX_GAME_ROLLS};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Game {
    frames: [FrameSlot; FRAME_COUNT],
    /// Index of the frame accepting rolls.
    active: usize,
}

impl Game {
    /// Create a game with ten empty frames (nine regular, one final).
    pub fn new() -> Self {
        let frames = std::array::from_fn(|i| {
            if i + 1 == FRAME_COUNT {
                FrameSlot::Final(FinalFrame::new())
            } else {
                FrameSlot::Regular(Frame::new(i as u8 + 1))
            }
        });
        Self { frames, active: 0 }
    }

    /// Bowl one roll into the active frame.
    ///
    /// Frame errors propagate unchanged; a rejected roll leaves the game as it was.
    pub fn bowl(&mut self, pins: u8) -> Result<(), BowlingError> {
        if self.is_game_over() {
            return Err(BowlingError::GameOver);
        }
        let frame = &mut self.frames[self.active];
        frame.record(pins)?;
        if frame.is_complete() && self.active + 1 < FRAME_COUNT {
            self.active += 1;
        }
        Ok(())
    }

    pub fn is_game_over(&self) -> bool {
        self.frames[FRAME_COUNT - 1].is_complete()
    }

    /// All ten frames in order.
    pub fn frames(&self) -> &[FrameSlot] {
        &self.frames
    }

    /// The frame accepting rolls, or `None` once the game is over.
    pub fn active_frame(&self) -> Option<&FrameSlot> {
        if self.is_game_over() {
            None
        } else {
            Some(&self.frames[self.active])
        }
    }

    /// 1-based number of the frame accepting rolls (10 once the game is over).
    pub fn current_frame_number(&self) -> u8 {
        self.frames[self.active].number()
    }

    /// Pins available to the next roll (0 once the game is over).
    pub fn pins_standing(&self) -> u8 {
        self.active_frame().map_or(0, |f| f.pins_standing())
    }

    /// Every roll thrown so far, in bowling order.
    pub fn rolls(&self) -> Vec<Pinfall> {
        let mut out = Vec::with_capacity(MAX_GAME_ROLLS);
        for frame in &self.frames {
            out.extend_from_slice(frame.rolls());
        }
        out
    }

    pub fn roll_count(&self) -> usize {
        self.frames.iter().map(|f| f.rolls().len()).sum()
    }

    pub fn score(&self) -> Scorecard {
        scoring::score(&self.frames)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let card = self.score();
        out.frames.clear();
        for (i, frame) in self.frames.iter().enumerate() {
            out.frames.push(FrameSnapshot {
                number: frame.number(),
                rolls: frame.rolls().iter().map(|r| r.count()).collect(),
                outcome: frame.outcome(),
                complete: frame.is_complete(),
                score: card.frames[i],
                cumulative: card.cumulative[i],
            });
        }
        out.current_frame = self.current_frame_number();
        out.pins_standing = self.pins_standing();
        out.game_over = self.is_game_over();
        out.total = card.resolved_total();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FrameOutcome;

    fn bowl_all(game: &mut Game, rolls: &[u8]) {
        for &pins in rolls {
            game.bowl(pins).unwrap();
        }
    }

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.frames().len(), 10);
        assert!(!game.is_game_over());
        assert_eq!(game.current_frame_number(), 1);
        assert_eq!(game.pins_standing(), 10);
        assert!(game.rolls().is_empty());
        for (i, frame) in game.frames().iter().enumerate() {
            assert_eq!(frame.number() as usize, i + 1);
            assert_eq!(frame.is_final(), i == 9);
            assert!(frame.rolls().is_empty());
        }
    }

    #[test]
    fn test_strike_advances_frame() {
        let mut game = Game::new();
        game.bowl(10).unwrap();
        assert_eq!(game.current_frame_number(), 2);
        assert_eq!(game.frames()[0].outcome(), FrameOutcome::Strike);
    }

    #[test]
    fn test_two_rolls_advance_frame() {
        let mut game = Game::new();
        game.bowl(3).unwrap();
        assert_eq!(game.current_frame_number(), 1);
        assert_eq!(game.pins_standing(), 7);
        game.bowl(5).unwrap();
        assert_eq!(game.current_frame_number(), 2);
        assert_eq!(game.pins_standing(), 10);
    }

    #[test]
    fn test_frame_error_propagates_without_mutation() {
        let mut game = Game::new();
        game.bowl(6).unwrap();
        let before = game.clone();
        assert_eq!(
            game.bowl(5),
            Err(BowlingError::InvalidRoll {
                pinfall: 5,
                standing: 4
            })
        );
        assert_eq!(game.bowl(11), Err(BowlingError::InvalidPinfall(11)));
        assert_eq!(game, before);
    }

    #[test]
    fn test_game_over_after_open_tenth() {
        let mut game = Game::new();
        bowl_all(&mut game, &[1; 20]);
        assert!(game.is_game_over());
        assert_eq!(game.current_frame_number(), 10);
        assert_eq!(game.pins_standing(), 0);
        assert!(game.active_frame().is_none());

        let before = game.clone();
        assert_eq!(game.bowl(0), Err(BowlingError::GameOver));
        assert_eq!(game.bowl(42), Err(BowlingError::GameOver));
        assert_eq!(game, before);
    }

    #[test]
    fn test_tenth_frame_strike_earns_bonus_rolls() {
        let mut game = Game::new();
        bowl_all(&mut game, &[0; 18]);
        game.bowl(10).unwrap();
        assert!(!game.is_game_over());
        game.bowl(10).unwrap();
        assert!(!game.is_game_over());
        game.bowl(10).unwrap();
        assert!(game.is_game_over());
        assert_eq!(game.roll_count(), 21);
    }

    #[test]
    fn test_rolls_are_in_bowling_order() {
        let mut game = Game::new();
        bowl_all(&mut game, &[10, 7, 3, 4]);
        let rolls: Vec<u8> = game.rolls().iter().map(|r| r.count()).collect();
        assert_eq!(rolls, vec![10, 7, 3, 4]);
    }

    #[test]
    fn test_snapshot_reflects_scores() {
        let mut game = Game::new();
        bowl_all(&mut game, &[10, 7, 3, 4, 2]);
        let snap = game.snapshot();
        assert_eq!(snap.frames.len(), 10);
        assert_eq!(snap.current_frame, 4);
        assert_eq!(snap.frames[0].score, Some(20));
        assert_eq!(snap.frames[1].score, Some(14));
        assert_eq!(snap.frames[2].cumulative, Some(40));
        assert_eq!(snap.frames[3].score, None);
        assert_eq!(snap.total, 40);
        assert!(!snap.game_over);
    }
}
