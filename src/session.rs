//! One player's game as driven by either binary.
//!
//! Turns [`GameAction`]s into `Game::bowl` calls, keeps a render-ready snapshot
//! and feeds the roll log.

use crate::core::{Game, GameSnapshot};
use crate::roll_log::{RollLog, RollRecord};
use crate::types::{BowlingError, GameAction};

pub struct Session {
    game: Game,
    snapshot: GameSnapshot,
    log: RollLog,
}

impl Session {
    pub fn new(log: RollLog) -> Self {
        let game = Game::new();
        let snapshot = game.snapshot();
        Self {
            game,
            snapshot,
            log,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Snapshot of the game after the last applied action.
    pub fn snapshot(&self) -> &GameSnapshot {
        &self.snapshot
    }

    pub fn log(&self) -> &RollLog {
        &self.log
    }

    /// Apply one action. A rejected roll leaves the game untouched and is still logged.
    pub fn apply(&mut self, action: GameAction) -> Result<(), BowlingError> {
        let Some(pins) = action.pinfall(self.game.pins_standing()) else {
            self.game = Game::new();
            self.game.snapshot_into(&mut self.snapshot);
            return Ok(());
        };

        let outcome = self.game.bowl(pins);
        if outcome.is_ok() {
            self.game.snapshot_into(&mut self.snapshot);
        }
        self.log
            .append(&RollRecord::new(pins, outcome, &self.snapshot));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_resolve_against_pins_standing() {
        let mut session = Session::new(RollLog::disabled());
        session.apply(GameAction::Pins(7)).unwrap();
        session.apply(GameAction::Spare).unwrap();
        session.apply(GameAction::Strike).unwrap();
        session.apply(GameAction::Gutter).unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.frames[0].rolls.as_slice(), &[7, 3]);
        assert_eq!(snap.frames[1].rolls.as_slice(), &[10]);
        assert_eq!(snap.frames[2].rolls.as_slice(), &[0]);
        assert_eq!(snap.frames[0].cumulative, Some(20));
    }

    #[test]
    fn test_rejected_roll_keeps_state() {
        let mut session = Session::new(RollLog::disabled());
        session.apply(GameAction::Pins(6)).unwrap();
        let before = session.game().clone();

        assert_eq!(
            session.apply(GameAction::Pins(5)),
            Err(BowlingError::InvalidRoll {
                pinfall: 5,
                standing: 4
            })
        );
        assert_eq!(session.game(), &before);
        assert_eq!(session.snapshot(), &before.snapshot());
    }

    #[test]
    fn test_restart_clears_game() {
        let mut session = Session::new(RollLog::disabled());
        session.apply(GameAction::Strike).unwrap();
        session.apply(GameAction::Restart).unwrap();
        assert_eq!(session.game().roll_count(), 0);
        assert_eq!(session.snapshot(), &Game::new().snapshot());
    }

    #[test]
    fn test_game_over_rejects_further_rolls() {
        let mut session = Session::new(RollLog::disabled());
        for _ in 0..12 {
            session.apply(GameAction::Strike).unwrap();
        }
        assert!(session.snapshot().game_over);
        assert_eq!(session.snapshot().total, 300);
        assert_eq!(session.apply(GameAction::Gutter), Err(BowlingError::GameOver));
    }
}
