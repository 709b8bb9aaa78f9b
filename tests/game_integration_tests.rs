//! Integration tests for bowling a full game through the facade crate

use tui_bowling::core::{scoring, FinalFrame, Frame, FrameView, Game};
use tui_bowling::types::{BowlingError, FrameOutcome, Pinfall, PERFECT_SCORE};

fn bowl_all(rolls: &[u8]) -> Game {
    let mut game = Game::new();
    for &pins in rolls {
        game.bowl(pins).unwrap();
    }
    game
}

#[test]
fn test_all_open_game_sums_every_roll() {
    let rolls: Vec<u8> = (0..10).flat_map(|i| [i % 5, 4]).collect();
    let game = bowl_all(&rolls);
    let expected: u16 = rolls.iter().map(|&p| p as u16).sum();

    assert!(game.is_game_over());
    assert_eq!(game.score().total(), Some(expected));
}

#[test]
fn test_gutter_game() {
    let game = bowl_all(&[0; 20]);
    assert!(game.is_game_over());
    assert_eq!(game.score().total(), Some(0));
    assert!(game.frames().iter().all(|f| f.outcome() == FrameOutcome::Open));
}

#[test]
fn test_perfect_game() {
    let game = bowl_all(&[10; 12]);
    assert!(game.is_game_over());
    assert_eq!(game.roll_count(), 12);
    assert_eq!(game.score().total(), Some(PERFECT_SCORE));
}

#[test]
fn test_all_spares_with_nine_bonus() {
    let mut rolls = [9, 1].repeat(10);
    rolls.push(9);
    let game = bowl_all(&rolls);

    let card = game.score();
    assert!(card.frames.iter().all(|s| *s == Some(19)));
    assert_eq!(card.total(), Some(190));
}

#[test]
fn test_spare_bonus_is_next_roll() {
    let game = bowl_all(&[3, 4, 6, 4, 7, 1]);
    let card = game.score();
    assert_eq!(card.frames[1], Some(17));
    assert_eq!(card.cumulative[2], Some(7 + 17 + 8));
}

#[test]
fn test_double_strike_bonus() {
    let game = bowl_all(&[10, 10, 4, 2]);
    let card = game.score();
    assert_eq!(card.frames[0], Some(24));
    assert_eq!(card.frames[1], Some(16));
    assert_eq!(card.frames[2], Some(6));
    assert_eq!(card.total(), None);
    assert_eq!(card.resolved_total(), 46);
}

#[test]
fn test_too_many_pins_in_regular_frame() {
    let mut game = bowl_all(&[6]);
    let before = game.clone();
    assert_eq!(
        game.bowl(5),
        Err(BowlingError::InvalidRoll {
            pinfall: 5,
            standing: 4
        })
    );
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_pinfall() {
    let mut game = Game::new();
    assert_eq!(game.bowl(11), Err(BowlingError::InvalidPinfall(11)));
    assert_eq!(game.roll_count(), 0);
}

#[test]
fn test_final_frame_completion_rules() {
    let cases: [(&[u8], u16); 4] = [
        (&[10, 10, 10], 30),
        (&[5, 5, 5], 15),
        (&[4, 4], 8),
        (&[5, 5, 10], 20),
    ];
    for (rolls, total) in cases {
        let mut frame = FinalFrame::new();
        for &pins in rolls {
            frame.record(pins).unwrap();
        }
        assert!(frame.is_complete(), "rolls {:?}", rolls);
        assert_eq!(frame.pin_total(), total, "rolls {:?}", rolls);
        assert_eq!(frame.record(0), Err(BowlingError::FrameComplete(10)));
    }

    let mut frame = FinalFrame::new();
    frame.record(4).unwrap();
    assert_eq!(
        frame.record(7),
        Err(BowlingError::InvalidRoll {
            pinfall: 7,
            standing: 6
        })
    );
    assert_eq!(frame.rolls(), &[Pinfall::new(4).unwrap()]);
}

#[test]
fn test_tenth_frame_spare_then_strike() {
    let mut rolls = vec![0; 18];
    rolls.extend([5, 5, 10]);
    let game = bowl_all(&rolls);

    assert!(game.is_game_over());
    assert_eq!(game.score().frames[9], Some(20));
    assert_eq!(game.score().total(), Some(20));
}

#[test]
fn test_bowl_after_game_over_changes_nothing() {
    let mut game = bowl_all(&[10; 12]);
    let before = game.clone();

    assert_eq!(game.bowl(0), Err(BowlingError::GameOver));
    assert_eq!(game.bowl(11), Err(BowlingError::GameOver));
    assert_eq!(game, before);
}

#[test]
fn test_scoring_is_idempotent() {
    let game = bowl_all(&[10, 9, 1, 5, 3, 10]);
    assert_eq!(game.score(), game.score());
    assert_eq!(scoring::score(game.frames()), game.score());
}

#[test]
fn test_pending_frame_blocks_running_totals() {
    let game = bowl_all(&[3, 3, 7, 3, 2, 2]);
    let card = game.score();

    // The spare in frame 2 resolved once frame 3 started.
    assert_eq!(card.cumulative[1], Some(18));

    let game = bowl_all(&[3, 3, 10, 2]);
    let card = game.score();
    assert_eq!(card.cumulative[0], Some(6));
    assert!(card.cumulative[1..].iter().all(|c| c.is_none()));
    assert_eq!(card.pending_frames(), 9);
}

#[test]
fn test_regular_frame_queries() {
    let mut frame = Frame::new(3);
    assert_eq!(frame.first_roll(), Err(BowlingError::NoRollsRecorded(3)));
    assert_eq!(frame.outcome(), FrameOutcome::InProgress);

    frame.record(10).unwrap();
    assert!(frame.is_strike());
    assert!(frame.is_complete());
    assert_eq!(frame.first_roll(), Ok(Pinfall::STRIKE));
    assert_eq!(frame.record(0), Err(BowlingError::FrameComplete(3)));
}

#[test]
fn test_frames_advance_in_order() {
    let mut game = Game::new();
    assert_eq!(game.current_frame_number(), 1);
    game.bowl(10).unwrap();
    assert_eq!(game.current_frame_number(), 2);
    game.bowl(3).unwrap();
    assert_eq!(game.current_frame_number(), 2);
    assert_eq!(game.pins_standing(), 7);
    game.bowl(7).unwrap();
    assert_eq!(game.current_frame_number(), 3);
    assert_eq!(game.pins_standing(), 10);
}
