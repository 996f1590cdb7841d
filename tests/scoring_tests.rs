//! Scoring acceptance tests - the classic bowling-kata games

use tui_bowling::core::{BowlingError, BowlingGame};
use tui_bowling::types::MAX_SCORE;

fn game_of(rolls: &[u8]) -> BowlingGame {
    let mut game = BowlingGame::new();
    for &pins in rolls {
        game.record_roll(pins)
            .unwrap_or_else(|e| panic!("roll {pins} rejected: {e}"));
    }
    game
}

fn repeated(count: usize, pins: u8) -> Vec<u8> {
    vec![pins; count]
}

#[test]
fn test_gutter_game_scores_zero() {
    assert_eq!(game_of(&repeated(20, 0)).score(), Ok(0));
}

#[test]
fn test_all_ones_scores_twenty() {
    assert_eq!(game_of(&repeated(20, 1)).score(), Ok(20));
}

#[test]
fn test_one_spare_counts_next_roll_twice() {
    let mut rolls = vec![5, 5, 3];
    rolls.extend(repeated(17, 0));
    // 5+5+3 for the spare, then the 3 again in its own open frame.
    assert_eq!(game_of(&rolls).score(), Ok(16));
}

#[test]
fn test_one_strike_counts_next_two_rolls_twice() {
    let mut rolls = vec![10, 3, 4];
    rolls.extend(repeated(16, 0));
    assert_eq!(game_of(&rolls).score(), Ok(24));
}

#[test]
fn test_perfect_game_scores_three_hundred() {
    assert_eq!(game_of(&repeated(12, 10)).score(), Ok(MAX_SCORE));
}

#[test]
fn test_all_nines_and_misses_scores_ninety() {
    let rolls: Vec<u8> = [9, 0].repeat(10);
    assert_eq!(game_of(&rolls).score(), Ok(90));
}

#[test]
fn test_all_fives_with_bonus_scores_one_fifty() {
    assert_eq!(game_of(&repeated(21, 5)).score(), Ok(150));
}

#[test]
fn test_score_is_idempotent() {
    let game = game_of(&repeated(21, 5));
    let first = game.score();
    let second = game.score();
    assert_eq!(first, second);
    assert_eq!(first, Ok(150));
}

#[test]
fn test_complete_games_score_within_bounds() {
    let games: &[Vec<u8>] = &[
        repeated(20, 0),
        repeated(12, 10),
        repeated(21, 5),
        [9, 0].repeat(10),
        {
            let mut rolls = vec![10, 3, 4];
            rolls.extend(repeated(16, 0));
            rolls
        },
    ];
    for rolls in games {
        let score = game_of(rolls).score().unwrap();
        assert!(score <= MAX_SCORE, "score {score} out of bounds");
    }
}

#[test]
fn test_bonus_rolls_are_not_an_eleventh_frame() {
    // Ten strike frames plus two bonus strikes: the bonus rolls only feed
    // the ninth and tenth frames' look-ahead.
    let game = game_of(&repeated(12, 10));
    assert_eq!(game.rolls().len(), 12);
    assert_eq!(game.score(), Ok(300));
}

#[test]
fn test_scoring_before_the_game_ends_errors() {
    let game = game_of(&[10, 5]);
    assert!(matches!(
        game.score(),
        Err(BowlingError::IncompleteGame { .. })
    ));
}
