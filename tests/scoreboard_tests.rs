//! Scoreboard rendering tests - snapshot in, framebuffer out

use tui_bowling::core::BowlingGame;
use tui_bowling::term::{ScoreboardView, Viewport};

fn rows_for(rolls: &[u8], message: Option<&str>) -> Vec<String> {
    let mut game = BowlingGame::new();
    for &pins in rolls {
        game.record_roll(pins).unwrap();
    }
    let fb = ScoreboardView.render(&game.snapshot(), message, Viewport::new(80, 24));
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

#[test]
fn test_empty_game_renders_header_and_help() {
    let rows = rows_for(&[], None);
    assert!(rows.iter().any(|row| row.contains("TUI BOWLING")));
    assert!(rows.iter().any(|row| row.contains("Frame 1 · roll 1")));
    assert!(rows.iter().any(|row| row.contains("q quit")));
    // All ten frame numbers appear on the header row.
    let header = rows
        .iter()
        .find(|row| row.contains("10"))
        .expect("header row");
    for n in 1..=10 {
        assert!(header.contains(&n.to_string()), "missing frame {n}");
    }
}

#[test]
fn test_marks_use_scoreboard_notation() {
    let mut rolls = vec![10, 7, 3, 9, 0];
    rolls.extend([0; 12]);
    rolls.extend([10, 10, 10]);
    let rows = rows_for(&rolls, None);

    let marks = rows
        .iter()
        .find(|row| row.contains('/'))
        .expect("marks row");
    assert!(marks.contains('X'));
    assert!(marks.contains('-'));
    assert!(marks.contains("X X X"));
}

#[test]
fn test_complete_game_shows_total() {
    let rows = rows_for(&vec![10; 12], None);
    assert!(rows.iter().any(|row| row.contains("Total: 300")));
    assert!(rows.iter().any(|row| row.contains("Game complete")));
    // Cumulative totals run 30, 60, ... 300.
    let totals = rows
        .iter()
        .find(|row| row.contains("300"))
        .expect("totals row");
    assert!(totals.contains("30"));
    assert!(totals.contains("270"));
}

#[test]
fn test_message_replaces_progress_line() {
    let rows = rows_for(&[5], Some("frame 1: rolls 5 + 6 exceed 10 pins"));
    assert!(rows
        .iter()
        .any(|row| row.contains("exceed 10 pins")));
    assert!(!rows.iter().any(|row| row.contains("Frame 1 · roll 2")));
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let mut game = BowlingGame::new();
    game.record_roll(10).unwrap();
    let fb = ScoreboardView.render(&game.snapshot(), None, Viewport::new(10, 3));
    assert_eq!((fb.width(), fb.height()), (10, 3));
}
