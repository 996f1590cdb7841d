//! Key mapping from terminal events to game actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_bowling_types::GameAction;

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Pin counts
        KeyCode::Char(c @ '0'..='9') => Some(GameAction::Roll(c.to_digit(10)? as u8)),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(GameAction::Roll(10)),
        KeyCode::Char('-') => Some(GameAction::Roll(0)),

        // New game
        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the scoreboard.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
