//! Terminal input module.
//!
//! Maps `crossterm` key events into [`tui_bowling_types::GameAction`].
//! Bowling is turn-based, so there is no repeat/auto-shift handling: one
//! key press is one roll.

pub mod map;

pub use tui_bowling_types as types;

pub use map::{handle_key_event, should_quit};
