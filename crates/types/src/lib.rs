//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Pins standing at the start of every frame (and after a tenth-frame reset)
pub const PIN_COUNT: u8 = 10;

/// Frames per game
pub const FRAME_COUNT: usize = 10;

/// Index of the final frame
pub const LAST_FRAME: usize = FRAME_COUNT - 1;

/// Rolls per frame outside the tenth
pub const ROLLS_PER_FRAME: usize = 2;

/// Upper bound on rolls in one game: nine two-roll frames plus up to three
/// rolls in the tenth
pub const MAX_ROLLS: usize = 21;

/// Perfect game: twelve consecutive strikes
pub const MAX_SCORE: u16 = 300;

/// Resolved classification of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    Open,
    Spare,
    Strike,
}

/// Game actions produced by input mapping
///
/// `Roll` carries a raw pin count; validation happens in the scorer, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Roll(u8),
    Restart,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roll_budget_covers_the_longest_game() {
        // Nine full two-roll frames plus a three-roll tenth.
        assert_eq!(MAX_ROLLS, LAST_FRAME * ROLLS_PER_FRAME + 3);
    }
}
