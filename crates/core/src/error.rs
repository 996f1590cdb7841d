//! Error taxonomy for the scorer.
//!
//! Both variants of invalid input surface immediately at the call that
//! supplied them: roll-level failures from [`BowlingGame::record_roll`]
//! and missing look-ahead from scoring. Nothing is retried or swallowed.
//!
//! [`BowlingGame::record_roll`]: crate::game::BowlingGame::record_roll

use thiserror::Error;

/// Validation failures raised by recording or scoring rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BowlingError {
    /// A single roll claimed more pins than can stand on the lane.
    #[error("invalid roll: {pins} pins (a roll knocks down 0 to 10 pins)")]
    InvalidRoll { pins: u8 },

    /// Two rolls on the same set of pins sum past 10.
    ///
    /// In the tenth frame `first`/`second` are the two rolls sharing one
    /// pin set, which may be the second and third rolls after a strike.
    #[error("frame {n}: rolls {first} + {second} exceed 10 pins", n = frame + 1)]
    FrameOverflow { frame: usize, first: u8, second: u8 },

    /// A roll arrived after the tenth frame was fully resolved.
    #[error("the game is complete; no further rolls are accepted")]
    GameComplete,

    /// Scoring was requested before the named frame's rolls (or its
    /// strike/spare look-ahead) exist.
    #[error("frame {n} cannot be scored yet; more rolls are needed", n = frame + 1)]
    IncompleteGame { frame: usize },
}
