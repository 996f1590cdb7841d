//! Game state module - records rolls and tracks frame progression
//!
//! [`BowlingGame`] owns the roll buffer and enough incremental state to
//! validate each roll as it arrives (fail fast): per-roll range, frame-sum
//! overflow including the tenth-frame pin-reset rules, and rolls after the
//! game has ended. Scoring itself stays in [`crate::scoring`] as a pure
//! function over the buffer.

use arrayvec::ArrayVec;

use tui_bowling_types::{FRAME_COUNT, LAST_FRAME, MAX_ROLLS, PIN_COUNT};

use crate::error::BowlingError;
use crate::scoring::{frame_kind, frame_totals, score_rolls};
use crate::snapshot::{FrameSnapshot, GameSnapshot};

/// One game of ten-pin bowling: roll recording plus frame tracking.
#[derive(Debug, Clone, Default)]
pub struct BowlingGame {
    /// Every roll of the game in chronological order.
    rolls: ArrayVec<u8, MAX_ROLLS>,
    /// Index of the frame currently being bowled (0-based, caps at 9).
    frame: usize,
    /// First roll of the current non-final frame, awaiting its second.
    first: Option<u8>,
    /// Rolls of the tenth frame.
    tenth: ArrayVec<u8, 3>,
    complete: bool,
}

impl BowlingGame {
    /// Create an empty game (no rolls recorded).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one roll.
    ///
    /// Validation is fail-fast: an out-of-range pin count, a frame sum past
    /// the standing pins, or a roll after the game is complete is rejected
    /// here and the buffer is left untouched.
    pub fn record_roll(&mut self, pins: u8) -> Result<(), BowlingError> {
        if pins > PIN_COUNT {
            return Err(BowlingError::InvalidRoll { pins });
        }
        if self.complete {
            return Err(BowlingError::GameComplete);
        }

        if self.frame < LAST_FRAME {
            match self.first {
                None if pins == PIN_COUNT => self.frame += 1,
                None => self.first = Some(pins),
                Some(first) => {
                    if first + pins > PIN_COUNT {
                        return Err(BowlingError::FrameOverflow {
                            frame: self.frame,
                            first,
                            second: pins,
                        });
                    }
                    self.first = None;
                    self.frame += 1;
                }
            }
            self.rolls.push(pins);
            return Ok(());
        }

        // Tenth frame. Pins reset after a strike, and after a spare for the
        // bonus roll, so only rolls sharing a pin set are summed.
        match self.tenth.as_slice() {
            [first] if *first != PIN_COUNT && *first + pins > PIN_COUNT => {
                return Err(BowlingError::FrameOverflow {
                    frame: LAST_FRAME,
                    first: *first,
                    second: pins,
                });
            }
            [first, second]
                if *first == PIN_COUNT
                    && *second != PIN_COUNT
                    && *second + pins > PIN_COUNT =>
            {
                return Err(BowlingError::FrameOverflow {
                    frame: LAST_FRAME,
                    first: *second,
                    second: pins,
                });
            }
            _ => {}
        }

        self.tenth.push(pins);
        self.rolls.push(pins);
        self.complete = match self.tenth.as_slice() {
            // Two rolls close the frame unless they earned a bonus roll.
            [first, second] => *first != PIN_COUNT && *first + *second < PIN_COUNT,
            [_, _, _] => true,
            _ => false,
        };
        Ok(())
    }

    /// Compute the total game score.
    ///
    /// Idempotent; errors with [`BowlingError::IncompleteGame`] until every
    /// frame's rolls and look-ahead have been recorded.
    pub fn score(&self) -> Result<u16, BowlingError> {
        score_rolls(&self.rolls)
    }

    /// All recorded rolls in chronological order.
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Whether the tenth frame (bonus rolls included) has been resolved.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Index of the frame currently being bowled (stays at 9 once complete).
    pub fn current_frame(&self) -> usize {
        self.frame
    }

    /// Build a scoreboard snapshot of the game as recorded so far.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut frames = [FrameSnapshot::default(); FRAME_COUNT];
        let mut cursor = 0usize;

        for (index, frame) in frames.iter_mut().enumerate().take(LAST_FRAME) {
            let Some(&first) = self.rolls.get(cursor) else {
                break;
            };
            frame.rolls[0] = Some(first);
            if first == PIN_COUNT {
                frame.kind = frame_kind(first, None);
                cursor += 1;
                continue;
            }
            let Some(&second) = self.rolls.get(cursor + 1) else {
                // Frame in progress; nothing after it can exist yet.
                debug_assert_eq!(index, self.frame);
                break;
            };
            frame.rolls[1] = Some(second);
            frame.kind = frame_kind(first, Some(second));
            cursor += 2;
        }

        let tenth = &mut frames[LAST_FRAME];
        for (slot, &pins) in tenth.rolls.iter_mut().zip(self.tenth.iter()) {
            *slot = Some(pins);
        }
        if let [first, rest @ ..] = self.tenth.as_slice() {
            tenth.kind = frame_kind(*first, rest.first().copied());
        }

        if let Ok(totals) = frame_totals(&self.rolls) {
            for (frame, total) in frames.iter_mut().zip(totals) {
                frame.total = total;
            }
        }

        GameSnapshot {
            frames,
            current_frame: (!self.complete).then_some(self.frame),
            complete: self.complete,
            total: self.score().ok(),
        }
    }
}
