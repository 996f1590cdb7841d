//! Scoring module - official ten-pin bowling rules
//!
//! Pure functions over a slice of recorded pin counts. The walk visits
//! exactly ten frames, tracking a cursor into the roll sequence:
//!
//! - **Strike**: `10 + next two rolls`, cursor advances by 1.
//! - **Spare**: `10 + next roll`, cursor advances by 2.
//! - **Open frame**: both rolls, cursor advances by 2.
//!
//! Bonus rolls in the tenth frame are consumed only as look-ahead for the
//! ninth and tenth frames, never scored as an eleventh frame.
//!
//! The slice is validated as it is walked (roll range, frame pin sums
//! including the tenth-frame pin-reset rules), so these functions are safe
//! to call with an arbitrary buffer, not only one built through
//! [`BowlingGame`].
//!
//! [`BowlingGame`]: crate::game::BowlingGame

use tui_bowling_types::{FrameKind, FRAME_COUNT, LAST_FRAME, PIN_COUNT, ROLLS_PER_FRAME};

use crate::error::BowlingError;

/// Fetch and range-check one roll, attributing a missing roll to `frame`.
fn roll(rolls: &[u8], index: usize, frame: usize) -> Result<u16, BowlingError> {
    let pins = *rolls
        .get(index)
        .ok_or(BowlingError::IncompleteGame { frame })?;
    if pins > PIN_COUNT {
        return Err(BowlingError::InvalidRoll { pins });
    }
    Ok(pins as u16)
}

/// Score one frame starting at `cursor`.
///
/// Returns the frame's point value (bonuses included) and how many rolls
/// the frame itself consumed.
fn frame_value(rolls: &[u8], cursor: usize, frame: usize) -> Result<(u16, usize), BowlingError> {
    let first = roll(rolls, cursor, frame)?;

    // Strike: the frame owns one roll, the bonus looks ahead two.
    if first == PIN_COUNT as u16 {
        let second = roll(rolls, cursor + 1, frame)?;
        let third = roll(rolls, cursor + 2, frame)?;
        // In the tenth frame the look-ahead rolls are the frame's own bonus
        // rolls, so the pin-reset rules apply: a non-strike second roll
        // shares its pin set with the third. Elsewhere the look-ahead rolls
        // belong to later frames and are validated when those are walked.
        if frame == LAST_FRAME
            && second != PIN_COUNT as u16
            && second + third > PIN_COUNT as u16
        {
            return Err(BowlingError::FrameOverflow {
                frame,
                first: second as u8,
                second: third as u8,
            });
        }
        return Ok((PIN_COUNT as u16 + second + third, 1));
    }

    let second = roll(rolls, cursor + 1, frame)?;
    if first + second > PIN_COUNT as u16 {
        return Err(BowlingError::FrameOverflow {
            frame,
            first: first as u8,
            second: second as u8,
        });
    }

    if first + second == PIN_COUNT as u16 {
        // Spare: the bonus is the single following roll, on fresh pins.
        let bonus = roll(rolls, cursor + 2, frame)?;
        return Ok((PIN_COUNT as u16 + bonus, ROLLS_PER_FRAME));
    }

    Ok((first + second, ROLLS_PER_FRAME))
}

/// Compute the total score of a complete game.
///
/// Pure and idempotent: the result depends only on `rolls`. Errors with
/// [`BowlingError::IncompleteGame`] when any frame's rolls or look-ahead
/// are missing, so it never reads past the end of the buffer.
pub fn score_rolls(rolls: &[u8]) -> Result<u16, BowlingError> {
    let mut total = 0u16;
    let mut cursor = 0usize;

    for frame in 0..FRAME_COUNT {
        let (value, consumed) = frame_value(rolls, cursor, frame)?;
        total += value;
        cursor += consumed;
    }

    Ok(total)
}

/// Running cumulative totals per frame, for scoreboard display.
///
/// A frame whose look-ahead is not yet available reads `None`, as do all
/// frames after it (a scoreboard is filled in left to right). Invalid roll
/// values still error: only missing rolls are tolerated.
pub fn frame_totals(rolls: &[u8]) -> Result<[Option<u16>; FRAME_COUNT], BowlingError> {
    let mut totals = [None; FRAME_COUNT];
    let mut running = 0u16;
    let mut cursor = 0usize;

    for (frame, slot) in totals.iter_mut().enumerate() {
        match frame_value(rolls, cursor, frame) {
            Ok((value, consumed)) => {
                running += value;
                *slot = Some(running);
                cursor += consumed;
            }
            Err(BowlingError::IncompleteGame { .. }) => break,
            Err(err) => return Err(err),
        }
    }

    Ok(totals)
}

/// Classify a frame from its first roll and (if thrown) second roll.
///
/// Returns `None` while the frame is still in progress.
pub fn frame_kind(first: u8, second: Option<u8>) -> Option<FrameKind> {
    if first == PIN_COUNT {
        return Some(FrameKind::Strike);
    }
    match second {
        Some(second) if first + second == PIN_COUNT => Some(FrameKind::Spare),
        Some(_) => Some(FrameKind::Open),
        None => None,
    }
}
