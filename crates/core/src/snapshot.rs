//! Plain-data observer types consumed by renderers and tests.

use tui_bowling_types::{FrameKind, FRAME_COUNT};

/// One frame as it appears on a scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameSnapshot {
    /// Recorded rolls; the third slot is only used by the tenth frame.
    pub rolls: [Option<u8>; 3],
    /// `None` while the frame is still being bowled.
    pub kind: Option<FrameKind>,
    /// Cumulative total through this frame, once its look-ahead resolves.
    pub total: Option<u16>,
}

impl FrameSnapshot {
    /// Number of rolls recorded in this frame so far.
    pub fn roll_count(&self) -> usize {
        self.rolls.iter().filter(|r| r.is_some()).count()
    }
}

/// Full scoreboard state of one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub frames: [FrameSnapshot; FRAME_COUNT],
    /// Frame currently being bowled; `None` once the game is complete.
    pub current_frame: Option<usize>,
    pub complete: bool,
    /// Final score, present only for a complete game.
    pub total: Option<u16>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            frames: [FrameSnapshot::default(); FRAME_COUNT],
            current_frame: Some(0),
            complete: false,
            total: None,
        }
    }
}

impl GameSnapshot {
    pub fn in_progress(&self) -> bool {
        !self.complete
    }
}
