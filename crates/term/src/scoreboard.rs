//! ScoreboardView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Marks follow standard scoreboard notation: `X` strike, `/` spare,
//! `-` gutter, digits otherwise. The tenth frame shows up to three marks.

use tui_bowling_core::snapshot::{FrameSnapshot, GameSnapshot};
use tui_bowling_types::{FRAME_COUNT, LAST_FRAME, PIN_COUNT};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Inner width of a frame cell (two marks for frames 1-9, three for the tenth).
const CELL_W: usize = 5;
const TENTH_CELL_W: usize = 7;

/// Scoreboard width in terminal columns: ten cells plus eleven borders.
const BOARD_W: usize = (FRAME_COUNT - 1) * (CELL_W + 1) + TENTH_CELL_W + 2;

/// Rows used by the full scoreboard (title through help line).
const BOARD_H: usize = 10;

/// A lightweight terminal scoreboard for one bowling game.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreboardView;

impl ScoreboardView {
    /// Render the snapshot into an existing framebuffer.
    ///
    /// `message` replaces the progress line; the driver uses it to surface
    /// rejected rolls.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let start_x = viewport.width.saturating_sub(BOARD_W as u16) / 2;
        let start_y = viewport.height.saturating_sub(BOARD_H as u16) / 2;

        let base = CellStyle::default();
        let border = CellStyle {
            fg: Rgb::new(150, 150, 160),
            ..base
        };
        let title = base.bold();
        let help = base.dim();
        let alert = CellStyle {
            fg: Rgb::new(230, 110, 110),
            ..base
        };

        let title_text = "TUI BOWLING";
        let title_x = start_x + (BOARD_W as u16).saturating_sub(title_text.len() as u16) / 2;
        fb.put_str(title_x, start_y, title_text, title);

        fb.put_str(start_x, start_y + 2, &border_line('┌', '┬', '┐'), border);
        fb.put_str(start_x, start_y + 3, &header_line(), border);
        fb.put_str(start_x, start_y + 4, &border_line('├', '┼', '┤'), border);
        fb.put_str(start_x, start_y + 5, &marks_line(&snap.frames), base);
        fb.put_str(start_x, start_y + 6, &totals_line(&snap.frames), base);
        fb.put_str(start_x, start_y + 7, &border_line('└', '┴', '┘'), border);

        // Re-draw the active frame's marks in bold so the bowler can see
        // where the next roll lands.
        if let Some(frame) = snap.current_frame {
            let x = start_x + 1 + (frame * (CELL_W + 1)) as u16;
            fb.put_str(x, start_y + 5, &marks_cell(&snap.frames[frame], frame), base.bold());
        }

        let status = match (message, snap.current_frame) {
            (Some(text), _) => (text.to_string(), alert),
            (None, Some(frame)) => {
                let roll = snap.frames[frame].roll_count() + 1;
                (format!("Frame {} · roll {}", frame + 1, roll), base)
            }
            (None, None) => ("Game complete · r starts a new game".to_string(), base),
        };
        fb.put_str(start_x, start_y + 8, &status.0, status.1);

        if let Some(total) = snap.total {
            let text = format!("Total: {total}");
            let x = start_x + (BOARD_W as u16).saturating_sub(text.len() as u16);
            fb.put_str(x, start_y + 8, &text, title);
        }

        fb.put_str(
            start_x,
            start_y + 9,
            "0-9 pins · x strike · - gutter · r new game · q quit",
            help,
        );
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        message: Option<&str>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, message, viewport, &mut fb);
        fb
    }
}

fn cell_width(frame: usize) -> usize {
    if frame == LAST_FRAME {
        TENTH_CELL_W
    } else {
        CELL_W
    }
}

fn border_line(left: char, mid: char, right: char) -> String {
    let mut line = String::new();
    line.push(left);
    for frame in 0..FRAME_COUNT {
        for _ in 0..cell_width(frame) {
            line.push('─');
        }
        line.push(if frame == LAST_FRAME { right } else { mid });
    }
    line
}

fn header_line() -> String {
    let mut line = String::from("│");
    for frame in 0..FRAME_COUNT {
        line.push_str(&format!("{:^1$}", frame + 1, cell_width(frame)));
        line.push('│');
    }
    line
}

fn marks_line(frames: &[FrameSnapshot; FRAME_COUNT]) -> String {
    let mut line = String::from("│");
    for (index, frame) in frames.iter().enumerate() {
        line.push_str(&marks_cell(frame, index));
        line.push('│');
    }
    line
}

fn totals_line(frames: &[FrameSnapshot; FRAME_COUNT]) -> String {
    let mut line = String::from("│");
    for (index, frame) in frames.iter().enumerate() {
        match frame.total {
            Some(total) => line.push_str(&format!("{:^1$}", total, cell_width(index))),
            None => line.push_str(&" ".repeat(cell_width(index))),
        }
        line.push('│');
    }
    line
}

fn marks_cell(frame: &FrameSnapshot, index: usize) -> String {
    let marks = frame_marks(frame);
    if index == LAST_FRAME {
        format!(" {} {} {} ", marks[0], marks[1], marks[2])
    } else {
        format!(" {} {} ", marks[0], marks[1])
    }
}

/// Scoreboard marks for one frame's rolls.
///
/// The subtlety is which rolls share a set of pins: a spare mark only makes
/// sense for the second roll on the same pins, and in the tenth frame the
/// pins reset after a strike or spare.
fn frame_marks(frame: &FrameSnapshot) -> [char; 3] {
    let rolls = frame.rolls;
    let mut marks = [' '; 3];

    let Some(first) = rolls[0] else {
        return marks;
    };
    marks[0] = pin_mark(first);

    let Some(second) = rolls[1] else {
        return marks;
    };
    marks[1] = if first == PIN_COUNT {
        pin_mark(second)
    } else if first + second == PIN_COUNT {
        '/'
    } else {
        pin_mark(second)
    };

    let Some(third) = rolls[2] else {
        return marks;
    };
    let fresh_pins = second == PIN_COUNT || (first != PIN_COUNT && first + second == PIN_COUNT);
    marks[2] = if fresh_pins {
        pin_mark(third)
    } else if second + third == PIN_COUNT {
        '/'
    } else {
        pin_mark(third)
    };

    marks
}

fn pin_mark(pins: u8) -> char {
    match pins {
        0 => '-',
        10 => 'X',
        n => (b'0' + n) as char,
    }
}
