//! Terminal rendering for the bowling scoreboard.
//!
//! [`ScoreboardView`] is pure (snapshot in, framebuffer out) and carries
//! all the layout logic; [`TerminalRenderer`] owns the actual terminal.

pub mod fb;
pub mod renderer;
pub mod scoreboard;

pub use tui_bowling_core as core;
pub use tui_bowling_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use scoreboard::{ScoreboardView, Viewport};
