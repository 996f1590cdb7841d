//! Core scoring logic - pure, deterministic, and testable
//!
//! This crate contains the ten-pin bowling rules and nothing else. It has
//! **zero dependencies** on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: the score is a pure function of the roll sequence
//! - **Testable**: every rule and edge case is unit-tested
//! - **Portable**: usable from a terminal UI, a test harness, or headless
//!
//! # Module Structure
//!
//! - [`game`]: [`BowlingGame`] roll recording with fail-fast validation
//! - [`scoring`]: pure scoring walk (strike/spare/open, bonus look-ahead)
//! - [`snapshot`]: plain-data scoreboard state for observers
//! - [`error`]: the [`BowlingError`] taxonomy
//!
//! # Game Rules
//!
//! A game is ten frames. A frame is two rolls, except that a **strike**
//! (all ten pins on the first roll) ends it after one. A strike scores
//! `10 +` the next two rolls; a **spare** (ten pins across both rolls)
//! scores `10 +` the next roll. The tenth frame grants one bonus roll for
//! a spare and two for a strike; those rolls belong to the tenth frame and
//! are never scored as an eleventh.
//!
//! # Example
//!
//! ```
//! use tui_bowling_core::BowlingGame;
//!
//! let mut game = BowlingGame::new();
//! game.record_roll(10)?; // strike
//! for _ in 0..18 {
//!     game.record_roll(0)?;
//! }
//! assert_eq!(game.score()?, 10);
//! # Ok::<(), tui_bowling_core::BowlingError>(())
//! ```

pub mod error;
pub mod game;
pub mod scoring;
pub mod snapshot;

pub use tui_bowling_types as types;

// Re-export commonly used items for convenience
pub use error::BowlingError;
pub use game::BowlingGame;
pub use scoring::{frame_kind, frame_totals, score_rolls};
pub use snapshot::{FrameSnapshot, GameSnapshot};
