//! Terminal bowling scoreboard (default binary).
//!
//! Turn-based driver: render the scoreboard, block on the next key press,
//! feed the roll to the scorer, repeat. Rejected rolls are surfaced on the
//! status line and leave the game untouched.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bowling::core::BowlingGame;
use tui_bowling::input::{handle_key_event, should_quit};
use tui_bowling::term::{FrameBuffer, ScoreboardView, TerminalRenderer, Viewport};
use tui_bowling::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = BowlingGame::new();
    let view = ScoreboardView;
    let mut fb = FrameBuffer::new(0, 0);
    let mut message: Option<String> = None;

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(
            &game.snapshot(),
            message.as_deref(),
            Viewport::new(w, h),
            &mut fb,
        );
        term.draw(&fb)?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        match handle_key_event(key) {
            Some(GameAction::Roll(pins)) => {
                message = game.record_roll(pins).err().map(|e| e.to_string());
            }
            Some(GameAction::Restart) => {
                game = BowlingGame::new();
                message = None;
            }
            None => {}
        }
    }
}
