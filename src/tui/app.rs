//! Terminal session for the keypad
//!
//! Raw mode, the alternate screen and mouse capture are held for as long as
//! an [`App`] lives and released on drop.

use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};
use tracing::debug;

use super::event::{Event, EventHandler};

type Backend = CrosstermBackend<Stdout>;

/// Put the terminal back the way the shell expects it. Errors are ignored:
/// this runs on failure paths and in `Drop`.
fn restore_terminal(out: &mut impl io::Write) {
    let _ = disable_raw_mode();
    let _ = execute!(out, LeaveAlternateScreen, DisableMouseCapture);
}

/// A terminal in keypad mode plus its input thread.
pub struct App {
    terminal: Terminal<Backend>,
    events: EventHandler,
}

impl App {
    /// Switch the terminal into keypad mode.
    ///
    /// If any step fails, the steps already taken are undone before the
    /// error is returned.
    pub fn new(tick_rate: Duration) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, EnableMouseCapture) {
            restore_terminal(&mut stdout);
            return Err(e).context("Failed to enter the alternate screen");
        }

        let terminal = Terminal::new(CrosstermBackend::new(io::stdout())).or_else(|e| {
            restore_terminal(&mut io::stdout());
            Err(e).context("Failed to initialize the terminal")
        })?;

        debug!("terminal in keypad mode");
        Ok(Self {
            terminal,
            events: EventHandler::new(tick_rate),
        })
    }

    /// Block until the next input, resize or tick.
    pub fn next_event(&self) -> Result<Event> {
        self.events.next()
    }

    pub fn draw<F>(&mut self, render: F) -> Result<()>
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for App {
    fn drop(&mut self) {
        restore_terminal(self.terminal.backend_mut());
        let _ = self.terminal.show_cursor();
        debug!("terminal restored");
    }
}
