//! Interactive calculator application
//!
//! Connects a [`CalculatorScreen`] to a real terminal and runs the event
//! loop until the user quits.

use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use super::app::App;
use super::event::Event;
use super::screen::CalculatorScreen;

/// Tick rate for the event thread; nothing animates, so ticks only keep the
/// loop responsive to resizes.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Calculator TUI bound to the terminal.
pub struct CalculatorApp {
    app: App,
    screen: CalculatorScreen,
}

impl CalculatorApp {
    /// Enter TUI mode.
    pub fn new(screen: CalculatorScreen) -> Result<Self> {
        Ok(Self {
            app: App::new(TICK_RATE)?,
            screen,
        })
    }

    /// Run until quit, returning the final screen state.
    pub fn run(mut self) -> Result<CalculatorScreen> {
        loop {
            let screen = &mut self.screen;
            self.app.draw(|frame| screen.draw(frame))?;

            match self.app.next_event()? {
                Event::Key(key) => self.screen.handle_key(key),
                Event::Mouse(mouse) => self.screen.handle_mouse(mouse),
                Event::Resize(width, height) => debug!(width, height, "terminal resized"),
                Event::Tick => {}
                Event::Quit => break,
            }

            if self.screen.should_quit() {
                break;
            }
        }

        Ok(self.screen)
    }
}
