//! Calculator screen state and rendering
//!
//! Everything the interactive keypad needs except the terminal itself, so it
//! can be driven and drawn against a test backend.

use std::path::PathBuf;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};
use tracing::{debug, info, warn};

use super::keymap::{action_for, Action, FOOTER_HINT};
use super::ui::calculator_layout;
use super::widgets::{key_at, DisplayPanel, Keypad};
use crate::calculator::{Calculator, Key};
use crate::config::Config;
use crate::theme::{Theme, ThemeMode};

/// Interactive calculator screen.
#[derive(Debug, Clone)]
pub struct CalculatorScreen {
    calculator: Calculator,
    theme: Theme,
    config: Config,
    /// Where theme changes are persisted; `None` keeps them in memory
    config_path: Option<PathBuf>,
    /// Last save failure, shown in place of the footer tip
    status_message: Option<String>,
    /// Keypad area from the last draw, for mouse hit testing
    keypad_area: Rect,
    should_quit: bool,
}

impl CalculatorScreen {
    pub fn new(config: Config, mode: ThemeMode, config_path: Option<PathBuf>) -> Self {
        Self {
            calculator: Calculator::new(),
            theme: Theme::for_mode(mode),
            config,
            config_path,
            status_message: None,
            keypad_area: Rect::default(),
            should_quit: false,
        }
    }

    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    pub fn mode(&self) -> ThemeMode {
        self.theme.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match action_for(key) {
            Some(Action::Press(k)) => self.press(k),
            Some(Action::ToggleTheme) => self.toggle_theme(),
            Some(Action::Quit) => self.should_quit = true,
            None => {}
        }
    }

    /// Handle a mouse event; a left click on a key presses it.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if let Some(key) = key_at(self.keypad_area, mouse.column, mouse.row) {
            self.press(key);
        }
    }

    pub fn press(&mut self, key: Key) {
        self.calculator.press(key);
        debug!(
            key = key.label(),
            display = self.calculator.display(),
            "key pressed"
        );
    }

    /// Switch light/dark and persist the choice.
    ///
    /// A failed save keeps the new mode for this session and reports the
    /// failure in the footer.
    pub fn toggle_theme(&mut self) {
        let mode = self.theme.mode.toggle();
        self.theme = Theme::for_mode(mode);
        self.config.set_theme_mode(mode);
        info!(%mode, "theme changed");

        let Some(path) = &self.config_path else {
            return;
        };
        match self.config.save_to(path) {
            Ok(()) => self.status_message = None,
            Err(e) => {
                warn!(error = %e, "failed to persist theme preference");
                self.status_message = Some(format!("Could not save theme: {}", e));
            }
        }
    }

    /// Draw the whole screen.
    pub fn draw(&mut self, frame: &mut Frame) {
        let theme = &self.theme;
        let area = frame.area();
        frame.render_widget(Block::default().style(theme.screen_style()), area);

        let layout = calculator_layout(area);
        self.keypad_area = layout.keypad;

        frame.render_widget(
            Paragraph::new(Line::styled("Calculator", theme.accent_bold_style())),
            layout.title,
        );
        let indicator = match theme.mode {
            ThemeMode::Light => "☾ light",
            ThemeMode::Dark => "☀ dark",
        };
        frame.render_widget(
            Paragraph::new(indicator)
                .style(theme.text_secondary_style())
                .alignment(Alignment::Right),
            layout.title,
        );

        let display = &self.config.display;
        let hint = if display.show_hint {
            self.calculator.pending_hint()
        } else {
            None
        };
        frame.render_widget(
            DisplayPanel::new(
                theme,
                self.calculator
                    .formatted_display(display.grouping_separator),
            )
            .hint(hint),
            layout.display,
        );

        frame.render_widget(Keypad::new(theme), layout.keypad);

        let footer = match &self.status_message {
            Some(message) => Paragraph::new(message.as_str()).style(theme.error_style()),
            None => Paragraph::new(FOOTER_HINT).style(theme.text_secondary_style()),
        };
        frame.render_widget(footer.alignment(Alignment::Center), layout.footer);
    }
}
