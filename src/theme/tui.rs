//! Ratatui Style helpers for Theme
//!
//! All methods that return `ratatui::style::Style` live here,
//! isolating the ratatui styling to a single file within the theme module.

use ratatui::style::{Modifier, Style};

use super::Theme;
use crate::calculator::Key;

impl Theme {
    /// Whole-screen background.
    pub fn screen_style(&self) -> Style {
        Style::default().bg(self.background).fg(self.text_primary)
    }

    /// Panel background with primary text.
    pub fn panel_style(&self) -> Style {
        Style::default().bg(self.panel).fg(self.text_primary)
    }

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for bold accented text (titles, keybindings).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Large display digits.
    pub fn display_style(&self) -> Style {
        self.text_style().add_modifier(Modifier::BOLD)
    }

    /// Style for error text.
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Fill and label style for a keypad key.
    ///
    /// Operators are filled with the accent colour, function keys are drawn
    /// on the panel with an accent border, digits get the key fill.
    pub fn key_style(&self, key: Key) -> Style {
        let base = if key.is_operator() {
            Style::default().bg(self.accent).fg(self.on_accent)
        } else if key.is_function() {
            Style::default().bg(self.panel).fg(self.accent)
        } else {
            Style::default().bg(self.key).fg(self.text_primary)
        };
        base.add_modifier(Modifier::BOLD)
    }

    /// Border style for outlined (function) keys.
    pub fn key_border_style(&self) -> Style {
        Style::default().fg(self.accent).bg(self.panel)
    }
}
