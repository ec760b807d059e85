//! Keypad widget
//!
//! Draws the twenty calculator keys as a 4x5 grid inside a bordered panel.
//! [`keypad_cells`] is shared with mouse handling so clicks land on exactly
//! the key that was drawn.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Position, Rect},
    widgets::{Block, BorderType, Paragraph, Widget},
};

use crate::calculator::Key;
use crate::theme::Theme;

const ROWS: usize = Key::KEYPAD.len() / Key::COLUMNS;

/// The keypad panel.
#[derive(Debug, Clone)]
pub struct Keypad<'a> {
    theme: &'a Theme,
}

impl<'a> Keypad<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    fn render_key(&self, key: Key, cell: Rect, buf: &mut Buffer) {
        let style = self.theme.key_style(key);
        buf.set_style(cell, style);

        let inner = if key.is_function() && cell.height >= 3 {
            let block = Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(self.theme.key_border_style());
            let inner = block.inner(cell);
            block.render(cell, buf);
            inner
        } else {
            cell
        };

        if inner.height == 0 {
            return;
        }
        let label_row = Rect {
            y: inner.y + inner.height.saturating_sub(1) / 2,
            height: 1,
            ..inner
        };
        Paragraph::new(key.label())
            .style(style)
            .alignment(Alignment::Center)
            .render(label_row, buf);
    }
}

/// Panel block shared by the keypad and its hit testing.
fn panel_block(theme: &Theme) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(theme.text_secondary_style())
        .style(theme.panel_style())
}

/// Cell of every key in [`Key::KEYPAD`] order for a keypad drawn in `area`.
pub fn keypad_cells(area: Rect) -> Vec<Rect> {
    let inner = Block::bordered().inner(area);
    let rows = Layout::vertical([Constraint::Fill(1); ROWS]).split(inner);

    rows.iter()
        .flat_map(|row| {
            Layout::horizontal([Constraint::Fill(1); Key::COLUMNS])
                .spacing(1)
                .split(*row)
                .to_vec()
        })
        .collect()
}

/// Key drawn at terminal position (`column`, `row`), if any.
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Key> {
    let position = Position::new(column, row);
    keypad_cells(area)
        .iter()
        .position(|cell| cell.contains(position))
        .and_then(|index| Key::KEYPAD.get(index).copied())
}

impl Widget for Keypad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        panel_block(self.theme).render(area, buf);

        for (key, cell) in Key::KEYPAD.into_iter().zip(keypad_cells(area)) {
            if cell.width == 0 || cell.height == 0 {
                continue;
            }
            self.render_key(key, cell, buf);
        }
    }
}
