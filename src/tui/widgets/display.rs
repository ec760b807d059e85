//! Display panel widget
//!
//! Two lines inside a rounded panel: the pending-expression hint and the
//! formatted display value, right-aligned.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Display panel.
#[derive(Debug, Clone)]
pub struct DisplayPanel<'a> {
    theme: &'a Theme,
    hint: Option<String>,
    value: String,
}

impl<'a> DisplayPanel<'a> {
    pub fn new(theme: &'a Theme, value: impl Into<String>) -> Self {
        Self {
            theme,
            hint: None,
            value: value.into(),
        }
    }

    /// Set the hint line (e.g. `"12 ×"`).
    pub fn hint(mut self, hint: Option<String>) -> Self {
        self.hint = hint;
        self
    }
}

/// Keep the rightmost columns of `text` that fit in `width`, marking the cut
/// with a leading ellipsis.
pub fn fit_left(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let budget = width - 1;
    let mut used = 0;
    let mut kept: Vec<char> = Vec::new();
    for ch in text.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        kept.push(ch);
    }
    kept.push('…');
    kept.into_iter().rev().collect()
}

impl Widget for DisplayPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.text_secondary_style())
            .style(self.theme.panel_style());
        let inner = block.inner(area);
        block.render(area, buf);

        let width = inner.width as usize;
        let hint = self.hint.as_deref().unwrap_or("");
        let lines = vec![
            Line::styled(fit_left(hint, width), self.theme.text_secondary_style())
                .alignment(Alignment::Left),
            Line::styled(fit_left(&self.value, width), self.theme.display_style())
                .alignment(Alignment::Right),
        ];
        Paragraph::new(lines).render(inner, buf);
    }
}
