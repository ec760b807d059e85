//! Screen layout for the calculator
//!
//! The calculator is a fixed-size card centered in the terminal; it shrinks
//! with the terminal but never grows past its natural size.

use ratatui::layout::{Constraint, Layout, Rect};

/// Natural card width: four 9-column keys, three gaps, two border columns.
pub const CARD_WIDTH: u16 = 4 * 9 + 3 + 2;
/// Natural card height: title, display panel, keypad, footer.
pub const CARD_HEIGHT: u16 = 1 + 1 + DISPLAY_HEIGHT + 1 + KEYPAD_HEIGHT + 1;

const DISPLAY_HEIGHT: u16 = 4;
/// Five 3-row keys inside a border.
const KEYPAD_HEIGHT: u16 = 5 * 3 + 2;

/// Areas of one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalculatorLayout {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub footer: Rect,
}

/// Center a `width` x `height` box in `area`, clamped to the area.
pub fn centered_box(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Split the terminal area into the calculator's regions.
pub fn calculator_layout(area: Rect) -> CalculatorLayout {
    let card = centered_box(CARD_WIDTH, CARD_HEIGHT, area);
    let [title, _, display, _, keypad, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(DISPLAY_HEIGHT),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(card);

    CalculatorLayout {
        title,
        display,
        keypad,
        footer,
    }
}
