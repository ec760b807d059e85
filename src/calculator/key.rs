//! Keypad keys and key-sequence parsing

use super::Operator;

/// One of the twenty labeled keypad keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Digit `0`-`9`
    Digit(u8),
    /// Decimal point
    Point,
    Operator(Operator),
    Equals,
    Clear,
    /// Sign toggle (±)
    Invert,
    Percent,
    Backspace,
}

/// Errors from turning text into keys.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyParseError {
    #[error("Unrecognized key '{ch}' at position {position}")]
    UnknownKey { ch: char, position: usize },

    #[error("Unrecognized key label: {0}")]
    UnknownLabel(String),
}

impl Key {
    /// Keypad layout, row by row, four columns.
    pub const KEYPAD: [Key; 20] = [
        Key::Clear,
        Key::Invert,
        Key::Percent,
        Key::Operator(Operator::Divide),
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Multiply),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Subtract),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Add),
        Key::Backspace,
        Key::Digit(0),
        Key::Point,
        Key::Equals,
    ];

    /// Number of keypad columns.
    pub const COLUMNS: usize = 4;

    /// Label printed on the key.
    pub fn label(self) -> &'static str {
        const DIGITS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];
        match self {
            Key::Digit(d) => DIGITS.get(d as usize).copied().unwrap_or("?"),
            Key::Point => ".",
            Key::Operator(op) => op.symbol(),
            Key::Equals => "=",
            Key::Clear => "C",
            Key::Invert => "±",
            Key::Percent => "%",
            Key::Backspace => "⌫",
        }
    }

    /// Look a key up by its exact label.
    pub fn from_label(label: &str) -> Result<Self, KeyParseError> {
        Key::KEYPAD
            .into_iter()
            .find(|key| key.label() == label)
            .ok_or_else(|| KeyParseError::UnknownLabel(label.to_string()))
    }

    /// Map a typed character to a key, accepting ASCII aliases.
    pub fn from_char(ch: char) -> Option<Self> {
        let key = match ch {
            '0'..='9' => Key::Digit(ch as u8 - b'0'),
            '.' => Key::Point,
            '+' => Key::Operator(Operator::Add),
            '-' => Key::Operator(Operator::Subtract),
            '*' | 'x' | 'X' | '×' => Key::Operator(Operator::Multiply),
            '/' | '÷' => Key::Operator(Operator::Divide),
            '=' => Key::Equals,
            'c' | 'C' => Key::Clear,
            'n' | '~' | '±' => Key::Invert,
            '%' => Key::Percent,
            '<' | 'b' | '⌫' => Key::Backspace,
            _ => return None,
        };
        Some(key)
    }

    /// Operator keys get the primary colour on the keypad.
    pub fn is_operator(self) -> bool {
        matches!(self, Key::Operator(_) | Key::Equals)
    }

    /// Function keys (clear, sign, percent, backspace) are drawn outlined.
    pub fn is_function(self) -> bool {
        matches!(
            self,
            Key::Clear | Key::Invert | Key::Percent | Key::Backspace
        )
    }
}

/// Parse a key sequence such as `"12+3="` or `"5 x 4 ="`.
///
/// Whitespace is ignored. Positions in errors count characters from zero.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyParseError> {
    input
        .chars()
        .enumerate()
        .filter(|(_, ch)| !ch.is_whitespace())
        .map(|(position, ch)| Key::from_char(ch).ok_or(KeyParseError::UnknownKey { ch, position }))
        .collect()
}
