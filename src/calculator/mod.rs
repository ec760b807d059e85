//! Arithmetic entry state machine
//!
//! Interprets keypad presses into display updates. The machine holds four
//! pieces of state (display text, stored operand, pending operator and the
//! overwrite flag) and never fails: malformed input is either ignored or
//! turns into NaN, which sticks until the next clear.
//!
//! ```
//! use termcalc::calculator::{Calculator, Operator};
//!
//! let mut calc = Calculator::new();
//! calc.input_digit('5');
//! calc.choose_operator(Operator::Add);
//! calc.input_digit('3');
//! calc.equals();
//! assert_eq!(calc.display(), "8");
//! ```

mod format;
mod key;
pub mod number;
mod operator;

pub use format::{format_for_display, group_number, DEFAULT_GROUPING_SEPARATOR};
pub use key::{parse_keys, Key, KeyParseError};
pub use operator::{evaluate, Operator};

use serde::Serialize;
use tracing::trace;

/// Calculator state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculator {
    /// Text currently shown on the display
    display: String,
    /// Left operand of the pending operation
    #[serde(serialize_with = "serialize_stored")]
    stored: Option<f64>,
    /// Operator waiting for its second operand
    operator: Option<Operator>,
    /// Whether the next digit starts a fresh number
    overwrite: bool,
}

/// Write the stored operand the way the display would show it, so NaN and
/// the infinities stay distinguishable from "no operand".
fn serialize_stored<S>(stored: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match stored {
        Some(value) => serializer.serialize_some(&number::stringify(*value)),
        None => serializer.serialize_none(),
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Fresh calculator showing `0`.
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            stored: None,
            operator: None,
            overwrite: true,
        }
    }

    /// Current display text.
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Stored left operand, if an operation is pending.
    pub fn stored(&self) -> Option<f64> {
        self.stored
    }

    /// Pending operator.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Whether the next digit replaces the display.
    pub fn overwrite(&self) -> bool {
        self.overwrite
    }

    /// Expression hint shown above the display, e.g. `"12 ×"`.
    pub fn pending_hint(&self) -> Option<String> {
        match (self.stored, self.operator) {
            (Some(stored), Some(op)) => Some(format!("{} {}", number::stringify(stored), op)),
            _ => None,
        }
    }

    /// Display text with grouping separators.
    pub fn formatted_display(&self, separator: char) -> String {
        format_for_display(&self.display, separator)
    }

    /// Dispatch a keypad key.
    pub fn press(&mut self, key: Key) {
        trace!(key = key.label(), "press");
        match key {
            Key::Digit(d) => {
                if let Some(ch) = char::from_digit(u32::from(d), 10) {
                    self.input_digit(ch);
                }
            }
            Key::Point => self.input_digit('.'),
            Key::Operator(op) => self.choose_operator(op),
            Key::Equals => self.equals(),
            Key::Clear => self.clear(),
            Key::Invert => self.invert(),
            Key::Percent => self.percent(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Type a digit or the decimal point.
    ///
    /// Anything other than `0`-`9` and `.` is ignored.
    pub fn input_digit(&mut self, d: char) {
        if !(d.is_ascii_digit() || d == '.') {
            return;
        }

        if self.overwrite {
            self.display = if d == '.' {
                "0.".to_string()
            } else {
                d.to_string()
            };
            self.overwrite = false;
            return;
        }

        if d == '.' && self.display.contains('.') {
            return;
        }
        if self.display == "0" && d != '.' {
            self.display = d.to_string();
            return;
        }
        self.display.push(d);
    }

    /// Choose the next operator.
    ///
    /// If an operation is pending and a second operand was typed, it is
    /// evaluated first and the result becomes the new left operand. Pressing
    /// operators back to back only swaps the pending operator.
    pub fn choose_operator(&mut self, next: Operator) {
        let current = number::parse(&self.display);

        match (self.operator, self.stored) {
            (Some(op), Some(stored)) if !self.overwrite => {
                let result = evaluate(stored, current, op);
                self.stored = Some(result);
                self.display = number::stringify(result);
            }
            // Nothing pending, or no second operand typed yet.
            _ => self.stored = Some(current),
        }

        self.overwrite = true;
        self.operator = Some(next);
    }

    /// Evaluate the pending operation. No-op when nothing is pending.
    pub fn equals(&mut self) {
        let (Some(op), Some(stored)) = (self.operator, self.stored) else {
            return;
        };

        let result = evaluate(stored, number::parse(&self.display), op);
        self.display = number::stringify(result);
        self.stored = None;
        self.operator = None;
        self.overwrite = true;
    }

    /// Reset to the initial state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Delete the last typed character.
    ///
    /// Ignored right after an operator, equals or clear, since nothing has
    /// been typed into the current number.
    pub fn backspace(&mut self) {
        if self.overwrite {
            return;
        }
        if self.display.chars().count() <= 1 {
            self.display = "0".to_string();
        } else {
            self.display.pop();
        }
    }

    /// Toggle the leading minus sign. `0` stays `0`.
    pub fn invert(&mut self) {
        if let Some(rest) = self.display.strip_prefix('-') {
            self.display = rest.to_string();
        } else if self.display != "0" {
            self.display.insert(0, '-');
        }
    }

    /// Divide the display by one hundred.
    pub fn percent(&mut self) {
        let value = number::round_fixed(number::parse(&self.display) / 100.0);
        self.display = number::stringify(value);
    }
}
