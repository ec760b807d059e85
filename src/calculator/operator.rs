//! Binary operators offered by the keypad

use serde::Serialize;

use super::number;

/// One of the four keypad operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Operator {
    #[serde(rename = "+")]
    Add,
    #[serde(rename = "-")]
    Subtract,
    #[serde(rename = "×")]
    Multiply,
    #[serde(rename = "÷")]
    Divide,
}

impl Operator {
    /// All operators in keypad order (top to bottom).
    pub const ALL: [Operator; 4] = [
        Operator::Divide,
        Operator::Multiply,
        Operator::Subtract,
        Operator::Add,
    ];

    /// Symbol shown on the key and in the pending hint.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Apply the operator and round the result to the display precision.
    ///
    /// Division by zero yields NaN rather than an infinity.
    pub fn apply(self, a: f64, b: f64) -> f64 {
        let out = match self {
            Operator::Add => a + b,
            Operator::Subtract => a - b,
            Operator::Multiply => a * b,
            Operator::Divide => {
                if b == 0.0 {
                    f64::NAN
                } else {
                    a / b
                }
            }
        };
        number::round_fixed(out)
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluate `a op b` with display rounding.
pub fn evaluate(a: f64, b: f64, operator: Operator) -> f64 {
    operator.apply(a, b)
}
