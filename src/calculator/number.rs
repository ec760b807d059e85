//! Numeric conversions for the calculator display
//!
//! The display is text, so every computation goes text -> f64 -> text.
//! These helpers follow the browser's `Number(text)`, `toFixed(12)` and
//! `String(number)` rules so results match the keypad users already know
//! (`0.1 + 0.2` shows `0.3`, `1 ÷ 0` shows `NaN`, huge values switch to
//! exponent notation).

/// Fractional digits kept after every arithmetic step.
pub const PRECISION: usize = 12;

/// Magnitude from which fixed-point rounding is skipped.
const FIXED_LIMIT: f64 = 1e21;

/// Parse display text into a number.
///
/// Empty (or all-whitespace) text is zero, `Infinity` forms map to the
/// infinities, decimal literals with an optional exponent parse normally and
/// anything else is NaN. Never fails.
pub fn parse(text: &str) -> f64 {
    let text = text.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust's parser also accepts "inf" and "nan" spellings; a display never
    // holds those as valid numbers.
    if !text
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'-' | b'+' | b'e' | b'E'))
    {
        return f64::NAN;
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Round to [`PRECISION`] fractional digits and reparse.
///
/// Works on the exact decimal expansion of the double, rounding half away
/// from zero. Non-finite values and magnitudes of `1e21` or more pass
/// through untouched.
pub fn round_fixed(value: f64) -> f64 {
    if !value.is_finite() || value.abs() >= FIXED_LIMIT {
        return value;
    }

    let negative = value < 0.0;
    let magnitude = value.abs();

    // A double has at most 1074 fractional digits, so this is exact.
    let exact = format!("{:.1074}", magnitude);
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(PRECISION))
        .collect();
    let round_up = frac_part
        .as_bytes()
        .get(PRECISION)
        .is_some_and(|next| *next >= b'5');

    if round_up {
        increment_digits(&mut digits);
    }

    let split = digits.len() - PRECISION;
    let mut fixed = String::with_capacity(digits.len() + 2);
    if negative {
        fixed.push('-');
    }
    fixed.push_str(std::str::from_utf8(&digits[..split]).unwrap_or("0"));
    fixed.push('.');
    fixed.push_str(std::str::from_utf8(&digits[split..]).unwrap_or("0"));

    parse(&fixed)
}

/// Add one to a string of ASCII digits, growing it on overflow.
fn increment_digits(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// Convert a number to display text.
///
/// Uses the shortest digit string that round-trips, in plain notation for
/// magnitudes in `[1e-7, 1e21)` and exponent notation (`1e+21`, `1.5e-7`)
/// outside it. Negative zero prints as `0`.
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let (digits, exponent) = shortest_digits(value.abs());
    let sign = if value < 0.0 { "-" } else { "" };
    let k = digits.len() as i32;
    // Position of the decimal point relative to the first digit.
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int, frac) = digits.split_at(n as usize);
        format!("{}.{}", int, frac)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let exp_sign = if e < 0 { '-' } else { '+' };
        let (first, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", first, exp_sign, e.abs())
        } else {
            format!("{}.{}e{}{}", first, rest, exp_sign, e.abs())
        }
    };

    format!("{}{}", sign, body)
}

/// Shortest round-trip significant digits and the decimal exponent of the
/// first digit, for a finite positive value.
pub(crate) fn shortest_digits(magnitude: f64) -> (String, i32) {
    let sci = format!("{:e}", magnitude);
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    (digits, exponent.parse().unwrap_or(0))
}
