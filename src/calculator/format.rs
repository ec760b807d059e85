//! Presentation formatting for the display text
//!
//! Pure helpers: nothing here touches calculator state.

use super::number;

/// Default separator between thousands groups.
pub const DEFAULT_GROUPING_SEPARATOR: char = ',';

/// Fraction digits kept when the integer portion itself has a fraction
/// (only possible for exponent-notation input).
const MAX_FRACTION_DIGITS: usize = 3;

/// Insert grouping separators into the integer portion of `text`.
///
/// The text is split at its first `.`; the integer portion is reformatted
/// in en-US style (`1234567` -> `1,234,567`) and the fraction portion is
/// appended as typed, so a trailing `.` or trailing zeros survive.
/// `""` and `"-"` are returned unchanged.
pub fn format_for_display(text: &str, separator: char) -> String {
    if text.is_empty() || text == "-" {
        return text.to_string();
    }

    let mut parts = text.split('.');
    let int_part = parts.next().unwrap_or("");
    let frac_part = parts.next();

    let int_fmt = group_number(number::parse(int_part), separator);
    match frac_part {
        Some(frac) => format!("{}.{}", int_fmt, frac),
        None => int_fmt,
    }
}

/// Format a number with grouped integer digits and at most three fraction
/// digits.
pub fn group_number(value: f64, separator: char) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value == 0.0 {
        return format!("{}0", sign);
    }

    let (int_digits, frac_digits) = rounded_plain_digits(value.abs());
    let grouped = group_digits(&int_digits, separator);
    if frac_digits.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_digits)
    }
}

/// Expand a positive value into plain integer and fraction digit strings,
/// rounded half-up to [`MAX_FRACTION_DIGITS`] with trailing zeros removed.
fn rounded_plain_digits(magnitude: f64) -> (String, String) {
    let (digits, exponent) = number::shortest_digits(magnitude);
    let k = digits.len() as i32;
    let n = exponent + 1;

    let (int, mut frac) = if n >= k {
        (
            format!("{}{}", digits, "0".repeat((n - k) as usize)),
            String::new(),
        )
    } else if n > 0 {
        let (int, frac) = digits.split_at(n as usize);
        (int.to_string(), frac.to_string())
    } else {
        ("0".to_string(), format!("{}{}", "0".repeat((-n) as usize), digits))
    };

    if frac.len() <= MAX_FRACTION_DIGITS {
        return (int, frac.trim_end_matches('0').to_string());
    }

    let round_up = frac.as_bytes()[MAX_FRACTION_DIGITS] >= b'5';
    frac.truncate(MAX_FRACTION_DIGITS);

    let mut combined: Vec<u8> = int.bytes().chain(frac.bytes()).collect();
    if round_up {
        let mut carry = true;
        for digit in combined.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            combined.insert(0, b'1');
        }
    }

    let split = combined.len() - MAX_FRACTION_DIGITS;
    let int = String::from_utf8_lossy(&combined[..split]).into_owned();
    let frac = String::from_utf8_lossy(&combined[split..])
        .trim_end_matches('0')
        .to_string();
    (int, frac)
}

/// Insert `separator` every three digits from the right.
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
