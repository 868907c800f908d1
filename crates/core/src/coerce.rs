//! Coercion of submitted form text into JSON numbers.
//!
//! Mirrors the `Number(text)` conversion the stored data has always been
//! written with: blank text is `0`, and text that is not a finite number
//! (`NaN`, infinities, garbage, a missing field) has no JSON form and is
//! stored as `null`, represented here by `None`.

use serde_json::Number;

/// Largest integer a double represents exactly (2^53).
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Convert an optional form field to a JSON number, `None` meaning `null`.
///
/// # Examples
///
/// ```
/// use limpeza_core::coerce::coerce_number;
/// use serde_json::Number;
///
/// assert_eq!(coerce_number(Some("120")), Some(Number::from(120)));
/// assert_eq!(coerce_number(Some("")), Some(Number::from(0)));
/// assert_eq!(coerce_number(Some("0x10")), Some(Number::from(16)));
/// assert_eq!(coerce_number(Some("abc")), None);
/// assert_eq!(coerce_number(None), None);
/// ```
pub fn coerce_number(raw: Option<&str>) -> Option<Number> {
    let text = raw?.trim();
    if text.is_empty() {
        return Some(Number::from(0));
    }

    let value = match radix_literal(text) {
        Some((digits, radix)) => parse_radix(digits, radix)?,
        None => text.parse::<f64>().ok()?,
    };
    to_json_number(value)
}

/// Split `0x` / `0o` / `0b` prefixed text into its digits and radix.
fn radix_literal(text: &str) -> Option<(&str, u32)> {
    let prefix = text.get(..2)?;
    let radix = match prefix {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((&text[2..], radix))
}

fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    u64::from_str_radix(digits, radix).ok().map(|n| n as f64)
}

/// Integral values keep an integer representation (`120`, not `120.0`).
fn to_json_number(value: f64) -> Option<Number> {
    if !value.is_finite() {
        return None;
    }
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        return Some(Number::from(value as i64));
    }
    Number::from_f64(value)
}
