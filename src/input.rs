//! Loose coercion for UI form values. Fields arrive as JSON strings or
//! numbers; parsing never fails, it falls back to the documented default.

use serde_json::Value;

/// Integer from a loosely-typed value. Accepts numbers and numeric strings
/// (leading digits, like a form field); anything else yields `default`.
pub fn int_or(value: Option<&Value>, default: i32) -> i32 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .and_then(|v| i32::try_from(v).ok())
            .unwrap_or(default),
        Some(Value::String(s)) => parse_leading_int(s).unwrap_or(default),
        _ => default,
    }
}

/// Non-empty trimmed string, else `default`.
pub fn string_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => default.to_string(),
    }
}

/// `parseInt` semantics: optional sign, then leading digits, ignoring any
/// trailing junk ("12 tons" is 12). Whole-garbage and out-of-range input
/// is None.
fn parse_leading_int(s: &str) -> Option<i32> {
    let s = s.trim();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1_i64, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let span: String = digits.chars().take_while(|c| c.is_ascii_digit()).collect();
    if span.is_empty() {
        return None;
    }
    let magnitude = span.parse::<i64>().ok()?;
    i32::try_from(sign * magnitude).ok()
}
