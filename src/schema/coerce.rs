//! Value coercion helpers shared by the validator and rule parsing
//!
//! Payload values arrive as loosely typed JSON. These helpers decide
//! emptiness and convert values to the text, number, or instant a rule
//! needs. None of them fail: an unconvertible value yields `None`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// Absent, `null`, or the empty string.
pub fn is_blank(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// Blank, or an array with no elements. This is the required-field test.
pub fn is_empty(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Array(items)) => items.is_empty(),
        other => is_blank(other),
    }
}

/// Text form of a value, used for length and pattern rules.
///
/// Arrays are joined with commas, with `null` elements as empty text.
pub fn string_form(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => number_text(n),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(string_form)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn number_text(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/// Numeric value of a payload value, or `None` if it is not a number.
pub fn to_number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Null => Some(0.0),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_number_str(s),
        Value::Array(_) => parse_number_str(&string_form(value)),
        Value::Object(_) => None,
    };
    n.filter(|f| !f.is_nan())
}

/// Parses numeric text: decimal with optional sign and exponent, unsigned
/// `0x`/`0o`/`0b` integers, or `Infinity`. Surrounding whitespace is
/// ignored and whitespace-only text is zero.
pub fn parse_number_str(text: &str) -> Option<f64> {
    let t = text.trim();
    if t.is_empty() {
        return Some(0.0);
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = t.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }

    let unsigned = t.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(t);
    if unsigned == "Infinity" {
        return Some(if t.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    // f64::from_str also accepts "inf" and "nan"; restrict to plain numerals
    if !unsigned
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }

    t.parse::<f64>().ok()
}

/// Instant denoted by a payload value, or `None` if it is not a valid date.
///
/// Strings use the grammar of [`parse_date_str`]; numbers are epoch
/// milliseconds.
pub fn to_instant(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_date_str(s),
        Value::Number(n) => {
            let millis = n.as_f64().filter(|f| f.is_finite())?;
            DateTime::from_timestamp_millis(millis.trunc() as i64)
        }
        _ => None,
    }
}

/// Parses a calendar date or timestamp. Accepted forms:
///
/// - RFC 3339 timestamps
/// - naive `YYYY-MM-DDTHH:MM[:SS[.fff]]`, read as UTC
/// - `YYYY-M-D`, `YYYY/M/D`, and `Month D, YYYY` dates
/// - `YYYY` and `YYYY-MM`
///
/// Dates without a time are midnight UTC.
pub fn parse_date_str(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    let date = ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"]
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| partial_date(text))?;

    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

/// `YYYY` or `YYYY-MM`, as the first day of the period
fn partial_date(text: &str) -> Option<NaiveDate> {
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    let (year, month) = text.split_once('-').unwrap_or((text, "1"));

    if year.len() != 4 || !all_digits(year) || month.len() > 2 || !all_digits(month) {
        return None;
    }

    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}
