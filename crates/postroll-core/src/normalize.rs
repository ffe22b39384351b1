//! Value Normalizer — cleans raw cell text and coerces numeric-looking
//! strings, dates, and times into their canonical representations.

use crate::schema::FieldValue;
use chrono::{NaiveDate, NaiveTime};
use regex::Regex;
use std::sync::LazyLock;

/// Whole-value test for "number with grouping separators". Deliberately
/// loose: a value of only commas or dots still matches and parses to NaN,
/// which the assembler later treats as missing.
static NUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9,.]+$").unwrap());

/// Trim, lowercase, and collapse whitespace runs to `_`.
pub fn clean_label(raw: &str) -> String {
    raw.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Trim and collapse internal whitespace runs to a single space.
pub fn clean_text(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Clean a raw value and coerce it to a number when the whole string looks
/// numeric. Never returns [`FieldValue::Null`].
pub fn normalize_value(raw: &str) -> FieldValue {
    let text = clean_text(raw);
    if NUMERIC.is_match(&text) {
        FieldValue::Number(parse_float_loose(&text.replace(',', "")))
    } else {
        FieldValue::Text(text)
    }
}

/// Longest valid leading float prefix, `parseFloat`-style; no valid prefix
/// yields NaN. Input here is digits and dots only (commas already
/// stripped), so `"1.2.3"` parses to `1.2` and `"."` to NaN.
fn parse_float_loose(s: &str) -> f64 {
    let mut end = 0;
    let mut seen_dot = false;
    for (i, c) in s.char_indices() {
        match c {
            '0'..='9' => end = i + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = i + 1;
            }
            _ => break,
        }
    }
    s[..end].parse().unwrap_or(f64::NAN)
}

/// A cleaned primary-sheet row worth keeping: non-empty label and a value
/// that is numeric or non-empty text.
pub fn is_valid_row(label: &str, value: &FieldValue) -> bool {
    !label.is_empty()
        && match value {
            FieldValue::Number(_) => true,
            FieldValue::Text(s) => !s.is_empty(),
            FieldValue::Null => false,
        }
}

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%m/%d/%y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y/%m/%d",
];

/// Canonicalize a date string to zero-padded `YYYY-MM-DD`. Strings no
/// known layout recognizes pass through unchanged (the original tooling
/// emitted `NaN-NaN-NaN` here; neither output is corrected downstream).
pub fn format_date(raw: &str) -> String {
    let text = raw.trim();
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, fmt) {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(text) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    text.to_string()
}

const TIME_FORMATS: &[&str] = &["%I:%M %p", "%I:%M:%S %p", "%H:%M:%S", "%H:%M"];

/// Canonicalize a time-of-day string to 24-hour `HH:MM`; unrecognized
/// strings pass through unchanged.
pub fn format_time(raw: &str) -> String {
    let text = raw.trim();
    for fmt in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(text, fmt) {
            return time.format("%H:%M").to_string();
        }
    }
    text.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
