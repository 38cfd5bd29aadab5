// src/filtering/coerce.rs

//! Coercions from loosely-typed front-matter values to the primitive each
//! filter type compares against.
//!
//! Every helper returns an `Option` (or a plain value) instead of an error:
//! a value that cannot be coerced is simply excluded by the caller. Absent
//! fields are passed as `None`.

use crate::core_types::FieldValue;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Decimal number literals, with optional sign, fraction and exponent.
static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").expect("valid decimal regex")
});

/// Offset-less date-time layouts, read as UTC.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Stringifies a value the way a front-matter author would expect to see it
/// in a dropdown, and the way string criteria compare against it.
///
/// # Examples
///
/// ```
/// use frontfilter::core_types::FieldValue;
/// use frontfilter::filtering::coerce::to_js_string;
///
/// assert_eq!(to_js_string(Some(&FieldValue::Number(5.0))), "5");
/// assert_eq!(to_js_string(Some(&FieldValue::Bool(false))), "false");
/// assert_eq!(to_js_string(None), "undefined");
/// ```
pub fn to_js_string(value: Option<&FieldValue>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(v) => stringify(v),
    }
}

fn stringify(value: &FieldValue) -> String {
    match value {
        FieldValue::Null => "null".to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Number(n) => format_number(*n),
        FieldValue::String(s) => s.clone(),
        FieldValue::Date(d) => iso_date(*d),
        FieldValue::DateTime(dt) => iso_date(dt.date_naive()),
        // Array elements that are null render as empty strings.
        FieldValue::Array(items) => items
            .iter()
            .map(|item| match item {
                FieldValue::Null => String::new(),
                other => stringify(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        FieldValue::Object(_) => "[object Object]".to_string(),
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n == f64::INFINITY {
        "Infinity".to_string()
    } else if n == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if n == 0.0 {
        // Covers -0.0 as well.
        "0".to_string()
    } else if n.abs() >= 1e21 || n.abs() < 1e-6 {
        format_exponent(n)
    } else {
        n.to_string()
    }
}

/// Exponent form for very large and very small magnitudes, e.g. `1e+21` and
/// `1.5e-7`. `{:e}` already yields the shortest digits that round-trip.
fn format_exponent(n: f64) -> String {
    let formatted = format!("{:e}", n);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted,
    }
}

/// Coerces a value to a number. `None` stands for not-a-number.
///
/// Absent fields, `null`, blank strings, objects and multi-element arrays are
/// not numbers. Booleans count as 1 and 0, dates as epoch milliseconds.
///
/// ```
/// use frontfilter::core_types::FieldValue;
/// use frontfilter::filtering::coerce::to_number;
///
/// assert_eq!(to_number(Some(&FieldValue::from(" 42 "))), Some(42.0));
/// assert_eq!(to_number(Some(&FieldValue::from("0x10"))), Some(16.0));
/// assert_eq!(to_number(Some(&FieldValue::from("abc"))), None);
/// assert_eq!(to_number(Some(&FieldValue::from(""))), None);
/// assert_eq!(to_number(None), None);
/// ```
pub fn to_number(value: Option<&FieldValue>) -> Option<f64> {
    let n = match value? {
        FieldValue::Null => return None,
        FieldValue::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        FieldValue::Number(n) => *n,
        FieldValue::String(s) => parse_number_literal(s)?,
        FieldValue::Date(d) => d.and_hms_opt(0, 0, 0)?.and_utc().timestamp_millis() as f64,
        FieldValue::DateTime(dt) => dt.timestamp_millis() as f64,
        FieldValue::Array(items) => match items.as_slice() {
            [single] => return to_number(Some(single)),
            _ => return None,
        },
        FieldValue::Object(_) => return None,
    };
    (!n.is_nan()).then_some(n)
}

fn parse_number_literal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&s[2..], radix).ok().map(|n| n as f64);
    }
    if DECIMAL_LITERAL.is_match(s) {
        s.parse::<f64>().ok()
    } else {
        None
    }
}

/// Truthiness of a value: absent, `null`, `false`, `0`, NaN and `""` are
/// falsy, everything else (empty arrays and objects included) is truthy.
pub fn is_truthy(value: Option<&FieldValue>) -> bool {
    match value {
        None | Some(FieldValue::Null) => false,
        Some(FieldValue::Bool(b)) => *b,
        Some(FieldValue::Number(n)) => *n != 0.0 && !n.is_nan(),
        Some(FieldValue::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Parses a value as a calendar date (UTC).
///
/// Falsy values never parse. Already-parsed dates are used as-is, numbers are
/// read as epoch milliseconds, and strings accept ISO 8601 dates and
/// date-times, RFC 3339 and RFC 2822.
///
/// ```
/// use frontfilter::core_types::FieldValue;
/// use frontfilter::filtering::coerce::to_date;
/// use chrono::NaiveDate;
///
/// let expected = NaiveDate::from_ymd_opt(2024, 3, 15);
/// assert_eq!(to_date(Some(&FieldValue::from("2024-03-15"))), expected);
/// assert_eq!(to_date(Some(&FieldValue::from("2024-03-15T23:30:00-02:00"))),
///            NaiveDate::from_ymd_opt(2024, 3, 16));
/// assert_eq!(to_date(Some(&FieldValue::from("not a date"))), None);
/// ```
pub fn to_date(value: Option<&FieldValue>) -> Option<NaiveDate> {
    if !is_truthy(value) {
        return None;
    }
    match value? {
        FieldValue::Date(d) => Some(*d),
        FieldValue::DateTime(dt) => Some(dt.date_naive()),
        FieldValue::Number(n) if n.is_finite() => {
            DateTime::<Utc>::from_timestamp_millis(n.trunc() as i64).map(|dt| dt.date_naive())
        }
        FieldValue::String(s) => parse_date_str(s.trim()),
        FieldValue::Array(items) => match items.as_slice() {
            [single] => to_date(Some(single)),
            _ => None,
        },
        _ => None,
    }
}

fn parse_date_str(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Some(d) = parse_partial_date(s) {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc).date_naive());
    }
    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(ndt.date());
        }
    }
    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc).date_naive())
}

/// `YYYY` and `YYYY-MM`, which resolve to the first day of the period.
fn parse_partial_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split('-');
    let year = parts.next()?;
    let month = parts.next();
    if parts.next().is_some() || year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let month = match month {
        None => 1,
        Some(m) if m.len() == 2 && m.bytes().all(|b| b.is_ascii_digit()) => m.parse().ok()?,
        Some(_) => return None,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

/// Formats a date as a date-only ISO string (`YYYY-MM-DD`).
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
