// src/summary.rs

//! Per-field summaries used to populate filter controls: distinct values for
//! select and tag controls, numeric and date bounds for range controls.
//!
//! All functions are pure. Values that cannot be coerced are left out of the
//! summary rather than reported.

use crate::config::FilterConfig;
use crate::constants::{DEFAULT_NUMBER_RANGE_MAX, DEFAULT_NUMBER_RANGE_MIN};
use crate::core_types::{FieldDescriptor, FieldType, FieldValue, Record};
use crate::filtering::coerce::{iso_date, to_date, to_js_string, to_number};
use serde::Serialize;
use std::collections::BTreeSet;

/// Numeric bounds of a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NumberRange {
    pub min: f64,
    pub max: f64,
}

impl Default for NumberRange {
    /// The placeholder range shown when a field has no numeric values.
    fn default() -> Self {
        Self {
            min: DEFAULT_NUMBER_RANGE_MIN,
            max: DEFAULT_NUMBER_RANGE_MAX,
        }
    }
}

/// Date bounds of a field as `YYYY-MM-DD` strings. Both are empty when the
/// field has no parsable dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub min: String,
    pub max: String,
}

/// The summary matching a field's declared type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldSummary {
    /// Distinct values (`string` and `array` fields).
    Values { values: Vec<String> },
    /// Numeric bounds (`number` fields).
    Numbers(NumberRange),
    /// Date bounds (`date` fields).
    Dates(DateRange),
    /// Types with nothing to summarize (`boolean`, `object`, unknown).
    Empty,
}

/// Collects the distinct stringified values of `field`, sorted ascending.
///
/// Absent fields, `null` and `""` are skipped. Arrays contribute each element.
/// Objects are skipped.
///
/// # Examples
///
/// ```
/// use frontfilter::core_types::{FieldValue, Record};
/// use frontfilter::summary::unique_string_values;
///
/// let records = vec![
///     Record::from_frontmatter([("tags", FieldValue::Array(vec!["web".into(), "rust".into()]))]),
///     Record::from_frontmatter([("tags", FieldValue::Array(vec!["rust".into()]))]),
///     Record::from_frontmatter([("tags", FieldValue::from(""))]),
/// ];
/// assert_eq!(unique_string_values(&records, "tags"), vec!["rust", "web"]);
/// ```
pub fn unique_string_values(records: &[Record], field: &str) -> Vec<String> {
    let mut values = BTreeSet::new();
    for value in records.iter().filter_map(|r| r.get(field)) {
        match value {
            FieldValue::Null | FieldValue::Object(_) => {}
            FieldValue::String(s) if s.is_empty() => {}
            FieldValue::Array(items) => {
                values.extend(items.iter().map(|item| to_js_string(Some(item))));
            }
            scalar => {
                values.insert(to_js_string(Some(scalar)));
            }
        }
    }
    values.into_iter().collect()
}

/// Numeric bounds of `field`, or `{0, 100}` when no value is numeric.
///
/// ```
/// use frontfilter::summary::{number_range, NumberRange};
///
/// assert_eq!(number_range(&[], "rating"), NumberRange { min: 0.0, max: 100.0 });
/// ```
pub fn number_range(records: &[Record], field: &str) -> NumberRange {
    number_range_with(records, field, NumberRange::default())
}

/// Numeric bounds of `field`, or `fallback` when no value is numeric.
pub fn number_range_with(records: &[Record], field: &str, fallback: NumberRange) -> NumberRange {
    records
        .iter()
        .filter_map(|r| to_number(r.get(field)))
        .fold(None, |acc: Option<NumberRange>, n| {
            Some(match acc {
                None => NumberRange { min: n, max: n },
                Some(range) => NumberRange {
                    min: range.min.min(n),
                    max: range.max.max(n),
                },
            })
        })
        .unwrap_or(fallback)
}

/// Earliest and latest date of `field` as `YYYY-MM-DD` strings.
///
/// ```
/// use frontfilter::core_types::{FieldValue, Record};
/// use frontfilter::summary::{date_range, DateRange};
///
/// let records = vec![
///     Record::from_frontmatter([("published", FieldValue::from("2024-05-01"))]),
///     Record::from_frontmatter([("published", FieldValue::from("garbage"))]),
///     Record::from_frontmatter([("published", FieldValue::from("2023-12-24T18:00:00Z"))]),
/// ];
/// assert_eq!(
///     date_range(&records, "published"),
///     DateRange { min: "2023-12-24".into(), max: "2024-05-01".into() }
/// );
/// assert_eq!(date_range(&[], "published"), DateRange::default());
/// ```
pub fn date_range(records: &[Record], field: &str) -> DateRange {
    let mut dates = records.iter().filter_map(|r| to_date(r.get(field)));
    let Some(first) = dates.next() else {
        return DateRange::default();
    };
    let (min, max) = dates.fold((first, first), |(min, max), d| (min.min(d), max.max(d)));
    DateRange {
        min: iso_date(min),
        max: iso_date(max),
    }
}

/// Computes the summary a control for `descriptor` needs.
pub fn summarize(
    records: &[Record],
    descriptor: &FieldDescriptor,
    config: &FilterConfig,
) -> FieldSummary {
    let field = descriptor.name.as_str();
    match descriptor.field_type {
        FieldType::String | FieldType::Array => FieldSummary::Values {
            values: unique_string_values(records, field),
        },
        FieldType::Number => {
            FieldSummary::Numbers(number_range_with(records, field, config.number_fallback))
        }
        FieldType::Date => FieldSummary::Dates(date_range(records, field)),
        FieldType::Boolean | FieldType::Object | FieldType::Unknown(_) => FieldSummary::Empty,
    }
}
