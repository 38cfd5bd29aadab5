// src/filtering/criterion.rs

//! The typed filter criterion and its JSON wire form.

use crate::core_types::FieldValue;
use crate::filtering::coerce::{to_js_string, to_number};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Inclusive date-only bounds. `None` means unbounded on that side.
///
/// Bounds are `YYYY-MM-DD` strings and are compared as strings, which orders
/// them chronologically.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateBounds {
    pub from: Option<String>,
    pub to: Option<String>,
}

impl DateBounds {
    /// Builds bounds, treating empty strings as absent.
    pub fn new(from: Option<&str>, to: Option<&str>) -> Self {
        let keep = |b: Option<&str>| b.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            from: keep(from),
            to: keep(to),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }
}

/// Inclusive numeric bounds. `None` means unbounded on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberBounds {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberBounds {
    /// Builds bounds, treating NaN as absent.
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            min: min.filter(|n| !n.is_nan()),
            max: max.filter(|n| !n.is_nan()),
        }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// A filter on one field, tagged by the field's type.
///
/// On the wire a criterion is `{"type": <tag>, "value": <payload>}`. Tags this
/// crate does not know decode to [`FilterCriterion::Unknown`], which matches
/// every record so that newer templates keep working with older filters.
///
/// # Examples
///
/// ```
/// use frontfilter::filtering::{FilterCriterion, NumberBounds};
///
/// let c: FilterCriterion =
///     serde_json::from_str(r#"{"type": "number", "value": {"min": 1, "max": 10}}"#).unwrap();
/// assert_eq!(c, FilterCriterion::Number(NumberBounds::new(Some(1.0), Some(10.0))));
///
/// let c: FilterCriterion =
///     serde_json::from_str(r#"{"type": "geo", "value": [1, 2]}"#).unwrap();
/// assert!(matches!(c, FilterCriterion::Unknown { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCriterion", into = "RawCriterion")]
pub enum FilterCriterion {
    /// Exact match against the stringified field value.
    String(String),
    /// Inclusive date range.
    Date(DateBounds),
    /// Matches when the field's array shares at least one tag.
    Array(Vec<String>),
    /// Matches on the field's truthiness.
    Boolean(bool),
    /// Inclusive numeric range.
    Number(NumberBounds),
    /// A tag this crate does not recognize. Always matches.
    Unknown {
        /// The unrecognized `type` tag.
        kind: String,
        /// The payload, kept so it can be written back out.
        value: Value,
    },
}

impl FilterCriterion {
    pub fn string(value: impl Into<String>) -> Self {
        FilterCriterion::String(value.into())
    }

    pub fn date(from: Option<&str>, to: Option<&str>) -> Self {
        FilterCriterion::Date(DateBounds::new(from, to))
    }

    pub fn tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterCriterion::Array(tags.into_iter().map(Into::into).collect())
    }

    pub fn boolean(value: bool) -> Self {
        FilterCriterion::Boolean(value)
    }

    pub fn number(min: Option<f64>, max: Option<f64>) -> Self {
        FilterCriterion::Number(NumberBounds::new(min, max))
    }

    /// The wire tag of this criterion.
    pub fn kind(&self) -> &str {
        match self {
            FilterCriterion::String(_) => "string",
            FilterCriterion::Date(_) => "date",
            FilterCriterion::Array(_) => "array",
            FilterCriterion::Boolean(_) => "boolean",
            FilterCriterion::Number(_) => "number",
            FilterCriterion::Unknown { kind, .. } => kind,
        }
    }

    /// Whether the criterion constrains nothing: an empty string target, an
    /// empty tag list, or a range with neither bound.
    ///
    /// A no-op criterion is never stored in an active filter set; setting one
    /// clears the field instead.
    pub fn is_noop(&self) -> bool {
        match self {
            FilterCriterion::String(s) => s.is_empty(),
            FilterCriterion::Date(bounds) => bounds.is_unbounded(),
            FilterCriterion::Array(tags) => tags.is_empty(),
            FilterCriterion::Number(bounds) => bounds.is_unbounded(),
            FilterCriterion::Boolean(_) | FilterCriterion::Unknown { .. } => false,
        }
    }
}

/// The wire form, before the payload is checked against the tag.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct RawCriterion {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    value: Value,
}

impl TryFrom<RawCriterion> for FilterCriterion {
    type Error = String;

    fn try_from(raw: RawCriterion) -> Result<Self, Self::Error> {
        let RawCriterion { kind, value } = raw;
        match kind.as_str() {
            "string" => match value {
                Value::String(s) => Ok(FilterCriterion::String(s)),
                other => Err(format!("string criterion expects a string, got {}", other)),
            },
            "date" => {
                let from = optional_str(&value, "from")?;
                let to = optional_str(&value, "to")?;
                Ok(FilterCriterion::Date(DateBounds::new(from, to)))
            }
            "array" => match value {
                Value::Array(items) => Ok(FilterCriterion::Array(
                    items
                        .into_iter()
                        .map(|item| to_js_string(Some(&FieldValue::from(item))))
                        .collect(),
                )),
                other => Err(format!("array criterion expects a list of tags, got {}", other)),
            },
            "boolean" => match value {
                Value::Bool(b) => Ok(FilterCriterion::Boolean(b)),
                other => Err(format!("boolean criterion expects true or false, got {}", other)),
            },
            "number" => {
                let min = optional_number(&value, "min")?;
                let max = optional_number(&value, "max")?;
                Ok(FilterCriterion::Number(NumberBounds::new(min, max)))
            }
            _ => Ok(FilterCriterion::Unknown { kind, value }),
        }
    }
}

impl From<FilterCriterion> for RawCriterion {
    fn from(criterion: FilterCriterion) -> Self {
        let kind = criterion.kind().to_string();
        let value = match criterion {
            FilterCriterion::String(s) => Value::String(s),
            FilterCriterion::Date(bounds) => json!({ "from": bounds.from, "to": bounds.to }),
            FilterCriterion::Array(tags) => json!(tags),
            FilterCriterion::Boolean(b) => Value::Bool(b),
            FilterCriterion::Number(bounds) => json!({ "min": bounds.min, "max": bounds.max }),
            FilterCriterion::Unknown { value, .. } => value,
        };
        RawCriterion { kind, value }
    }
}

/// Reads an optional string member of a range payload. `null` and a missing
/// payload both mean "absent".
fn optional_str<'a>(payload: &'a Value, key: &str) -> Result<Option<&'a str>, String> {
    match payload {
        Value::Null => Ok(None),
        Value::Object(map) => match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(format!("date bound '{}' must be a string, got {}", key, other)),
        },
        other => Err(format!("date criterion expects {{from, to}}, got {}", other)),
    }
}

/// Reads an optional numeric member of a range payload. Numeric strings are
/// accepted; blank strings mean "absent".
fn optional_number(payload: &Value, key: &str) -> Result<Option<f64>, String> {
    match payload {
        Value::Null => Ok(None),
        Value::Object(map) => match map.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) if s.trim().is_empty() => Ok(None),
            Some(v @ (Value::Number(_) | Value::String(_))) => {
                to_number(Some(&FieldValue::from(v.clone())))
                    .map(Some)
                    .ok_or_else(|| format!("number bound '{}' is not a number: {}", key, v))
            }
            Some(other) => Err(format!("number bound '{}' must be a number, got {}", key, other)),
        },
        other => Err(format!("number criterion expects {{min, max}}, got {}", other)),
    }
}
