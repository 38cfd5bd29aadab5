//! Defines core data structures used throughout the crate.
//!
//! A collection is a list of [`Record`]s, each carrying a `frontmatter` map of
//! user-authored attributes. A [`CollectionTemplate`] describes which fields the
//! collection has and what type each one is declared as.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A loosely-typed front-matter value.
///
/// Values decoded from JSON never use the `Date` or `DateTime` variants; those
/// exist for callers that already hold parsed dates. Date-looking strings stay
/// strings and are parsed on demand by the date coercion.
///
/// # Examples
///
/// ```
/// use frontfilter::core_types::FieldValue;
/// use serde_json::json;
///
/// let value = FieldValue::from(json!(["rust", 3, null]));
/// assert_eq!(
///     value,
///     FieldValue::Array(vec![
///         FieldValue::String("rust".to_string()),
///         FieldValue::Number(3.0),
///         FieldValue::Null,
///     ])
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum FieldValue {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    /// A calendar date with no time component.
    Date(NaiveDate),
    /// An instant in time.
    DateTime(DateTime<Utc>),
    Array(Vec<FieldValue>),
    Object(BTreeMap<String, FieldValue>),
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;
        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Bool(b),
            // as_f64 only fails for arbitrary-precision numbers, which are not enabled.
            Value::Number(n) => n.as_f64().map_or(FieldValue::Null, FieldValue::Number),
            Value::String(s) => FieldValue::String(s),
            Value::Array(items) => {
                FieldValue::Array(items.into_iter().map(FieldValue::from).collect())
            }
            Value::Object(map) => FieldValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, FieldValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<FieldValue> for serde_json::Value {
    fn from(value: FieldValue) -> Self {
        use serde_json::Value;
        match value {
            FieldValue::Null => Value::Null,
            FieldValue::Bool(b) => Value::Bool(b),
            FieldValue::Number(n) => {
                // Keep integral values integral so `5` does not come back as `5.0`.
                if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
                    Value::from(n as i64)
                } else {
                    serde_json::Number::from_f64(n).map_or(Value::Null, Value::Number)
                }
            }
            FieldValue::String(s) => Value::String(s),
            FieldValue::Date(d) => Value::String(d.format("%Y-%m-%d").to_string()),
            FieldValue::DateTime(dt) => Value::String(dt.to_rfc3339()),
            FieldValue::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            FieldValue::Object(map) => Value::Object(
                map.into_iter().map(|(k, v)| (k, Value::from(v))).collect(),
            ),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(d: NaiveDate) -> Self {
        FieldValue::Date(d)
    }
}

/// One item of a content collection.
///
/// All user-defined attributes live under `frontmatter`; field lookups only
/// read from there. Any other top-level keys (slug, body, file path...) are
/// kept in `extra` so records can be written back out. Keys of both maps are
/// written in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// The user-defined attributes of the record. A missing or `null`
    /// front-matter block (an empty YAML header) is an empty map.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub frontmatter: BTreeMap<String, FieldValue>,
    /// Every other top-level key, with its value unchanged.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<BTreeMap<String, FieldValue>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeMap<String, FieldValue>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Record {
    /// Builds a record from front-matter pairs. Mostly useful in tests and docs.
    ///
    /// ```
    /// use frontfilter::core_types::{FieldValue, Record};
    ///
    /// let record = Record::from_frontmatter([("draft", FieldValue::Bool(true))]);
    /// assert_eq!(record.get("draft"), Some(&FieldValue::Bool(true)));
    /// assert_eq!(record.get("title"), None);
    /// ```
    pub fn from_frontmatter<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, FieldValue)>,
    {
        Self {
            frontmatter: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
            extra: BTreeMap::new(),
        }
    }

    /// Reads a front-matter field. `None` means the field is absent.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.frontmatter.get(field)
    }
}

/// The declared type of a template field.
///
/// Template authors occasionally use type names this crate does not know;
/// those are kept as `Unknown` instead of rejecting the whole template.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Date,
    Array,
    Boolean,
    Number,
    Object,
    Unknown(String),
}

impl FieldType {
    /// The wire name of the type.
    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Date => "date",
            FieldType::Array => "array",
            FieldType::Boolean => "boolean",
            FieldType::Number => "number",
            FieldType::Object => "object",
            FieldType::Unknown(name) => name,
        }
    }
}

impl From<String> for FieldType {
    fn from(name: String) -> Self {
        match name.as_str() {
            "string" => FieldType::String,
            "date" => FieldType::Date,
            "array" => FieldType::Array,
            "boolean" => FieldType::Boolean,
            "number" => FieldType::Number,
            "object" => FieldType::Object,
            _ => FieldType::Unknown(name),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single field declared by a collection template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
        }
    }
}

/// The per-collection field schema supplied by the collection template provider.
///
/// ```
/// use frontfilter::core_types::{CollectionTemplate, FieldType};
///
/// let template: CollectionTemplate = serde_json::from_str(
///     r#"{"name": "posts", "fields": [{"name": "tags", "type": "array"}]}"#,
/// ).unwrap();
/// assert_eq!(template.fields[0].field_type, FieldType::Array);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}
