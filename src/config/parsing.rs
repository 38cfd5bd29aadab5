// src/config/parsing.rs

//! Parsers for the string-valued command-line options.

use crate::errors::{ConfigError, Error, Result};
use crate::filtering::FilterCriterion;
use crate::summary::NumberRange;

/// Parses a `MIN:MAX` pair into a [`NumberRange`].
///
/// ```
/// use frontfilter::config::parsing::parse_number_fallback;
///
/// let range = parse_number_fallback("-5:2.5").unwrap();
/// assert_eq!((range.min, range.max), (-5.0, 2.5));
/// assert!(parse_number_fallback("5").is_err());
/// ```
pub fn parse_number_fallback(raw: &str) -> Result<NumberRange> {
    let invalid = |reason: &str| -> Error {
        ConfigError::InvalidValue {
            option: "--number-fallback".to_string(),
            reason: format!("'{}' {}", raw, reason),
        }
        .into()
    };
    let (min, max) = raw
        .split_once(':')
        .ok_or_else(|| invalid("is not in MIN:MAX form"))?;
    let min = min
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("has a non-numeric MIN"))?;
    let max = max
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid("has a non-numeric MAX"))?;
    Ok(NumberRange { min, max })
}

/// Parses a `FIELD=JSON` filter argument.
///
/// The JSON part is a criterion in wire form, e.g.
/// `{"type":"array","value":["rust"]}`.
///
/// ```
/// use frontfilter::config::parsing::parse_filter_arg;
/// use frontfilter::filtering::FilterCriterion;
///
/// let (field, criterion) = parse_filter_arg(r#"draft={"type":"boolean","value":false}"#).unwrap();
/// assert_eq!(field, "draft");
/// assert_eq!(criterion, FilterCriterion::boolean(false));
/// ```
pub fn parse_filter_arg(arg: &str) -> Result<(String, FilterCriterion)> {
    let invalid = |reason: String| Error::InvalidFilter {
        arg: arg.to_string(),
        reason,
    };
    let (field, json) = arg
        .split_once('=')
        .ok_or_else(|| invalid("expected FIELD=JSON".to_string()))?;
    let field = field.trim();
    if field.is_empty() {
        return Err(invalid("field name is empty".to_string()));
    }
    let criterion: FilterCriterion =
        serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
    Ok((field.to_string(), criterion))
}
