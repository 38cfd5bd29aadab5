// src/filtering/predicate.rs

use crate::core_types::FieldValue;
use crate::filtering::coerce::{is_truthy, iso_date, to_date, to_js_string, to_number};
use crate::filtering::criterion::{DateBounds, FilterCriterion, NumberBounds};

/// Decides whether one record's field value satisfies a criterion.
///
/// `value` is `None` when the record does not have the field. The function is
/// pure and total: values that cannot be coerced to the criterion's type are
/// a non-match, never an error.
///
/// * `string`: the stringified value equals the target.
/// * `date`: the value is truthy, parses as a date, and its `YYYY-MM-DD` form
///   lies within the inclusive bounds.
/// * `array`: the value is an array sharing at least one (stringified)
///   element with the target tags.
/// * `boolean`: the value's truthiness equals the target.
/// * `number`: the value coerces to a number within the inclusive bounds.
/// * unknown tags: always `true`.
///
/// # Examples
///
/// ```
/// use frontfilter::core_types::FieldValue;
/// use frontfilter::filtering::{matches_filter, FilterCriterion};
///
/// let rating = FieldValue::from("5");
/// assert!(matches_filter(Some(&rating), &FilterCriterion::number(Some(1.0), Some(10.0))));
///
/// let tags = FieldValue::Array(vec!["a".into(), "b".into()]);
/// assert!(matches_filter(Some(&tags), &FilterCriterion::tags(["b", "c"])));
/// assert!(!matches_filter(Some(&tags), &FilterCriterion::tags(["c"])));
/// ```
pub fn matches_filter(value: Option<&FieldValue>, criterion: &FilterCriterion) -> bool {
    match criterion {
        FilterCriterion::String(target) => to_js_string(value) == *target,
        FilterCriterion::Date(bounds) => matches_date(value, bounds),
        FilterCriterion::Array(tags) => matches_any_tag(value, tags),
        FilterCriterion::Boolean(target) => is_truthy(value) == *target,
        FilterCriterion::Number(bounds) => matches_number(value, bounds),
        FilterCriterion::Unknown { .. } => true,
    }
}

fn matches_date(value: Option<&FieldValue>, bounds: &DateBounds) -> bool {
    let Some(date) = to_date(value) else {
        return false;
    };
    let iso = iso_date(date);
    if bounds.from.as_deref().is_some_and(|from| iso.as_str() < from) {
        return false;
    }
    if bounds.to.as_deref().is_some_and(|to| iso.as_str() > to) {
        return false;
    }
    true
}

fn matches_any_tag(value: Option<&FieldValue>, tags: &[String]) -> bool {
    let Some(FieldValue::Array(items)) = value else {
        return false;
    };
    let present: Vec<String> = items.iter().map(|item| to_js_string(Some(item))).collect();
    tags.iter().any(|tag| present.contains(tag))
}

fn matches_number(value: Option<&FieldValue>, bounds: &NumberBounds) -> bool {
    let Some(n) = to_number(value) else {
        return false;
    };
    if bounds.min.is_some_and(|min| n < min) {
        return false;
    }
    if bounds.max.is_some_and(|max| n > max) {
        return false;
    }
    true
}
