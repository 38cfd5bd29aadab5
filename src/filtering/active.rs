// src/filtering/active.rs

//! The set of filters currently applied to a collection.

use crate::core_types::Record;
use crate::filtering::criterion::FilterCriterion;
use crate::filtering::predicate::matches_filter;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Receiver for the two events a filter panel emits.
///
/// [`ActiveFilters`] implements this trait, so control edits can be applied to
/// a set directly. UI layers can implement it to forward events elsewhere.
pub trait FilterEvents {
    /// A control's selection changed. `None` clears the field's constraint.
    fn on_filter_change(&mut self, field: &str, criterion: Option<FilterCriterion>);
    /// Every constraint should be cleared.
    fn on_clear_filters(&mut self);
}

/// Field name to criterion, at most one criterion per field.
///
/// A field with no entry is unconstrained. No-op criteria (see
/// [`FilterCriterion::is_noop`]) are never stored: setting one removes the
/// field, so a cleared field is indistinguishable from one never set.
///
/// # Examples
///
/// ```
/// use frontfilter::filtering::{ActiveFilters, FilterCriterion};
///
/// let mut filters = ActiveFilters::new();
/// filters.set("rating", Some(FilterCriterion::number(Some(3.0), None)));
/// assert_eq!(filters.len(), 1);
///
/// // Clearing both bounds removes the field entirely.
/// filters.set("rating", Some(FilterCriterion::number(None, None)));
/// assert!(filters.is_empty());
/// assert_eq!(filters, ActiveFilters::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(
    from = "BTreeMap<String, FilterCriterion>",
    into = "BTreeMap<String, FilterCriterion>"
)]
pub struct ActiveFilters {
    filters: BTreeMap<String, FilterCriterion>,
}

impl ActiveFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears the criterion for `field`.
    pub fn set(&mut self, field: &str, criterion: Option<FilterCriterion>) {
        match criterion {
            Some(c) if !c.is_noop() => {
                debug!("Filter on '{}' set to {:?}", field, c);
                self.filters.insert(field.to_string(), c);
            }
            _ => {
                if self.filters.remove(field).is_some() {
                    debug!("Filter on '{}' cleared", field);
                }
            }
        }
    }

    pub fn get(&self, field: &str) -> Option<&FilterCriterion> {
        self.filters.get(field)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.filters.contains_key(field)
    }

    /// Removes every criterion.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// The number of constrained fields.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Iterates the criteria in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterCriterion)> {
        self.filters.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Whether `record` passes every active criterion.
    pub fn matches(&self, record: &Record) -> bool {
        self.filters
            .iter()
            .all(|(field, criterion)| matches_filter(record.get(field), criterion))
    }
}

impl FilterEvents for ActiveFilters {
    fn on_filter_change(&mut self, field: &str, criterion: Option<FilterCriterion>) {
        self.set(field, criterion);
    }

    fn on_clear_filters(&mut self) {
        self.clear();
    }
}

impl<S: Into<String>> FromIterator<(S, FilterCriterion)> for ActiveFilters {
    fn from_iter<I: IntoIterator<Item = (S, FilterCriterion)>>(iter: I) -> Self {
        let mut filters = ActiveFilters::new();
        for (field, criterion) in iter {
            let field: String = field.into();
            filters.set(&field, Some(criterion));
        }
        filters
    }
}

impl From<BTreeMap<String, FilterCriterion>> for ActiveFilters {
    fn from(map: BTreeMap<String, FilterCriterion>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ActiveFilters> for BTreeMap<String, FilterCriterion> {
    fn from(filters: ActiveFilters) -> Self {
        filters.filters
    }
}
