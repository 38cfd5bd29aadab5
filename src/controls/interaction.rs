// src/controls/interaction.rs

//! What each control does when the user edits it.
//!
//! Every edit produces the field's next criterion from its current one, and an
//! edit that leaves the control empty produces `None`, which clears the field.

use crate::filtering::{ActiveFilters, DateBounds, FilterCriterion, FilterEvents, NumberBounds};

/// A single user edit on a control.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlEdit {
    /// Picked an option from a select. `""` is "All".
    Select(String),
    /// Changed the lower date input. `""` empties it.
    DateFrom(String),
    /// Changed the upper date input. `""` empties it.
    DateTo(String),
    /// Clicked a tag chip.
    ToggleTag(String),
    /// Picked All (`None`), True or False.
    Boolean(Option<bool>),
    /// Changed the lower number input. `None` empties it.
    NumberMin(Option<f64>),
    /// Changed the upper number input. `None` empties it.
    NumberMax(Option<f64>),
}

/// Computes a field's next criterion after `edit`.
///
/// The other half of a range is carried over from `current` when `current`
/// is a criterion of the same kind, and treated as empty otherwise.
///
/// ```
/// use frontfilter::controls::interaction::{next_criterion, ControlEdit};
/// use frontfilter::filtering::FilterCriterion;
///
/// let current = FilterCriterion::tags(["rust"]);
/// let next = next_criterion(Some(&current), &ControlEdit::ToggleTag("web".into()));
/// assert_eq!(next, Some(FilterCriterion::tags(["rust", "web"])));
///
/// // Deselecting the last tag clears the field.
/// let next = next_criterion(Some(&current), &ControlEdit::ToggleTag("rust".into()));
/// assert_eq!(next, None);
/// ```
pub fn next_criterion(
    current: Option<&FilterCriterion>,
    edit: &ControlEdit,
) -> Option<FilterCriterion> {
    let next = match edit {
        ControlEdit::Select(value) => FilterCriterion::string(value.as_str()),
        ControlEdit::DateFrom(from) => {
            let to = current_date_bounds(current).to;
            FilterCriterion::date(Some(from.as_str()), to.as_deref())
        }
        ControlEdit::DateTo(to) => {
            let from = current_date_bounds(current).from;
            FilterCriterion::date(from.as_deref(), Some(to.as_str()))
        }
        ControlEdit::ToggleTag(tag) => {
            let mut tags = match current {
                Some(FilterCriterion::Array(tags)) => tags.clone(),
                _ => Vec::new(),
            };
            if tags.contains(tag) {
                tags.retain(|t| t != tag);
            } else {
                tags.push(tag.clone());
            }
            FilterCriterion::Array(tags)
        }
        ControlEdit::Boolean(value) => FilterCriterion::Boolean((*value)?),
        ControlEdit::NumberMin(min) => {
            let max = current_number_bounds(current).max;
            FilterCriterion::number(*min, max)
        }
        ControlEdit::NumberMax(max) => {
            let min = current_number_bounds(current).min;
            FilterCriterion::number(min, *max)
        }
    };
    (!next.is_noop()).then_some(next)
}

fn current_date_bounds(current: Option<&FilterCriterion>) -> DateBounds {
    match current {
        Some(FilterCriterion::Date(bounds)) => bounds.clone(),
        _ => DateBounds::default(),
    }
}

fn current_number_bounds(current: Option<&FilterCriterion>) -> NumberBounds {
    match current {
        Some(FilterCriterion::Number(bounds)) => *bounds,
        _ => NumberBounds::default(),
    }
}

/// Applies `edit` to `field` and reports the outcome through `events`.
pub fn apply_edit<E: FilterEvents + ?Sized>(
    events: &mut E,
    field: &str,
    current: Option<&FilterCriterion>,
    edit: &ControlEdit,
) {
    events.on_filter_change(field, next_criterion(current, edit));
}

/// The "Clear all" action.
pub fn clear_all<E: FilterEvents + ?Sized>(events: &mut E) {
    events.on_clear_filters();
}

impl ActiveFilters {
    /// Applies a control edit to this set, reading the field's current criterion from it.
    ///
    /// ```
    /// use frontfilter::controls::interaction::ControlEdit;
    /// use frontfilter::filtering::{ActiveFilters, FilterCriterion};
    ///
    /// let mut filters = ActiveFilters::new();
    /// filters.apply_edit("rating", &ControlEdit::NumberMin(Some(3.0)));
    /// filters.apply_edit("rating", &ControlEdit::NumberMax(Some(5.0)));
    /// assert_eq!(filters.get("rating"), Some(&FilterCriterion::number(Some(3.0), Some(5.0))));
    ///
    /// filters.apply_edit("rating", &ControlEdit::NumberMin(None));
    /// filters.apply_edit("rating", &ControlEdit::NumberMax(None));
    /// assert!(filters.is_empty());
    /// ```
    pub fn apply_edit(&mut self, field: &str, edit: &ControlEdit) {
        let next = next_criterion(self.get(field), edit);
        self.set(field, next);
    }
}
