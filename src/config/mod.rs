//! Defines the `FilterConfig` struct that tunes how controls are derived.
//!
//! The defaults reproduce the stock filter panel: a fixed denylist of
//! non-filterable field names, a `{0, 100}` placeholder range for number
//! fields without data, and twelve visible tags per tag control. None of these
//! are domain rules, so all of them can be overridden.

use crate::constants::{DEFAULT_EXCLUDED_FIELDS, DEFAULT_MAX_VISIBLE_TAGS};
use crate::summary::NumberRange;

pub use builder::ConfigBuilder;
mod builder;
mod builder_logic;
pub mod parsing;
mod validation;

pub use validation::merge_filter_sources;

/// Settings for deriving filter controls and summaries.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Field names that never get a control, regardless of their type.
    pub excluded_fields: Vec<String>,
    /// Bounds reported for number fields with no numeric values.
    pub number_fallback: NumberRange,
    /// How many tags a tag control lists before collapsing the rest into a count.
    pub max_visible_tags: usize,
}

impl FilterConfig {
    /// Whether `field` is on the exclusion list.
    pub fn is_excluded(&self, field: &str) -> bool {
        self.excluded_fields.iter().any(|f| f == field)
    }
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            excluded_fields: DEFAULT_EXCLUDED_FIELDS.iter().map(|s| s.to_string()).collect(),
            number_fallback: NumberRange::default(),
            max_visible_tags: DEFAULT_MAX_VISIBLE_TAGS,
        }
    }
}
