//! The `frontfilter` prelude for convenient library usage.
//!
//! Re-exports the types and functions most callers need to summarize fields,
//! evaluate filters and derive the filter panel.
//!
//! # Example
//!
//! ```
//! use frontfilter::prelude::*;
//! # fn main() -> Result<()> {
//!
//! let template = CollectionTemplate {
//!     name: Some("posts".into()),
//!     fields: vec![FieldDescriptor::new("draft", FieldType::Boolean)],
//! };
//! let config = ConfigBuilder::new().build()?;
//! let panel = build_panel(Some(&template), &[], &ActiveFilters::new(), &config);
//! assert_eq!(panel.map(|p| p.controls.len()), Some(1));
//!
//! # Ok(())
//! # }
//! ```

pub use crate::config::{ConfigBuilder, FilterConfig};
pub use crate::controls::interaction::{apply_edit, clear_all, next_criterion, ControlEdit};
pub use crate::controls::{
    build_control, build_controls, build_panel, filterable_fields, ControlKind, FilterControl,
    FilterPanel,
};
pub use crate::core_types::{CollectionTemplate, FieldDescriptor, FieldType, FieldValue, Record};
pub use crate::errors::{Error, Result};
pub use crate::filtering::{
    matches_filter, ActiveFilters, DateBounds, FilterCriterion, FilterEvents, NumberBounds,
};
pub use crate::summary::{
    date_range, number_range, number_range_with, summarize, unique_string_values, DateRange,
    FieldSummary, NumberRange,
};
pub use crate::{filter_records, run};
