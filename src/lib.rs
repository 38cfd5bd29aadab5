//! `frontfilter` derives filter controls from a collection template and
//! filters front-matter records against a set of active criteria.
//!
//! A content collection is described by a [`CollectionTemplate`] (field names
//! and declared types) and holds [`Record`]s whose `frontmatter` carries the
//! user-defined attributes. The library is split in three layers:
//! 1.  **Summarize**: distinct values and numeric/date bounds per field ([`summary`]).
//! 2.  **Match**: evaluate one criterion against one value ([`matches_filter`]) and
//!     a whole [`ActiveFilters`] set against a record.
//! 3.  **Control**: derive the filter panel for a template ([`controls`]) and turn
//!     user edits into filter changes ([`controls::interaction`]).
//!
//! Nothing here errors on data: values that cannot be coerced simply fail to
//! match or are left out of a summary.
//!
//! # Example: Library Usage
//!
//! ```
//! use frontfilter::{filter_records, ActiveFilters, FieldValue, FilterCriterion, Record};
//!
//! let post = |rating: FieldValue, draft: bool| {
//!     Record::from_frontmatter([("rating", rating), ("draft", FieldValue::from(draft))])
//! };
//! let records = vec![
//!     post(FieldValue::from(4.0), false),
//!     post(FieldValue::from("2"), false),
//!     post(FieldValue::from(5.0), true),
//! ];
//!
//! let mut filters = ActiveFilters::new();
//! filters.set("rating", Some(FilterCriterion::number(Some(3.0), None)));
//! filters.set("draft", Some(FilterCriterion::boolean(false)));
//!
//! let matched = filter_records(&records, &filters);
//! assert_eq!(matched.len(), 1);
//! assert_eq!(matched[0].get("rating"), Some(&FieldValue::from(4.0)));
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod controls;
pub mod core_types;
pub mod errors;
pub mod filtering;
pub mod input;
pub mod output;
pub mod prelude;
pub mod summary;

// Re-export key public types for easier use as a library
pub use config::{ConfigBuilder, FilterConfig};
pub use controls::{build_controls, build_panel, FilterControl, FilterPanel};
pub use core_types::{CollectionTemplate, FieldDescriptor, FieldType, FieldValue, Record};
pub use filtering::{matches_filter, ActiveFilters, FilterCriterion, FilterEvents};

use crate::cli::{Commands, ControlsArgs, FilterArgs, SummaryKind, ValuesArgs};
use crate::errors::Result;
use crate::summary::{date_range, number_range_with, unique_string_values};
use log::{debug, info};
use rayon::prelude::*;
use std::io::Write;

/// Keeps the records that pass every active filter, in input order.
///
/// Records are evaluated in parallel; the result is still a subsequence of
/// `records`.
pub fn filter_records<'a>(records: &'a [Record], filters: &ActiveFilters) -> Vec<&'a Record> {
    if filters.is_empty() {
        return records.iter().collect();
    }
    records.par_iter().filter(|record| filters.matches(record)).collect()
}

/// Executes one CLI command.
///
/// Command results go to `out`; the optional match summary goes to `report`.
/// This is the entry point used by the binary, exposed so the whole command
/// flow can be driven from tests or other front ends.
pub fn run(command: Commands, out: &mut dyn Write, report: &mut dyn Write) -> Result<()> {
    match command {
        Commands::Controls(args) => run_controls(args, out),
        Commands::Filter(args) => run_filter(args, out, report),
        Commands::Values(args) => run_values(args, out),
    }
}

fn run_controls(args: ControlsArgs, out: &mut dyn Write) -> Result<()> {
    let config = ConfigBuilder::from_cli(&args.config)?.build()?;
    debug!("Configuration built successfully.");

    let template = input::load_template(&args.template)?;
    let records = input::load_records(&args.records)?;
    let active = match &args.filters_file {
        Some(path) => input::load_filters(path)?,
        None => ActiveFilters::new(),
    };

    let panel = build_panel(Some(&template), &records, &active, &config);
    if panel.is_none() {
        info!("Template has no filterable fields; no filter panel to show.");
    }
    output::write_json(out, &panel)
}

fn run_filter(args: FilterArgs, out: &mut dyn Write, report: &mut dyn Write) -> Result<()> {
    let from_file = args
        .filters_file
        .as_deref()
        .map(input::load_filters)
        .transpose()?;
    let filters = config::merge_filter_sources(&args.filters, from_file)?;
    debug!("Filtering with {} active filters", filters.len());

    let records = input::load_records(&args.records)?;
    let matched = filter_records(&records, &filters);
    info!("Matched {} of {} records", matched.len(), records.len());

    output::write_matches(out, &matched, args.count)?;
    if args.summary {
        output::write_summary(report, matched.len(), records.len(), &filters)?;
    }
    Ok(())
}

fn run_values(args: ValuesArgs, out: &mut dyn Write) -> Result<()> {
    let config = ConfigBuilder::from_cli(&args.config)?.build()?;
    let records = input::load_records(&args.records)?;
    let field = args.field.as_str();
    match args.kind {
        SummaryKind::Strings => output::write_json(out, &unique_string_values(&records, field)),
        SummaryKind::Number => {
            output::write_json(out, &number_range_with(&records, field, config.number_fallback))
        }
        SummaryKind::Date => output::write_json(out, &date_range(&records, field)),
    }
}
