// src/output/mod.rs

//! Writes command results: JSON documents on the main writer and the optional
//! one-line match summary on the report writer.

use crate::core_types::Record;
use crate::errors::{Error, Result};
use crate::filtering::ActiveFilters;
use log::debug;
use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(writer: &mut dyn Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value).map_err(Error::Serialize)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Writes the records that passed the filters, or just their count.
pub fn write_matches(writer: &mut dyn Write, matches: &[&Record], count_only: bool) -> Result<()> {
    debug!("Writing {} matching records (count only: {})", matches.len(), count_only);
    if count_only {
        writeln!(writer, "{}", matches.len())?;
        writer.flush()?;
        Ok(())
    } else {
        write_json(writer, matches)
    }
}

/// Writes a one-line summary of a filter run, e.g.
/// `Matched 3 of 10 records (2 active filters: draft, tags)`.
pub fn write_summary(
    writer: &mut dyn Write,
    matched: usize,
    total: usize,
    filters: &ActiveFilters,
) -> Result<()> {
    let noun = if total == 1 { "record" } else { "records" };
    let fields: Vec<&str> = filters.iter().map(|(field, _)| field).collect();
    match fields.len() {
        0 => writeln!(writer, "Matched {} of {} {} (no active filters)", matched, total, noun)?,
        1 => writeln!(
            writer,
            "Matched {} of {} {} (1 active filter: {})",
            matched, total, noun, fields[0]
        )?,
        n => writeln!(
            writer,
            "Matched {} of {} {} ({} active filters: {})",
            matched,
            total,
            noun,
            n,
            fields.join(", ")
        )?,
    }
    Ok(())
}
