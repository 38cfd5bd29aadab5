// src/input/mod.rs

//! Loads templates, records and saved filter sets from disk.
//!
//! Records can come from three layouts:
//! * a JSON file holding an array of records (or a single record object),
//! * a JSON Lines file (`.jsonl` / `.ndjson`), one record per line,
//! * a directory, walked recursively for `.json` files holding one record each.
//!
//! A malformed single input file is an error. In a directory, unreadable or
//! malformed files are skipped with a warning so one bad entry does not hide
//! the rest of the collection.

use crate::constants::JSON_LINES_EXTENSIONS;
use crate::core_types::{CollectionTemplate, Record};
use crate::errors::{io_error_with_path, json_error_with_path, Error, Result};
use crate::filtering::ActiveFilters;
use log::{debug, warn};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    serde_json::from_str(&text).map_err(|e| json_error_with_path(e, path))
}

/// Loads a collection template.
pub fn load_template(path: &Path) -> Result<CollectionTemplate> {
    let template: CollectionTemplate = read_json(path)?;
    debug!(
        "Loaded template {:?} with {} fields from '{}'",
        template.name,
        template.fields.len(),
        path.display()
    );
    Ok(template)
}

/// Loads a saved active filter set (a JSON object of field -> criterion).
pub fn load_filters(path: &Path) -> Result<ActiveFilters> {
    let filters: ActiveFilters = read_json(path)?;
    debug!("Loaded {} active filters from '{}'", filters.len(), path.display());
    Ok(filters)
}

/// Loads a record set from a file or directory. See the module docs for the
/// accepted layouts.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let metadata = fs::metadata(path).map_err(|e| io_error_with_path(e, path))?;
    let records = if metadata.is_dir() {
        load_record_dir(path)?
    } else if is_json_lines(path) {
        load_json_lines(path)?
    } else {
        load_record_document(path)?
    };
    debug!("Loaded {} records from '{}'", records.len(), path.display());
    Ok(records)
}

/// A records file holds either an array of records or a single record. The
/// shape is picked from the first token so a bad element reports its own
/// decode error and position.
fn load_record_document(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    let parsed = if text.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<Record>>(&text)
    } else {
        serde_json::from_str::<Record>(&text).map(|record| vec![record])
    };
    parsed.map_err(|e| json_error_with_path(e, path))
}

fn is_json_lines(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .is_some_and(|ext| JSON_LINES_EXTENSIONS.contains(&ext.as_str()))
}

fn load_json_lines(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path).map_err(|e| io_error_with_path(e, path))?;
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Record>(line).map_err(|e| {
                json_error_with_path(e, format!("{}:{}", path.display(), index + 1))
            })
        })
        .collect()
}

fn load_record_dir(root: &Path) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    let walker = WalkDir::new(root).sort_by_file_name().into_iter();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry under '{}': {}", root.display(), e);
                continue;
            }
        };
        let path = entry.path();
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if !entry.file_type().is_file() || !is_json {
            continue;
        }
        match read_json::<Record>(path) {
            Ok(record) => records.push(record),
            Err(Error::Json { path, source }) => {
                warn!("Skipping malformed record file '{}': {}", path, source);
            }
            Err(e) => warn!("Skipping record file: {}", e),
        }
    }
    Ok(records)
}
