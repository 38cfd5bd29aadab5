// src/constants.rs

/// Field names that never get a filter control (titles and images are unique
/// per record or not meaningful to filter on).
pub const DEFAULT_EXCLUDED_FIELDS: &[&str] = &["title", "image", "cover", "thumbnail", "heroImage"];

/// Lower placeholder bound for a number control when the field has no numeric values.
pub const DEFAULT_NUMBER_RANGE_MIN: f64 = 0.0;

/// Upper placeholder bound for a number control when the field has no numeric values.
pub const DEFAULT_NUMBER_RANGE_MAX: f64 = 100.0;

/// How many tags a tag control shows before collapsing the rest into a count.
pub const DEFAULT_MAX_VISIBLE_TAGS: usize = 12;

/// Extensions treated as JSON Lines when loading records from a single file.
pub const JSON_LINES_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];
