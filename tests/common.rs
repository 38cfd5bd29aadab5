// tests/common.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

// Helper function to get the binary command
#[allow(dead_code)] // This is used by many integration tests, but not all.
pub fn frontfilter_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("frontfilter"))
}

/// A blog-like collection template covering every field type.
#[allow(dead_code)]
pub const POSTS_TEMPLATE: &str = r#"{
  "name": "posts",
  "fields": [
    {"name": "title", "type": "string"},
    {"name": "category", "type": "string"},
    {"name": "published", "type": "date"},
    {"name": "tags", "type": "array"},
    {"name": "draft", "type": "boolean"},
    {"name": "rating", "type": "number"},
    {"name": "seo", "type": "object"}
  ]
}"#;

/// Four records matching [`POSTS_TEMPLATE`], with a few messy values.
#[allow(dead_code)]
pub const POSTS_RECORDS: &str = r#"[
  {"slug": "intro", "frontmatter": {"title": "Intro", "category": "news", "published": "2024-01-10", "tags": ["rust", "web"], "draft": false, "rating": 4}},
  {"slug": "guide", "frontmatter": {"title": "Guide", "category": "guides", "published": "2024-03-15T09:30:00Z", "tags": ["rust"], "draft": false, "rating": "2"}},
  {"slug": "wip", "frontmatter": {"title": "WIP", "category": "news", "published": "not a date", "tags": [], "draft": true, "rating": "n/a"}},
  {"slug": "bare", "frontmatter": {}}
]"#;

/// Writes `content` to `relative_path` under `dir_path`, creating parents.
#[allow(dead_code)]
pub fn create_file(
    dir_path: &Path,
    relative_path: &str,
    content: &str,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let file_path = dir_path.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}
