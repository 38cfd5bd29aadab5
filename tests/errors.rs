// tests/errors.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, frontfilter_cmd, POSTS_RECORDS, POSTS_TEMPLATE};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_error_missing_records_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;

    frontfilter_cmd()
        .args(["filter", "-r", "does_not_exist.json"])
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("I/O error accessing path"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_malformed_records_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let records = create_file(temp.path(), "posts.json", "[{\"frontmatter\": ")?;

    frontfilter_cmd()
        .arg("filter")
        .arg("-r")
        .arg(&records)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON in"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_filter_argument_without_equals() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    frontfilter_cmd()
        .arg("filter")
        .arg("-r")
        .arg(&records)
        .arg("-f")
        .arg("draft")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid filter 'draft'"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_filter_argument_conflicts_with_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;
    let filters = create_file(
        temp.path(),
        "filters.json",
        r#"{"draft": {"type": "boolean", "value": true}}"#,
    )?;

    frontfilter_cmd()
        .arg("filter")
        .arg("-r")
        .arg(&records)
        .arg("-F")
        .arg(&filters)
        .arg("-f")
        .arg(r#"draft={"type":"boolean","value":false}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Conflicting options"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_inverted_number_fallback() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .arg("--number-fallback")
        .arg("10:1")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid value for --number-fallback"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_zero_visible_tags() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .arg("--max-visible-tags")
        .arg("0")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("must be at least 1"));

    temp.close()?;
    Ok(())
}

#[test]
fn test_error_missing_subcommand() {
    frontfilter_cmd().assert().failure();
}
