// tests/cli_controls.rs

mod common;

use assert_cmd::prelude::*;
use common::{create_file, frontfilter_cmd, POSTS_RECORDS, POSTS_TEMPLATE};
use predicates::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

#[test]
fn test_controls_for_posts() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    let output = frontfilter_cmd()
        .arg("controls")
        .arg("--template")
        .arg(&template)
        .arg("--records")
        .arg(&records)
        .output()?;
    assert!(output.status.success());

    let panel: Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(
        panel,
        json!({
            "controls": [
                {"field": "category", "type": "string", "control": "select", "options": ["guides", "news"]},
                {"field": "published", "type": "date", "control": "date_range", "min": "2024-01-10", "max": "2024-03-15"},
                {"field": "tags", "type": "array", "control": "tags", "visible": ["rust", "web"], "hidden_count": 0},
                {"field": "draft", "type": "boolean", "control": "toggle"},
                {"field": "rating", "type": "number", "control": "number_range", "min": 2.0, "max": 4.0}
            ],
            "active_count": 0
        })
    );

    temp.close()?;
    Ok(())
}

#[test]
fn test_controls_mark_active_filters() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;
    let filters = create_file(
        temp.path(),
        "filters.json",
        r#"{"draft": {"type": "boolean", "value": false}, "tags": {"type": "array", "value": []}}"#,
    )?;

    let output = frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .arg("-F")
        .arg(&filters)
        .output()?;
    assert!(output.status.success());

    let panel: Value = serde_json::from_slice(&output.stdout)?;
    // The empty tag list is a no-op and is dropped on load.
    assert_eq!(panel["active_count"], json!(1));
    let draft = panel["controls"]
        .as_array()
        .and_then(|controls| controls.iter().find(|c| c["field"] == "draft"))
        .cloned()
        .unwrap_or(Value::Null);
    assert_eq!(draft["current"], json!({"type": "boolean", "value": false}));

    temp.close()?;
    Ok(())
}

#[test]
fn test_controls_exclusions_and_tag_limit() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    let output = frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .arg("-x")
        .arg("category")
        .arg("--max-visible-tags")
        .arg("1")
        .output()?;
    assert!(output.status.success());

    let panel: Value = serde_json::from_slice(&output.stdout)?;
    let fields: Vec<&str> = panel["controls"]
        .as_array()
        .map(|controls| controls.iter().filter_map(|c| c["field"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(fields, vec!["published", "tags", "draft", "rating"]);
    assert_eq!(panel["controls"][1]["visible"], json!(["rust"]));
    assert_eq!(panel["controls"][1]["hidden_count"], json!(1));

    temp.close()?;
    Ok(())
}

#[test]
fn test_controls_no_default_excludes_shows_title() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(temp.path(), "template.json", POSTS_TEMPLATE)?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .arg("--no-default-excludes")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""field": "title""#));

    temp.close()?;
    Ok(())
}

#[test]
fn test_controls_without_filterable_fields_prints_null() -> Result<(), Box<dyn std::error::Error>> {
    let temp = tempdir()?;
    let template = create_file(
        temp.path(),
        "template.json",
        r#"{"fields": [{"name": "title", "type": "string"}, {"name": "seo", "type": "object"}]}"#,
    )?;
    let records = create_file(temp.path(), "posts.json", POSTS_RECORDS)?;

    frontfilter_cmd()
        .arg("controls")
        .arg("-t")
        .arg(&template)
        .arg("-r")
        .arg(&records)
        .assert()
        .success()
        .stdout("null\n");

    temp.close()?;
    Ok(())
}
