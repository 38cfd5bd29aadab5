// src/config/validation.rs

use super::parsing::parse_filter_arg;
use crate::errors::{ConfigError, Result};
use crate::filtering::ActiveFilters;

/// Combines a filter set loaded from a file with `FIELD=JSON` arguments.
///
/// Repeated arguments for one field replace each other, the last one wins.
/// A field constrained both by the file and by an argument is rejected as a
/// conflict rather than silently overriding one of them.
pub fn merge_filter_sources(
    args: &[String],
    from_file: Option<ActiveFilters>,
) -> Result<ActiveFilters> {
    let mut filters = from_file.unwrap_or_default();
    let file_fields: Vec<String> = filters.iter().map(|(f, _)| f.to_string()).collect();

    for arg in args {
        let (field, criterion) = parse_filter_arg(arg)?;
        if file_fields.contains(&field) {
            return Err(ConfigError::Conflict {
                option1: format!("--filter {}", field),
                option2: "--filters-file".to_string(),
            }
            .into());
        }
        filters.set(&field, Some(criterion));
    }
    Ok(filters)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use crate::filtering::FilterCriterion;

    #[test]
    fn test_later_argument_wins() -> Result<()> {
        let args = vec![
            r#"draft={"type":"boolean","value":true}"#.to_string(),
            r#"draft={"type":"boolean","value":false}"#.to_string(),
        ];
        let filters = merge_filter_sources(&args, None)?;
        assert_eq!(filters.get("draft"), Some(&FilterCriterion::boolean(false)));
        Ok(())
    }

    #[test]
    fn test_noop_argument_is_dropped() -> Result<()> {
        let args = vec![r#"tags={"type":"array","value":[]}"#.to_string()];
        assert!(merge_filter_sources(&args, None)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_conflict_with_file() {
        let file: ActiveFilters = [("draft", FilterCriterion::boolean(true))].into_iter().collect();
        let args = vec![r#"draft={"type":"boolean","value":false}"#.to_string()];
        let result = merge_filter_sources(&args, Some(file));
        assert!(matches!(result, Err(Error::Config(ConfigError::Conflict { .. }))));
    }

    #[test]
    fn test_file_and_arguments_combine() -> Result<()> {
        let file: ActiveFilters = [("draft", FilterCriterion::boolean(true))].into_iter().collect();
        let args = vec![r#"category={"type":"string","value":"news"}"#.to_string()];
        let filters = merge_filter_sources(&args, Some(file))?;
        assert_eq!(filters.len(), 2);
        Ok(())
    }
}
