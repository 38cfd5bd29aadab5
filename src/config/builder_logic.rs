// src/config/builder_logic.rs

use super::ConfigBuilder;
use crate::constants::DEFAULT_EXCLUDED_FIELDS;
use crate::errors::{ConfigError, Result};

/// Validates combinations of options on the `ConfigBuilder`.
pub(super) fn validate_builder_options(builder: &ConfigBuilder) -> Result<()> {
    if let Some(range) = builder.number_fallback {
        if !range.min.is_finite() || !range.max.is_finite() {
            return Err(ConfigError::InvalidValue {
                option: "--number-fallback".to_string(),
                reason: "bounds must be finite numbers".to_string(),
            }
            .into());
        }
        if range.min > range.max {
            return Err(ConfigError::InvalidValue {
                option: "--number-fallback".to_string(),
                reason: format!("min ({}) is greater than max ({})", range.min, range.max),
            }
            .into());
        }
    }
    if builder.max_visible_tags == Some(0) {
        return Err(ConfigError::InvalidValue {
            option: "--max-visible-tags".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Produces the final exclusion list: the defaults (unless replaced) followed
/// by the extra names, without duplicates.
pub(super) fn resolve_excluded_fields(extra: Vec<String>, replace_defaults: bool) -> Vec<String> {
    let defaults = DEFAULT_EXCLUDED_FIELDS
        .iter()
        .filter(|_| !replace_defaults)
        .map(|s| s.to_string());
    let mut fields: Vec<String> = Vec::new();
    for field in defaults.chain(extra) {
        if !field.is_empty() && !fields.contains(&field) {
            fields.push(field);
        }
    }
    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_dedups_and_keeps_order() {
        let fields = resolve_excluded_fields(vec!["slug".into(), "title".into(), "".into()], false);
        assert_eq!(
            fields,
            vec!["title", "image", "cover", "thumbnail", "heroImage", "slug"]
        );
    }

    #[test]
    fn test_resolve_replacing_defaults() {
        let fields = resolve_excluded_fields(vec!["slug".into()], true);
        assert_eq!(fields, vec!["slug"]);
    }

    #[test]
    fn test_infinite_fallback_is_rejected() {
        let builder = ConfigBuilder::new().number_fallback(f64::NEG_INFINITY, 1.0);
        assert!(validate_builder_options(&builder).is_err());
    }
}
