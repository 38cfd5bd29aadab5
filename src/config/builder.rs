use super::{
    builder_logic::{resolve_excluded_fields, validate_builder_options},
    parsing::parse_number_fallback,
    FilterConfig,
};
use crate::cli::ConfigArgs;
use crate::constants::DEFAULT_MAX_VISIBLE_TAGS;
use crate::errors::Result;
use crate::summary::NumberRange;

/// Builds a [`FilterConfig`], either programmatically or from CLI arguments.
///
/// # Examples
///
/// ```
/// use frontfilter::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .exclude_field("slug")
///     .max_visible_tags(5)
///     .build()
///     .unwrap();
/// assert!(config.is_excluded("slug"));
/// assert!(config.is_excluded("title"));
/// assert_eq!(config.max_visible_tags, 5);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    pub(super) extra_excluded: Vec<String>,
    pub(super) replace_default_excludes: bool,
    pub(super) number_fallback: Option<NumberRange>,
    pub(super) max_visible_tags: Option<usize>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps the shared command-line options onto a builder.
    pub fn from_cli(args: &ConfigArgs) -> Result<Self> {
        let mut builder = Self::new().default_excludes(!args.no_default_excludes);
        if let Some(fields) = &args.exclude_fields {
            for field in fields {
                builder = builder.exclude_field(field);
            }
        }
        if let Some(raw) = &args.number_fallback {
            let range = parse_number_fallback(raw)?;
            builder = builder.number_fallback(range.min, range.max);
        }
        if let Some(count) = args.max_visible_tags {
            builder = builder.max_visible_tags(count);
        }
        Ok(builder)
    }

    /// Adds a field name to the exclusion list.
    pub fn exclude_field(mut self, field: impl Into<String>) -> Self {
        self.extra_excluded.push(field.into());
        self
    }

    /// Whether the default exclusion list applies (it does unless turned off).
    pub fn default_excludes(mut self, enabled: bool) -> Self {
        self.replace_default_excludes = !enabled;
        self
    }

    /// Placeholder bounds for number fields without numeric values.
    pub fn number_fallback(mut self, min: f64, max: f64) -> Self {
        self.number_fallback = Some(NumberRange { min, max });
        self
    }

    pub fn max_visible_tags(mut self, count: usize) -> Self {
        self.max_visible_tags = Some(count);
        self
    }

    /// Validates the options and produces the configuration.
    pub fn build(self) -> Result<FilterConfig> {
        validate_builder_options(&self)?;
        let config = FilterConfig {
            excluded_fields: resolve_excluded_fields(
                self.extra_excluded,
                self.replace_default_excludes,
            ),
            number_fallback: self.number_fallback.unwrap_or_default(),
            max_visible_tags: self.max_visible_tags.unwrap_or(DEFAULT_MAX_VISIBLE_TAGS),
        };
        log::debug!("Built filter configuration: {:?}", config);
        Ok(config)
    }
}
