// src/controls/mod.rs

//! Derives the filter panel for a collection: one control per filterable
//! template field, each carrying the summary it needs (options, tags, bounds).
//!
//! Nothing here renders. A UI layer takes a [`FilterPanel`] and draws it, and
//! feeds user edits back through [`interaction`].

use crate::config::FilterConfig;
use crate::core_types::{CollectionTemplate, FieldDescriptor, FieldType, Record};
use crate::filtering::{ActiveFilters, FilterCriterion};
use crate::summary::{date_range, number_range_with, unique_string_values};
use log::debug;
use serde::Serialize;

pub mod interaction;

/// The control a field is shown with, and the data it needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum ControlKind {
    /// A dropdown of distinct values plus "All".
    Select { options: Vec<String> },
    /// Two date inputs constrained to the field's date bounds.
    DateRange { min: String, max: String },
    /// Toggleable tag chips. Only the first few tags are listed.
    Tags {
        visible: Vec<String>,
        hidden_count: usize,
    },
    /// All / True / False.
    Toggle,
    /// Two number inputs with the field's bounds as placeholders.
    NumberRange { min: f64, max: f64 },
}

/// One control of the filter panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterControl {
    pub field: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(flatten)]
    pub kind: ControlKind,
    /// The criterion currently applied to this field, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<FilterCriterion>,
}

/// The whole filter panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterPanel {
    pub controls: Vec<FilterControl>,
    /// Number of fields with an active criterion. "Clear all" is offered when non-zero.
    pub active_count: usize,
}

/// The template fields that can get a control: not `object` typed and not on
/// the exclusion list. Template order is kept.
///
/// ```
/// use frontfilter::config::FilterConfig;
/// use frontfilter::controls::filterable_fields;
/// use frontfilter::core_types::{CollectionTemplate, FieldDescriptor, FieldType};
///
/// let template = CollectionTemplate {
///     name: None,
///     fields: vec![
///         FieldDescriptor::new("title", FieldType::String),
///         FieldDescriptor::new("seo", FieldType::Object),
///         FieldDescriptor::new("tags", FieldType::Array),
///     ],
/// };
/// let names: Vec<_> = filterable_fields(Some(&template), &FilterConfig::default())
///     .into_iter()
///     .map(|f| f.name.as_str())
///     .collect();
/// assert_eq!(names, vec!["tags"]);
/// ```
pub fn filterable_fields<'a>(
    template: Option<&'a CollectionTemplate>,
    config: &FilterConfig,
) -> Vec<&'a FieldDescriptor> {
    let Some(template) = template else {
        return Vec::new();
    };
    template
        .fields
        .iter()
        .filter(|f| f.field_type != FieldType::Object && !config.is_excluded(&f.name))
        .collect()
}

/// Builds the control for one field, or `None` when the field gets no control
/// (a select or tag list with nothing to offer, or a type without a control).
pub fn build_control(
    descriptor: &FieldDescriptor,
    records: &[Record],
    config: &FilterConfig,
) -> Option<ControlKind> {
    let field = descriptor.name.as_str();
    match descriptor.field_type {
        FieldType::String => {
            let options = unique_string_values(records, field);
            (!options.is_empty()).then_some(ControlKind::Select { options })
        }
        FieldType::Date => {
            let range = date_range(records, field);
            Some(ControlKind::DateRange {
                min: range.min,
                max: range.max,
            })
        }
        FieldType::Array => {
            let mut tags = unique_string_values(records, field);
            if tags.is_empty() {
                return None;
            }
            let hidden_count = tags.len().saturating_sub(config.max_visible_tags);
            tags.truncate(config.max_visible_tags);
            Some(ControlKind::Tags {
                visible: tags,
                hidden_count,
            })
        }
        FieldType::Boolean => Some(ControlKind::Toggle),
        FieldType::Number => {
            let range = number_range_with(records, field, config.number_fallback);
            Some(ControlKind::NumberRange {
                min: range.min,
                max: range.max,
            })
        }
        FieldType::Object | FieldType::Unknown(_) => None,
    }
}

/// One control per filterable field, in template order, with no current
/// criterion attached.
pub fn build_controls(
    template: Option<&CollectionTemplate>,
    records: &[Record],
    config: &FilterConfig,
) -> Vec<FilterControl> {
    let controls: Vec<FilterControl> = filterable_fields(template, config)
        .into_iter()
        .filter_map(|descriptor| {
            let kind = build_control(descriptor, records, config)?;
            Some(FilterControl {
                field: descriptor.name.clone(),
                field_type: descriptor.field_type.clone(),
                kind,
                current: None,
            })
        })
        .collect();
    debug!("Built {} filter controls over {} records", controls.len(), records.len());
    controls
}

/// Derives the filter panel for a collection.
///
/// Returns `None` when the template has no filterable fields, in which case no
/// panel should be shown at all.
pub fn build_panel(
    template: Option<&CollectionTemplate>,
    records: &[Record],
    active: &ActiveFilters,
    config: &FilterConfig,
) -> Option<FilterPanel> {
    if filterable_fields(template, config).is_empty() {
        debug!("No filterable fields; no filter panel");
        return None;
    }

    let mut controls = build_controls(template, records, config);
    for control in &mut controls {
        control.current = active.get(&control.field).cloned();
    }

    Some(FilterPanel {
        controls,
        active_count: active.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::core_types::FieldValue;
    use serde_json::json;

    fn template(fields: &[(&str, FieldType)]) -> CollectionTemplate {
        CollectionTemplate {
            name: Some("posts".to_string()),
            fields: fields
                .iter()
                .map(|(n, t)| FieldDescriptor::new(*n, t.clone()))
                .collect(),
        }
    }

    fn posts() -> Vec<Record> {
        vec![
            Record::from_frontmatter([
                ("category", FieldValue::from("news")),
                ("tags", FieldValue::from(json!(["rust", "web"]))),
                ("rating", FieldValue::Number(4.0)),
                ("published", FieldValue::from("2024-02-01")),
            ]),
            Record::from_frontmatter([
                ("category", FieldValue::from("guides")),
                ("tags", FieldValue::from(json!(["rust"]))),
                ("rating", FieldValue::from("2")),
            ]),
        ]
    }

    #[test]
    fn test_no_template_means_no_panel() {
        let panel = build_panel(None, &posts(), &ActiveFilters::new(), &FilterConfig::default());
        assert!(panel.is_none());
    }

    #[test]
    fn test_only_excluded_fields_means_no_panel() {
        let t = template(&[("title", FieldType::String), ("meta", FieldType::Object)]);
        let config = FilterConfig::default();
        let panel = build_panel(Some(&t), &posts(), &ActiveFilters::new(), &config);
        assert!(panel.is_none());
    }

    #[test]
    fn test_controls_follow_template_order_and_types() {
        let t = template(&[
            ("rating", FieldType::Number),
            ("category", FieldType::String),
            ("draft", FieldType::Boolean),
            ("published", FieldType::Date),
            ("tags", FieldType::Array),
        ]);
        let panel = build_panel(Some(&t), &posts(), &ActiveFilters::new(), &FilterConfig::default())
            .unwrap();
        let kinds: Vec<_> = panel.controls.iter().map(|c| c.kind.clone()).collect();
        assert_eq!(
            kinds,
            vec![
                ControlKind::NumberRange { min: 2.0, max: 4.0 },
                ControlKind::Select {
                    options: vec!["guides".into(), "news".into()]
                },
                ControlKind::Toggle,
                ControlKind::DateRange {
                    min: "2024-02-01".into(),
                    max: "2024-02-01".into()
                },
                ControlKind::Tags {
                    visible: vec!["rust".into(), "web".into()],
                    hidden_count: 0
                },
            ]
        );
        assert_eq!(panel.active_count, 0);
    }

    #[test]
    fn test_empty_select_and_tags_are_omitted() {
        let t = template(&[("series", FieldType::String), ("topics", FieldType::Array)]);
        let panel = build_panel(Some(&t), &posts(), &ActiveFilters::new(), &FilterConfig::default())
            .unwrap();
        assert!(panel.controls.is_empty());
    }

    #[test]
    fn test_tag_overflow() {
        let tags: Vec<String> = (0..15).map(|i| format!("t{:02}", i)).collect();
        let records = vec![Record::from_frontmatter([("tags", FieldValue::from(json!(tags)))])];
        let config = ConfigBuilder::new().max_visible_tags(12).build().unwrap();
        let descriptor = FieldDescriptor::new("tags", FieldType::Array);
        let kind = build_control(&descriptor, &records, &config);
        match kind {
            Some(ControlKind::Tags { visible, hidden_count }) => {
                assert_eq!(visible.len(), 12);
                assert_eq!(visible[0], "t00");
                assert_eq!(hidden_count, 3);
            }
            other => panic!("Expected tags control, got {:?}", other),
        }
    }

    #[test]
    fn test_number_control_uses_configured_fallback() {
        let config = ConfigBuilder::new().number_fallback(1.0, 5.0).build().unwrap();
        let kind = build_control(&FieldDescriptor::new("rating", FieldType::Number), &[], &config);
        assert_eq!(kind, Some(ControlKind::NumberRange { min: 1.0, max: 5.0 }));
    }

    #[test]
    fn test_build_controls_without_template_is_empty() {
        assert!(build_controls(None, &posts(), &FilterConfig::default()).is_empty());
    }

    #[test]
    fn test_current_criterion_is_attached() {
        let t = template(&[("category", FieldType::String)]);
        let active: ActiveFilters = [("category", FilterCriterion::string("news"))]
            .into_iter()
            .collect();
        let panel = build_panel(Some(&t), &posts(), &active, &FilterConfig::default()).unwrap();
        assert_eq!(panel.active_count, 1);
        assert_eq!(panel.controls[0].current, Some(FilterCriterion::string("news")));
    }

    #[test]
    fn test_control_serialization() {
        let control = FilterControl {
            field: "draft".to_string(),
            field_type: FieldType::Boolean,
            kind: ControlKind::Toggle,
            current: None,
        };
        assert_eq!(
            serde_json::to_value(&control).unwrap(),
            json!({"field": "draft", "type": "boolean", "control": "toggle"})
        );
    }
}
