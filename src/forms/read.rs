//! Read resolution: checked checkboxes back to identifiers

use super::events::{FormEvent, FormEventSink};
use super::matcher::match_candidate;
use super::schema::SchemaTable;
use crate::error::Result;
use crate::pdf::{Widget, WidgetKind};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::Display;

lazy_static::lazy_static! {
    /// Printed section numbers embedded in field names, e.g. `213.1`
    static ref SECTION_NUMBER: Regex = Regex::new(r"\d{3}\.\d+").unwrap();
}

/// Audit record of one checkbox
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckboxRecord {
    pub name: String,
    /// 1-based page number
    pub page: usize,
    pub checked: bool,
}

/// What a read found in a filled form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub success: bool,
    pub selected_interrogatories: Vec<String>,
    /// Non-empty text values by simplified field name
    pub form_data: BTreeMap<String, String>,
    pub all_checkboxes: Vec<CheckboxRecord>,
    pub error: Option<String>,
}

impl ExtractionResult {
    /// A failed read with empty collections
    pub fn failure(error: impl Display) -> Self {
        Self {
            success: false,
            selected_interrogatories: Vec::new(),
            form_data: BTreeMap::new(),
            all_checkboxes: Vec::new(),
            error: Some(error.to_string()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Text after the last `[`, with trailing `]` removed; the whole name if it has no `[`
pub fn simplified_key(field_name: &str) -> &str {
    match field_name.rfind('[') {
        Some(pos) => field_name[pos + 1..].trim_end_matches(']'),
        None => field_name,
    }
}

/// First `ddd.d` section number in a field name
pub fn section_number(field_name: &str) -> Option<&str> {
    SECTION_NUMBER.find(field_name).map(|m| m.as_str())
}

/// Resolve a widget snapshot into an [`ExtractionResult`].
///
/// Identifiers are reported once each, sorted by the template's ordering rule.
/// Templates with `section_fallback` also accept a `ddd.d` section number
/// found in the name of a box their read table does not cover.
/// With `debug` set, every widget is logged at debug level.
pub fn read_widgets(
    schema: &SchemaTable,
    widgets: &[Widget],
    sink: &mut dyn FormEventSink,
    debug: bool,
) -> ExtractionResult {
    let mut selected: Vec<String> = Vec::new();
    let mut form_data = BTreeMap::new();
    let mut all_checkboxes = Vec::new();

    for widget in widgets {
        if debug {
            tracing::debug!(
                page = widget.page + 1,
                field = %widget.name,
                kind = widget.kind.as_str(),
                checked = widget.checked,
                value = ?widget.value,
                "Widget"
            );
        }

        match widget.kind {
            WidgetKind::Checkbox => {
                all_checkboxes.push(CheckboxRecord {
                    name: widget.name.clone(),
                    page: widget.page + 1,
                    checked: widget.checked,
                });
                if !widget.checked {
                    continue;
                }

                let identifier = if let Some((_, entry)) = match_candidate(&widget.name, schema.read)
                {
                    Some(entry.id.to_string())
                } else if let Some(number) = schema
                    .section_fallback
                    .then(|| section_number(&widget.name))
                    .flatten()
                {
                    sink.emit(FormEvent::SectionNumberFallback {
                        field: widget.name.clone(),
                        identifier: number.to_string(),
                    });
                    Some(number.to_string())
                } else {
                    sink.emit(FormEvent::UnmappedCheckbox {
                        field: widget.name.clone(),
                        page: widget.page + 1,
                    });
                    None
                };

                if let Some(identifier) = identifier {
                    if !selected.contains(&identifier) {
                        selected.push(identifier);
                    }
                }
            }
            WidgetKind::Text => {
                if let Some(value) = widget.value.as_deref().filter(|v| !v.is_empty()) {
                    form_data.insert(simplified_key(&widget.name).to_string(), value.to_string());
                }
            }
            WidgetKind::Other => {}
        }
    }

    schema.ordering.sort(&mut selected);

    ExtractionResult {
        success: true,
        selected_interrogatories: selected,
        form_data,
        all_checkboxes,
        error: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("F[0].Page1[0].Cell3[0].TextField3[0]", "0")]
    #[case("F[0].Page1[0].Email_ft", "0].Email_ft")]
    #[case("attorney_name", "attorney_name")]
    #[case("Field[Name]]", "Name")]
    fn test_simplified_key(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(simplified_key(name), expected);
    }

    #[test]
    fn test_section_number() {
        assert_eq!(section_number("Page6[0].List20[0].#area[0].213.1"), Some("213.1"));
        assert_eq!(section_number("Page6[0].12.1"), None);
    }

    #[test]
    fn test_failure_has_empty_collections() {
        let result = ExtractionResult::failure("Invalid PDF file: Not a valid PDF file");
        assert!(!result.success);
        assert!(result.selected_interrogatories.is_empty());
        assert!(result.form_data.is_empty());
        assert!(result.all_checkboxes.is_empty());

        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["error"], "Invalid PDF file: Not a valid PDF file");
    }

    #[test]
    fn test_success_serializes_null_error() {
        let result = ExtractionResult {
            success: true,
            selected_interrogatories: vec![],
            form_data: BTreeMap::new(),
            all_checkboxes: vec![],
            error: None,
        };
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert!(json["error"].is_null());
    }
}
