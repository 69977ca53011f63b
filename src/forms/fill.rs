//! Fill resolution: requested identifiers to checkboxes, intake values to text widgets

use super::events::{FormEvent, FormEventSink};
use super::intake::IntakeData;
use super::matcher::match_candidate;
use super::schema::{FillEntry, SchemaTable, TextEntry};
use crate::error::Result;
use crate::pdf::{FormDocument, Widget, WidgetKind};
use serde::Serialize;

/// Outcome of filling one document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FillReport {
    pub template: &'static str,
    /// Checkboxes checked
    pub checked: usize,
    /// Text widgets given a value
    pub text_filled: usize,
    /// Values stamped at fixed anchors
    pub stamped: usize,
    /// Requested identifiers with no fill entry on this template
    pub unmapped: Vec<String>,
    /// Identifiers whose pattern matched no checkbox
    pub unresolved: Vec<String>,
}

/// Split requested identifiers into fill candidates and unmapped identifiers.
///
/// Candidates follow the table's declaration order, each identifier once.
/// Unmapped identifiers keep their input order, each once.
pub fn checkbox_candidates(
    schema: &SchemaTable,
    requested: &[String],
) -> (Vec<FillEntry>, Vec<String>) {
    let candidates = schema
        .fill
        .iter()
        .filter(|entry| requested.iter().any(|id| id == entry.id))
        .fold(Vec::<FillEntry>::new(), |mut acc, entry| {
            if !acc.iter().any(|c| c.id == entry.id) {
                acc.push(*entry);
            }
            acc
        });

    let mut unmapped: Vec<String> = Vec::new();
    for id in requested {
        if !schema.is_fillable(id) && !unmapped.contains(id) {
            unmapped.push(id.clone());
        }
    }

    (candidates, unmapped)
}

/// Check one box per requested identifier.
///
/// Widgets are visited in enumeration order; a matched candidate is removed
/// so its pattern cannot check a second widget in this call.
pub fn check_boxes<D: FormDocument + ?Sized>(
    doc: &mut D,
    widgets: &[Widget],
    schema: &SchemaTable,
    requested: &[String],
    sink: &mut dyn FormEventSink,
    report: &mut FillReport,
) -> Result<()> {
    let (mut remaining, unmapped) = checkbox_candidates(schema, requested);

    for identifier in &unmapped {
        sink.emit(FormEvent::UnmappedIdentifier {
            template: schema.name,
            identifier: identifier.clone(),
        });
    }
    report.unmapped = unmapped;

    for widget in widgets.iter().filter(|w| w.kind == WidgetKind::Checkbox) {
        if remaining.is_empty() {
            break;
        }
        let Some((index, entry)) = match_candidate(&widget.name, &remaining) else {
            continue;
        };
        let entry = *entry;

        doc.set_checked(widget, true)?;
        remaining.remove(index);
        report.checked += 1;
        sink.emit(FormEvent::Checked {
            identifier: entry.id.to_string(),
            field: widget.name.clone(),
            page: widget.page + 1,
        });
    }

    for entry in remaining {
        sink.emit(FormEvent::UnresolvedPattern {
            identifier: entry.id.to_string(),
            pattern: entry.pattern,
        });
        report.unresolved.push(entry.id.to_string());
    }

    Ok(())
}

/// Set text widgets from intake data.
///
/// Only keys with a non-empty value become candidates, and each fills at most
/// one widget.
pub fn fill_text_widgets<D: FormDocument + ?Sized>(
    doc: &mut D,
    widgets: &[Widget],
    schema: &SchemaTable,
    entries: &[TextEntry],
    intake: &IntakeData,
    sink: &mut dyn FormEventSink,
    report: &mut FillReport,
) -> Result<()> {
    let mut remaining: Vec<(TextEntry, String)> = entries
        .iter()
        .filter_map(|entry| {
            intake
                .text_value(schema, entry.key)
                .map(|value| (*entry, value))
        })
        .collect();

    for widget in widgets.iter().filter(|w| w.kind == WidgetKind::Text) {
        if remaining.is_empty() {
            break;
        }
        let patterns: Vec<TextEntry> = remaining.iter().map(|(e, _)| *e).collect();
        let Some((index, _)) = match_candidate(&widget.name, &patterns) else {
            continue;
        };
        let (entry, value) = remaining.remove(index);

        doc.set_text(widget, &value)?;
        report.text_filled += 1;
        sink.emit(FormEvent::TextFilled {
            key: entry.key,
            field: widget.name.clone(),
            page: widget.page + 1,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::templates::{disc001, disc002};
    use crate::pdf::MemoryForm;

    fn ids(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_candidates_follow_declaration_order() {
        let (candidates, unmapped) =
            checkbox_candidates(&disc001::SCHEMA, &ids(&["6.2", "1", "6.2", "99", "x", "99"]));
        let order: Vec<&str> = candidates.iter().map(|c| c.id).collect();
        assert_eq!(order, vec!["1", "6.2"]);
        assert_eq!(unmapped, vec!["99", "x"]);
    }

    #[test]
    fn test_check_boxes_consumes_pattern_once() {
        let mut doc = MemoryForm::new(2);
        doc.add_checkbox(0, "F[0].Page1[0].Identity[0]")
            .add_checkbox(1, "F[0].Page2[0].Identity[0]");
        let widgets = doc.widgets().unwrap();
        let mut report = FillReport::default();
        let mut events: Vec<FormEvent> = Vec::new();

        check_boxes(
            &mut doc,
            &widgets,
            &disc001::SCHEMA,
            &ids(&["1"]),
            &mut events,
            &mut report,
        )
        .unwrap();

        assert_eq!(report.checked, 1);
        assert_eq!(doc.checked_names(), vec!["F[0].Page1[0].Identity[0]"]);
    }

    #[test]
    fn test_text_widget_skips_empty_values() {
        let mut doc = MemoryForm::new(1);
        doc.add_text(0, "F[0].Page1[0].Phone_ft[0]")
            .add_text(0, "F[0].Page1[0].Fax_ft[0]");
        let widgets = doc.widgets().unwrap();
        let intake = IntakeData {
            phone: Some("(213) 555-1234".to_string()),
            fax: Some(String::new()),
            ..Default::default()
        };
        let entries = match disc002::SCHEMA.text {
            crate::forms::schema::TextStrategy::Widgets(entries) => entries,
            _ => unreachable!(),
        };
        let mut report = FillReport::default();
        let mut events: Vec<FormEvent> = Vec::new();

        fill_text_widgets(
            &mut doc,
            &widgets,
            &disc002::SCHEMA,
            entries,
            &intake,
            &mut events,
            &mut report,
        )
        .unwrap();

        let widgets = doc.widgets().unwrap();
        assert_eq!(report.text_filled, 1);
        assert_eq!(widgets[0].value.as_deref(), Some("(213) 555-1234"));
        assert_eq!(widgets[1].value, None);
    }
}
