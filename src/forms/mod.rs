//! Form mapping engine
//!
//! Translates between UI-facing interrogatory identifiers and the concrete
//! widgets of a form template, in both directions:
//!
//! - **fill**: intake data → text widgets or stamped text, selected
//!   identifiers → checked boxes
//! - **read**: checked boxes → identifiers, text widgets → `form_data`
//!
//! Per-template knowledge lives in [`templates`] as static tables.

pub mod events;
pub mod fill;
pub mod intake;
pub mod matcher;
pub mod ordering;
pub mod read;
pub mod schema;
pub mod stamp;
pub mod templates;

pub use events::{FormEvent, FormEventSink, RecordingSink, TracingSink};
pub use fill::FillReport;
pub use intake::{IntakeData, Scalar};
pub use ordering::OrderingRule;
pub use read::{CheckboxRecord, ExtractionResult};
pub use schema::{SchemaTable, TextStrategy};

use crate::error::Result;
use crate::pdf::FormDocument;

/// Fill and read documents of one template
#[derive(Debug, Clone, Copy)]
pub struct FormEngine {
    schema: &'static SchemaTable,
}

impl FormEngine {
    pub fn new(schema: &'static SchemaTable) -> Self {
        Self { schema }
    }

    /// Engine for a registry name such as `disc001`
    pub fn for_template(name: &str) -> Result<Self> {
        templates::lookup(name).map(Self::new)
    }

    pub fn schema(&self) -> &'static SchemaTable {
        self.schema
    }

    /// Fill `doc` in place.
    ///
    /// Text goes first (widgets or anchors, per the template), then checkboxes.
    /// A mutation failure aborts the fill; earlier mutations are not undone.
    pub fn fill<D: FormDocument + ?Sized>(
        &self,
        doc: &mut D,
        intake: &IntakeData,
        sink: &mut dyn FormEventSink,
    ) -> Result<FillReport> {
        let schema = self.schema;
        let widgets = doc.widgets()?;
        let mut report = FillReport {
            template: schema.name,
            ..Default::default()
        };

        match schema.text {
            TextStrategy::Widgets(entries) => {
                fill::fill_text_widgets(doc, &widgets, schema, entries, intake, sink, &mut report)?;
            }
            TextStrategy::Anchors(entries) => {
                report.stamped = stamp::stamp_anchors(doc, schema, entries, intake, sink)?;
            }
        }

        fill::check_boxes(
            doc,
            &widgets,
            schema,
            &intake.selected_ids(),
            sink,
            &mut report,
        )?;

        tracing::info!(
            template = schema.name,
            checked = report.checked,
            text_filled = report.text_filled,
            stamped = report.stamped,
            unmapped = report.unmapped.len(),
            unresolved = report.unresolved.len(),
            "Filled form"
        );

        Ok(report)
    }

    /// Read which interrogatories are selected in `doc`.
    ///
    /// Never fails: document errors become `success: false`.
    pub fn read<D: FormDocument + ?Sized>(
        &self,
        doc: &D,
        sink: &mut dyn FormEventSink,
        debug: bool,
    ) -> ExtractionResult {
        match doc.widgets() {
            Ok(widgets) => {
                let result = read::read_widgets(self.schema, &widgets, sink, debug);
                tracing::info!(
                    template = self.schema.name,
                    selected = result.selected_interrogatories.len(),
                    "Read form"
                );
                result
            }
            Err(e) => {
                tracing::warn!(template = self.schema.name, error = %e, "Failed to read form");
                ExtractionResult::failure(e)
            }
        }
    }
}
