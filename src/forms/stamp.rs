//! Coordinate stamping for templates without text widgets

use super::events::{FormEvent, FormEventSink};
use super::intake::IntakeData;
use super::schema::{AnchorEntry, SchemaTable};
use crate::error::Result;
use crate::pdf::{Anchor, FormDocument};

/// Page that carries every anchor
pub const ANCHOR_PAGE: usize = 0;

/// Write `text` at `anchor`. Empty text is skipped; returns whether anything was written.
pub fn stamp<D: FormDocument + ?Sized>(
    doc: &mut D,
    page: usize,
    anchor: Anchor,
    text: &str,
) -> Result<bool> {
    if text.is_empty() {
        return Ok(false);
    }
    doc.insert_text(page, anchor, text)?;
    Ok(true)
}

/// Stamp every anchored key that has a value. Returns the number stamped.
pub fn stamp_anchors<D: FormDocument + ?Sized>(
    doc: &mut D,
    schema: &SchemaTable,
    entries: &[AnchorEntry],
    intake: &IntakeData,
    sink: &mut dyn FormEventSink,
) -> Result<usize> {
    let mut stamped = 0;

    for entry in entries {
        let Some(value) = intake.text_value(schema, entry.key) else {
            continue;
        };
        if stamp(doc, ANCHOR_PAGE, entry.anchor, &value)? {
            stamped += 1;
            sink.emit(FormEvent::Stamped {
                key: entry.key,
                page: ANCHOR_PAGE + 1,
            });
        }
    }

    Ok(stamped)
}
