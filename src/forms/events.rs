//! Diagnostics emitted while filling and reading forms
//!
//! The engine reports through a [`FormEventSink`] instead of logging directly,
//! so callers can collect events (tests, tool responses) or forward them to
//! `tracing`.

use serde::Serialize;

/// Something worth telling the caller about during a fill or read
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum FormEvent {
    /// A requested identifier has no fill entry on this template
    UnmappedIdentifier {
        template: &'static str,
        identifier: String,
    },
    /// No checkbox carried the pattern of a requested identifier
    UnresolvedPattern {
        identifier: String,
        pattern: &'static str,
    },
    Checked {
        identifier: String,
        field: String,
        page: usize,
    },
    TextFilled {
        key: &'static str,
        field: String,
        page: usize,
    },
    Stamped {
        key: &'static str,
        page: usize,
    },
    /// A checked checkbox matched no read entry and no section number
    UnmappedCheckbox { field: String, page: usize },
    /// A checked checkbox was identified by the section number in its name
    SectionNumberFallback { field: String, identifier: String },
}

/// Receiver of [`FormEvent`]s
pub trait FormEventSink {
    fn emit(&mut self, event: FormEvent);
}

/// Collects events in order
impl FormEventSink for Vec<FormEvent> {
    fn emit(&mut self, event: FormEvent) {
        self.push(event);
    }
}

/// Forwards events to `tracing`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl FormEventSink for TracingSink {
    fn emit(&mut self, event: FormEvent) {
        match event {
            FormEvent::UnmappedIdentifier {
                template,
                identifier,
            } => {
                tracing::warn!(template, identifier = %identifier, "No checkbox mapping for identifier");
            }
            FormEvent::UnresolvedPattern {
                identifier,
                pattern,
            } => {
                tracing::warn!(identifier = %identifier, pattern, "No checkbox matched pattern");
            }
            FormEvent::Checked {
                identifier,
                field,
                page,
            } => {
                tracing::debug!(identifier = %identifier, field = %field, page, "Checked");
            }
            FormEvent::TextFilled { key, field, page } => {
                tracing::debug!(key, field = %field, page, "Filled text field");
            }
            FormEvent::Stamped { key, page } => {
                tracing::debug!(key, page, "Stamped text");
            }
            FormEvent::UnmappedCheckbox { field, page } => {
                tracing::warn!(field = %field, page, "Checked box has no mapping");
            }
            FormEvent::SectionNumberFallback { field, identifier } => {
                tracing::info!(field = %field, identifier = %identifier, "Identified checkbox by section number");
            }
        }
    }
}

/// Forwards to `tracing` and keeps a copy of every event
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<FormEvent>,
}

impl RecordingSink {
    pub fn events(&self) -> &[FormEvent] {
        &self.events
    }

    pub fn into_events(self) -> Vec<FormEvent> {
        self.events
    }
}

impl FormEventSink for RecordingSink {
    fn emit(&mut self, event: FormEvent) {
        TracingSink.emit(event.clone());
        self.events.push(event);
    }
}
