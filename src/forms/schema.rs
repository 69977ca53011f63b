//! Static schema configuration for a form template.
//!
//! Each template carries two independent pattern tables (fill and read), a
//! text strategy and an ordering rule. All of it is `'static` data; the
//! engine never mutates a table, only per-call copies of candidate lists.

use super::ordering::OrderingRule;
use crate::pdf::Anchor;

/// Fill direction entry: abstract identifier and the field-name pattern it maps to
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillEntry {
    pub id: &'static str,
    pub pattern: &'static str,
}

/// Read direction entry: field-name pattern and the identifier it reports
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadEntry {
    pub pattern: &'static str,
    pub id: &'static str,
}

/// Text widget entry for the widget strategy
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextEntry {
    pub key: &'static str,
    pub pattern: &'static str,
}

/// Coordinate entry for the anchor strategy (page 0 only)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorEntry {
    pub key: &'static str,
    pub anchor: Anchor,
}

/// How a template's text fields are written
#[derive(Debug, Clone, Copy)]
pub enum TextStrategy {
    /// Resolve text widgets by pattern and set their values
    Widgets(&'static [TextEntry]),
    /// The template has no usable text widgets; stamp text at fixed anchors
    Anchors(&'static [AnchorEntry]),
}

impl TextStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            TextStrategy::Widgets(_) => "widgets",
            TextStrategy::Anchors(_) => "anchors",
        }
    }

    pub fn len(&self) -> usize {
        match self {
            TextStrategy::Widgets(entries) => entries.len(),
            TextStrategy::Anchors(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Everything the engine knows about one form template
#[derive(Debug)]
pub struct SchemaTable {
    /// Registry name, e.g. `disc001`
    pub name: &'static str,
    pub title: &'static str,
    /// Official download location of the blank template
    pub url: &'static str,
    /// Identifier → pattern, in declaration order
    pub fill: &'static [FillEntry],
    /// Pattern → identifier, in declaration order
    pub read: &'static [ReadEntry],
    pub text: TextStrategy,
    pub ordering: OrderingRule,
    /// Value written to `set_number` when the intake leaves it out
    pub default_set_number: Option<&'static str>,
    /// Report checked boxes missing from the read table by the `ddd.d`
    /// section number in their name
    pub section_fallback: bool,
}

impl SchemaTable {
    /// First fill entry declared for `id`
    pub fn fill_pattern(&self, id: &str) -> Option<&'static str> {
        self.fill.iter().find(|e| e.id == id).map(|e| e.pattern)
    }

    /// Whether `id` can be requested on this template
    pub fn is_fillable(&self, id: &str) -> bool {
        self.fill_pattern(id).is_some()
    }
}
