//! Widget-level view of a fillable PDF
//!
//! The form engine never talks to a PDF library directly. It sees a document
//! through [`FormDocument`]: an ordered enumeration of widgets plus the handful
//! of mutations filling needs.

use crate::error::Result;
use serde::Serialize;

/// Kind of form widget, as far as the form engine cares
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Checkbox,
    Text,
    /// Radio buttons, combo boxes, signatures and anything else
    Other,
}

impl WidgetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WidgetKind::Checkbox => "checkbox",
            WidgetKind::Text => "text",
            WidgetKind::Other => "other",
        }
    }
}

/// Page-relative widget rectangle in PDF points
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

/// A single form widget, snapshotted from a document
#[derive(Debug, Clone, PartialEq)]
pub struct Widget {
    /// Page index (0-based)
    pub page: usize,
    /// Position among the page's annotations; addresses the widget for mutation
    pub index: usize,
    /// Fully qualified field name, e.g. `F[0].Page2[0].List1[0].#area[0].Identity[0]`
    pub name: String,
    pub kind: WidgetKind,
    /// Checked state (checkboxes only)
    pub checked: bool,
    /// Current value (text widgets only)
    pub value: Option<String>,
    pub rect: Option<Rect>,
}

/// Text anchor measured from the page's top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
}

impl Anchor {
    pub const fn new(x: f32, y: f32, font_size: f32) -> Self {
        Self { x, y, font_size }
    }
}

/// Operations the form engine needs from an open document.
///
/// `widgets` must return widgets page by page, in declared order within a
/// page, and must be stable across calls while the document is unmodified.
pub trait FormDocument {
    fn page_count(&self) -> usize;

    fn widgets(&self) -> Result<Vec<Widget>>;

    fn set_checked(&mut self, widget: &Widget, checked: bool) -> Result<()>;

    fn set_text(&mut self, widget: &Widget, value: &str) -> Result<()>;

    /// Write literal text on a page. Creates no form field.
    fn insert_text(&mut self, page: usize, anchor: Anchor, text: &str) -> Result<()>;

    fn save_to_bytes(&self) -> Result<Vec<u8>>;
}
