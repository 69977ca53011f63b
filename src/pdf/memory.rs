//! In-memory form document
//!
//! Holds pages of widgets and a log of stamped text. Used for dry runs,
//! tests and benchmarks where no PDFium library is available.

use super::document::{Anchor, FormDocument, Rect, Widget, WidgetKind};
use crate::error::{Error, Result};
use serde::Serialize;

/// Text written by [`FormDocument::insert_text`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampedText {
    pub page: usize,
    pub x: f32,
    pub y: f32,
    pub font_size: f32,
    pub text: String,
}

/// A form document kept entirely in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryForm {
    pages: Vec<Vec<Widget>>,
    stamps: Vec<StampedText>,
}

impl MemoryForm {
    /// Create a document with `page_count` empty pages
    pub fn new(page_count: usize) -> Self {
        Self {
            pages: vec![Vec::new(); page_count],
            stamps: Vec::new(),
        }
    }

    /// Append an unchecked checkbox to a page, growing the page list if needed
    pub fn add_checkbox(&mut self, page: usize, name: impl Into<String>) -> &mut Self {
        self.push(page, name.into(), WidgetKind::Checkbox, None)
    }

    /// Append an empty text widget to a page
    pub fn add_text(&mut self, page: usize, name: impl Into<String>) -> &mut Self {
        self.push(page, name.into(), WidgetKind::Text, None)
    }

    /// Append a text widget that already carries a value
    pub fn add_text_with_value(
        &mut self,
        page: usize,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.push(page, name.into(), WidgetKind::Text, Some(value.into()))
    }

    /// Append a widget the engine does not fill (radio, signature, ...)
    pub fn add_other(&mut self, page: usize, name: impl Into<String>) -> &mut Self {
        self.push(page, name.into(), WidgetKind::Other, None)
    }

    fn push(
        &mut self,
        page: usize,
        name: String,
        kind: WidgetKind,
        value: Option<String>,
    ) -> &mut Self {
        if self.pages.len() <= page {
            self.pages.resize_with(page + 1, Vec::new);
        }
        let widgets = &mut self.pages[page];
        let index = widgets.len();
        // Stack widgets down the page so each has a distinct rectangle
        let top = 760.0 - 14.0 * index as f32;
        widgets.push(Widget {
            page,
            index,
            name,
            kind,
            checked: false,
            value,
            rect: Some(Rect {
                left: 40.0,
                top,
                right: 50.0,
                bottom: top - 10.0,
            }),
        });
        self
    }

    /// Text stamped onto pages so far
    pub fn stamps(&self) -> &[StampedText] {
        &self.stamps
    }

    /// Names of every checked checkbox, in document order
    pub fn checked_names(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flatten()
            .filter(|w| w.kind == WidgetKind::Checkbox && w.checked)
            .map(|w| w.name.as_str())
            .collect()
    }

    fn widget_mut(&mut self, widget: &Widget, expected: WidgetKind) -> Result<&mut Widget> {
        let total = self.pages.len() as u32;
        let page = self
            .pages
            .get_mut(widget.page)
            .ok_or(Error::PageOutOfBounds {
                page: widget.page as u32 + 1,
                total,
            })?;
        match page.get_mut(widget.index) {
            Some(w) if w.kind == expected => Ok(w),
            _ => Err(Error::WidgetMismatch {
                page: widget.page as u32 + 1,
                index: widget.index,
                expected: expected.as_str(),
            }),
        }
    }
}

impl FormDocument for MemoryForm {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn widgets(&self) -> Result<Vec<Widget>> {
        Ok(self.pages.iter().flatten().cloned().collect())
    }

    fn set_checked(&mut self, widget: &Widget, checked: bool) -> Result<()> {
        self.widget_mut(widget, WidgetKind::Checkbox)?.checked = checked;
        Ok(())
    }

    fn set_text(&mut self, widget: &Widget, value: &str) -> Result<()> {
        self.widget_mut(widget, WidgetKind::Text)?.value = Some(value.to_string());
        Ok(())
    }

    fn insert_text(&mut self, page: usize, anchor: Anchor, text: &str) -> Result<()> {
        if page >= self.pages.len() {
            return Err(Error::PageOutOfBounds {
                page: page as u32 + 1,
                total: self.pages.len() as u32,
            });
        }
        self.stamps.push(StampedText {
            page,
            x: anchor.x,
            y: anchor.y,
            font_size: anchor.font_size,
            text: text.to_string(),
        });
        Ok(())
    }

    /// Serializes the widget state and stamps as JSON; not a PDF.
    fn save_to_bytes(&self) -> Result<Vec<u8>> {
        #[derive(Serialize)]
        struct Snapshot<'a> {
            widgets: Vec<SnapshotWidget<'a>>,
            stamps: &'a [StampedText],
        }

        #[derive(Serialize)]
        struct SnapshotWidget<'a> {
            page: usize,
            name: &'a str,
            kind: WidgetKind,
            checked: bool,
            value: Option<&'a str>,
        }

        let widgets = self
            .pages
            .iter()
            .flatten()
            .map(|w| SnapshotWidget {
                page: w.page,
                name: &w.name,
                kind: w.kind,
                checked: w.checked,
                value: w.value.as_deref(),
            })
            .collect();

        Ok(serde_json::to_vec(&Snapshot {
            widgets,
            stamps: &self.stamps,
        })?)
    }
}
