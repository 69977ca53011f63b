//! PDFium-backed form document

use super::document::{Anchor, FormDocument, Rect, Widget, WidgetKind};
use crate::error::{Error, Result};
use pdfium_render::prelude::*;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
pub fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Reject data that does not start with a PDF header
pub fn check_pdf_header(data: &[u8]) -> Result<()> {
    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::InvalidPdf {
            reason: "Not a valid PDF file".to_string(),
        });
    }
    Ok(())
}

fn map_pdfium_error(err: PdfiumError) -> Error {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            Error::InvalidPdf {
                reason: "PDF is password protected".to_string(),
            }
        }
        other => Error::Pdfium {
            reason: format!("{}", other),
        },
    }
}

/// An open PDFium document seen through [`FormDocument`]
pub struct PdfiumForm<'a> {
    document: PdfDocument<'a>,
}

impl<'a> PdfiumForm<'a> {
    /// Open `data` for the duration of `f`.
    ///
    /// The document and the PDFium binding are released when `f` returns,
    /// whether it succeeded or not.
    pub fn with_bytes<R>(
        data: &[u8],
        f: impl FnOnce(&mut PdfiumForm<'_>) -> Result<R>,
    ) -> Result<R> {
        check_pdf_header(data)?;

        let pdfium = create_pdfium()?;
        let document = pdfium
            .load_pdf_from_byte_slice(data, None)
            .map_err(map_pdfium_error)?;

        let mut form = PdfiumForm { document };
        f(&mut form)
    }

    fn page(&self, page_index: usize) -> Result<PdfPage<'a>> {
        let total = self.document.pages().len() as u32;
        if page_index as u32 >= total {
            return Err(Error::PageOutOfBounds {
                page: page_index as u32 + 1,
                total,
            });
        }
        self.document
            .pages()
            .get(page_index as u16)
            .map_err(map_pdfium_error)
    }

    fn mismatch(widget: &Widget, expected: WidgetKind) -> Error {
        Error::WidgetMismatch {
            page: widget.page as u32 + 1,
            index: widget.index,
            expected: expected.as_str(),
        }
    }
}

impl FormDocument for PdfiumForm<'_> {
    fn page_count(&self) -> usize {
        self.document.pages().len() as usize
    }

    fn widgets(&self) -> Result<Vec<Widget>> {
        let mut widgets = Vec::new();

        for (page_index, page) in self.document.pages().iter().enumerate() {
            for (index, annotation) in page.annotations().iter().enumerate() {
                let Some(field) = annotation.as_form_field() else {
                    continue;
                };

                let (kind, checked, value) = if let Some(text_field) = field.as_text_field() {
                    (WidgetKind::Text, false, text_field.value())
                } else if let Some(checkbox) = field.as_checkbox_field() {
                    let checked = checkbox.is_checked().map_err(map_pdfium_error)?;
                    (WidgetKind::Checkbox, checked, None)
                } else {
                    (WidgetKind::Other, false, None)
                };

                let rect = annotation.bounds().ok().map(|r| Rect {
                    left: r.left().value,
                    top: r.top().value,
                    right: r.right().value,
                    bottom: r.bottom().value,
                });

                widgets.push(Widget {
                    page: page_index,
                    index,
                    name: field.name().unwrap_or_default(),
                    kind,
                    checked,
                    value,
                    rect,
                });
            }
        }

        Ok(widgets)
    }

    fn set_checked(&mut self, widget: &Widget, checked: bool) -> Result<()> {
        // The page must outlive the annotation handle
        let page = self.page(widget.page)?;
        let mut annotation = page
            .annotations()
            .get(widget.index)
            .map_err(map_pdfium_error)?;
        let checkbox = annotation
            .as_form_field_mut()
            .and_then(|field| field.as_checkbox_field_mut())
            .ok_or_else(|| Self::mismatch(widget, WidgetKind::Checkbox))?;

        checkbox.set_checked(checked).map_err(map_pdfium_error)
    }

    fn set_text(&mut self, widget: &Widget, value: &str) -> Result<()> {
        let page = self.page(widget.page)?;
        let mut annotation = page
            .annotations()
            .get(widget.index)
            .map_err(map_pdfium_error)?;
        let text_field = annotation
            .as_form_field_mut()
            .and_then(|field| field.as_text_field_mut())
            .ok_or_else(|| Self::mismatch(widget, WidgetKind::Text))?;

        text_field.set_value(value).map_err(map_pdfium_error)
    }

    fn insert_text(&mut self, page_index: usize, anchor: Anchor, text: &str) -> Result<()> {
        let font = self.document.fonts_mut().helvetica();
        let mut page = self.page(page_index)?;

        // Anchors are measured from the top-left; PDF space grows upwards.
        let baseline = page.height().value - anchor.y;

        page.objects_mut()
            .create_text_object(
                PdfPoints::new(anchor.x),
                PdfPoints::new(baseline),
                text,
                font,
                PdfPoints::new(anchor.font_size),
            )
            .map_err(map_pdfium_error)?;

        Ok(())
    }

    fn save_to_bytes(&self) -> Result<Vec<u8>> {
        self.document.save_to_bytes().map_err(|e| Error::Pdfium {
            reason: format!("Failed to save modified PDF: {}", e),
        })
    }
}

/// Snapshot every widget in a PDF (field discovery for template revisions)
pub fn inspect_widgets(data: &[u8]) -> Result<Vec<Widget>> {
    PdfiumForm::with_bytes(data, |form| form.widgets())
}
