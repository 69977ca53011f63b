//! PDF document layer
//!
//! [`FormDocument`] is the seam between the form engine and a concrete PDF
//! backend: PDFium for real documents, [`MemoryForm`] for everything else.

mod document;
mod memory;
mod pdfium;

pub use document::{Anchor, FormDocument, Rect, Widget, WidgetKind};
pub use memory::{MemoryForm, StampedText};
pub use pdfium::{check_pdf_header, create_pdfium, inspect_widgets, PdfiumForm};
