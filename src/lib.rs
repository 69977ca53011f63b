//! Form Interrogatories MCP Server Library
//!
//! Fills and reads California Judicial Council form interrogatories:
//! - `fill_interrogatories`: Check selected interrogatories and write case details
//! - `read_interrogatories`: Report which interrogatories a filled form selects
//! - `inspect_form_fields`: List every widget in a PDF
//! - `list_templates`: Show supported templates
//!
//! The mapping engine in [`forms`] works against any [`pdf::FormDocument`];
//! the server uses PDFium, tests use [`pdf::MemoryForm`].

pub mod error;
pub mod forms;
pub mod pdf;
pub mod server;
pub mod source;

pub use error::{Error, Result};
pub use forms::{ExtractionResult, FillReport, FormEngine, IntakeData};
pub use server::{
    run_server, run_server_with_config, DocumentSource, FillInterrogatoriesParams,
    FillInterrogatoriesResult, FormServer, InspectFormFieldsParams, ReadInterrogatoriesParams,
    ServerConfig,
};
