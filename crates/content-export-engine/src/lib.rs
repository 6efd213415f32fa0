//! HTML content to DOCX and PDF documents.
//!
//! HTML is first reduced to a flat sequence of [`Block`]s by
//! [`parsing::parse_html`]. Renderers in [`render`] turn blocks into bytes,
//! and [`export::export`] ties both together behind a request/response API.

pub mod export;
pub mod html;
pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use export::{
    ExportError, ExportFormat, ExportRequest, ExportedDocument, export, sanitize_file_name,
};
pub use io::*;
pub use models::{Block, Document};
pub use parsing::parse_html;
pub use render::{DocxRenderer, PdfRenderer, RenderError, RenderOptions, Renderer};
