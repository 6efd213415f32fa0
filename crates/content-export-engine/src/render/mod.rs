//! Renderers from the block model to binary document formats.
//!
//! Both renderers only see `&[Block]`; they never look at HTML. Layout and
//! typography settings come from [`RenderOptions`].

pub mod docx;
pub mod options;
pub mod pdf;

pub use docx::DocxRenderer;
pub use options::RenderOptions;
pub use pdf::PdfRenderer;

use thiserror::Error;

use crate::models::Block;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to pack DOCX document: {0}")]
    DocxPack(#[from] docx_rs::DocxError),
    #[error("Invalid render options: {0}")]
    InvalidOptions(String),
}

/// Maps a block sequence to the bytes of one document format.
pub trait Renderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError>;

    /// MIME type of the rendered bytes.
    fn content_type(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn pack_errors_keep_their_source() {
        let err = RenderError::from(docx_rs::DocxError::Unknown);
        assert!(matches!(err, RenderError::DocxPack(docx_rs::DocxError::Unknown)));
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("Failed to pack DOCX document"));
    }
}
