//! Turning an HTML export request into a downloadable document.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::Document;
use crate::render::{DocxRenderer, PdfRenderer, RenderError, RenderOptions, Renderer};

const DEFAULT_STEM: &str = "document";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("HTML content is empty")]
    EmptyContent,
    #[error("HTML content produced no document blocks")]
    NoContent,
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Docx,
    Pdf,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Docx => "docx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }

    /// Format named by the extension of `path`, if it is one we render.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }

    fn renderer(self, options: &RenderOptions, title: Option<&str>) -> Box<dyn Renderer> {
        match self {
            ExportFormat::Docx => Box::new(DocxRenderer::new(options.clone())),
            ExportFormat::Pdf => {
                let renderer = PdfRenderer::new(options.clone());
                match title {
                    Some(title) => Box::new(renderer.with_title(title)),
                    None => Box::new(renderer),
                }
            }
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "docx" => Ok(ExportFormat::Docx),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    pub html: String,
    pub format: ExportFormat,
    /// Prepended to the document as a top-level heading.
    #[serde(default)]
    pub title: Option<String>,
    /// Requested file name; the extension is always the format's.
    #[serde(default)]
    pub file_name: Option<String>,
}

impl ExportRequest {
    pub fn new(html: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            html: html.into(),
            format,
            title: None,
            file_name: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportedDocument {
    /// Value of the `Content-Disposition` header for a download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.file_name)
    }
}

/// Parse `request.html` and render it in the requested format.
pub fn export(
    request: &ExportRequest,
    options: &RenderOptions,
) -> Result<ExportedDocument, ExportError> {
    if request.html.trim().is_empty() {
        return Err(ExportError::EmptyContent);
    }

    let title = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|title| !title.is_empty());

    let mut document = Document::from_html(&request.html);
    if let Some(title) = title {
        document = document.with_title(title);
    }
    if document.is_empty() {
        return Err(ExportError::NoContent);
    }

    let renderer = request.format.renderer(options, title);
    let bytes = renderer.render(&document.blocks)?;

    let stem = request.file_name.as_deref().or(title).unwrap_or(DEFAULT_STEM);
    let file_name = sanitize_file_name(stem, request.format);

    log::info!(
        "Exported {} blocks to {} ({} bytes)",
        document.blocks.len(),
        file_name,
        bytes.len()
    );

    Ok(ExportedDocument {
        file_name,
        content_type: renderer.content_type(),
        bytes,
    })
}

fn transliterate(c: char) -> Option<char> {
    let ascii = match c {
        'ą' => 'a',
        'ć' => 'c',
        'ę' => 'e',
        'ł' => 'l',
        'ń' => 'n',
        'ó' => 'o',
        'ś' => 's',
        'ź' | 'ż' => 'z',
        'Ą' => 'A',
        'Ć' => 'C',
        'Ę' => 'E',
        'Ł' => 'L',
        'Ń' => 'N',
        'Ó' => 'O',
        'Ś' => 'S',
        'Ź' | 'Ż' => 'Z',
        c if c.is_ascii_alphanumeric() || c == '_' => c,
        _ => return None,
    };
    Some(ascii)
}

/// ASCII file name for `stem` with the format's extension.
///
/// A trailing `.docx`/`.pdf` on `stem` is dropped first, so callers may pass
/// either a bare stem or a full name.
pub fn sanitize_file_name(stem: &str, format: ExportFormat) -> String {
    let stem = Path::new(stem)
        .file_stem()
        .filter(|_| ExportFormat::from_path(Path::new(stem)).is_some())
        .and_then(|s| s.to_str())
        .unwrap_or(stem);

    let mut name = String::with_capacity(stem.len());
    for c in stem.chars() {
        match transliterate(c) {
            Some(c) => name.push(c),
            None if !name.is_empty() && !name.ends_with('-') => name.push('-'),
            None => {}
        }
    }
    let name = name.trim_end_matches('-');
    let name = if name.is_empty() { DEFAULT_STEM } else { name };

    format!("{name}.{}", format.extension())
}
