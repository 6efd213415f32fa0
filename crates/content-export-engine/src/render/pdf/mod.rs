//! PDF output built on `pdf-writer`.
//!
//! Rendering happens in two steps: [`layout::layout`] places every line of
//! text on a page, then [`PdfRenderer`] serializes the pages with the two
//! base-14 Helvetica faces. No font is embedded.

pub mod encoding;
pub mod layout;
pub mod metrics;

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use self::layout::{Face, PAGE_HEIGHT, PAGE_WIDTH, Page};
use super::{RenderError, RenderOptions, Renderer};
use crate::models::Block;

const REGULAR_FONT: Name<'static> = Name(b"F1");
const BOLD_FONT: Name<'static> = Name(b"F2");
const PRODUCER: &str = concat!("content-export ", env!("CARGO_PKG_VERSION"));

pub struct PdfRenderer {
    options: RenderOptions,
    title: Option<String>,
}

impl PdfRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            title: None,
        }
    }

    /// Title stored in the document info dictionary.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn write(&self, pages: &[Page]) -> Vec<u8> {
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let regular_id = alloc.bump();
        let bold_id = alloc.bump();
        let info_id = alloc.bump();

        let mut pdf = Pdf::new();
        pdf.catalog(catalog_id).pages(page_tree_id);

        let page_ids: Vec<Ref> = pages.iter().map(|_| alloc.bump()).collect();
        pdf.pages(page_tree_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);

        let mut replaced = 0;
        for (page, page_id) in pages.iter().zip(&page_ids) {
            let content_id = alloc.bump();

            let mut writer = pdf.page(*page_id);
            writer.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
            writer.parent(page_tree_id);
            writer.contents(content_id);
            writer
                .resources()
                .fonts()
                .pair(REGULAR_FONT, regular_id)
                .pair(BOLD_FONT, bold_id);
            writer.finish();

            let (stream, page_replaced) = content_stream(page);
            replaced += page_replaced;
            pdf.stream(content_id, &stream);
        }

        write_font(&mut pdf, regular_id, Name(b"Helvetica"));
        write_font(&mut pdf, bold_id, Name(b"Helvetica-Bold"));

        let mut info = pdf.document_info(info_id);
        if let Some(title) = &self.title {
            info.title(TextStr(title));
        }
        info.producer(TextStr(PRODUCER));
        info.finish();

        if replaced > 0 {
            log::warn!("Replaced {replaced} characters missing from the PDF font encoding");
        }

        pdf.finish()
    }
}

impl Default for PdfRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl Renderer for PdfRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        self.options.validate()?;
        let pages = layout::layout(blocks, &self.options);
        log::debug!("Laid out {} blocks on {} PDF pages", blocks.len(), pages.len());
        Ok(self.write(&pages))
    }

    fn content_type(&self) -> &'static str {
        "application/pdf"
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }
}

/// Content stream of one page and the number of replaced characters.
fn content_stream(page: &Page) -> (Vec<u8>, usize) {
    let mut content = Content::new();
    let mut replaced = 0;

    for line in &page.lines {
        let font = match line.face {
            Face::Regular => REGULAR_FONT,
            Face::Bold => BOLD_FONT,
        };
        let (bytes, line_replaced) = encoding::encode(&line.text);
        replaced += line_replaced;

        content.begin_text();
        content.set_font(font, line.size);
        content.next_line(line.x, line.y);
        content.show(Str(&bytes));
        content.end_text();
    }

    (content.finish(), replaced)
}

/// Type1 base-14 font with WinAnsi plus the Polish `Differences`.
fn write_font(pdf: &mut Pdf, id: Ref, base_font: Name) {
    let mut font = pdf.type1_font(id);
    font.base_font(base_font);
    font.encoding_custom()
        .base_encoding(Name(b"WinAnsiEncoding"))
        .differences()
        .consecutive(
            encoding::FIRST_CUSTOM_CODE,
            encoding::POLISH_GLYPHS
                .iter()
                .map(|(_, glyph)| Name(glyph.as_bytes())),
        );
}
