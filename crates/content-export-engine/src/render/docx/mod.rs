//! DOCX output built on `docx-rs`.

pub mod numbering;
pub mod styles;

use std::io::Cursor;

use docx_rs::*;

use self::numbering::DocxNumbering;
use self::styles::{DocxStyles, HEADING1, HEADING2};
use super::{RenderError, RenderOptions, Renderer};
use crate::models::Block;

pub struct DocxRenderer {
    options: RenderOptions,
}

impl Default for DocxRenderer {
    fn default() -> Self {
        Self::new(RenderOptions::default())
    }
}

impl DocxRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Build the document without packing it.
    pub fn build(&self, blocks: &[Block]) -> Docx {
        let mut numbering = DocxNumbering::new();
        let mut docx = DocxStyles::new(&self.options).apply(Docx::new());

        for block in blocks {
            docx = match block {
                Block::Heading1 { text } => docx.add_paragraph(styled(HEADING1, text)),
                Block::Heading2 { text } => docx.add_paragraph(styled(HEADING2, text)),
                Block::Paragraph { text, bold } => {
                    docx.add_paragraph(Paragraph::new().add_run(text_run(text, *bold)))
                }
                Block::Strong { text } => {
                    docx.add_paragraph(Paragraph::new().add_run(text_run(text, true)))
                }
                Block::UnorderedList { items } => {
                    let (docx, num_id) = numbering.unordered(docx);
                    list_items(docx, num_id, items)
                }
                Block::OrderedList { items } => {
                    let (docx, num_id) = numbering.ordered(docx);
                    list_items(docx, num_id, items)
                }
            };
        }

        docx
    }
}

impl Renderer for DocxRenderer {
    fn render(&self, blocks: &[Block]) -> Result<Vec<u8>, RenderError> {
        self.options.validate()?;

        let mut buffer = Vec::new();
        self.build(blocks)
            .build()
            .pack(&mut Cursor::new(&mut buffer))
            .map_err(docx_rs::DocxError::from)?;

        log::debug!("Packed {} blocks into {} bytes of DOCX", blocks.len(), buffer.len());
        Ok(buffer)
    }

    fn content_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn extension(&self) -> &'static str {
        "docx"
    }
}

fn styled(style: &str, text: &str) -> Paragraph {
    Paragraph::new().style(style).add_run(text_run(text, false))
}

/// One run holding `text`, with `\n` turned into line breaks.
fn text_run(text: &str, bold: bool) -> Run {
    let mut run = Run::new();
    if bold {
        run = run.bold();
    }
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    run
}

fn list_items(mut docx: Docx, num_id: usize, items: &[String]) -> Docx {
    for item in items {
        let para = Paragraph::new()
            .numbering(NumberingId::new(num_id), IndentLevel::new(0))
            .add_run(text_run(item, false));
        docx = docx.add_paragraph(para);
    }
    docx
}
