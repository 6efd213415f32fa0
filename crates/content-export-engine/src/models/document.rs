use serde::{Deserialize, Serialize};

use super::Block;
use crate::{html, parsing};

/// The block sequence for one export.
///
/// Built once from HTML, rendered, then dropped. Nothing here is persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parse an HTML fragment into a document. Never fails.
    pub fn from_html(html: &str) -> Self {
        Self::new(parsing::parse_html(html))
    }

    /// Put `title` in front of the content as a top-level heading.
    ///
    /// Blank titles are ignored.
    pub fn with_title(mut self, title: &str) -> Self {
        let title = title.trim();
        if !title.is_empty() {
            self.blocks.insert(0, Block::heading1(title));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn to_html(&self) -> String {
        html::to_html(&self.blocks)
    }

    /// One line per block (`kind: text`, list items indented), for logs and
    /// test assertions.
    pub fn outline(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            if let Some(items) = block.items() {
                out.push_str(block.kind_name());
                out.push('\n');
                for item in items {
                    out.push_str(&format!("  - {}\n", item.replace('\n', "\\n")));
                }
                continue;
            }

            let kind = match block {
                Block::Paragraph { bold: true, .. } => "paragraph(bold)",
                _ => block.kind_name(),
            };
            let text = block.text().unwrap_or_default();
            out.push_str(&format!("{kind}: {}\n", text.replace('\n', "\\n")));
        }
        out
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self::new(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn with_title_prepends_heading() {
        let doc = Document::new(vec![Block::paragraph("Treść")]).with_title("  Oferta  ");
        assert_eq!(
            doc.blocks,
            vec![Block::heading1("Oferta"), Block::paragraph("Treść")]
        );
    }

    #[test]
    fn blank_title_is_ignored() {
        let doc = Document::new(vec![Block::paragraph("x")]).with_title("   ");
        assert_eq!(doc.blocks.len(), 1);
    }

    #[test]
    fn outline_lists_every_block() {
        let doc = Document::new(vec![
            Block::heading1("Cennik"),
            Block::bold_paragraph("Uwaga"),
            Block::paragraph("linia 1\nlinia 2"),
            Block::ordered_list(["Jeden", "Dwa"]),
        ]);
        insta::assert_snapshot!(doc.outline(), @r"
        heading1: Cennik
        paragraph(bold): Uwaga
        paragraph: linia 1\nlinia 2
        orderedList
          - Jeden
          - Dwa
        ");
    }
}
