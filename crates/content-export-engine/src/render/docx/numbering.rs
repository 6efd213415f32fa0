//! List numbering definitions.
//!
//! Lists are flat, so every definition has a single level. Each list gets a
//! fresh definition, which makes ordered lists restart at 1.

use docx_rs::*;

/// docx-rs always writes its own default numbering with id 1.
const FIRST_ID: usize = 2;

#[derive(Clone, Debug)]
pub struct DocxNumbering {
    next_id: usize,
}

impl Default for DocxNumbering {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxNumbering {
    pub fn new() -> Self {
        Self { next_id: FIRST_ID }
    }

    fn list_level(format: &str, text: &str, hanging: i32) -> Level {
        Level::new(
            0,
            Start::new(1),
            NumberFormat::new(format),
            LevelText::new(text),
            LevelJc::new("left"),
        )
        .indent(
            Some(720),
            Some(SpecialIndentType::Hanging(hanging)),
            None,
            None,
        )
    }

    fn add(&mut self, docx: Docx, level: Level) -> (Docx, usize) {
        let id = self.next_id;
        self.next_id += 1;

        let docx = docx
            .add_abstract_numbering(AbstractNumbering::new(id).add_level(level))
            .add_numbering(Numbering::new(id, id));
        (docx, id)
    }

    /// Decimal `1.` numbering starting at 1.
    pub fn ordered(&mut self, docx: Docx) -> (Docx, usize) {
        self.add(docx, Self::list_level("decimal", "%1.", 420))
    }

    pub fn unordered(&mut self, docx: Docx) -> (Docx, usize) {
        self.add(docx, Self::list_level("bullet", "•", 360))
    }
}
