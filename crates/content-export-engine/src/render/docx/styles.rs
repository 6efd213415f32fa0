//! Paragraph styles registered on every generated document.

use docx_rs::*;

use crate::render::RenderOptions;

pub const HEADING1: &str = "Heading1";
pub const HEADING2: &str = "Heading2";

pub struct DocxStyles<'a> {
    options: &'a RenderOptions,
}

impl<'a> DocxStyles<'a> {
    pub fn new(options: &'a RenderOptions) -> Self {
        Self { options }
    }

    fn fonts(&self) -> RunFonts {
        let family = self.options.font_family.as_str();
        RunFonts::new()
            .ascii(family)
            .hi_ansi(family)
            .east_asia(family)
            .cs(family)
    }

    fn heading_style(&self, id: &str, display_name: &str, size: f32) -> Style {
        Style::new(id, StyleType::Paragraph)
            .name(display_name)
            .fonts(self.fonts())
            .size(RenderOptions::half_points(size))
            .bold()
    }

    /// Set document defaults and add the heading styles.
    pub fn apply(&self, docx: Docx) -> Docx {
        let heading1 = self.heading_style(HEADING1, "Heading 1", self.options.heading1_size);
        let heading2 = self.heading_style(HEADING2, "Heading 2", self.options.heading2_size);

        docx.default_fonts(self.fonts())
            .default_size(RenderOptions::half_points(self.options.body_size))
            .add_style(heading1)
            .add_style(heading2)
    }
}
