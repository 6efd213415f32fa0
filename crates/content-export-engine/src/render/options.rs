use serde::{Deserialize, Serialize};

use super::RenderError;

/// Typography and page settings shared by both renderers.
///
/// Sizes are in points. Every field has a default, so a config file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Body font for DOCX output. PDF output always uses Helvetica.
    pub font_family: String,
    pub body_size: f32,
    pub heading1_size: f32,
    pub heading2_size: f32,
    /// Page margin on all four sides (PDF).
    pub margin: f32,
    /// Line height as a multiple of the font size.
    pub line_spacing: f32,
    /// Vertical space after each block.
    pub paragraph_spacing: f32,
    /// Hanging indent of list item text.
    pub list_indent: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_family: "Calibri".to_string(),
            body_size: 11.0,
            heading1_size: 20.0,
            heading2_size: 16.0,
            margin: 72.0,
            line_spacing: 1.25,
            paragraph_spacing: 8.0,
            list_indent: 18.0,
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> Result<(), RenderError> {
        let sizes = [
            ("body_size", self.body_size),
            ("heading1_size", self.heading1_size),
            ("heading2_size", self.heading2_size),
            ("line_spacing", self.line_spacing),
        ];
        for (name, value) in sizes {
            if !(value.is_finite() && value > 0.0) {
                return Err(RenderError::InvalidOptions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(RenderError::InvalidOptions(format!(
                "margin must not be negative, got {}",
                self.margin
            )));
        }

        if !(self.paragraph_spacing.is_finite() && self.paragraph_spacing >= 0.0) {
            return Err(RenderError::InvalidOptions(format!(
                "paragraph_spacing must not be negative, got {}",
                self.paragraph_spacing
            )));
        }

        let content_width = super::pdf::layout::PAGE_WIDTH - 2.0 * self.margin;
        if !(self.list_indent >= 0.0 && self.list_indent < content_width / 2.0) {
            return Err(RenderError::InvalidOptions(format!(
                "margin {} and list_indent {} leave no room for text",
                self.margin, self.list_indent
            )));
        }

        let content_height = super::pdf::layout::PAGE_HEIGHT - 2.0 * self.margin;
        let tallest_line = self.heading1_size.max(self.heading2_size).max(self.body_size)
            * self.line_spacing;
        if content_height < tallest_line {
            return Err(RenderError::InvalidOptions(format!(
                "margin {} leaves no room for a line of text",
                self.margin
            )));
        }

        Ok(())
    }

    /// Size in half-points, the unit DOCX run properties use.
    pub fn half_points(size: f32) -> usize {
        (size * 2.0).round() as usize
    }
}
