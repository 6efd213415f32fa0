//! Sequential page layout for PDF output.
//!
//! Blocks are laid out top to bottom as lines of text. There is no
//! justification, hyphenation or widow control: lines are filled greedily
//! and a new page starts when the next line would cross the bottom margin.

use crate::models::Block;
use crate::render::RenderOptions;

use super::metrics::text_width;

/// A4 in points.
pub const PAGE_WIDTH: f32 = 595.28;
pub const PAGE_HEIGHT: f32 = 841.89;

/// Share of the line height kept below the baseline.
const DESCENT: f32 = 0.22;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Face {
    Regular,
    Bold,
}

/// One run of text at an absolute baseline position.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub face: Face,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub lines: Vec<PlacedLine>,
}

/// Lay out `blocks` onto as many pages as needed. Always returns at least
/// one page.
pub fn layout(blocks: &[Block], options: &RenderOptions) -> Vec<Page> {
    let mut state = LayoutState::new(options);

    for block in blocks {
        let face = if block.is_bold() {
            Face::Bold
        } else {
            Face::Regular
        };
        match block {
            Block::Heading1 { text } => state.text_block(text, options.heading1_size, face),
            Block::Heading2 { text } => state.text_block(text, options.heading2_size, face),
            Block::Paragraph { text, .. } | Block::Strong { text } => {
                state.text_block(text, options.body_size, face)
            }
            Block::UnorderedList { items } => {
                for item in items {
                    state.list_item("•", item);
                }
            }
            Block::OrderedList { items } => {
                for (index, item) in items.iter().enumerate() {
                    state.list_item(&format!("{}.", index + 1), item);
                }
            }
        }
        state.block_gap();
    }

    state.finish()
}

struct LayoutState<'a> {
    options: &'a RenderOptions,
    pages: Vec<Page>,
    current: Page,
    /// Top of the next line.
    y: f32,
}

impl<'a> LayoutState<'a> {
    fn new(options: &'a RenderOptions) -> Self {
        Self {
            options,
            pages: vec![],
            current: Page::default(),
            y: PAGE_HEIGHT - options.margin,
        }
    }

    fn content_width(&self) -> f32 {
        PAGE_WIDTH - 2.0 * self.options.margin
    }

    fn top(&self) -> f32 {
        PAGE_HEIGHT - self.options.margin
    }

    fn new_page(&mut self) {
        let page = std::mem::take(&mut self.current);
        self.pages.push(page);
        self.y = self.top();
    }

    /// Reserve one line and return its baseline.
    fn advance(&mut self, size: f32) -> f32 {
        let height = size * self.options.line_spacing;
        if self.y - height < self.options.margin && self.y < self.top() {
            self.new_page();
        }
        self.y -= height;
        self.y + height * DESCENT
    }

    fn place(&mut self, x: f32, y: f32, size: f32, face: Face, text: &str) {
        if text.is_empty() {
            return;
        }
        self.current.lines.push(PlacedLine {
            x,
            y,
            size,
            face,
            text: text.to_string(),
        });
    }

    fn text_block(&mut self, text: &str, size: f32, face: Face) {
        let x = self.options.margin;
        for line in wrap(text, self.content_width(), size, face) {
            let y = self.advance(size);
            self.place(x, y, size, face, &line);
        }
    }

    fn list_item(&mut self, marker: &str, text: &str) {
        let size = self.options.body_size;
        let marker_x = self.options.margin;
        let text_x = marker_x + self.options.list_indent;
        let width = self.content_width() - self.options.list_indent;

        for (index, line) in wrap(text, width, size, Face::Regular)
            .into_iter()
            .enumerate()
        {
            let y = self.advance(size);
            if index == 0 {
                self.place(marker_x, y, size, Face::Regular, marker);
            }
            self.place(text_x, y, size, Face::Regular, &line);
        }
    }

    fn block_gap(&mut self) {
        self.y -= self.options.paragraph_spacing;
    }

    fn finish(mut self) -> Vec<Page> {
        if !self.current.lines.is_empty() || self.pages.is_empty() {
            self.new_page();
        }
        self.pages
    }
}

/// Greedy line filling. `\n` forces a break; a word wider than the line is
/// split between characters.
pub fn wrap(text: &str, max_width: f32, size: f32, face: Face) -> Vec<String> {
    let mut lines = vec![];

    for hard_line in text.split('\n') {
        let mut line = String::new();
        for word in hard_line.split_whitespace() {
            let candidate = if line.is_empty() {
                word.to_string()
            } else {
                format!("{line} {word}")
            };
            if text_width(&candidate, face, size) <= max_width {
                line = candidate;
                continue;
            }

            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
            }
            if text_width(word, face, size) <= max_width {
                line = word.to_string();
            } else {
                let mut pieces = split_word(word, max_width, size, face);
                line = pieces.pop().unwrap_or_default();
                lines.extend(pieces);
            }
        }
        lines.push(line);
    }

    lines
}

fn split_word(word: &str, max_width: f32, size: f32, face: Face) -> Vec<String> {
    let mut pieces = vec![];
    let mut piece = String::new();
    for c in word.chars() {
        piece.push(c);
        if text_width(&piece, face, size) > max_width && piece.chars().count() > 1 {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(c);
        }
    }
    pieces.push(piece);
    pieces
}
