use serde::{Deserialize, Serialize};

/// One semantic unit of document content.
///
/// Blocks are flat: list items are plain strings and never contain other
/// blocks. A `\n` inside any text marks a hard line break (`<br>`).
///
/// The serde representation matches the JSON shape the front-end exchanges:
/// `{"type": "unorderedList", "items": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Block {
    Heading1 { text: String },
    Heading2 { text: String },
    Paragraph { text: String, bold: bool },
    /// A bold run standing on its own, outside any paragraph.
    Strong { text: String },
    UnorderedList { items: Vec<String> },
    OrderedList { items: Vec<String> },
}

impl Block {
    pub fn heading1(text: impl Into<String>) -> Self {
        Block::Heading1 { text: text.into() }
    }

    pub fn heading2(text: impl Into<String>) -> Self {
        Block::Heading2 { text: text.into() }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            bold: false,
        }
    }

    pub fn bold_paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph {
            text: text.into(),
            bold: true,
        }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Block::Strong { text: text.into() }
    }

    pub fn unordered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::UnorderedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn ordered_list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Block::OrderedList {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// Text of a heading, paragraph or strong run. `None` for lists.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading1 { text }
            | Block::Heading2 { text }
            | Block::Paragraph { text, .. }
            | Block::Strong { text } => Some(text),
            Block::UnorderedList { .. } | Block::OrderedList { .. } => None,
        }
    }

    /// Items of a list. `None` for text blocks.
    pub fn items(&self) -> Option<&[String]> {
        match self {
            Block::UnorderedList { items } | Block::OrderedList { items } => Some(items),
            _ => None,
        }
    }

    /// Whether the block's text is set in a bold face.
    pub fn is_bold(&self) -> bool {
        match self {
            Block::Heading1 { .. } | Block::Heading2 { .. } | Block::Strong { .. } => true,
            Block::Paragraph { bold, .. } => *bold,
            Block::UnorderedList { .. } | Block::OrderedList { .. } => false,
        }
    }

    /// Short name used in logs and outlines.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading1 { .. } => "heading1",
            Block::Heading2 { .. } => "heading2",
            Block::Paragraph { .. } => "paragraph",
            Block::Strong { .. } => "strong",
            Block::UnorderedList { .. } => "unorderedList",
            Block::OrderedList { .. } => "orderedList",
        }
    }
}
