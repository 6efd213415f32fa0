/// What an element means to the block builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRole {
    Heading1,
    Heading2,
    /// `h3`..`h6`: kept as bold paragraphs.
    MinorHeading,
    /// `p` and every element not listed elsewhere. Starts and ends a paragraph.
    Paragraph,
    /// `strong` / `b`
    Bold,
    UnorderedList,
    OrderedList,
    ListItem,
    LineBreak,
    /// Phrasing content that neither starts nor ends a block.
    Inline,
    /// Void elements and `head`: no text of their own, never a block.
    Ignored,
}

const INLINE: &[&str] = &[
    "a", "abbr", "bdi", "bdo", "cite", "code", "data", "del", "dfn", "em", "font", "i", "ins",
    "kbd", "label", "mark", "q", "s", "samp", "small", "span", "strike", "sub", "sup", "time",
    "tt", "u", "var",
];

const IGNORED: &[&str] = &[
    "area", "base", "col", "embed", "head", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

pub fn classify(name: &str) -> TagRole {
    match name {
        "h1" => TagRole::Heading1,
        "h2" => TagRole::Heading2,
        "h3" | "h4" | "h5" | "h6" => TagRole::MinorHeading,
        "strong" | "b" => TagRole::Bold,
        "ul" | "menu" => TagRole::UnorderedList,
        "ol" => TagRole::OrderedList,
        "li" => TagRole::ListItem,
        "br" => TagRole::LineBreak,
        _ if INLINE.contains(&name) => TagRole::Inline,
        _ if IGNORED.contains(&name) => TagRole::Ignored,
        _ => TagRole::Paragraph,
    }
}
