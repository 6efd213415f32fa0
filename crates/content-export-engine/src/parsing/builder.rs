use crate::models::Block;

use super::{
    tags::{TagRole, classify},
    text::{TextBuffer, decode_entities, is_blank, strip_list_marker},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LeafKind {
    Heading1,
    Heading2,
    Paragraph { forced_bold: bool },
    Strong,
}

/// The text block currently accumulating, if any.
#[derive(Debug)]
struct Leaf {
    kind: LeafKind,
    text: TextBuffer,
}

impl Leaf {
    fn new(kind: LeafKind) -> Self {
        Self {
            kind,
            text: TextBuffer::default(),
        }
    }
}

/// The list currently accumulating. Nested lists fold into the outermost one.
#[derive(Debug)]
struct ListState {
    ordered: bool,
    /// Open `<ul>`/`<ol>` tags not yet closed.
    depth: usize,
    /// Opened by a bare `<li>`, with no list tag around it.
    implicit: bool,
    items: Vec<String>,
    item: Option<TextBuffer>,
}

impl ListState {
    fn new(ordered: bool, implicit: bool) -> Self {
        Self {
            ordered,
            depth: if implicit { 0 } else { 1 },
            implicit,
            items: vec![],
            item: None,
        }
    }

    fn commit_item(&mut self) {
        let Some(item) = self.item.take() else {
            return;
        };
        let text = item.finish();
        let stripped = strip_list_marker(&text);
        if stripped.len() != text.len() {
            log::debug!("stripped typed list marker from {text:?}");
        }
        if !stripped.is_empty() {
            self.items.push(stripped.to_string());
        }
    }

    fn push_text(&mut self, text: &str, bold: bool) {
        match &mut self.item {
            Some(item) => item.push(text, bold),
            // Stray text between items becomes an item of its own
            None if !is_blank(text) => {
                let mut item = TextBuffer::default();
                item.push(text, bold);
                self.item = Some(item);
            }
            None => {}
        }
    }
}

/// State machine turning tag events into [`Block`]s.
///
/// Feed it with [`open`](Self::open), [`close`](Self::close) and
/// [`text`](Self::text) in document order, then call [`finish`](Self::finish).
/// It never fails: unbalanced or unknown markup only affects where block
/// boundaries fall.
pub struct BlockBuilder {
    leaf: Option<Leaf>,
    list: Option<ListState>,
    /// Open `<strong>`/`<b>` tags.
    bold_depth: usize,
    out: Vec<Block>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: None,
            list: None,
            bold_depth: 0,
            out: vec![],
        }
    }

    pub fn open(&mut self, name: &str, self_closing: bool) {
        match classify(name) {
            TagRole::Bold => {
                if !self_closing {
                    self.bold_depth += 1;
                }
            }
            TagRole::LineBreak => self.line_break(),
            TagRole::UnorderedList => self.open_list(false),
            TagRole::OrderedList => self.open_list(true),
            TagRole::ListItem => self.open_item(),
            TagRole::Heading1 => self.open_leaf(LeafKind::Heading1, self_closing),
            TagRole::Heading2 => self.open_leaf(LeafKind::Heading2, self_closing),
            TagRole::MinorHeading => {
                self.open_leaf(LeafKind::Paragraph { forced_bold: true }, self_closing)
            }
            TagRole::Paragraph => {
                self.open_leaf(LeafKind::Paragraph { forced_bold: false }, self_closing)
            }
            TagRole::Inline | TagRole::Ignored => {}
        }
    }

    pub fn close(&mut self, name: &str) {
        match classify(name) {
            TagRole::Bold => {
                self.bold_depth = self.bold_depth.saturating_sub(1);
                if self.bold_depth == 0
                    && self
                        .leaf
                        .as_ref()
                        .is_some_and(|leaf| leaf.kind == LeafKind::Strong)
                {
                    self.flush_leaf();
                }
            }
            TagRole::UnorderedList | TagRole::OrderedList => self.close_list(),
            TagRole::ListItem => {
                if let Some(list) = &mut self.list {
                    list.commit_item();
                }
            }
            TagRole::Heading1 | TagRole::Heading2 | TagRole::MinorHeading | TagRole::Paragraph => {
                match &mut self.list {
                    Some(list) => {
                        if let Some(item) = &mut list.item {
                            item.push_space();
                        }
                    }
                    None => self.flush_leaf(),
                }
            }
            TagRole::LineBreak | TagRole::Inline | TagRole::Ignored => {}
        }
    }

    pub fn text(&mut self, raw: &str) {
        let text = decode_entities(raw);
        let bold = self.bold_depth > 0;

        if self.implicit_list_ended() && !is_blank(&text) {
            self.finish_list();
        }

        if let Some(list) = &mut self.list {
            list.push_text(&text, bold);
            return;
        }

        if is_blank(&text) {
            if let Some(leaf) = &mut self.leaf {
                leaf.text.push_space();
            }
            return;
        }

        let kind = if bold {
            LeafKind::Strong
        } else {
            LeafKind::Paragraph { forced_bold: false }
        };
        self.leaf
            .get_or_insert_with(|| Leaf::new(kind))
            .text
            .push(&text, bold);
    }

    pub fn finish(mut self) -> Vec<Block> {
        // EOF flush
        self.flush_leaf();
        self.finish_list();
        self.out
    }

    fn open_leaf(&mut self, kind: LeafKind, self_closing: bool) {
        if self.implicit_list_ended() {
            self.finish_list();
        }

        if let Some(list) = &mut self.list {
            // Block markup inside an item does not split it
            if let Some(item) = &mut list.item {
                item.push_space();
            }
            return;
        }

        self.flush_leaf();
        if !self_closing {
            self.leaf = Some(Leaf::new(kind));
        }
    }

    fn line_break(&mut self) {
        if let Some(list) = &mut self.list {
            if let Some(item) = &mut list.item {
                item.push_break();
            }
        } else if let Some(leaf) = &mut self.leaf {
            leaf.text.push_break();
        }
    }

    fn open_list(&mut self, ordered: bool) {
        match &mut self.list {
            Some(list) => {
                // Flatten: the parent item ends where the nested list starts
                list.commit_item();
                list.depth += 1;
            }
            None => {
                self.flush_leaf();
                self.list = Some(ListState::new(ordered, false));
            }
        }
    }

    fn open_item(&mut self) {
        match &mut self.list {
            Some(list) => {
                list.commit_item();
                list.item = Some(TextBuffer::default());
            }
            None => {
                self.flush_leaf();
                let mut list = ListState::new(false, true);
                list.item = Some(TextBuffer::default());
                self.list = Some(list);
            }
        }
    }

    fn close_list(&mut self) {
        let Some(list) = &mut self.list else {
            return;
        };
        list.commit_item();
        if list.depth == 0 {
            self.finish_list();
            return;
        }
        list.depth -= 1;
        if list.depth == 0 && !list.implicit {
            self.finish_list();
        }
    }

    /// An implicit list ends as soon as something other than an item follows.
    fn implicit_list_ended(&self) -> bool {
        self.list
            .as_ref()
            .is_some_and(|list| list.implicit && list.depth == 0 && list.item.is_none())
    }

    fn finish_list(&mut self) {
        let Some(mut list) = self.list.take() else {
            return;
        };
        list.commit_item();
        if list.items.is_empty() {
            log::debug!("dropping list without items");
            return;
        }
        self.out.push(if list.ordered {
            Block::OrderedList { items: list.items }
        } else {
            Block::UnorderedList { items: list.items }
        });
    }

    fn flush_leaf(&mut self) {
        let Some(leaf) = self.leaf.take() else {
            return;
        };
        let all_bold = leaf.text.all_bold();
        let text = leaf.text.finish();
        if text.is_empty() {
            return;
        }
        self.out.push(match leaf.kind {
            LeafKind::Heading1 => Block::Heading1 { text },
            LeafKind::Heading2 => Block::Heading2 { text },
            LeafKind::Paragraph { forced_bold } => Block::Paragraph {
                text,
                bold: forced_bold || all_bold,
            },
            LeafKind::Strong => Block::Strong { text },
        });
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
