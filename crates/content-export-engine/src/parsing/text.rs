use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Bullet glyphs or `1.` / `(2)` / `3)` numbering typed into list item text.
///
/// Editors frequently paste "• Item" or "1. Item" inside an `<li>`, which would
/// render twice once the list gets its own markers.
static LIST_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:[•·▪◦‣●○\-–—*+]|\(?\d{1,3}[.)])\s+").expect("valid list marker regex")
});

/// Decode character references (`&amp;`, `&oacute;`, `&#322;`).
pub fn decode_entities(raw: &str) -> Cow<'_, str> {
    html_escape::decode_html_entities(raw)
}

/// Remove a leading bullet or number the author typed into a list item.
pub fn strip_list_marker(item: &str) -> &str {
    match LIST_MARKER.find(item) {
        Some(m) => &item[m.end()..],
        None => item,
    }
}

pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

/// Accumulates the text of one block as text events arrive.
///
/// Whitespace runs collapse to a single space the way a browser lays them
/// out; `\n` is only produced by explicit line breaks. The buffer also counts
/// how many non-blank runs were read under bold state.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    runs: usize,
    bold_runs: usize,
}

impl TextBuffer {
    pub fn push(&mut self, text: &str, bold: bool) {
        if is_blank(text) {
            self.push_space();
            return;
        }

        let mut pending_space = text.starts_with(char::is_whitespace);
        for word in text.split_whitespace() {
            if pending_space {
                self.push_space();
            }
            self.text.push_str(word);
            pending_space = true;
        }
        if text.ends_with(char::is_whitespace) {
            self.push_space();
        }

        self.runs += 1;
        if bold {
            self.bold_runs += 1;
        }
    }

    /// Separator between adjacent pieces of text. Never leading, never doubled.
    pub fn push_space(&mut self) {
        if !self.text.is_empty() && !self.text.ends_with([' ', '\n']) {
            self.text.push(' ');
        }
    }

    pub fn push_break(&mut self) {
        let trimmed = self.text.trim_end_matches(' ').len();
        self.text.truncate(trimmed);
        self.text.push('\n');
    }

    /// True when at least one run was read and all of them were bold.
    pub fn all_bold(&self) -> bool {
        self.runs > 0 && self.runs == self.bold_runs
    }

    /// Final text: every line trimmed, leading and trailing empty lines removed.
    pub fn finish(self) -> String {
        let lines: Vec<&str> = self.text.split('\n').map(str::trim).collect();
        let first = lines.iter().position(|l| !l.is_empty());
        let last = lines.iter().rposition(|l| !l.is_empty());
        match (first, last) {
            (Some(first), Some(last)) => lines[first..=last].join("\n"),
            _ => String::new(),
        }
    }
}
