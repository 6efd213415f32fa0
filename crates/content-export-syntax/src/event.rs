//! # Tag Events
//!
//! Turns the flat token stream from the [`lexer`](crate::lexer) into the
//! open/close/text callbacks a streaming HTML reader works with.
//!
//! ```text
//! "<p>Hi <b>there</b></p>"
//!   → Open(p) Text("Hi ") Open(b) Text("there") Close(b) Close(p)
//! ```
//!
//! The stream is forgiving: there is no tag balancing, no
//! implied end tags and no error reporting. Consumers that need structure
//! track it themselves.
//!
//! Comments and declarations produce no events. The contents of raw-text
//! elements (`script`, `style`, ...) are skipped up to the matching close
//! tag without being tokenized, so `<style>p { color: red }</style>` never
//! shows up as text and a `<!--` inside a script string hides nothing.

use logos::Logos;

use crate::lexer::TokenKind;

/// Elements whose contents are never document text.
pub const RAW_TEXT_ELEMENTS: &[&str] = &[
    "noscript", "script", "style", "template", "title",
];

/// One step of the streaming reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HtmlEvent<'a> {
    /// A start tag. `name` is lower-cased, attributes are dropped.
    Open { name: String, self_closing: bool },
    /// An end tag.
    Close { name: String },
    /// Raw character data, entities still encoded.
    Text(&'a str),
}

/// Iterator over the [`HtmlEvent`]s of an input string.
pub struct Events<'a> {
    lexer: logos::Lexer<'a, TokenKind>,
    raw_text: Option<String>,
}

impl<'a> Events<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            lexer: TokenKind::lexer(input),
            raw_text: None,
        }
    }
}

impl<'a> Iterator for Events<'a> {
    type Item = HtmlEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(raw) = self.raw_text.take() {
            let rest = self.lexer.remainder();
            match find_close_tag(rest, &raw) {
                Some(offset) => self.lexer.bump(offset),
                None => {
                    self.lexer.bump(rest.len());
                    return None;
                }
            }
        }

        loop {
            let kind = self.lexer.next()?.unwrap_or(TokenKind::Text);
            let text = self.lexer.slice();

            match kind {
                TokenKind::Comment | TokenKind::Declaration => continue,
                TokenKind::Text => return Some(HtmlEvent::Text(text)),
                TokenKind::EndTag => {
                    return Some(HtmlEvent::Close {
                        name: tag_name(text),
                    });
                }
                TokenKind::StartTag => {
                    let name = tag_name(text);
                    let self_closing = text.ends_with("/>");
                    if !self_closing && RAW_TEXT_ELEMENTS.contains(&name.as_str()) {
                        self.raw_text = Some(name.clone());
                    }
                    return Some(HtmlEvent::Open { name, self_closing });
                }
            }
        }
    }
}

/// Stream the events of `input`.
pub fn events(input: &str) -> Events<'_> {
    Events::new(input)
}

/// Byte offset of the `</name` that closes a raw-text element, matched
/// case-insensitively and followed by `>`, `/` or whitespace.
fn find_close_tag(rest: &str, name: &str) -> Option<usize> {
    rest.match_indices("</").map(|(i, _)| i).find(|&i| {
        let after = &rest[i + 2..];
        after
            .get(..name.len())
            .is_some_and(|candidate| candidate.eq_ignore_ascii_case(name))
            && after[name.len()..]
                .chars()
                .next()
                .is_some_and(|c| c == '>' || c == '/' || c.is_ascii_whitespace())
    })
}

/// Extracts the lower-cased element name from a start or end tag.
pub fn tag_name(tag: &str) -> String {
    tag.trim_start_matches('<')
        .trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == ':')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
