//! Writing blocks back out as HTML.
//!
//! The output uses only the elements the parser understands, so reading it
//! back yields the same blocks.

use crate::models::Block;

/// Render blocks as an HTML fragment, one block per line.
pub fn to_html(blocks: &[Block]) -> String {
    let mut out = String::new();
    for block in blocks {
        match block {
            Block::Heading1 { text } => wrap(&mut out, "h1", text),
            Block::Heading2 { text } => wrap(&mut out, "h2", text),
            Block::Paragraph { text, bold: false } => wrap(&mut out, "p", text),
            Block::Paragraph { text, bold: true } => {
                out.push_str("<p><strong>");
                out.push_str(&escape(text));
                out.push_str("</strong></p>\n");
            }
            Block::Strong { text } => wrap(&mut out, "strong", text),
            Block::UnorderedList { items } => list(&mut out, "ul", items),
            Block::OrderedList { items } => list(&mut out, "ol", items),
        }
    }
    out
}

fn wrap(out: &mut String, tag: &str, text: &str) {
    out.push_str(&format!("<{tag}>{}</{tag}>\n", escape(text)));
}

fn list(out: &mut String, tag: &str, items: &[String]) {
    out.push_str(&format!("<{tag}>\n"));
    for item in items {
        out.push_str(&format!("  <li>{}</li>\n", escape(item)));
    }
    out.push_str(&format!("</{tag}>\n"));
}

fn escape(text: &str) -> String {
    html_escape::encode_text(text).replace('\n', "<br>")
}
