//! # HTML to Block Parsing
//!
//! Converts an HTML fragment into the flat [`Block`] sequence the renderers
//! consume.
//!
//! ## Parsing Phases
//!
//! 1. **Events** (`content_export_syntax`): the source is lexed into whole
//!    tags and streamed as open / close / text events
//!
//! 2. **Block Construction** (`builder`): a `BlockBuilder` tracks the open
//!    leaf block, the open list and the bold depth, and emits `Block`s as
//!    blocks close
//!
//! ## Modules
//!
//! - **`tags`**: maps element names to the role they play (`TagRole`)
//! - **`text`**: entity decoding, whitespace collapsing, list marker stripping
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Output is in document order
//! - No block has empty text, no list is empty, no list item is empty
//! - List items are flat strings; nested lists fold into the outermost list
//! - Malformed markup never fails the parse

pub mod builder;
pub mod tags;
pub mod text;

#[cfg(test)]
mod tests;

use content_export_syntax::{HtmlEvent, events};

use crate::models::Block;

pub use builder::BlockBuilder;

/// Parse an HTML fragment into blocks.
pub fn parse_html(html: &str) -> Vec<Block> {
    let mut builder = BlockBuilder::new();

    for event in events(html) {
        match event {
            HtmlEvent::Open { name, self_closing } => builder.open(&name, self_closing),
            HtmlEvent::Close { name } => builder.close(&name),
            HtmlEvent::Text(text) => builder.text(text),
        }
    }

    let blocks = builder.finish();
    log::debug!(
        "parsed {} bytes of HTML into {} blocks",
        html.len(),
        blocks.len()
    );
    blocks
}
