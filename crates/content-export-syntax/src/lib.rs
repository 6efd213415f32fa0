//! # content-export-syntax
//!
//! A small, permissive HTML tokenizer built on [Logos].
//!
//! [Logos]: https://docs.rs/logos
//!
//! Content coming out of a CMS or a rich-text editor is rarely a full,
//! well-formed document. It is usually a fragment (`<h1>..</h1><p>..</p>`),
//! sometimes with stray `<` characters, unclosed tags or pasted comments.
//! This crate never rejects input: it reports what it can see and leaves the
//! interpretation to the caller.
//!
//! ## Architecture Overview
//!
//! ```text
//! Source Text → Lexer → Tokens → Events
//!               (Logos)          (open / close / text)
//! ```
//!
//! ### 1. Lexer ([`lexer`] module)
//!
//! Splits the input into whole-tag tokens. Every byte ends up in exactly one
//! token, so the source can be reconstructed from the token stream.
//!
//! ### 2. Events ([`event`] module)
//!
//! Converts tokens to the `Open`/`Close`/`Text` stream a SAX-style consumer
//! expects, dropping comments and declarations and skipping the contents of
//! raw-text elements such as `<script>`.
//!
//! ## Quick Start
//!
//! ```
//! use content_export_syntax::{events, HtmlEvent};
//!
//! let names: Vec<String> = events("<ul><li>Jeden</li></ul>")
//!     .filter_map(|e| match e {
//!         HtmlEvent::Open { name, .. } => Some(name),
//!         _ => None,
//!     })
//!     .collect();
//!
//! assert_eq!(names, ["ul", "li"]);
//! ```

pub mod event;
pub mod lexer;

pub use event::{Events, HtmlEvent, events, tag_name};
pub use lexer::{Token, TokenKind, lex, lex_with_spans};
