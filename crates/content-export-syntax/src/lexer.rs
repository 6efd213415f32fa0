//! # Lexer - Tokenizing HTML Source
//!
//! This module provides the first stage of reading HTML: breaking source text
//! into tokens using the [Logos] lexer generator.
//!
//! [Logos]: https://docs.rs/logos
//!
//! ## The Lossless Guarantee
//!
//! Every byte in the input appears in exactly one token. Nothing is skipped,
//! not even comments, which makes it possible to reconstruct the source:
//!
//! ```
//! use content_export_syntax::lexer::lex;
//!
//! let input = "<p>Hello, <b>world</b>!</p>";
//! let tokens = lex(input);
//!
//! let reconstructed: String = tokens.iter().map(|t| t.text).collect();
//! assert_eq!(input, reconstructed);
//! ```
//!
//! ## Token Design
//!
//! Tokens are whole tags rather than individual punctuation. The lexer only
//! decides *what shape* a piece of markup has (start tag, end tag, comment,
//! text). Tag names, self-closing markers and raw-text handling are left to
//! the [`event`](crate::event) layer.
//!
//! A `<` that does not begin a recognisable tag (`a < b`, a truncated `<p`
//! at end of input) is an error for Logos. We turn those into [`TokenKind::Text`]
//! so malformed input still tokenizes completely.

use logos::Logos;

/// Token kinds produced by the Logos lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `<!-- ... -->`, running to end of input when unterminated
    #[token("<!--", comment)]
    Comment,

    /// `<!DOCTYPE html>` and `<?xml ... ?>`
    #[regex(r"<![^<>-][^<>]*>")]
    #[regex(r"<\?[^<>]*>")]
    Declaration,

    /// `</name>`
    #[regex(r#"</[a-zA-Z]([^<>"']|"[^"]*"|'[^']*')*>"#)]
    EndTag,

    /// `<name attr="value">` or `<name/>`. Quoted values may hold `<` and `>`.
    #[regex(r#"<[a-zA-Z]([^<>"']|"[^"]*"|'[^']*')*>"#)]
    StartTag,

    /// Character data between tags
    #[regex(r"[^<]+")]
    Text,
}

/// Consumes the comment body up to and including `-->`.
fn comment(lex: &mut logos::Lexer<TokenKind>) -> bool {
    let rest = lex.remainder();
    match rest.find("-->") {
        Some(end) => lex.bump(end + 3),
        None => lex.bump(rest.len()),
    }
    true
}

/// A lexed token with its kind and text slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
}

/// Lex the input into a sequence of tokens.
///
/// Guarantees that all bytes from the input appear in the output tokens.
pub fn lex(input: &str) -> Vec<Token<'_>> {
    lex_with_spans(input)
        .into_iter()
        .map(|(token, _)| token)
        .collect()
}

/// Lex and return tokens along with their byte spans.
pub fn lex_with_spans(input: &str) -> Vec<(Token<'_>, std::ops::Range<usize>)> {
    let mut tokens = Vec::new();
    let mut lexer = TokenKind::lexer(input);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        let text = lexer.slice();
        // Unrecognised markup is kept as text
        let kind = result.unwrap_or(TokenKind::Text);
        tokens.push((Token { kind, text }, span));
    }

    tokens
}
