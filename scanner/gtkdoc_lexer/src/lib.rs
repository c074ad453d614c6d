//! Token walk over gtk-doc documentation text.
//!
//! Splits a document into [`MarkupToken`]s: code-block delimiters, language
//! annotations, and the text between them. Recognition itself is delegated
//! to `gtkdoc_lexer_core`; this crate decides where each recognizer may run
//! and turns `(tag, len)` answers into spans.
//!
//! # Tracing
//!
//! - `RUST_LOG=gtkdoc_lexer=debug`: one span per `lex` call with the token count.
//! - `RUST_LOG=gtkdoc_lexer=trace`: every markup token as it is produced.

mod lexer;
mod options;
mod span;
mod token;

pub use lexer::MarkupLexer;
pub use options::LexOptions;
pub use span::Span;
pub use token::{language_name, MarkupKind, MarkupToken};

/// Lex `source` with default options.
pub fn lex(source: &str) -> Vec<MarkupToken> {
    lex_with_options(source, &LexOptions::default())
}

/// Lex `source` into tokens that tile it from start to end.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn lex_with_options(source: &str, options: &LexOptions) -> Vec<MarkupToken> {
    let tokens: Vec<MarkupToken> = MarkupLexer::with_options(source, *options).collect();
    tracing::debug!(
        tokens = tokens.len(),
        markup = tokens.iter().filter(|t| t.kind.is_markup()).count(),
        "lexing complete"
    );
    tokens
}
