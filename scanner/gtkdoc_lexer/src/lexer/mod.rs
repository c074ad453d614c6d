//! Token walk over a whole document.
//!
//! The walk sits between the host's text and the recognizers in
//! `gtkdoc_lexer_core`:
//!
//! ```text
//! source → SourceBuffer → scan(tag, cursor) → (tag, len) → MarkupToken
//! ```
//!
//! At each candidate offset the recognizers are tried in
//! [`MarkupTag::ALL`] order. When none matches, the walk steps one byte and
//! then jumps to the next byte that can start a token, folding everything
//! passed over into a single `Text` token. Tokens tile the source: no gaps,
//! no overlaps.

use gtkdoc_lexer_core::{scan, scan_language_comment, Cursor, MarkupTag, SourceBuffer};
use tracing::{debug, trace};

use crate::options::LexOptions;
use crate::{MarkupKind, MarkupToken, Span};

/// Iterator over the markup tokens of one document.
pub struct MarkupLexer {
    buf: SourceBuffer,
    /// Start of the next token.
    pos: u32,
    options: LexOptions,
    /// End of the `|[` emitted last, if nothing has been emitted since.
    /// An annotation may only start here unless `annotations_anywhere`.
    open_end: Option<u32>,
    /// Markup token found right after a text run; emitted next.
    pending: Option<MarkupToken>,
}

impl MarkupLexer {
    /// Create a lexer with default options.
    pub fn new(source: &str) -> Self {
        Self::with_options(source, LexOptions::default())
    }

    pub fn with_options(source: &str, options: LexOptions) -> Self {
        Self {
            buf: SourceBuffer::new(source),
            pos: 0,
            options,
            open_end: None,
            pending: None,
        }
    }

    /// Try every recognizer at the cursor.
    fn markup_at(&self, cursor: Cursor<'_>) -> Option<(MarkupTag, u32)> {
        MarkupTag::ALL.into_iter().find_map(|tag| {
            let len = match tag {
                MarkupTag::LanguageComment => self.annotation_at(cursor),
                MarkupTag::OpenCodeBlock | MarkupTag::CloseCodeBlock => scan(tag, cursor),
            };
            (len > 0).then_some((tag, len))
        })
    }

    fn annotation_at(&self, cursor: Cursor<'_>) -> u32 {
        if !self.options.annotations_anywhere && self.open_end != Some(cursor.pos()) {
            return 0;
        }
        let len = scan_language_comment(cursor);
        if len > 0 && self.options.require_line_end && !line_end_follows(cursor, len) {
            debug!(pos = cursor.pos(), "annotation rejected: no line break after `-->`");
            return 0;
        }
        len
    }

    fn emit(&mut self, token: MarkupToken) -> MarkupToken {
        self.pos = token.span.end;
        self.open_end = (token.kind == MarkupKind::OpenCodeBlock).then_some(token.span.end);
        trace!(kind = %token.kind, span = %token.span, "markup token");
        token
    }
}

/// Whether the annotation of `len` bytes at `cursor` is followed by
/// optional blanks and then `\n` or `\r`.
fn line_end_follows(mut cursor: Cursor<'_>, len: u32) -> bool {
    cursor.advance_n(len);
    cursor.eat_while(|b| b == b' ' || b == b'\t');
    matches!(cursor.current(), b'\n' | b'\r')
}

impl Iterator for MarkupLexer {
    type Item = MarkupToken;

    fn next(&mut self) -> Option<MarkupToken> {
        if let Some(token) = self.pending.take() {
            return Some(self.emit(token));
        }

        let text_start = self.pos;
        let mut cursor = self.buf.cursor_at(text_start)?;
        while !cursor.is_eof() {
            if let Some((tag, len)) = self.markup_at(cursor) {
                let start = cursor.pos();
                let token = MarkupToken::new(tag.into(), Span::new(start, start + len));
                if start == text_start {
                    return Some(self.emit(token));
                }
                self.pending = Some(token);
                return Some(self.emit(MarkupToken::new(
                    MarkupKind::Text,
                    Span::new(text_start, start),
                )));
            }
            cursor.advance();
            cursor.skip_to_markup_candidate();
        }

        let end = cursor.pos();
        if end == text_start {
            return None;
        }
        Some(self.emit(MarkupToken::new(
            MarkupKind::Text,
            Span::new(text_start, end),
        )))
    }
}
