//! Hand-written recognizers for gtk-doc code-block markup.
//!
//! Each recognizer takes a [`Cursor`] by value and returns the number of
//! bytes its token spans, or 0 when no token begins at the cursor.
//!
//! # Design
//!
//! The scanners are explicit finite-state matchers over the sentinel-
//! terminated buffer. The cursor copy taken on entry is the rollback marker:
//! every failing transition returns 0 and the caller's cursor never moved.
//! No state accepts the `0x00` sentinel, so a scan never runs past the end
//! of the source.
//!
//! Both delimiters are pure ASCII, so a byte at or above `0x80` fails the
//! first comparison and nothing after it is read. Bytes of the annotation
//! value are validated as UTF-8 (see [`utf8`](crate::utf8)); a malformed or
//! truncated sequence there is a mismatch.

use std::ffi::CStr;

use crate::cursor::Cursor;
use crate::tag::MarkupTag;
use crate::SourceBuffer;

/// Result of a failed scan.
const NO_MATCH: u32 = 0;

const DELIMITER_LEN: u32 = 2;

/// Run the recognizer for `tag` at the cursor.
#[inline]
pub fn scan(tag: MarkupTag, cursor: Cursor<'_>) -> u32 {
    match tag {
        MarkupTag::OpenCodeBlock => scan_open_code_block(cursor),
        MarkupTag::CloseCodeBlock => scan_close_code_block(cursor),
        MarkupTag::LanguageComment => scan_language_comment(cursor),
    }
}

/// Recognize the opening delimiter `|[`. Returns 2 on a match, 0 otherwise.
#[inline]
pub fn scan_open_code_block(cursor: Cursor<'_>) -> u32 {
    delimiter(cursor, *b"|[")
}

/// Recognize the closing delimiter `]|`. Returns 2 on a match, 0 otherwise.
#[inline]
pub fn scan_close_code_block(cursor: Cursor<'_>) -> u32 {
    delimiter(cursor, *b"]|")
}

/// Recognize `<!-- language="NAME" -->`.
///
/// The keyword `language` is matched ASCII-case-insensitively. `NAME` may be
/// empty and may hold any well-formed UTF-8 except `"`, a backtick, `\0`,
/// `\n`, `\r` and the sequence `--`. Any number of spaces may separate the
/// closing quote from `-->`.
///
/// Returns the length up to and including `-->`, or 0 if the tag is
/// incomplete or malformed anywhere. There is no partial result.
pub fn scan_language_comment(cursor: Cursor<'_>) -> u32 {
    let marker = cursor;
    match language_comment(cursor) {
        Some(end) => end.pos() - marker.pos(),
        None => NO_MATCH,
    }
}

/// Scan `source` at `offset` with the recognizer for `tag`.
///
/// Offsets greater than `source.len()` return 0 without scanning. Only the
/// bytes a token starting at `offset` could cover are copied into a
/// [`SourceBuffer`], so the cost does not grow with the rest of the input.
pub fn scan_at(tag: MarkupTag, source: &[u8], offset: usize) -> usize {
    let Some(rest) = source.get(offset..) else {
        return 0;
    };
    SourceBuffer::from_bytes(reachable(tag, rest)).scan_at(tag, 0) as usize
}

/// The prefix of `rest` that a `tag` token starting at `rest[0]` can span.
///
/// A delimiter is two bytes. An annotation opens with `<!-- ` and never
/// crosses `\n`, `\r` or `\0`, since every state rejects those bytes.
fn reachable(tag: MarkupTag, rest: &[u8]) -> &[u8] {
    let end = match tag {
        MarkupTag::OpenCodeBlock | MarkupTag::CloseCodeBlock => DELIMITER_LEN as usize,
        MarkupTag::LanguageComment if !rest.starts_with(ANNOTATION_OPEN) => 0,
        MarkupTag::LanguageComment => {
            memchr::memchr3(b'\n', b'\r', b'\0', rest).unwrap_or(rest.len())
        }
    };
    rest.get(..end).unwrap_or(rest)
}

/// [`scan_at`] over a NUL-terminated string. The string ends at its first
/// NUL byte, so offsets past it return 0.
pub fn scan_at_cstr(tag: MarkupTag, source: &CStr, offset: usize) -> usize {
    scan_at(tag, source.to_bytes(), offset)
}

// ─── Delimiters ────────────────────────────────────────────────

/// Two-byte ASCII delimiter. `\n`, any other ASCII byte and every
/// non-ASCII byte (lead or continuation) fail on the first compare.
fn delimiter(mut cursor: Cursor<'_>, literal: [u8; 2]) -> u32 {
    let [first, second] = literal;
    if cursor.eat(first) && cursor.eat(second) {
        DELIMITER_LEN
    } else {
        NO_MATCH
    }
}

// ─── Language Annotation ───────────────────────────────────────

const ANNOTATION_OPEN: &[u8] = b"<!-- ";

/// Attribute keyword, matched letter by letter ignoring ASCII case.
const KEYWORD: &[u8] = b"language";

/// Turn a transition result into a `?`-able step.
#[inline]
fn step(matched: bool) -> Option<()> {
    matched.then_some(())
}

/// Walk the annotation; returns the cursor just past `-->`.
fn language_comment(mut cursor: Cursor<'_>) -> Option<Cursor<'_>> {
    step(cursor.eat_literal(ANNOTATION_OPEN))?;
    for &letter in KEYWORD {
        step(cursor.eat_ignore_ascii_case(letter))?;
    }
    step(cursor.eat_literal(b"=\""))?;
    attribute_value(&mut cursor)?;
    step(cursor.eat(b'"'))?;
    cursor.eat_while(|b| b == b' ');
    step(cursor.eat_literal(b"-->"))?;
    Some(cursor)
}

/// Position inside the attribute value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ValueState {
    /// Start of the value, or after any byte but `-`.
    Plain,
    /// Directly after a `-`; a second one would close the comment.
    AfterDash,
}

/// Consume the attribute value up to (not including) the closing `"`.
fn attribute_value(cursor: &mut Cursor<'_>) -> Option<()> {
    let mut state = ValueState::Plain;
    loop {
        state = match (state, cursor.current()) {
            (_, b'"') => return Some(()),
            (_, b'\0' | b'\n' | b'\r' | b'`') | (ValueState::AfterDash, b'-') => return None,
            (ValueState::Plain, b'-') => {
                cursor.advance();
                ValueState::AfterDash
            }
            (_, 0x01..=0x7F) => {
                cursor.advance();
                ValueState::Plain
            }
            (_, 0x80..=0xFF) => {
                step(cursor.eat_utf8_char())?;
                ValueState::Plain
            }
        };
    }
}
