//! Byte-level recognizers for gtk-doc code-block markup.
//!
//! Three tokens are recognized inside free-form documentation text:
//!
//! | Tag | Source text |
//! |-----|-------------|
//! | [`MarkupTag::OpenCodeBlock`] | `\|[` |
//! | [`MarkupTag::CloseCodeBlock`] | `]\|` |
//! | [`MarkupTag::LanguageComment`] | `<!-- language="NAME" -->` |
//!
//! Every recognizer answers one question: does this token begin at the
//! cursor, and how many bytes does it span? The answer is a `u32` length,
//! with 0 meaning "no match". The recognizers take the cursor by value, so
//! the caller's cursor never moves, and they neither allocate nor fail.
//!
//! This crate has no `gtkdoc_*` dependencies, so a host block parser can
//! embed it directly. The token walk over a whole document lives in
//! `gtkdoc_lexer`.
//!
//! # Example
//!
//! ```
//! use gtkdoc_lexer_core::{MarkupTag, SourceBuffer};
//!
//! let buf = SourceBuffer::new("|[<!-- language=\"C\" -->\nint x;\n]|");
//! assert_eq!(buf.scan_at(MarkupTag::OpenCodeBlock, 0), 2);
//! assert_eq!(buf.scan_at(MarkupTag::LanguageComment, 2), 21);
//! assert_eq!(buf.scan_at(MarkupTag::CloseCodeBlock, 31), 2);
//! ```

mod cursor;
mod scanner;
mod source_buffer;
mod tag;
pub mod utf8;

pub use cursor::Cursor;
pub use scanner::{
    scan, scan_at, scan_at_cstr, scan_close_code_block, scan_language_comment,
    scan_open_code_block,
};
pub use source_buffer::SourceBuffer;
pub use tag::MarkupTag;
