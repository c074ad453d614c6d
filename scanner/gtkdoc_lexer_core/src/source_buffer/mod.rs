//! Owned copy of the text being scanned, with a trailing sentinel.
//!
//! Content is followed by one `0x00` sentinel byte and then zeros up to the
//! next multiple of [`CACHE_LINE`]. Scanners rely on this tail: they stop on
//! `0x00` and never need a length check.
//!
//! The content is raw bytes. Text from a host parser may not be valid
//! UTF-8, and the recognizers reject malformed sequences themselves.

use crate::scanner;
use crate::tag::MarkupTag;
use crate::Cursor;

const CACHE_LINE: usize = 64;

/// Scannable copy of a document.
///
/// ```text
/// | content (len bytes) | 0x00 | 0x00 ... | <- multiple of 64 bytes
///                        ^ sentinel at index len
/// ```
#[derive(Clone, Debug)]
pub struct SourceBuffer {
    buf: Vec<u8>,
    /// Content length; also the index of the sentinel.
    source_len: u32,
}

impl SourceBuffer {
    /// Copy `source` into a new buffer.
    pub fn new(source: &str) -> Self {
        Self::from_bytes(source.as_bytes())
    }

    /// Copy raw bytes into a new buffer, malformed UTF-8 included.
    ///
    /// Content beyond `u32::MAX` bytes is not addressable; the length
    /// saturates there.
    pub fn from_bytes(source: &[u8]) -> Self {
        let padded_len = (source.len() / CACHE_LINE + 1) * CACHE_LINE;
        let mut buf = Vec::with_capacity(padded_len);
        buf.extend_from_slice(source);
        buf.resize(padded_len, 0);
        Self {
            buf,
            source_len: u32::try_from(source.len()).unwrap_or(u32::MAX),
        }
    }

    /// The content, without the sentinel tail.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.source_len as usize]
    }

    /// Cursor on the first byte.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.buf, self.source_len)
    }

    /// Create a [`Cursor`] positioned at `offset`.
    ///
    /// Returns `None` when `offset` lies past the end of the source. An
    /// offset equal to [`len()`](Self::len) is valid and sits on the sentinel.
    pub fn cursor_at(&self, offset: u32) -> Option<Cursor<'_>> {
        if offset > self.source_len {
            return None;
        }
        let mut cursor = self.cursor();
        cursor.advance_n(offset);
        Some(cursor)
    }

    /// Run the scanner selected by `tag` at `offset`.
    ///
    /// Returns the number of bytes consumed, or 0 when no token begins at
    /// `offset`. Offsets past the end of the source return 0 without
    /// invoking the scanner.
    pub fn scan_at(&self, tag: MarkupTag, offset: u32) -> u32 {
        match self.cursor_at(offset) {
            Some(cursor) => scanner::scan(tag, cursor),
            None => 0,
        }
    }

    /// Content length in bytes.
    pub fn len(&self) -> u32 {
        self.source_len
    }

    pub fn is_empty(&self) -> bool {
        self.source_len == 0
    }
}

const _: () = assert!(std::mem::size_of::<SourceBuffer>() <= 32);

#[cfg(test)]
mod tests;
