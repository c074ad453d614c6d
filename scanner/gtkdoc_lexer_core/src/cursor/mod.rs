//! Read position inside a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Reads never check bounds against the source length. The buffer always
//! holds a `0x00` sentinel at `source_len` followed by zero padding, and no
//! recognizer accepts `0x00`, so every scan stops on the sentinel before it
//! can leave the buffer.
//!
//! # Interior Null Bytes
//!
//! Text handed over by a host parser may contain `0x00` before the end.
//! Such a byte reads the same as the sentinel. [`Cursor::is_eof`] tells the
//! two apart by position; the recognizers reject both alike.

use crate::utf8::{self, LeadByte, CONTINUATION};

/// A position in a sentinel-terminated buffer.
///
/// Obtained from [`SourceBuffer::cursor`](crate::SourceBuffer::cursor) or
/// [`SourceBuffer::cursor_at`](crate::SourceBuffer::cursor_at). Copying a
/// cursor records a marker; assigning the copy back rolls the scan back.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    /// Content, then the sentinel, then zero padding.
    buf: &'a [u8],
    pos: u32,
    /// Index of the sentinel in `buf`.
    source_len: u32,
}

// Two `u32`s next to a slice reference.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Cursor at offset 0. `buf[source_len]` and everything after it must
    /// be zero; [`SourceBuffer`](crate::SourceBuffer) guarantees this.
    pub(crate) fn new(buf: &'a [u8], source_len: u32) -> Self {
        debug_assert!(
            buf.get(source_len as usize..).is_some_and(|tail| tail.iter().all(|&b| b == 0)),
            "buffer must end in a zeroed sentinel region"
        );
        Self {
            buf,
            pos: 0,
            source_len,
        }
    }

    /// Byte under the cursor; `0x00` on the sentinel.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos as usize]
    }

    #[inline]
    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Move forward `n` bytes. The caller keeps the result within
    /// `0..=source_len`.
    #[inline]
    pub fn advance_n(&mut self, n: u32) {
        self.pos += n;
    }

    /// On the sentinel, as opposed to an interior `0x00`.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source_len
    }

    /// Byte offset from the start of the buffer.
    #[inline]
    pub fn pos(&self) -> u32 {
        self.pos
    }

    /// Step over `byte` if it is under the cursor.
    #[inline]
    pub fn eat(&mut self, byte: u8) -> bool {
        self.eat_if(|b| b == byte)
    }

    /// [`eat`](Self::eat), ignoring ASCII case.
    #[inline]
    pub fn eat_ignore_ascii_case(&mut self, byte: u8) -> bool {
        self.eat_if(|b| b.eq_ignore_ascii_case(&byte))
    }

    #[inline]
    fn eat_if(&mut self, pred: impl FnOnce(u8) -> bool) -> bool {
        let hit = pred(self.current());
        if hit {
            self.advance();
        }
        hit
    }

    /// Step over `literal` one byte at a time. A mismatch leaves the cursor
    /// on the first byte that differed.
    #[inline]
    pub fn eat_literal(&mut self, literal: &[u8]) -> bool {
        literal.iter().all(|&b| self.eat(b))
    }

    /// Step over bytes while `pred` holds. `pred(0)` must be `false`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current()) {
            self.advance();
        }
    }

    /// Advance past one well-formed UTF-8 character.
    ///
    /// Returns `false` and leaves the cursor unmoved when the bytes at the
    /// cursor are not a complete, well-formed character (see
    /// [`utf8`](crate::utf8) for the accepted ranges) or when at EOF.
    pub fn eat_utf8_char(&mut self) -> bool {
        let seq = match utf8::classify(self.current()) {
            LeadByte::Ascii => {
                if self.is_eof() {
                    return false;
                }
                self.pos += 1;
                return true;
            }
            LeadByte::Sequence(seq) => seq,
            LeadByte::Invalid => return false,
        };

        // The sentinel is never a continuation byte, so a truncated
        // sequence stops at EOF without reading further.
        let mut probe = *self;
        probe.advance();
        if !seq.first.contains(probe.current()) {
            return false;
        }
        probe.advance();
        for _ in 2..seq.width {
            if !CONTINUATION.contains(probe.current()) {
                return false;
            }
            probe.advance();
        }
        *self = probe;
        true
    }

    /// Jump to the next `|`, `]` or `<` in the content, or to the sentinel
    /// if none is left. Returns the distance moved.
    pub fn skip_to_markup_candidate(&mut self) -> u32 {
        let rest = self
            .buf
            .get(self.pos as usize..self.source_len as usize)
            .unwrap_or_default();
        let skip = memchr::memchr3(b'|', b']', b'<', rest).unwrap_or(rest.len());
        // `skip <= source_len - pos`, which fits in u32.
        let skip = u32::try_from(skip).unwrap_or(0);
        self.pos += skip;
        skip
    }
}
