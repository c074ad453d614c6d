//! UTF-8 lead-byte classification.
//!
//! Well-formed sequences per RFC 3629, expressed as a range table:
//!
//! ```text
//! lead        width  first continuation
//! 00..=7F     1      -
//! C2..=DF     2      80..=BF
//! E0          3      A0..=BF   (no overlongs)
//! E1..=EC     3      80..=BF
//! ED          3      80..=9F   (no surrogates)
//! EE..=EF     3      80..=BF
//! F0          4      90..=BF   (no overlongs)
//! F1..=F3     4      80..=BF
//! F4          4      80..=8F   (nothing above U+10FFFF)
//! ```
//!
//! Every continuation after the first is `80..=BF`. Bytes `80..=C1` and
//! `F5..=FF` never start a sequence.

/// Inclusive byte range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ByteRange {
    pub lo: u8,
    pub hi: u8,
}

impl ByteRange {
    pub const fn new(lo: u8, hi: u8) -> Self {
        Self { lo, hi }
    }

    #[inline]
    pub const fn contains(self, byte: u8) -> bool {
        self.lo <= byte && byte <= self.hi
    }
}

/// Range of a plain continuation byte.
pub const CONTINUATION: ByteRange = ByteRange::new(0x80, 0xBF);

/// Shape of a multi-byte sequence, determined by its lead byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sequence {
    /// Total width in bytes, lead included (2..=4).
    pub width: u32,
    /// Allowed range for the byte right after the lead.
    pub first: ByteRange,
}

/// What a byte can be when it appears where a character should start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LeadByte {
    /// Single-byte character, `0x00..=0x7F`.
    Ascii,
    /// Lead byte of a multi-byte sequence.
    Sequence(Sequence),
    /// Continuation byte, overlong lead (`0xC0`, `0xC1`) or `0xF5..=0xFF`.
    Invalid,
}

const fn seq(width: u32, lo: u8, hi: u8) -> LeadByte {
    LeadByte::Sequence(Sequence {
        width,
        first: ByteRange::new(lo, hi),
    })
}

/// Classify a byte in lead position.
#[inline]
pub const fn classify(byte: u8) -> LeadByte {
    match byte {
        0x00..=0x7F => LeadByte::Ascii,
        0xC2..=0xDF => seq(2, 0x80, 0xBF),
        0xE0 => seq(3, 0xA0, 0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => seq(3, 0x80, 0xBF),
        0xED => seq(3, 0x80, 0x9F),
        0xF0 => seq(4, 0x90, 0xBF),
        0xF1..=0xF3 => seq(4, 0x80, 0xBF),
        0xF4 => seq(4, 0x80, 0x8F),
        0x80..=0xC1 | 0xF5..=0xFF => LeadByte::Invalid,
    }
}

#[cfg(test)]
mod tests;
