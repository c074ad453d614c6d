use super::*;

// === Construction ===

#[test]
fn empty_source() {
    let buf = SourceBuffer::new("");
    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert!(buf.as_bytes().is_empty());
    // Sentinel present at index 0
    assert_eq!(buf.buf[0], 0);
}

#[test]
fn ascii_source() {
    let buf = SourceBuffer::new("|[x]|");
    assert_eq!(buf.len(), 5);
    assert!(!buf.is_empty());
    assert_eq!(buf.as_bytes(), b"|[x]|");
    assert_eq!(buf.buf[5], 0);
}

#[test]
fn utf8_multibyte_source() {
    let source = "caf\u{E9} \u{1F600}";
    let buf = SourceBuffer::new(source);
    assert_eq!(buf.len() as usize, source.len());
    assert_eq!(buf.as_bytes(), source.as_bytes());
}

#[test]
fn malformed_bytes_kept_verbatim() {
    let bytes = [b'|', 0xE2, 0x28, 0xFF, b'['];
    let buf = SourceBuffer::from_bytes(&bytes);
    assert_eq!(buf.len(), 5);
    assert_eq!(buf.as_bytes(), &bytes);
    assert_eq!(buf.buf[5], 0);
}

// === Cache-Line Alignment ===

#[test]
fn buffer_aligned_to_cache_line() {
    for len in [0, 1, 10, 63, 64, 65, 127, 128, 1000] {
        let source: String = "x".repeat(len);
        let buf = SourceBuffer::new(&source);
        assert_eq!(
            buf.buf.len() % CACHE_LINE,
            0,
            "buffer length {} is not cache-line aligned for source length {}",
            buf.buf.len(),
            len
        );
    }
}

#[test]
fn sentinel_and_padding_are_zero() {
    let buf = SourceBuffer::new("abc");
    for &b in &buf.buf[3..] {
        assert_eq!(b, 0, "non-zero byte in sentinel/padding region");
    }
}

#[test]
fn sentinel_can_spill_into_next_cache_line() {
    // 63 bytes + sentinel fill one line exactly; 64 bytes need a second.
    let source: String = "x".repeat(63);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.buf.len(), 64);
    let source: String = "x".repeat(64);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.buf.len(), 128);
}

// === Large Source ===

#[test]
fn large_source() {
    let source: String = "x".repeat(100_000);
    let buf = SourceBuffer::new(&source);
    assert_eq!(buf.len(), 100_000);
    assert_eq!(buf.as_bytes().len(), 100_000);
    assert_eq!(buf.buf[100_000], 0);
    assert_eq!(buf.buf.len() % CACHE_LINE, 0);
}

// === Cursor Creation ===

#[test]
fn cursor_starts_at_zero() {
    let buf = SourceBuffer::new("hello");
    let cursor = buf.cursor();
    assert_eq!(cursor.pos(), 0);
    assert_eq!(cursor.current(), b'h');
}

#[test]
fn cursor_on_empty_source_is_eof() {
    let buf = SourceBuffer::new("");
    let cursor = buf.cursor();
    assert!(cursor.is_eof());
    assert_eq!(cursor.current(), 0);
}

#[test]
fn cursor_at_positions_cursor() {
    let buf = SourceBuffer::new("ab]|");
    let cursor = buf.cursor_at(2);
    assert!(cursor.is_some());
    if let Some(cursor) = cursor {
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.current(), b']');
    }
}

#[test]
fn cursor_at_end_sits_on_sentinel() {
    let buf = SourceBuffer::new("ab");
    let cursor = buf.cursor_at(2);
    assert!(cursor.is_some_and(|c| c.is_eof()));
}

#[test]
fn cursor_at_past_end_is_none() {
    let buf = SourceBuffer::new("ab");
    assert!(buf.cursor_at(3).is_none());
    assert!(buf.cursor_at(u32::MAX).is_none());
}

// === scan_at ===

#[test]
fn scan_at_dispatches_by_tag() {
    let buf = SourceBuffer::new("|[x]|");
    assert_eq!(buf.scan_at(MarkupTag::OpenCodeBlock, 0), 2);
    assert_eq!(buf.scan_at(MarkupTag::CloseCodeBlock, 3), 2);
    assert_eq!(buf.scan_at(MarkupTag::CloseCodeBlock, 0), 0);
    assert_eq!(buf.scan_at(MarkupTag::LanguageComment, 0), 0);
}

#[test]
fn scan_at_out_of_range_is_zero() {
    let buf = SourceBuffer::new("|[");
    assert_eq!(buf.scan_at(MarkupTag::OpenCodeBlock, 2), 0);
    assert_eq!(buf.scan_at(MarkupTag::OpenCodeBlock, 3), 0);
    assert_eq!(buf.scan_at(MarkupTag::OpenCodeBlock, u32::MAX), 0);
}
