use super::*;

/// Whether `lead, second` followed by plain continuations decodes as exactly
/// one character according to the standard library.
fn std_accepts(lead: u8, second: u8, width: usize) -> bool {
    let bytes = [lead, second, 0x80, 0x80];
    std::str::from_utf8(&bytes[..width]).is_ok_and(|s| s.chars().count() == 1)
}

// === Classification ===

#[test]
fn ascii_range() {
    for b in 0x00..=0x7Fu8 {
        assert_eq!(classify(b), LeadByte::Ascii, "byte {b:#04x}");
    }
}

#[test]
fn continuation_and_overlong_leads_are_invalid() {
    for b in 0x80..=0xC1u8 {
        assert_eq!(classify(b), LeadByte::Invalid, "byte {b:#04x}");
    }
    for b in 0xF5..=0xFFu8 {
        assert_eq!(classify(b), LeadByte::Invalid, "byte {b:#04x}");
    }
}

#[test]
fn widths_match_encoded_chars() {
    for c in ['\u{80}', '\u{7FF}', '\u{800}', '\u{D7FF}', '\u{E000}', '\u{FFFF}'] {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();
        match classify(encoded[0]) {
            LeadByte::Sequence(s) => {
                assert_eq!(s.width as usize, encoded.len(), "char {c:?}");
                assert!(s.first.contains(encoded[1]), "char {c:?}");
            }
            other => panic!("char {c:?} classified as {other:?}"),
        }
    }
    for c in ['\u{10000}', '\u{1F600}', '\u{10FFFF}'] {
        let mut tmp = [0u8; 4];
        let encoded = c.encode_utf8(&mut tmp).as_bytes();
        assert!(matches!(
            classify(encoded[0]),
            LeadByte::Sequence(Sequence { width: 4, first }) if first.contains(encoded[1])
        ));
    }
}

#[test]
fn first_continuation_ranges_agree_with_std() {
    // Exhaustive over every lead byte and every continuation-shaped second byte.
    for lead in 0xC2..=0xF4u8 {
        let LeadByte::Sequence(s) = classify(lead) else {
            panic!("{lead:#04x} should lead a sequence");
        };
        for second in 0x80..=0xBFu8 {
            assert_eq!(
                s.first.contains(second),
                std_accepts(lead, second, s.width as usize),
                "lead {lead:#04x} second {second:#04x}",
            );
        }
    }
}

#[test]
fn surrogates_rejected() {
    // U+D800 would encode as ED A0 80.
    let LeadByte::Sequence(s) = classify(0xED) else {
        panic!("0xED should lead a sequence");
    };
    assert!(!s.first.contains(0xA0));
    assert!(s.first.contains(0x9F));
}

// === ByteRange ===

#[test]
fn byte_range_bounds_inclusive() {
    assert!(CONTINUATION.contains(0x80));
    assert!(CONTINUATION.contains(0xBF));
    assert!(!CONTINUATION.contains(0x7F));
    assert!(!CONTINUATION.contains(0xC0));
}
