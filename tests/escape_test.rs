// Integration tests for the escaped-string renderer
// Tests cover: ASCII escapes, terminator handling, UTF-8 decoding, null data

use rtmpio::{Escaped, Extent, NULL_TOKEN, escape_bytes, print_escaped, write_escaped};

fn render(data: Option<&[u8]>, extent: Extent) -> String {
    let mut out = String::new();
    print_escaped(&mut out, data, extent);
    out
}

// ============================================================================
// ASCII
// ============================================================================

#[test]
fn test_printable_ascii_round() {
    assert_eq!(
        render(Some(b"Hello, \"World\"!"), Extent::Whole),
        r#""Hello, \"World\"!""#
    );
}

#[test]
fn test_every_printable_ascii_byte() {
    let data: Vec<u8> = (0x20u8..=0x7E).collect();
    let rendered = escape_bytes(&data);

    let mut expected = String::from("\"");
    for b in data {
        if b == b'"' || b == b'\\' {
            expected.push('\\');
        }
        expected.push(b as char);
    }
    expected.push('"');

    assert_eq!(rendered, expected);
}

#[test]
fn test_control_without_letter_is_hex() {
    assert_eq!(escape_bytes(&[0x01]), r#""\x01""#);
    assert_eq!(escape_bytes(&[0x1F, 0x7F]), r#""\x1F\x7F""#);
}

// ============================================================================
// Terminator Handling
// ============================================================================

#[test]
fn test_nul_terminated_newline() {
    assert_eq!(render(Some(&[0x0A, 0x00]), Extent::NulTerminated), r#""\n""#);
}

#[test]
fn test_whole_extent_keeps_nul() {
    assert_eq!(render(Some(&[0x0A, 0x00]), Extent::Whole), r#""\n\x00""#);
}

#[test]
fn test_nul_terminated_without_nul_is_bounded_by_slice() {
    assert_eq!(
        render(Some(b"rtmp://host/app"), Extent::NulTerminated),
        r#""rtmp://host/app""#
    );
}

// ============================================================================
// UTF-8
// ============================================================================

#[test]
fn test_two_and_three_byte_sequences_advance_fully() {
    // "ü" (2 bytes) then "中" (3 bytes), each followed by ASCII
    assert_eq!(escape_bytes("ü!中?".as_bytes()), "\"ü!中?\"");
}

#[test]
fn test_invalid_continuation_escapes_single_byte() {
    // 0xE4 expects two continuation bytes; 'A' is not one
    assert_eq!(escape_bytes(b"\xE4AB"), r#""\xE4AB""#);
    // a broken 2-byte lead followed by a valid 2-byte sequence
    assert_eq!(escape_bytes(b"\xC3\xC3\xBC"), "\"\\xC3ü\"");
}

#[test]
fn test_non_printable_code_points() {
    // U+0080 padding character (C1 control)
    assert_eq!(escape_bytes(b"\xC2\x80"), r#""\u0080""#);
    // U+FEFF byte order mark
    assert_eq!(escape_bytes(b"\xEF\xBB\xBF"), r#""\uFEFF""#);
    // U+E0041 tag latin capital letter A
    assert_eq!(escape_bytes(b"\xF3\xA0\x81\x81"), r#""\U000E0041""#);
}

#[test]
fn test_unassigned_code_points_are_escaped() {
    // U+0378 is unassigned inside the Greek block
    assert_eq!(escape_bytes(b"\xCD\xB8"), r#""\u0378""#);
    // U+FFFF noncharacter
    assert_eq!(escape_bytes(b"\xEF\xBF\xBF"), r#""\uFFFF""#);
}

// ============================================================================
// Null Data and Writers
// ============================================================================

#[test]
fn test_null_data_yields_token() {
    assert_eq!(render(None, Extent::Whole), NULL_TOKEN);
    assert_eq!(render(None, Extent::NulTerminated), "(NULL)");
}

#[test]
fn test_write_escaped_into_formatter() {
    let line = format!(
        "connect app={} flashVer={}",
        Escaped::new(b"live"),
        Escaped::null()
    );
    assert_eq!(line, r#"connect app="live" flashVer=(NULL)"#);
}

#[test]
fn test_write_escaped_into_string_writer() {
    let mut out = String::new();
    write_escaped(&mut out, Some(b"a\tb"), Extent::Whole).unwrap();
    assert_eq!(out, r#""a\tb""#);
}
