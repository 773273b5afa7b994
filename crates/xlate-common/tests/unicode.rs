use super::*;

#[test]
fn test_plain_ascii_is_representable() {
    assert!(has_valid_cpp_characters("ok"));
    assert!(has_valid_cpp_characters(""));
    assert!(has_valid_cpp_characters("tab\there\nnewline"));
    assert!(LiteralEncoding::Ascii.is_representable("hello, world!"));
}

#[test]
fn test_bmp_characters_are_cpp_representable() {
    assert!(has_valid_cpp_characters("caf\u{e9}"));
    assert!(has_valid_cpp_characters("\u{4e2d}\u{6587}"));
    assert!(!LiteralEncoding::Ascii.is_representable("caf\u{e9}"));
}

#[test]
fn test_controls_are_rejected() {
    assert!(!has_valid_cpp_characters("nul\u{0}byte"));
    assert!(!has_valid_cpp_characters("esc\u{1b}"));
    assert!(!has_valid_cpp_characters("del\u{7f}"));
    assert!(!has_valid_cpp_characters("c1\u{85}"));
}

#[test]
fn test_supplementary_and_noncharacters_are_rejected() {
    assert!(!has_valid_cpp_characters("emoji \u{1F600}"));
    assert!(!has_valid_cpp_characters("\u{FFFF}"));
    assert!(!has_valid_cpp_characters("\u{FDD0}"));
}

#[test]
fn test_default_encoding_is_cpp() {
    assert_eq!(LiteralEncoding::default(), LiteralEncoding::Cpp);
}
