use super::*;

#[test]
fn test_modifier_bits_match_access_flags() {
    assert_eq!(Modifiers::PUBLIC.bits(), 0x1);
    assert_eq!(Modifiers::STATIC.bits(), 0x8);
    assert_eq!(Modifiers::FINAL.bits(), 0x10);
    assert_eq!(Modifiers::ABSTRACT.bits(), 0x400);
}

#[test]
fn test_access_masks_visibility_only() {
    let mods = Modifiers::PROTECTED | Modifiers::STATIC | Modifiers::FINAL;
    assert_eq!(mods.access(), Modifiers::PROTECTED);
    assert!(Modifiers::FINAL.access().is_empty());
}

#[test]
fn test_keywords_in_source_order() {
    let mods = Modifiers::FINAL | Modifiers::STATIC | Modifiers::PUBLIC;
    assert_eq!(mods.keywords(), vec!["public", "static", "final"]);
    assert!(Modifiers::default().keywords().is_empty());
}
