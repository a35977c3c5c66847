use super::*;

#[test]
fn reveals_one_character_per_advance() {
    let mut tw = Typewriter::new("Hi!");
    assert_eq!(tw.visible(), "");
    assert!(tw.advance());
    assert_eq!(tw.visible(), "H");
    assert!(tw.advance());
    assert!(!tw.advance());
    assert_eq!(tw.visible(), "Hi!");
    assert!(tw.is_done());
}

#[test]
fn counts_characters_not_bytes() {
    let mut tw = Typewriter::new("héllo ✓");
    while tw.advance() {}
    assert_eq!(tw.visible(), "héllo ✓");
    assert_eq!(tw.full_text(), "héllo ✓");
}

#[test]
fn empty_text_is_done_immediately() {
    let mut tw = Typewriter::new("");
    assert!(tw.is_done());
    assert!(!tw.advance());
    assert_eq!(tw.visible(), "");
}
