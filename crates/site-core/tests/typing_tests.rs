// Host-side tests for the typing rotation.

use site_core::{TypingLoop, DELETE_DELAY_MS, HOLD_DELAY_MS, NEXT_TEXT_DELAY_MS, TYPE_DELAY_MS};

#[test]
fn types_holds_deletes_and_rotates() {
    let mut t = TypingLoop::new(vec!["ab".to_string(), "xy".to_string()]);

    let (s, d) = t.step();
    assert_eq!((s.as_str(), d), ("a", TYPE_DELAY_MS));
    let (s, d) = t.step();
    assert_eq!((s.as_str(), d), ("ab", HOLD_DELAY_MS), "full text holds");
    let (s, d) = t.step();
    assert_eq!((s.as_str(), d), ("a", DELETE_DELAY_MS));
    let (s, d) = t.step();
    assert_eq!((s.as_str(), d), ("", NEXT_TEXT_DELAY_MS), "empty moves on");
    let (s, _) = t.step();
    assert_eq!(s, "x", "the next text starts typing");
}

#[test]
fn wraps_back_to_the_first_text() {
    let mut t = TypingLoop::new(vec!["a".to_string(), "b".to_string()]);
    let mut seen = Vec::new();
    for _ in 0..12 {
        let (s, _) = t.step();
        if !s.is_empty() {
            seen.push(s);
        }
    }
    assert!(seen.contains(&"a".to_string()));
    assert!(seen.contains(&"b".to_string()));
    // a full cycle comes back around
    assert!(seen.iter().filter(|s| s.as_str() == "a").count() >= 2);
}

#[test]
fn empty_text_list_is_a_noop() {
    let mut t = TypingLoop::new(Vec::new());
    let (s, _) = t.step();
    assert_eq!(s, "");
}

#[test]
fn multibyte_texts_step_per_character() {
    let mut t = TypingLoop::new(vec!["héllo".to_string()]);
    let (s, _) = t.step();
    assert_eq!(s, "h");
    let (s, _) = t.step();
    assert_eq!(s, "hé");
}
