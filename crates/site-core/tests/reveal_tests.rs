// Host-side tests for one-shot reveal bookkeeping.

use site_core::RevealTracker;

#[test]
fn fires_exactly_once_despite_oscillation() {
    let mut t = RevealTracker::new();
    assert!(!t.should_reveal(1, false), "not visible yet");
    assert!(t.should_reveal(1, true), "first visibility fires");
    assert!(!t.should_reveal(1, false));
    assert!(!t.should_reveal(1, true), "re-entering the threshold must not re-fire");
    assert_eq!(t.revealed_count(), 1);
}

#[test]
fn elements_fire_independently() {
    let mut t = RevealTracker::new();
    for id in 0..10u64 {
        assert!(t.should_reveal(id, true));
    }
    for id in 0..10u64 {
        assert!(!t.should_reveal(id, true));
        assert!(t.is_revealed(id));
    }
    assert_eq!(t.revealed_count(), 10);
}

#[test]
fn late_registration_is_indistinguishable() {
    // ids handed out after initial page load (dynamic content) behave the same
    let mut t = RevealTracker::new();
    assert!(t.should_reveal(0, true));
    assert!(t.should_reveal(1_000, true));
    assert!(!t.should_reveal(1_000, true));
}
