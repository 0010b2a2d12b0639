// Host-side tests for the call-rate shaping state machines.

use site_core::{Debounce, Throttle};

#[test]
fn debounce_fires_once_after_quiet_period() {
    let mut d = Debounce::new(50.0);
    d.call(0.0);
    d.call(10.0);
    d.call(20.0);
    // checks scheduled by the earlier calls see a moved deadline
    assert!(!d.poll(50.0));
    assert!(!d.poll(60.0));
    assert!(d.poll(70.0), "trailing call fires 50ms after the last call");
    assert!(!d.poll(120.0), "at most one fire per quiet period");
    assert!(!d.pending());
}

#[test]
fn debounce_fires_again_for_a_new_burst() {
    let mut d = Debounce::new(50.0);
    d.call(0.0);
    assert!(d.poll(50.0));
    d.call(100.0);
    d.call(130.0);
    assert!(!d.poll(150.0));
    assert!(d.poll(180.0));
}

#[test]
fn debounce_without_calls_never_fires() {
    let mut d = Debounce::new(50.0);
    assert!(!d.poll(0.0));
    assert!(!d.poll(1_000_000.0));
}

#[test]
fn throttle_is_leading_edge() {
    let mut t = Throttle::new(50.0);
    assert!(t.allow(0.0), "first call in a window passes immediately");
    assert!(!t.allow(10.0));
    assert!(!t.allow(20.0));
    assert!(t.allow(60.0), "next call after the window passes");
    assert!(!t.allow(80.0));
}

#[test]
fn throttle_allows_one_call_per_window() {
    let mut t = Throttle::new(100.0);
    let mut passed = 0;
    for i in 0..50 {
        if t.allow(i as f64 * 10.0) {
            passed += 1;
        }
    }
    // 500ms of calls at 10ms spacing, 100ms windows
    assert_eq!(passed, 5);
}
