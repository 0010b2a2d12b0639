// Host-side tests for the cursor-follower easing.

use glam::Vec2;
use site_core::{FollowerState, FOLLOWER_SMOOTHING};

#[test]
fn converges_within_one_unit_after_sixty_frames() {
    let mut f = FollowerState::new(Vec2::ZERO);
    f.set_raw(Vec2::new(100.0, 100.0));
    for _ in 0..60 {
        f.step(0.1);
    }
    // error_n = error_0 * 0.9^n, about 0.18 after 60 frames
    assert!((f.eased.x - 100.0).abs() < 1.0);
    assert!((f.eased.y - 100.0).abs() < 1.0);
}

#[test]
fn single_step_covers_the_smoothing_fraction() {
    let mut f = FollowerState::new(Vec2::ZERO);
    f.set_raw(Vec2::new(100.0, 0.0));
    f.step(FOLLOWER_SMOOTHING);
    assert!((f.eased.x - 10.0).abs() < 1e-4);
}

#[test]
fn converged_follower_stays_put() {
    let mut f = FollowerState::new(Vec2::new(40.0, 40.0));
    f.step(0.1);
    assert_eq!(f.eased, Vec2::new(40.0, 40.0));
}

#[test]
fn follows_a_moving_target() {
    let mut f = FollowerState::new(Vec2::ZERO);
    for i in 1..=200 {
        f.set_raw(Vec2::new(i as f32, 0.0));
        f.step(0.1);
        assert!(f.eased.x <= f.raw.x, "the follower trails, never leads");
    }
    assert!(f.eased.x > 150.0, "it still keeps up over time");
}
