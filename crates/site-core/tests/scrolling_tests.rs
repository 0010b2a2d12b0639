// Host-side tests for scroll and pointer-hover math.

use site_core::{magnetic_offset, parallax_offset, scroll_progress_percent, tilt_angles};

#[test]
fn progress_is_a_clamped_percentage() {
    assert_eq!(scroll_progress_percent(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(1000.0, 3000.0, 1000.0), 50.0);
    assert_eq!(scroll_progress_percent(2000.0, 3000.0, 1000.0), 100.0);
    assert_eq!(
        scroll_progress_percent(5000.0, 3000.0, 1000.0),
        100.0,
        "overscroll clamps"
    );
}

#[test]
fn progress_with_nothing_to_scroll_is_zero() {
    assert_eq!(scroll_progress_percent(0.0, 800.0, 1000.0), 0.0);
    assert_eq!(scroll_progress_percent(10.0, 1000.0, 1000.0), 0.0);
}

#[test]
fn parallax_layers_drift_upward_with_scroll() {
    assert_eq!(parallax_offset(0.0, 0.5), 0.0);
    assert_eq!(parallax_offset(200.0, 0.5), -100.0);
    assert_eq!(parallax_offset(200.0, 0.2), -40.0);
}

#[test]
fn magnetic_pull_is_zero_at_the_center() {
    let (dx, dy) = magnetic_offset(150.0, 100.0, 100.0, 50.0, 100.0, 100.0);
    assert_eq!((dx, dy), (0.0, 0.0));
}

#[test]
fn magnetic_pull_scales_the_offset_from_center() {
    // pointer at the right edge of a 100-wide element
    let (dx, dy) = magnetic_offset(200.0, 100.0, 100.0, 50.0, 100.0, 100.0);
    assert!((dx - 15.0).abs() < 1e-9);
    assert_eq!(dy, 0.0);
}

#[test]
fn tilt_is_flat_at_the_center() {
    let (rx, ry) = tilt_angles(150.0, 150.0, 100.0, 100.0, 100.0, 100.0, 20.0);
    assert_eq!((rx, ry), (0.0, 0.0));
}

#[test]
fn tilt_direction_and_divisor() {
    // pointer below center tips the card toward the viewer
    let (rx, _) = tilt_angles(150.0, 200.0, 100.0, 100.0, 100.0, 100.0, 20.0);
    assert!(rx > 0.0);
    // pointer right of center rotates away around y
    let (_, ry) = tilt_angles(200.0, 150.0, 100.0, 100.0, 100.0, 100.0, 20.0);
    assert!(ry < 0.0);
    // a larger divisor tilts less
    let (soft, _) = tilt_angles(150.0, 200.0, 100.0, 100.0, 100.0, 100.0, 30.0);
    assert!(soft.abs() < rx.abs());
}
