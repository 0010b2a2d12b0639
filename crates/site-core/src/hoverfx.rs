use crate::constants::MAGNETIC_PULL;

/// Translation that pulls a magnetic element toward the pointer, scaled down
/// from the pointer's offset from the element center.
#[inline]
pub fn magnetic_offset(
    pointer_x: f64,
    pointer_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
) -> (f64, f64) {
    let dx = pointer_x - rect_left - rect_width / 2.0;
    let dy = pointer_y - rect_top - rect_height / 2.0;
    (dx * MAGNETIC_PULL, dy * MAGNETIC_PULL)
}

/// Perspective tilt angles (degrees) for a hovered card. The pointer's
/// offset from the card center maps to rotation around the opposite axis;
/// a larger `divisor` gives a gentler tilt.
#[inline]
pub fn tilt_angles(
    pointer_x: f64,
    pointer_y: f64,
    rect_left: f64,
    rect_top: f64,
    rect_width: f64,
    rect_height: f64,
    divisor: f64,
) -> (f64, f64) {
    let x = pointer_x - rect_left;
    let y = pointer_y - rect_top;
    let center_x = rect_width / 2.0;
    let center_y = rect_height / 2.0;
    let rotate_x = (y - center_y) / divisor;
    let rotate_y = (center_x - x) / divisor;
    (rotate_x, rotate_y)
}
