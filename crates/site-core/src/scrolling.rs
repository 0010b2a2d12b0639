/// Fraction of the document scrolled, as a 0..=100 percentage for the
/// progress bar. Returns 0 when there is nothing to scroll.
#[inline]
pub fn scroll_progress_percent(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// Vertical offset for a parallax layer moving at `speed` relative to the
/// scroll position. Layers drift upward as the page scrolls down.
#[inline]
pub fn parallax_offset(scroll_top: f64, speed: f64) -> f64 {
    -(scroll_top * speed)
}
