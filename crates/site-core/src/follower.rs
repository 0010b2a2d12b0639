use glam::Vec2;

/// Raw pointer position plus the eased position that trails it. One instance
/// per page; the raw side is written by pointer events, the eased side is
/// advanced once per scheduled frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct FollowerState {
    pub raw: Vec2,
    pub eased: Vec2,
}

impl FollowerState {
    pub fn new(initial: Vec2) -> Self {
        Self {
            raw: initial,
            eased: initial,
        }
    }

    #[inline]
    pub fn set_raw(&mut self, raw: Vec2) {
        self.raw = raw;
    }

    /// One frame of exponential-decay interpolation toward the raw position.
    /// `smoothing` must be in (0, 1); the remaining error shrinks by that
    /// factor every frame, so the follower converges but never terminates.
    #[inline]
    pub fn step(&mut self, smoothing: f32) {
        self.eased += (self.raw - self.eased) * smoothing;
    }
}
