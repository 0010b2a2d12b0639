use crate::constants::{
    CONSTRAINED_PARTICLE_COUNT, CONSTRAINED_VIEWPORT_MAX_WIDTH, DESKTOP_PARTICLE_COUNT,
};

/// User-agent tokens that classify a device as mobile.
const MOBILE_UA_TOKENS: &[&str] = &[
    "Android",
    "webOS",
    "iPhone",
    "iPad",
    "iPod",
    "BlackBerry",
    "IEMobile",
    "Opera Mini",
];

#[inline]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    MOBILE_UA_TOKENS.iter().any(|t| user_agent.contains(t))
}

/// One-time device classification computed at startup.
///
/// Each effect consumes this record in its constructor to decide whether it
/// activates at all; no capability checks happen after initialization.
#[derive(Clone, Copy, Debug)]
pub struct Capabilities {
    /// Small viewport or mobile user agent.
    pub constrained: bool,
    /// No touch digitizer present.
    pub precise_pointer: bool,
}

impl Capabilities {
    pub fn classify(viewport_width: f64, mobile_user_agent: bool, has_touch: bool) -> Self {
        Self {
            constrained: mobile_user_agent || viewport_width < CONSTRAINED_VIEWPORT_MAX_WIDTH,
            precise_pointer: !has_touch,
        }
    }

    pub fn particles_enabled(&self) -> bool {
        !self.constrained
    }

    pub fn scramble_enabled(&self) -> bool {
        !self.constrained
    }

    /// Custom cursor and hover effects need both a big screen and a mouse.
    pub fn cursor_enabled(&self) -> bool {
        !self.constrained && self.precise_pointer
    }

    pub fn hover_fx_enabled(&self) -> bool {
        self.cursor_enabled()
    }

    pub fn parallax_enabled(&self) -> bool {
        !self.constrained
    }

    pub fn particle_count(&self) -> usize {
        if self.constrained {
            CONSTRAINED_PARTICLE_COUNT
        } else {
            DESKTOP_PARTICLE_COUNT
        }
    }
}
