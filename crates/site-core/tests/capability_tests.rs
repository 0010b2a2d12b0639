// Host-side tests for one-time device classification.

use site_core::{
    is_mobile_user_agent, Capabilities, CONSTRAINED_PARTICLE_COUNT, DESKTOP_PARTICLE_COUNT,
};

#[test]
fn desktop_with_mouse_enables_everything() {
    let caps = Capabilities::classify(1440.0, false, false);
    assert!(!caps.constrained);
    assert!(caps.precise_pointer);
    assert!(caps.particles_enabled());
    assert!(caps.scramble_enabled());
    assert!(caps.cursor_enabled());
    assert!(caps.hover_fx_enabled());
    assert!(caps.parallax_enabled());
    assert_eq!(caps.particle_count(), DESKTOP_PARTICLE_COUNT);
}

#[test]
fn small_viewport_is_constrained() {
    let caps = Capabilities::classify(375.0, false, true);
    assert!(caps.constrained);
    assert!(!caps.particles_enabled());
    assert!(!caps.cursor_enabled());
    assert_eq!(caps.particle_count(), CONSTRAINED_PARTICLE_COUNT);
}

#[test]
fn mobile_user_agent_overrides_a_wide_viewport() {
    let caps = Capabilities::classify(1024.0, true, true);
    assert!(caps.constrained);
    assert!(!caps.scramble_enabled());
}

#[test]
fn touch_on_a_large_screen_disables_pointer_effects_only() {
    let caps = Capabilities::classify(1280.0, false, true);
    assert!(!caps.constrained);
    assert!(!caps.precise_pointer);
    assert!(caps.particles_enabled(), "particles do not need a mouse");
    assert!(caps.scramble_enabled());
    assert!(!caps.cursor_enabled());
    assert!(!caps.hover_fx_enabled());
}

#[test]
fn recognizes_mobile_user_agents() {
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (iPhone; CPU iPhone OS 17_0 like Mac OS X)"
    ));
    assert!(is_mobile_user_agent(
        "Mozilla/5.0 (Linux; Android 14; Pixel 8)"
    ));
    assert!(!is_mobile_user_agent(
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36"
    ));
}
