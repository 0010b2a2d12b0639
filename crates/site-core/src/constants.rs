// Effect tuning constants shared with the web frontend.

// Device classification
pub const CONSTRAINED_VIEWPORT_MAX_WIDTH: f64 = 768.0; // below this the viewport counts as constrained

// Particle field
pub const DESKTOP_PARTICLE_COUNT: usize = 60;
pub const CONSTRAINED_PARTICLE_COUNT: usize = 20;
pub const PARTICLE_SPEED_HALF_RANGE: f32 = 0.25; // velocity components uniform in +/- this
pub const PARTICLE_MAX_RADIUS: f32 = 2.0;
pub const PARTICLE_FILL: &str = "rgba(212, 175, 55, 0.5)"; // semi-transparent gold

// Cursor follower
pub const FOLLOWER_SMOOTHING: f32 = 0.1; // eased += (raw - eased) * this, per frame

// Text scramble
pub const SCRAMBLE_GLYPHS: &[char] = &[
    '!', '<', '>', '-', '_', '\\', '/', '[', ']', '{', '}', '—', '=', '+', '*', '^', '?', '#',
    '_', '_', '_', '_', '_', '_', '_', '_',
];
pub const SCRAMBLE_MAX_START_FRAME: u32 = 40; // per-character start uniform in [0, this)
pub const SCRAMBLE_MAX_HOLD_FRAMES: u32 = 40; // end = start + uniform in [0, this)
pub const SCRAMBLE_RESHUFFLE_PROBABILITY: f32 = 0.28; // chance per tick to pick a new glyph

// Rate limiting
pub const RESIZE_DEBOUNCE_MS: f64 = 250.0;
pub const SCROLL_THROTTLE_MS: f64 = 50.0;
pub const TILT_THROTTLE_MS: f64 = 16.0; // one tilt update per display frame

// Reveal-on-scroll
pub const REVEAL_THRESHOLD: f64 = 0.1; // visibility fraction that triggers a reveal
pub const REVEAL_ROOT_MARGIN: &str = "50px";

// Typing effect
pub const TYPE_DELAY_MS: u32 = 100;
pub const DELETE_DELAY_MS: u32 = 50;
pub const HOLD_DELAY_MS: u32 = 2000; // pause on a fully typed text
pub const NEXT_TEXT_DELAY_MS: u32 = 500; // pause before typing the next text

// Pointer hover effects
pub const MAGNETIC_PULL: f64 = 0.3;
pub const TILT_DIVISOR: f64 = 20.0; // [data-tilt] cards
pub const TILT_DIVISOR_SOFT: f64 = 30.0; // hobby cards, gentler rotation

// Parallax layer speeds, slowest last
pub const PARALLAX_GRID_SPEED: f64 = 0.5;
pub const PARALLAX_SHAPES_SPEED: f64 = 0.3;
pub const PARALLAX_CANVAS_SPEED: f64 = 0.2;
