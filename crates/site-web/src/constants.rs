// Page wiring constants: element ids, selectors, copy, and timings.

// Element ids
pub const PARTICLES_CANVAS_ID: &str = "particles-canvas";
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const MENU_TOGGLE_ID: &str = "mobileMenuToggle";
pub const NAV_LINKS_ID: &str = "navLinks";
pub const TYPING_TEXT_ID: &str = "typingText";
pub const SCRAMBLE_FIRST_ID: &str = "scrambleText1";
pub const SCRAMBLE_SECOND_ID: &str = "scrambleText2";
pub const PROJECTS_GRID_ID: &str = "projectsGrid";
pub const SCROLL_PROGRESS_ID: &str = "scrollProgress";
pub const LOADER_ID: &str = "loader";
pub const CONTACT_FORM_ID: &str = "contactForm";

// Selectors
pub const CURSOR_SELECTOR: &str = ".cursor";
pub const FOLLOWER_SELECTOR: &str = ".cursor-follower";
pub const THEME_ICON_SELECTOR: &str = ".theme-icon";
pub const REVEAL_SELECTOR: &str = ".reveal-element";
pub const PROJECT_CARD_SELECTOR: &str = ".project-card";
pub const HOVER_TARGETS_SELECTOR: &str =
    "a, button, .hobby-card, .interest-card-modern, .project-card";
pub const MAGNETIC_SELECTOR: &str = ".magnetic-btn, .social-item, .project-card";
pub const TILT_SELECTOR: &str = "[data-tilt]";
pub const HOBBY_CARD_SELECTOR: &str = ".hobby-card";
pub const GRID_BACKGROUND_SELECTOR: &str = ".grid-background";
pub const PARTICLES_CANVAS_SELECTOR: &str = "#particles-canvas";
pub const FLOATING_SHAPES_SELECTOR: &str = ".floating-shapes";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^='#']";

// Classes / attributes
pub const LIGHT_THEME_CLASS: &str = "light-theme";
pub const REVEALED_CLASS: &str = "revealed";
pub const ACTIVE_CLASS: &str = "active";
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

// Theme persistence
pub const THEME_STORAGE_KEY: &str = "theme";
pub const SUN_ICON: &str = "☀️";
pub const MOON_ICON: &str = "🌙";

// Hero scramble
pub const HERO_FIRST_LINE: &str = "HELLO";
pub const HERO_SECOND_LINE: &str = "WORLD";
pub const HERO_SCRAMBLE_DELAY_MS: i32 = 1600;
pub const HERO_SECOND_LINE_DELAY_MS: i32 = 200;

// Typing rotation
pub const TYPING_TEXTS: &[&str] = &[
    "Rust, WebAssembly, TypeScript & More",
    "Turning ideas into scalable software",
    "Code · Create · Innovate",
    "Consistency beats motivation",
];
pub const TYPING_INITIAL_DELAY_MS: i32 = 3000;

// Loader and project grid
pub const LOADER_HIDE_DELAY_MS: i32 = 1500;
pub const GITHUB_USER: &str = "octocat";
pub const GITHUB_REPO_LIMIT: u32 = 6;
pub const CONTACT_SUBMIT_MESSAGE: &str = "Sending your message! I'll get back to you soon.";
pub const PROJECTS_ERROR_HTML: &str =
    "<p class=\"projects-error\">Projects could not be loaded.</p>";
