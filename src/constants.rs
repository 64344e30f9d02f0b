// Page markers the front-end resolves into engine targets.

// Effect selectors
pub const MAGNETIC_SELECTOR: &str = ".btn-primary, .icon-btn, .btn";
pub const RIPPLE_SELECTOR: &str = ".btn, .icon-btn, .nav-link, .card";
pub const GLOW_SELECTOR: &str = ".card";
pub const REVEAL_SELECTOR: &str = ".card, .stat-card, .feature-card";
pub const TYPING_SELECTOR: &str = "[data-typing]";
pub const PROGRESS_SELECTOR: &str = ".progress-fill";
pub const NOTICE_SELECTOR: &str = ".alert";
pub const PARALLAX_SELECTOR: &str = ".hero";

// Glue selectors
pub const FORM_SELECTOR: &str = "form";
pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
pub const FIRST_INPUT_SELECTOR: &str = ".form-input";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// Theme toggle
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_SELECTOR: &str = "i";

// Attribute carrying an element's registry index
pub const TARGET_ATTR: &str = "data-nova-fx";

// Observer thresholds: one observer per distinct threshold
pub const FADE_OBSERVER_THRESHOLD: f64 = 0.1;
pub const DETAIL_OBSERVER_THRESHOLD: f64 = 0.5;
