// Effect timing and sizing constants shared by the engine and its defaults.

// Ambient particles
pub const PARTICLE_COUNT: usize = 30;
pub const PARTICLE_SIZE_MIN_PX: f32 = 2.0;
pub const PARTICLE_SIZE_MAX_PX: f32 = 6.0;
pub const PARTICLE_DURATION_MIN_SEC: f32 = 10.0;
pub const PARTICLE_DURATION_MAX_SEC: f32 = 20.0;
pub const PARTICLE_DELAY_MAX_SEC: f32 = 5.0;
pub const PARTICLE_DRIFT_MAX_PX: f32 = 50.0; // horizontal drift at the top of the loop

// Pointer trail
pub const TRAIL_MAX_POINTS: usize = 15;
pub const TRAIL_LIFETIME_MS: u64 = 800;
pub const TRAIL_DOT_PX: f32 = 8.0;

// Magnetic buttons
pub const MAGNETIC_RADIUS: f32 = 50.0; // logical px
pub const MAGNETIC_STRENGTH: f32 = 0.4; // dampening applied to the falloff
pub const MAGNETIC_SNAP_BACK_MS: u64 = 300;

// Click ripples
pub const RIPPLE_LIFETIME_MS: u64 = 600;

// Viewport reveals
pub const REVEAL_THRESHOLD: f32 = 0.1;
pub const TYPING_THRESHOLD: f32 = 0.5;
pub const PROGRESS_THRESHOLD: f32 = 0.5;
pub const REVEAL_STAGGER_MS: u64 = 100; // per batch index
pub const REVEAL_OFFSET_PX: f32 = 30.0;
pub const TYPING_INTERVAL_MS: u64 = 50; // per character
pub const PROGRESS_SETTLE_MS: u64 = 100;

// Parallax hero
pub const PARALLAX_RATIO: f32 = 0.3;
pub const PARALLAX_FADE_DISTANCE_PX: f32 = 500.0;

// Transient notices and forms
pub const NOTICE_DISMISS_AFTER_MS: u64 = 5000;
pub const NOTICE_FADE_MS: u64 = 300;
pub const SUBMIT_BUSY_MS: u64 = 3000;

// Emergency overlay
pub const SOS_PULSE_MS: u64 = 500;
pub const SOS_PULSE_COUNT: u32 = 3;
pub const SOS_DURATION_MS: u64 = SOS_PULSE_MS * SOS_PULSE_COUNT as u64;
pub const SOS_MESSAGE: &str =
    "\u{1F6A8} SOS ACTIVATED\n\nStay calm. Emergency contacts displayed.\nCall relevant helpline immediately.";

// Theme preference
pub const THEME_STORAGE_KEY: &str = "nova-theme";
pub const THEME_LIGHT_CLASS: &str = "theme-light";
pub const THEME_ICON_LIGHT: &str = "fa-solid fa-sun";
pub const THEME_ICON_DARK: &str = "fa-solid fa-moon";

pub const SUBMIT_LOADING_HTML: &str = "<i class=\"fa-solid fa-spinner fa-spin\"></i> Loading...";
