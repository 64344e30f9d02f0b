//! Engine tuning parameters.
//!
//! [`FxConfig::default`] reproduces the dashboard's stock behaviour; hosts may
//! override individual fields before constructing the engine.

use crate::constants::*;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("trail must keep at least one point")]
    ZeroTrailCapacity,
    #[error("magnetic radius must be positive, got {0}")]
    NonPositiveRadius(f32),
    #[error("magnetic strength must be within [0, 1], got {0}")]
    StrengthOutOfRange(f32),
    #[error("{name} threshold must be within (0, 1], got {value}")]
    ThresholdOutOfRange { name: &'static str, value: f32 },
    #[error("parallax fade distance must be positive, got {0}")]
    NonPositiveFadeDistance(f32),
}

#[derive(Clone, Debug)]
pub struct FxConfig {
    pub particle_count: usize,

    pub trail_max_points: usize,
    pub trail_lifetime: Duration,
    /// Samples arriving closer together than this are dropped. `None` spawns
    /// a trail dot for every pointer sample.
    pub trail_min_interval: Option<Duration>,

    pub magnetic_radius: f32,
    pub magnetic_strength: f32,
    pub magnetic_snap_back: Duration,

    pub ripple_lifetime: Duration,

    pub reveal_threshold: f32,
    pub typing_threshold: f32,
    pub progress_threshold: f32,
    pub reveal_stagger: Duration,
    pub typing_interval: Duration,
    pub progress_settle: Duration,

    pub parallax_ratio: f32,
    pub parallax_fade_distance: f32,

    pub notice_dismiss_after: Duration,
    pub notice_fade: Duration,
    pub submit_busy_for: Duration,
    pub sos_duration: Duration,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            trail_max_points: TRAIL_MAX_POINTS,
            trail_lifetime: Duration::from_millis(TRAIL_LIFETIME_MS),
            trail_min_interval: None,
            magnetic_radius: MAGNETIC_RADIUS,
            magnetic_strength: MAGNETIC_STRENGTH,
            magnetic_snap_back: Duration::from_millis(MAGNETIC_SNAP_BACK_MS),
            ripple_lifetime: Duration::from_millis(RIPPLE_LIFETIME_MS),
            reveal_threshold: REVEAL_THRESHOLD,
            typing_threshold: TYPING_THRESHOLD,
            progress_threshold: PROGRESS_THRESHOLD,
            reveal_stagger: Duration::from_millis(REVEAL_STAGGER_MS),
            typing_interval: Duration::from_millis(TYPING_INTERVAL_MS),
            progress_settle: Duration::from_millis(PROGRESS_SETTLE_MS),
            parallax_ratio: PARALLAX_RATIO,
            parallax_fade_distance: PARALLAX_FADE_DISTANCE_PX,
            notice_dismiss_after: Duration::from_millis(NOTICE_DISMISS_AFTER_MS),
            notice_fade: Duration::from_millis(NOTICE_FADE_MS),
            submit_busy_for: Duration::from_millis(SUBMIT_BUSY_MS),
            sos_duration: Duration::from_millis(SOS_DURATION_MS),
        }
    }
}

impl FxConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trail_max_points == 0 {
            return Err(ConfigError::ZeroTrailCapacity);
        }
        if !(self.magnetic_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.magnetic_radius));
        }
        if !(0.0..=1.0).contains(&self.magnetic_strength) {
            return Err(ConfigError::StrengthOutOfRange(self.magnetic_strength));
        }
        for (name, value) in [
            ("reveal", self.reveal_threshold),
            ("typing", self.typing_threshold),
            ("progress", self.progress_threshold),
        ] {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        if !(self.parallax_fade_distance > 0.0) {
            return Err(ConfigError::NonPositiveFadeDistance(
                self.parallax_fade_distance,
            ));
        }
        Ok(())
    }
}
