// Keyframe stylesheets installed once per page, keyed by element id.

pub const PARTICLE_STYLE_ID: &str = "particle-style";
pub const TRAIL_STYLE_ID: &str = "trail-style";
pub const RIPPLE_STYLE_ID: &str = "ripple-style";
pub const SOS_STYLE_ID: &str = "sos-style";

pub const PARTICLE_ANIMATION: &str = "float-particle";
pub const TRAIL_ANIMATION: &str = "fade-trail";
pub const RIPPLE_ANIMATION: &str = "ripple-expand";
pub const SOS_ANIMATION: &str = "pulse-red";

pub fn particle_keyframes(drift_px: f32) -> String {
    format!(
        "@keyframes {PARTICLE_ANIMATION} {{\
         0% {{ transform: translateY(0) translateX(0); opacity: 0; }}\
         10% {{ opacity: 0.6; }}\
         90% {{ opacity: 0.3; }}\
         100% {{ transform: translateY(-100vh) translateX({drift_px:.1}px); opacity: 0; }}\
         }}"
    )
}

pub fn trail_keyframes() -> String {
    format!(
        "@keyframes {TRAIL_ANIMATION} {{\
         0% {{ opacity: 1; transform: scale(1); }}\
         100% {{ opacity: 0; transform: scale(0.3); }}\
         }}"
    )
}

pub fn ripple_keyframes() -> String {
    format!(
        "@keyframes {RIPPLE_ANIMATION} {{\
         from {{ transform: scale(0); opacity: 1; }}\
         to {{ transform: scale(2.5); opacity: 0; }}\
         }}"
    )
}

pub fn sos_keyframes() -> String {
    format!(
        "@keyframes {SOS_ANIMATION} {{\
         0%, 100% {{ opacity: 0; }}\
         50% {{ opacity: 1; }}\
         }}"
    )
}
