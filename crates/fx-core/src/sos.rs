use crate::constants::{SOS_PULSE_COUNT, SOS_PULSE_MS};
use crate::pool::EffectPool;
use crate::styles::{sos_keyframes, SOS_ANIMATION, SOS_STYLE_ID};
use crate::surface::{EffectId, Expiry, NodeSpec, NodeTag, Outbox, Parent, SurfaceOp};
use std::time::Duration;

/// Full-surface red pulse, removed once its pulses have played.
pub fn spawn_overlay(lifetime: Duration, pool: &mut EffectPool, out: &mut Outbox) -> EffectId {
    out.push(SurfaceOp::InstallStyle {
        id: SOS_STYLE_ID,
        css: sos_keyframes(),
    });
    let spec = NodeSpec::new(NodeTag::Div)
        .with_style("position", "fixed")
        .with_style("inset", "0")
        .with_style(
            "background",
            "radial-gradient(circle, rgba(239, 68, 68, 0.4), transparent)",
        )
        .with_style("z-index", "10000")
        .with_style(
            "animation",
            format!(
                "{SOS_ANIMATION} {}s ease-in-out {SOS_PULSE_COUNT}",
                SOS_PULSE_MS as f32 / 1000.0
            ),
        )
        .with_style("pointer-events", "none");
    pool.spawn(Parent::Root, spec, Expiry::After(lifetime), out)
}
