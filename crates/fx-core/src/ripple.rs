use crate::pool::EffectPool;
use crate::styles::{ripple_keyframes, RIPPLE_ANIMATION, RIPPLE_STYLE_ID};
use crate::surface::{
    EffectId, Expiry, NodeSpec, NodeTag, Outbox, Parent, Rect, SurfaceOp, TargetId,
};
use fnv::FnvHashSet;
use glam::Vec2;
use std::time::Duration;

/// Size and placement of a ripple relative to its host's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub diameter: f32,
    pub left: f32,
    pub top: f32,
}

/// The diameter covers the whole host wherever the click lands; the circle
/// is centered on the click point.
#[inline]
pub fn ripple_geometry(host: Rect, click: Vec2) -> RippleGeometry {
    let diameter = host.width.max(host.height);
    let local = click - host.origin();
    RippleGeometry {
        diameter,
        left: local.x - diameter / 2.0,
        top: local.y - diameter / 2.0,
    }
}

#[derive(Debug)]
pub struct RippleEmitter {
    hosts: FnvHashSet<TargetId>,
    prepared: FnvHashSet<TargetId>,
    lifetime: Duration,
}

impl RippleEmitter {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            hosts: FnvHashSet::default(),
            prepared: FnvHashSet::default(),
            lifetime,
        }
    }

    pub fn install(&self, out: &mut Outbox) {
        out.push(SurfaceOp::InstallStyle {
            id: RIPPLE_STYLE_ID,
            css: ripple_keyframes(),
        });
    }

    pub fn register(&mut self, target: TargetId) {
        self.hosts.insert(target);
    }

    pub fn on_click(
        &mut self,
        target: TargetId,
        host: Rect,
        click: Vec2,
        pool: &mut EffectPool,
        out: &mut Outbox,
    ) -> Option<EffectId> {
        if !self.hosts.contains(&target) {
            return None;
        }
        if self.prepared.insert(target) {
            out.set_style(target, "position", "relative");
            out.set_style(target, "overflow", "hidden");
        }
        let geo = ripple_geometry(host, click);
        let spec = NodeSpec::new(NodeTag::Span)
            .with_style("position", "absolute")
            .with_style("width", format!("{}px", geo.diameter))
            .with_style("height", format!("{}px", geo.diameter))
            .with_style("border-radius", "50%")
            .with_style(
                "background",
                "radial-gradient(circle, rgba(99, 102, 241, 0.6), transparent)",
            )
            .with_style("top", format!("{}px", geo.top))
            .with_style("left", format!("{}px", geo.left))
            .with_style("pointer-events", "none")
            .with_style(
                "animation",
                format!("{RIPPLE_ANIMATION} {}s ease-out", self.lifetime.as_secs_f32()),
            );
        Some(pool.spawn(
            Parent::Target(target),
            spec,
            Expiry::After(self.lifetime),
            out,
        ))
    }
}
