//! Magnetic buttons and card glow: pointer-driven styling of page elements.

use crate::surface::{Outbox, Rect, TargetId, Timer};
use fnv::FnvHashSet;
use glam::Vec2;
use std::time::Duration;

/// Displacement of an element toward the pointer.
///
/// Linear falloff: full `strength` at the center, zero at `radius`, and `None`
/// at or beyond the radius so the element keeps whatever transform it had.
#[inline]
pub fn magnetic_offset(rect: Rect, pointer: Vec2, radius: f32, strength: f32) -> Option<Vec2> {
    let delta = pointer - rect.center();
    let distance = delta.length();
    if distance >= radius {
        return None;
    }
    let falloff = (radius - distance) / radius;
    Some(delta * falloff * strength)
}

#[inline]
pub fn translate(offset: Vec2) -> String {
    format!("translate({}px, {}px)", offset.x, offset.y)
}

#[derive(Debug)]
pub struct MagneticField {
    targets: FnvHashSet<TargetId>,
    radius: f32,
    strength: f32,
    snap_back: Duration,
}

impl MagneticField {
    pub fn new(radius: f32, strength: f32, snap_back: Duration) -> Self {
        Self {
            targets: FnvHashSet::default(),
            radius,
            strength,
            snap_back,
        }
    }

    pub fn register(&mut self, target: TargetId) {
        self.targets.insert(target);
    }

    pub fn on_move(&self, target: TargetId, rect: Rect, pointer: Vec2, out: &mut Outbox) {
        if !self.targets.contains(&target) {
            return;
        }
        if let Some(offset) = magnetic_offset(rect, pointer, self.radius, self.strength) {
            out.set_style(target, "transform", translate(offset));
        }
    }

    /// Snap back with a temporary transition, cleared once it has played so
    /// the next approach tracks the pointer without lag.
    pub fn on_leave(&self, target: TargetId, out: &mut Outbox) {
        if !self.targets.contains(&target) {
            return;
        }
        out.set_style(target, "transform", "");
        out.set_style(
            target,
            "transition",
            format!("transform {}s ease", self.snap_back.as_secs_f32()),
        );
        out.schedule(self.snap_back, Timer::ClearTransition(target));
    }

    pub fn on_snap_back_done(&self, target: TargetId, out: &mut Outbox) {
        if self.targets.contains(&target) {
            out.set_style(target, "transition", "");
        }
    }
}

/// Pointer position within a card as percentages, exposed to CSS through
/// `--mouse-x` / `--mouse-y`.
#[derive(Debug, Default)]
pub struct CardGlow {
    targets: FnvHashSet<TargetId>,
}

impl CardGlow {
    pub fn register(&mut self, target: TargetId) {
        self.targets.insert(target);
    }

    pub fn on_move(&self, target: TargetId, rect: Rect, pointer: Vec2, out: &mut Outbox) {
        if !self.targets.contains(&target) || rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        let local = pointer - rect.origin();
        out.set_style(
            target,
            "--mouse-x",
            format!("{}%", local.x / rect.width * 100.0),
        );
        out.set_style(
            target,
            "--mouse-y",
            format!("{}%", local.y / rect.height * 100.0),
        );
    }
}
