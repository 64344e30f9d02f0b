//! Pointer trail: one fading dot per pointer sample, ring-bounded.

use crate::constants::TRAIL_DOT_PX;
use crate::pool::EffectPool;
use crate::styles::{trail_keyframes, TRAIL_ANIMATION, TRAIL_STYLE_ID};
use crate::surface::{EffectId, Expiry, NodeSpec, NodeTag, Outbox, Parent, SurfaceOp};
use glam::Vec2;
use instant::Instant;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct TrailPoint {
    pub id: EffectId,
    pub position: Vec2,
    pub created: Instant,
}

#[derive(Debug)]
pub struct PointerTrail {
    points: VecDeque<TrailPoint>,
    max_points: usize,
    lifetime: Duration,
    min_interval: Option<Duration>,
    last_sample: Option<Instant>,
    last_position: Vec2,
}

impl PointerTrail {
    pub fn new(max_points: usize, lifetime: Duration, min_interval: Option<Duration>) -> Self {
        Self {
            points: VecDeque::with_capacity(max_points + 1),
            max_points,
            lifetime,
            min_interval,
            last_sample: None,
            last_position: Vec2::ZERO,
        }
    }

    pub fn install(&self, out: &mut Outbox) {
        out.push(SurfaceOp::InstallStyle {
            id: TRAIL_STYLE_ID,
            css: trail_keyframes(),
        });
    }

    /// Spawns a dot at `position`, evicting the oldest point when the ring is
    /// full. Returns `None` when the sample was throttled.
    pub fn on_move(
        &mut self,
        position: Vec2,
        pool: &mut EffectPool,
        out: &mut Outbox,
    ) -> Option<EffectId> {
        self.last_position = position;
        let now = Instant::now();
        if let (Some(min), Some(last)) = (self.min_interval, self.last_sample) {
            if now.duration_since(last) < min {
                return None;
            }
        }
        self.last_sample = Some(now);

        let id = pool.spawn(
            Parent::Root,
            dot_spec(position, self.lifetime),
            Expiry::After(self.lifetime),
            out,
        );
        self.points.push_back(TrailPoint {
            id,
            position,
            created: now,
        });
        while self.points.len() > self.max_points {
            if let Some(old) = self.points.pop_front() {
                if pool.remove(old.id, out) {
                    log::trace!("[trail] evicted {:?}", old.id);
                }
            }
        }
        Some(id)
    }

    /// Points currently in the ring, oldest first. Some may already have been
    /// removed by their own timer.
    pub fn points(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }

    pub fn live_count(&self, pool: &EffectPool) -> usize {
        self.points.iter().filter(|p| pool.is_live(p.id)).count()
    }

    pub fn last_position(&self) -> Vec2 {
        self.last_position
    }
}

fn dot_spec(position: Vec2, lifetime: Duration) -> NodeSpec {
    let half = TRAIL_DOT_PX / 2.0;
    NodeSpec::new(NodeTag::Div)
        .with_class("cursor-trail")
        .with_style("position", "fixed")
        .with_style("width", format!("{TRAIL_DOT_PX}px"))
        .with_style("height", format!("{TRAIL_DOT_PX}px"))
        .with_style("border-radius", "50%")
        .with_style(
            "background",
            "radial-gradient(circle, rgba(99, 102, 241, 0.8), rgba(139, 92, 246, 0.4))",
        )
        .with_style("pointer-events", "none")
        .with_style("z-index", "9999")
        .with_style("left", format!("{}px", position.x - half))
        .with_style("top", format!("{}px", position.y - half))
        .with_style(
            "animation",
            format!(
                "{TRAIL_ANIMATION} {}s ease-out forwards",
                lifetime.as_secs_f32()
            ),
        )
}
