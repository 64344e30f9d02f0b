//! Ambient particle field.
//!
//! A fixed population spawned once at init. Motion is a looping CSS keyframe,
//! so nothing here runs per frame and the nodes are never expired.

use crate::constants::*;
use crate::pool::EffectPool;
use crate::styles::{particle_keyframes, PARTICLE_ANIMATION, PARTICLE_STYLE_ID};
use crate::surface::{EffectId, Expiry, NodeSpec, NodeTag, Outbox, Parent, SurfaceOp};
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDescriptor {
    pub size_px: f32,
    pub left_pct: f32,
    pub top_pct: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl ParticleDescriptor {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            size_px: rng.gen_range(PARTICLE_SIZE_MIN_PX..=PARTICLE_SIZE_MAX_PX),
            left_pct: rng.gen_range(0.0..=100.0),
            top_pct: rng.gen_range(0.0..=100.0),
            duration_sec: rng.gen_range(PARTICLE_DURATION_MIN_SEC..=PARTICLE_DURATION_MAX_SEC),
            delay_sec: rng.gen_range(0.0..=PARTICLE_DELAY_MAX_SEC),
        }
    }

    pub fn node_spec(&self) -> NodeSpec {
        NodeSpec::new(NodeTag::Div)
            .with_style("position", "fixed")
            .with_style("width", format!("{:.2}px", self.size_px))
            .with_style("height", format!("{:.2}px", self.size_px))
            .with_style(
                "background",
                "radial-gradient(circle, rgba(99, 102, 241, 0.6), transparent)",
            )
            .with_style("border-radius", "50%")
            .with_style("pointer-events", "none")
            .with_style("z-index", "-1")
            .with_style("left", format!("{:.2}%", self.left_pct))
            .with_style("top", format!("{:.2}%", self.top_pct))
            .with_style(
                "animation",
                format!(
                    "{PARTICLE_ANIMATION} {:.2}s linear infinite",
                    self.duration_sec
                ),
            )
            .with_style("animation-delay", format!("{:.2}s", self.delay_sec))
            .with_style("opacity", "0")
    }
}

#[derive(Debug, Default)]
pub struct ParticleField {
    particles: Vec<(EffectId, ParticleDescriptor)>,
    drift_px: f32,
}

impl ParticleField {
    pub fn spawn<R: Rng + ?Sized>(
        count: usize,
        rng: &mut R,
        pool: &mut EffectPool,
        out: &mut Outbox,
    ) -> Self {
        let drift_px = rng.gen_range(-PARTICLE_DRIFT_MAX_PX..=PARTICLE_DRIFT_MAX_PX);
        out.push(SurfaceOp::InstallStyle {
            id: PARTICLE_STYLE_ID,
            css: particle_keyframes(drift_px),
        });
        let particles = (0..count)
            .map(|_| {
                let desc = ParticleDescriptor::random(rng);
                let id = pool.spawn(Parent::Root, desc.node_spec(), Expiry::Never, out);
                (id, desc)
            })
            .collect();
        Self {
            particles,
            drift_px,
        }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ParticleDescriptor> {
        self.particles.iter().map(|(_, d)| d)
    }

    pub fn ids(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.particles.iter().map(|(id, _)| *id)
    }

    pub fn drift_px(&self) -> f32 {
        self.drift_px
    }
}
