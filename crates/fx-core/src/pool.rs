//! Create/expire primitive behind every decorative node.
//!
//! Each live entry in the pool is the instance's single removal token.
//! Whichever path reaches [`EffectPool::remove`] first (a timer, an
//! animation-end signal or an eviction) consumes it; every later attempt
//! finds nothing and does nothing. Ids are monotonic, so a stale handle can
//! never resolve to a newer node.

use crate::surface::{EffectId, Expiry, NodeSpec, Outbox, Parent, SurfaceOp, Timer};
use fnv::FnvHashMap;
use instant::Instant;
use std::time::Duration;

#[derive(Debug)]
struct RemovalToken {
    created: Instant,
    expiry: Expiry,
}

#[derive(Debug)]
pub struct EffectPool {
    next_id: u64,
    live: FnvHashMap<EffectId, RemovalToken>,
}

impl Default for EffectPool {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectPool {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            live: FnvHashMap::default(),
        }
    }

    pub fn spawn(
        &mut self,
        parent: Parent,
        spec: NodeSpec,
        expiry: Expiry,
        out: &mut Outbox,
    ) -> EffectId {
        let id = EffectId(self.next_id);
        self.next_id += 1;
        self.live.insert(
            id,
            RemovalToken {
                created: Instant::now(),
                expiry,
            },
        );
        out.push(SurfaceOp::Spawn {
            id,
            parent,
            spec,
            expiry,
        });
        if let Expiry::After(delay) = expiry {
            out.schedule(delay, Timer::Expire(id));
        }
        id
    }

    /// Removes the node if it is still live. Returns whether this call did it.
    pub fn remove(&mut self, id: EffectId, out: &mut Outbox) -> bool {
        match self.live.remove(&id) {
            Some(token) => {
                log::trace!(
                    "[pool] remove {:?} after {:?}",
                    id,
                    token.created.elapsed()
                );
                out.push(SurfaceOp::Remove { id });
                true
            }
            None => false,
        }
    }

    /// Animation-completion signal from the host. Only instances spawned with
    /// [`Expiry::OnAnimationEnd`] react to it.
    pub fn on_animation_end(&mut self, id: EffectId, out: &mut Outbox) -> bool {
        match self.live.get(&id) {
            Some(token) if token.expiry == Expiry::OnAnimationEnd => self.remove(id, out),
            _ => false,
        }
    }

    #[inline]
    pub fn is_live(&self, id: EffectId) -> bool {
        self.live.contains_key(&id)
    }

    #[inline]
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn age(&self, id: EffectId) -> Option<Duration> {
        self.live.get(&id).map(|t| t.created.elapsed())
    }
}
