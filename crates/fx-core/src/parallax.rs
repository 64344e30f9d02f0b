use crate::scheduler::FrameScheduler;
use crate::surface::{Outbox, TargetId};

/// Vertical translation (px) and opacity for a scroll offset.
///
/// Opacity fades linearly over `fade_distance` and is clamped to `[0, 1]`,
/// so overscroll above the top and long pages below it stay well defined.
#[inline]
pub fn parallax_style(offset: f32, ratio: f32, fade_distance: f32) -> (f32, f32) {
    let translate = offset * ratio;
    let opacity = (1.0 - offset / fade_distance).clamp(0.0, 1.0);
    (translate, opacity)
}

#[derive(Debug)]
pub struct ParallaxController {
    target: Option<TargetId>,
    scroll_offset: f32,
    ratio: f32,
    fade_distance: f32,
}

impl ParallaxController {
    pub fn new(ratio: f32, fade_distance: f32) -> Self {
        Self {
            target: None,
            scroll_offset: 0.0,
            ratio,
            fade_distance,
        }
    }

    pub fn attach(&mut self, target: Option<TargetId>) {
        if target.is_none() {
            log::debug!("[parallax] no background element; parallax disabled");
        }
        self.target = target;
    }

    /// Records the latest sample and asks for a frame if none is pending.
    pub fn on_scroll(&mut self, offset: f32, frames: &mut FrameScheduler, out: &mut Outbox) {
        self.scroll_offset = offset;
        if self.target.is_some() {
            frames.request(out);
        }
    }

    /// Frame work: applies the current sample, not the one that requested it.
    pub fn apply(&self, out: &mut Outbox) {
        let Some(target) = self.target else {
            return;
        };
        let (translate, opacity) = parallax_style(self.scroll_offset, self.ratio, self.fade_distance);
        out.set_style(target, "transform", format!("translateY({translate}px)"));
        out.set_style(target, "opacity", format!("{opacity}"));
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }
}
