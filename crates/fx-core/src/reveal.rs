//! One-shot viewport reveals.
//!
//! Every (target, kind) pair starts watched and becomes unwatched exactly
//! once, the first time an intersection entry reports the target visible at
//! or above that kind's threshold. Later entries for the pair are ignored.

use crate::constants::REVEAL_OFFSET_PX;
use crate::surface::{Outbox, SurfaceOp, TargetId, Timer};
use fnv::FnvHashMap;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealKind {
    /// Fade in and slide up, staggered within a batch.
    Fade,
    /// Type the captured text one character at a time.
    Typing,
    /// Fill a progress bar from zero to its captured width.
    Progress,
}

/// One visibility report from the host's intersection observer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IntersectionEntry {
    pub target: TargetId,
    pub ratio: f32,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: TargetId, ratio: f32, is_intersecting: bool) -> Self {
        Self {
            target,
            ratio,
            is_intersecting,
        }
    }
}

/// Character-by-character text reveal over a captured buffer.
#[derive(Clone, Debug, Default)]
pub struct Typewriter {
    chars: Vec<char>,
    shown: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            shown: 0,
        }
    }

    /// Reveals one more character and returns the text to display, or `None`
    /// once the whole buffer is shown.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_done() {
            return None;
        }
        self.shown += 1;
        Some(self.displayed())
    }

    pub fn displayed(&self) -> String {
        self.chars[..self.shown].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.shown >= self.chars.len()
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }
}

/// One reveal effect on a target: its captured state and one-shot flag.
#[derive(Debug)]
struct Slot<T> {
    state: T,
    watched: bool,
}

impl<T> Slot<T> {
    fn new(state: T) -> Self {
        Self {
            state,
            watched: true,
        }
    }
}

/// An element can carry several reveal kinds at once (a card with a typing
/// headline, a progress bar inside a fading card). Each kind fires on its
/// own.
#[derive(Debug, Default)]
struct ObservationTarget {
    fade: Option<Slot<()>>,
    typing: Option<Slot<Typewriter>>,
    progress: Option<Slot<String>>,
}

impl ObservationTarget {
    fn watched(&self, kind: RevealKind) -> Option<bool> {
        match kind {
            RevealKind::Fade => self.fade.as_ref().map(|s| s.watched),
            RevealKind::Typing => self.typing.as_ref().map(|s| s.watched),
            RevealKind::Progress => self.progress.as_ref().map(|s| s.watched),
        }
    }

    fn kinds(&self) -> SmallVec<[RevealKind; 3]> {
        [RevealKind::Fade, RevealKind::Typing, RevealKind::Progress]
            .into_iter()
            .filter(|&k| self.watched(k).is_some())
            .collect()
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RevealTimings {
    pub fade_threshold: f32,
    pub typing_threshold: f32,
    pub progress_threshold: f32,
    pub stagger: Duration,
    pub typing_interval: Duration,
    pub progress_settle: Duration,
}

impl RevealTimings {
    fn threshold(&self, kind: RevealKind) -> f32 {
        match kind {
            RevealKind::Fade => self.fade_threshold,
            RevealKind::Typing => self.typing_threshold,
            RevealKind::Progress => self.progress_threshold,
        }
    }
}

#[derive(Debug)]
pub struct RevealObserver {
    targets: FnvHashMap<TargetId, ObservationTarget>,
    timings: RevealTimings,
}

impl RevealObserver {
    pub fn new(timings: RevealTimings) -> Self {
        Self {
            targets: FnvHashMap::default(),
            timings,
        }
    }

    pub fn threshold(&self, kind: RevealKind) -> f32 {
        self.timings.threshold(kind)
    }

    /// Hides the element until it is revealed.
    pub fn register_fade(&mut self, target: TargetId, out: &mut Outbox) {
        out.set_style(target, "opacity", "0");
        out.set_style(
            target,
            "transform",
            format!("translateY({REVEAL_OFFSET_PX}px)"),
        );
        out.set_style(target, "transition", "opacity 0.6s ease, transform 0.6s ease");
        self.targets.entry(target).or_default().fade = Some(Slot::new(()));
    }

    /// Captures `text` and empties the element so typing starts from blank.
    pub fn register_typing(&mut self, target: TargetId, text: &str, out: &mut Outbox) {
        out.push(SurfaceOp::SetText {
            target,
            text: String::new(),
        });
        out.set_style(target, "opacity", "1");
        self.targets.entry(target).or_default().typing = Some(Slot::new(Typewriter::new(text)));
    }

    /// `width` is the bar's declared fill, e.g. `"72%"`.
    pub fn register_progress(&mut self, target: TargetId, width: impl Into<String>) {
        self.targets.entry(target).or_default().progress = Some(Slot::new(width.into()));
    }

    /// Processes one observer batch and returns every (target, kind) that
    /// fired.
    ///
    /// An element is unobserved from a threshold only once all of its kinds
    /// watched at that threshold have fired.
    pub fn on_intersections(
        &mut self,
        batch: &[IntersectionEntry],
        out: &mut Outbox,
    ) -> SmallVec<[(TargetId, RevealKind); 8]> {
        let timings = self.timings;
        let mut fired = SmallVec::new();
        let mut fade_index: u32 = 0;
        for entry in batch {
            let target = entry.target;
            let Some(obs) = self.targets.get_mut(&target) else {
                continue;
            };
            let visible = |kind: RevealKind| {
                entry.is_intersecting && entry.ratio >= timings.threshold(kind)
            };
            let mut now_fired: SmallVec<[RevealKind; 3]> = SmallVec::new();

            if let Some(slot) = obs.fade.as_mut().filter(|s| s.watched) {
                let stagger_slot = fade_index;
                fade_index += 1;
                if visible(RevealKind::Fade) {
                    slot.watched = false;
                    out.schedule(timings.stagger * stagger_slot, Timer::Reveal(target));
                    now_fired.push(RevealKind::Fade);
                }
            }

            if let Some(slot) = obs.typing.as_mut().filter(|s| s.watched) {
                if visible(RevealKind::Typing) {
                    slot.watched = false;
                    if let Some(text) = slot.state.advance() {
                        out.push(SurfaceOp::SetText { target, text });
                        if !slot.state.is_done() {
                            out.schedule(timings.typing_interval, Timer::TypeNext(target));
                        }
                    }
                    now_fired.push(RevealKind::Typing);
                }
            }

            if let Some(slot) = obs.progress.as_mut().filter(|s| s.watched) {
                if visible(RevealKind::Progress) {
                    slot.watched = false;
                    out.set_style(target, "width", "0%");
                    out.schedule(timings.progress_settle, Timer::ProgressFill(target));
                    now_fired.push(RevealKind::Progress);
                }
            }

            let mut released: SmallVec<[f32; 3]> = SmallVec::new();
            for &kind in &now_fired {
                let threshold = timings.threshold(kind);
                if released.contains(&threshold) {
                    continue;
                }
                let group_done = obs
                    .kinds()
                    .into_iter()
                    .filter(|&k| timings.threshold(k) == threshold)
                    .all(|k| obs.watched(k) == Some(false));
                if group_done {
                    released.push(threshold);
                    out.push(SurfaceOp::Unobserve { target, kind });
                }
            }
            fired.extend(now_fired.into_iter().map(|kind| (target, kind)));
        }
        fired
    }

    pub fn on_reveal_timer(&self, target: TargetId, out: &mut Outbox) {
        if self.is_watched(target, RevealKind::Fade) == Some(false) {
            out.set_style(target, "opacity", "1");
            out.set_style(target, "transform", "translateY(0)");
        }
    }

    pub fn on_type_timer(&mut self, target: TargetId, out: &mut Outbox) {
        let Some(slot) = self
            .targets
            .get_mut(&target)
            .and_then(|t| t.typing.as_mut())
            .filter(|s| !s.watched)
        else {
            return;
        };
        if let Some(text) = slot.state.advance() {
            out.push(SurfaceOp::SetText { target, text });
            if !slot.state.is_done() {
                out.schedule(self.timings.typing_interval, Timer::TypeNext(target));
            }
        }
    }

    pub fn on_progress_timer(&self, target: TargetId, out: &mut Outbox) {
        if let Some(slot) = self
            .targets
            .get(&target)
            .and_then(|t| t.progress.as_ref())
            .filter(|s| !s.watched)
        {
            out.set_style(target, "width", slot.state.clone());
        }
    }

    /// `None` when `target` was never registered for `kind`.
    pub fn is_watched(&self, target: TargetId, kind: RevealKind) -> Option<bool> {
        self.targets.get(&target).and_then(|t| t.watched(kind))
    }

    /// Every reveal kind registered on `target`; empty for unknown targets.
    pub fn kinds_of(&self, target: TargetId) -> SmallVec<[RevealKind; 3]> {
        self.targets
            .get(&target)
            .map(ObservationTarget::kinds)
            .unwrap_or_default()
    }

    pub fn watched_count(&self) -> usize {
        self.targets
            .values()
            .map(|t| t.kinds().into_iter().filter(|&k| t.watched(k) == Some(true)).count())
            .sum()
    }
}
