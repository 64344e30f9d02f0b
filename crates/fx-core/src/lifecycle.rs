//! Fixed lifecycle policies for page notices and submit buttons.

use crate::constants::SUBMIT_LOADING_HTML;
use crate::surface::{Outbox, SurfaceOp, TargetId, Timer};
use fnv::{FnvHashMap, FnvHashSet};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeState {
    Showing,
    Fading,
    Detached,
}

/// Notices fade and slide out after a delay, then are detached once the
/// transition has played.
#[derive(Debug)]
pub struct NoticeRules {
    notices: FnvHashMap<TargetId, NoticeState>,
    dismiss_after: Duration,
    fade: Duration,
}

impl NoticeRules {
    pub fn new(dismiss_after: Duration, fade: Duration) -> Self {
        Self {
            notices: FnvHashMap::default(),
            dismiss_after,
            fade,
        }
    }

    pub fn arm(&mut self, target: TargetId, out: &mut Outbox) {
        if self.notices.insert(target, NoticeState::Showing).is_none() {
            out.schedule(self.dismiss_after, Timer::NoticeFade(target));
        }
    }

    pub fn on_fade(&mut self, target: TargetId, out: &mut Outbox) {
        match self.notices.get_mut(&target) {
            Some(state) if *state == NoticeState::Showing => {
                *state = NoticeState::Fading;
                out.set_style(target, "opacity", "0");
                out.set_style(target, "transform", "translateX(100%)");
                out.schedule(self.fade, Timer::NoticeRemove(target));
            }
            _ => {}
        }
    }

    pub fn on_remove(&mut self, target: TargetId, out: &mut Outbox) {
        match self.notices.get_mut(&target) {
            Some(state) if *state == NoticeState::Fading => {
                *state = NoticeState::Detached;
                out.push(SurfaceOp::Detach { target });
            }
            _ => {}
        }
    }

    pub fn state(&self, target: TargetId) -> Option<NoticeState> {
        self.notices.get(&target).copied()
    }
}

/// Busy affordance for submit buttons: disabled with a spinner label for a
/// fixed period, independent of whether the submission finished.
#[derive(Debug)]
pub struct SubmitGuard {
    buttons: FnvHashSet<TargetId>,
    busy: FnvHashMap<TargetId, String>,
    busy_for: Duration,
}

impl SubmitGuard {
    pub fn new(busy_for: Duration) -> Self {
        Self {
            buttons: FnvHashSet::default(),
            busy: FnvHashMap::default(),
            busy_for,
        }
    }

    pub fn register(&mut self, button: TargetId) {
        self.buttons.insert(button);
    }

    /// `label` is the button's current markup, restored afterwards. Returns
    /// false when the button is unknown or already busy.
    pub fn on_submit(&mut self, button: TargetId, label: &str, out: &mut Outbox) -> bool {
        if !self.buttons.contains(&button) || self.busy.contains_key(&button) {
            return false;
        }
        self.busy.insert(button, label.to_owned());
        out.push(SurfaceOp::SetDisabled {
            target: button,
            disabled: true,
        });
        out.push(SurfaceOp::SetHtml {
            target: button,
            html: SUBMIT_LOADING_HTML.to_owned(),
        });
        out.schedule(self.busy_for, Timer::SubmitRestore(button));
        true
    }

    pub fn on_restore(&mut self, button: TargetId, out: &mut Outbox) {
        if let Some(label) = self.busy.remove(&button) {
            out.push(SurfaceOp::SetDisabled {
                target: button,
                disabled: false,
            });
            out.push(SurfaceOp::SetHtml {
                target: button,
                html: label,
            });
        }
    }

    pub fn is_busy(&self, button: TargetId) -> bool {
        self.busy.contains_key(&button)
    }
}
