//! Commands the engine hands to the host surface.
//!
//! Components never touch a document directly. Each handler appends
//! [`SurfaceOp`]s, timer requests and frame requests to an [`Outbox`]; the
//! host applies them in order and feeds timer/frame callbacks back into the
//! engine.

use crate::reveal::RevealKind;
use glam::Vec2;
use std::time::Duration;

/// Handle of a spawned decorative node. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EffectId(pub u64);

/// Index of a page element in the host's target registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parent {
    Root,
    Target(TargetId),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeTag {
    Div,
    Span,
}

impl NodeTag {
    pub fn as_str(self) -> &'static str {
        match self {
            NodeTag::Div => "div",
            NodeTag::Span => "span",
        }
    }
}

/// Description of a node to create: tag, optional class and inline style.
#[derive(Clone, Debug, PartialEq)]
pub struct NodeSpec {
    pub tag: NodeTag,
    pub class: Option<&'static str>,
    pub style: Vec<(&'static str, String)>,
}

impl NodeSpec {
    pub fn new(tag: NodeTag) -> Self {
        Self {
            tag,
            class: None,
            style: Vec::new(),
        }
    }

    pub fn with_class(mut self, class: &'static str) -> Self {
        self.class = Some(class);
        self
    }

    pub fn with_style(mut self, prop: &'static str, value: impl Into<String>) -> Self {
        self.style.push((prop, value.into()));
        self
    }

    /// Last value set for `prop`, if any.
    pub fn style(&self, prop: &str) -> Option<&str> {
        self.style
            .iter()
            .rev()
            .find(|(p, _)| *p == prop)
            .map(|(_, v)| v.as_str())
    }
}

/// When a spawned node leaves the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    After(Duration),
    OnAnimationEnd,
    External,
    Never,
}

/// Deferred work routed back into the engine when its delay elapses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    Expire(EffectId),
    ClearTransition(TargetId),
    Reveal(TargetId),
    TypeNext(TargetId),
    ProgressFill(TargetId),
    NoticeFade(TargetId),
    NoticeRemove(TargetId),
    SubmitRestore(TargetId),
}

#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// Install a stylesheet once; hosts skip ids that already exist.
    InstallStyle { id: &'static str, css: String },
    Spawn {
        id: EffectId,
        parent: Parent,
        spec: NodeSpec,
        expiry: Expiry,
    },
    Remove { id: EffectId },
    /// Set an inline style property on a page element; an empty value clears it.
    SetStyle {
        target: TargetId,
        prop: &'static str,
        value: String,
    },
    SetText { target: TargetId, text: String },
    SetHtml { target: TargetId, html: String },
    SetDisabled { target: TargetId, disabled: bool },
    SetClassName { target: TargetId, class: &'static str },
    /// Toggle a class on the document body.
    SetRootClass { class: &'static str, enabled: bool },
    /// Stop watching `target` from the observer serving `kind`.
    Unobserve { target: TargetId, kind: RevealKind },
    Detach { target: TargetId },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimerRequest {
    pub delay: Duration,
    pub timer: Timer,
}

#[derive(Default, Debug)]
pub struct Outbox {
    pub ops: Vec<SurfaceOp>,
    pub timers: Vec<TimerRequest>,
    pub frame_requested: bool,
}

impl Outbox {
    #[inline]
    pub fn push(&mut self, op: SurfaceOp) {
        self.ops.push(op);
    }

    #[inline]
    pub fn schedule(&mut self, delay: Duration, timer: Timer) {
        self.timers.push(TimerRequest { delay, timer });
    }

    #[inline]
    pub fn request_frame(&mut self) {
        self.frame_requested = true;
    }

    #[inline]
    pub fn set_style(&mut self, target: TargetId, prop: &'static str, value: impl Into<String>) {
        self.ops.push(SurfaceOp::SetStyle {
            target,
            prop,
            value: value.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty() && self.timers.is_empty() && !self.frame_requested
    }
}

/// Axis-aligned element bounds in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}
