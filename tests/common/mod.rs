// Deterministic host for driving the engine on a virtual clock.
// Applies outboxes to an in-memory surface model so tests can inspect it.

#![allow(dead_code)]

use fx_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

pub const SEED: u64 = 42;

pub fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

pub struct Harness {
    pub engine: Engine<StdRng>,
    pub now: Duration,
    seq: u64,
    timers: Vec<(Duration, u64, Timer)>,
    pub frame_pending: bool,
    pub frames_requested: usize,
    pub nodes: BTreeMap<EffectId, (Parent, NodeSpec)>,
    pub removed: Vec<(Duration, EffectId)>,
    pub double_removals: usize,
    pub styles: HashMap<(TargetId, &'static str), String>,
    pub style_log: Vec<(Duration, TargetId, &'static str, String)>,
    pub texts: HashMap<TargetId, String>,
    pub text_log: Vec<(Duration, TargetId, String)>,
    pub html: HashMap<TargetId, String>,
    pub disabled: HashMap<TargetId, bool>,
    pub class_names: HashMap<TargetId, &'static str>,
    pub root_classes: HashMap<&'static str, bool>,
    pub unobserved: Vec<(TargetId, RevealKind)>,
    pub detached: Vec<(Duration, TargetId)>,
    pub installed_styles: Vec<&'static str>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_config(FxConfig::default())
    }

    pub fn with_config(config: FxConfig) -> Self {
        Self::build(config, Box::<MemoryStore>::default())
    }

    pub fn with_store(store: Box<dyn PreferenceStore>) -> Self {
        Self::build(FxConfig::default(), store)
    }

    fn build(config: FxConfig, store: Box<dyn PreferenceStore>) -> Self {
        let engine = Engine::new(config, StdRng::seed_from_u64(SEED), store)
            .expect("valid config");
        Self {
            engine,
            now: Duration::ZERO,
            seq: 0,
            timers: Vec::new(),
            frame_pending: false,
            frames_requested: 0,
            nodes: BTreeMap::new(),
            removed: Vec::new(),
            double_removals: 0,
            styles: HashMap::new(),
            style_log: Vec::new(),
            texts: HashMap::new(),
            text_log: Vec::new(),
            html: HashMap::new(),
            disabled: HashMap::new(),
            class_names: HashMap::new(),
            root_classes: HashMap::new(),
            unobserved: Vec::new(),
            detached: Vec::new(),
            installed_styles: Vec::new(),
        }
    }

    /// Runs one engine handler and applies its outbox.
    pub fn run<T>(&mut self, f: impl FnOnce(&mut Engine<StdRng>, &mut Outbox) -> T) -> T {
        let mut out = Outbox::default();
        let result = f(&mut self.engine, &mut out);
        self.apply(out);
        result
    }

    pub fn init(&mut self, registry: TargetRegistry) -> bool {
        self.run(|e, out| e.init(registry, out))
    }

    pub fn apply(&mut self, out: Outbox) {
        for op in out.ops {
            self.apply_op(op);
        }
        for req in out.timers {
            self.seq += 1;
            self.timers.push((self.now + req.delay, self.seq, req.timer));
        }
        if out.frame_requested {
            self.frames_requested += 1;
            self.frame_pending = true;
        }
    }

    fn apply_op(&mut self, op: SurfaceOp) {
        match op {
            SurfaceOp::InstallStyle { id, .. } => {
                if !self.installed_styles.contains(&id) {
                    self.installed_styles.push(id);
                }
            }
            SurfaceOp::Spawn {
                id, parent, spec, ..
            } => {
                self.nodes.insert(id, (parent, spec));
            }
            SurfaceOp::Remove { id } => {
                if self.nodes.remove(&id).is_some() {
                    self.removed.push((self.now, id));
                } else {
                    self.double_removals += 1;
                }
            }
            SurfaceOp::SetStyle {
                target,
                prop,
                value,
            } => {
                self.style_log.push((self.now, target, prop, value.clone()));
                self.styles.insert((target, prop), value);
            }
            SurfaceOp::SetText { target, text } => {
                self.text_log.push((self.now, target, text.clone()));
                self.texts.insert(target, text);
            }
            SurfaceOp::SetHtml { target, html } => {
                self.html.insert(target, html);
            }
            SurfaceOp::SetDisabled { target, disabled } => {
                self.disabled.insert(target, disabled);
            }
            SurfaceOp::SetClassName { target, class } => {
                self.class_names.insert(target, class);
            }
            SurfaceOp::SetRootClass { class, enabled } => {
                self.root_classes.insert(class, enabled);
            }
            SurfaceOp::Unobserve { target, kind } => self.unobserved.push((target, kind)),
            SurfaceOp::Detach { target } => self.detached.push((self.now, target)),
        }
    }

    /// Advances the virtual clock, firing due timers in order. Timers
    /// scheduled by a firing timer run in the same call if they fall due.
    pub fn advance(&mut self, by: Duration) {
        let until = self.now + by;
        loop {
            let next = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, (due, _, _))| *due <= until)
                .min_by_key(|(_, (due, seq, _))| (*due, *seq))
                .map(|(i, _)| i);
            let Some(i) = next else {
                break;
            };
            let (due, _, timer) = self.timers.remove(i);
            self.now = due;
            self.run(|e, out| e.on_timer(timer, out));
        }
        self.now = until;
    }

    /// Delivers a display frame if one was requested.
    pub fn run_frame(&mut self) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        self.run(|e, out| e.on_frame(out))
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn style(&self, target: TargetId, prop: &'static str) -> Option<&str> {
        self.styles.get(&(target, prop)).map(String::as_str)
    }

    pub fn text(&self, target: TargetId) -> Option<&str> {
        self.texts.get(&target).map(String::as_str)
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }
}

pub fn px(value: &str) -> f32 {
    value
        .trim_end_matches("px")
        .parse()
        .unwrap_or_else(|_| panic!("not a px value: {value}"))
}
