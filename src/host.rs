//! Executes engine outboxes against the live document.

use crate::dom;
use crate::targets::TargetTable;
use fnv::FnvHashMap;
use fx_core::{
    EffectId, Engine, Expiry, IntersectionEntry, NodeSpec, Outbox, Parent, RevealKind, SurfaceOp,
    TargetId, TimerRequest,
};
use rand::rngs::StdRng;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FxEngine = Engine<StdRng>;

pub struct Host {
    engine: RefCell<FxEngine>,
    document: web::Document,
    targets: TargetTable,
    nodes: RefCell<FnvHashMap<EffectId, web::Element>>,
    observers: RefCell<Vec<(RevealKind, web::IntersectionObserver)>>,
}

impl Host {
    pub fn new(engine: FxEngine, document: web::Document, targets: TargetTable) -> Rc<Self> {
        Rc::new(Self {
            engine: RefCell::new(engine),
            document,
            targets,
            nodes: RefCell::new(FnvHashMap::default()),
            observers: RefCell::new(Vec::new()),
        })
    }

    /// Runs one engine handler and applies what it produced. The engine
    /// borrow ends before any DOM work so re-entrant events cannot collide.
    pub fn dispatch<T>(self: &Rc<Self>, handler: impl FnOnce(&mut FxEngine, &mut Outbox) -> T) -> T {
        let mut out = Outbox::default();
        let result = {
            let mut engine = self.engine.borrow_mut();
            handler(&mut engine, &mut out)
        };
        self.apply(out);
        result
    }

    pub fn with_engine<T>(&self, f: impl FnOnce(&FxEngine) -> T) -> T {
        f(&self.engine.borrow())
    }

    pub fn document(&self) -> &web::Document {
        &self.document
    }

    pub fn target(&self, id: TargetId) -> Option<&web::Element> {
        self.targets.get(id)
    }

    /// Registers `observer` as the one serving reveals of `kind`.
    pub fn add_observer(&self, kind: RevealKind, observer: web::IntersectionObserver) {
        self.observers.borrow_mut().push((kind, observer));
    }

    /// Maps raw observer entries onto registry ids, dropping unknown targets.
    pub fn on_observer_entries(self: &Rc<Self>, entries: &js_sys::Array) {
        let batch: Vec<IntersectionEntry> = entries
            .iter()
            .filter_map(|v| v.dyn_into::<web::IntersectionObserverEntry>().ok())
            .filter_map(|entry| {
                let id = TargetTable::id_of(&entry.target())?;
                Some(IntersectionEntry::new(
                    id,
                    entry.intersection_ratio() as f32,
                    entry.is_intersecting(),
                ))
            })
            .collect();
        if !batch.is_empty() {
            self.dispatch(|engine, out| engine.on_intersections(&batch, out));
        }
    }

    fn apply(self: &Rc<Self>, out: Outbox) {
        for op in out.ops {
            self.apply_op(op);
        }
        for req in out.timers {
            self.schedule(req);
        }
        if out.frame_requested {
            self.request_frame();
        }
    }

    fn apply_op(self: &Rc<Self>, op: SurfaceOp) {
        match op {
            SurfaceOp::InstallStyle { id, css } => self.install_style(id, &css),
            SurfaceOp::Spawn {
                id,
                parent,
                spec,
                expiry,
            } => self.spawn(id, parent, &spec, expiry),
            SurfaceOp::Remove { id } => {
                let removed = self.nodes.borrow_mut().remove(&id);
                if let Some(el) = removed {
                    el.remove();
                }
            }
            SurfaceOp::SetStyle {
                target,
                prop,
                value,
            } => {
                if let Some(el) = self.target(target) {
                    dom::set_inline_style(el, prop, &value);
                }
            }
            SurfaceOp::SetText { target, text } => {
                if let Some(el) = self.target(target) {
                    el.set_text_content(Some(&text));
                }
            }
            SurfaceOp::SetHtml { target, html } => {
                if let Some(el) = self.target(target) {
                    el.set_inner_html(&html);
                }
            }
            SurfaceOp::SetDisabled { target, disabled } => {
                if let Some(button) = self
                    .target(target)
                    .and_then(|el| el.dyn_ref::<web::HtmlButtonElement>())
                {
                    button.set_disabled(disabled);
                }
            }
            SurfaceOp::SetClassName { target, class } => {
                if let Some(el) = self.target(target) {
                    el.set_class_name(class);
                }
            }
            SurfaceOp::SetRootClass { class, enabled } => {
                if let Some(body) = self.document.body() {
                    _ = body.class_list().toggle_with_force(class, enabled);
                }
            }
            SurfaceOp::Unobserve { target, kind } => {
                let Some(el) = self.target(target) else {
                    return;
                };
                let observers: Vec<web::IntersectionObserver> = self
                    .observers
                    .borrow()
                    .iter()
                    .filter(|(k, _)| *k == kind)
                    .map(|(_, o)| o.clone())
                    .collect();
                for observer in observers {
                    observer.unobserve(el);
                }
            }
            SurfaceOp::Detach { target } => {
                if let Some(el) = self.target(target) {
                    el.remove();
                }
            }
        }
    }

    fn install_style(&self, id: &str, css: &str) {
        if self.document.get_element_by_id(id).is_some() {
            return;
        }
        let (Ok(style), Some(head)) = (self.document.create_element("style"), self.document.head())
        else {
            return;
        };
        style.set_id(id);
        style.set_text_content(Some(css));
        _ = head.append_child(&style);
    }

    fn spawn(self: &Rc<Self>, id: EffectId, parent: Parent, spec: &NodeSpec, expiry: Expiry) {
        let Ok(el) = self.document.create_element(spec.tag.as_str()) else {
            return;
        };
        if let Some(class) = spec.class {
            el.set_class_name(class);
        }
        for (prop, value) in &spec.style {
            dom::set_inline_style(&el, prop, value);
        }
        let parent_el: Option<web::Element> = match parent {
            Parent::Root => self.document.body().map(Into::into),
            Parent::Target(t) => self.target(t).cloned(),
        };
        let Some(parent_el) = parent_el else {
            log::debug!("[host] no parent for {:?}; dropping", id);
            return;
        };
        if parent_el.append_child(&el).is_err() {
            return;
        }
        if expiry == Expiry::OnAnimationEnd {
            let host = Rc::clone(self);
            dom::listen(&el, "animationend", move |_: web::AnimationEvent| {
                host.dispatch(|engine, out| engine.on_animation_end(id, out));
            });
        }
        self.nodes.borrow_mut().insert(id, el);
    }

    fn schedule(self: &Rc<Self>, req: TimerRequest) {
        let Some(window) = web::window() else {
            return;
        };
        let host = Rc::clone(self);
        let timer = req.timer;
        let callback = Closure::once_into_js(move || {
            host.dispatch(|engine, out| engine.on_timer(timer, out));
        });
        let delay_ms = req.delay.as_millis().min(i32::MAX as u128) as i32;
        _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms,
        );
    }

    fn request_frame(self: &Rc<Self>) {
        let Some(window) = web::window() else {
            return;
        };
        let host = Rc::clone(self);
        let callback = Closure::once_into_js(move |_timestamp: f64| {
            host.dispatch(|engine, out| engine.on_frame(out));
        });
        _ = window.request_animation_frame(callback.unchecked_ref());
    }
}
