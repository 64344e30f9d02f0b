use crate::constants::{DETAIL_OBSERVER_THRESHOLD, FADE_OBSERVER_THRESHOLD};
use crate::host::Host;
use fx_core::{RevealKind, TargetId, TargetRegistry};
use smallvec::SmallVec;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Creates the fade and detail observers and starts watching every reveal
/// target. An element with several reveal kinds is watched by each observer
/// serving one of them; the engine decides when it fires and asks for it to
/// be unobserved per observer.
pub fn wire_observers(host: &Rc<Host>, registry: &TargetRegistry) -> anyhow::Result<()> {
    let fade = build_observer(host, FADE_OBSERVER_THRESHOLD)?;
    let detail = build_observer(host, DETAIL_OBSERVER_THRESHOLD)?;

    let mut observed: Vec<TargetId> = registry.observed().collect();
    observed.sort_unstable();
    observed.dedup();
    let engine_kinds: Vec<(TargetId, SmallVec<[RevealKind; 3]>)> = host.with_engine(|engine| {
        observed
            .iter()
            .map(|&t| (t, engine.reveal().kinds_of(t)))
            .collect()
    });
    for (target, kinds) in engine_kinds {
        let Some(el) = host.target(target) else {
            continue;
        };
        if kinds.contains(&RevealKind::Fade) {
            fade.observe(el);
        }
        if kinds.contains(&RevealKind::Typing) || kinds.contains(&RevealKind::Progress) {
            detail.observe(el);
        }
    }
    host.add_observer(RevealKind::Fade, fade);
    host.add_observer(RevealKind::Typing, detail.clone());
    host.add_observer(RevealKind::Progress, detail);
    Ok(())
}

fn build_observer(host: &Rc<Host>, threshold: f64) -> anyhow::Result<web::IntersectionObserver> {
    let h = host.clone();
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _obs: JsValue| {
        h.on_observer_entries(&entries);
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();
    Ok(observer)
}
