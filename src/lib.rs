#![cfg(target_arch = "wasm32")]
use fx_core::{Engine, FxConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod host;
mod observer;
mod overlay;
mod storage;
mod targets;

use host::Host;

thread_local! {
    static HOST: RefCell<Option<Rc<Host>>> = const { RefCell::new(None) };
}

static STARTED: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", |_: web::Event| run_init());
    } else {
        run_init();
    }
    Ok(())
}

/// Global emergency trigger, callable from page markup as `novaSOS()`.
#[wasm_bindgen(js_name = novaSOS)]
pub fn nova_sos() {
    let host = HOST.with(|h| h.borrow().clone());
    overlay::trigger_sos(host.as_ref());
}

fn run_init() {
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let (table, registry) = targets::collect(&document);
    let engine = Engine::new(
        FxConfig::default(),
        StdRng::from_entropy(),
        Box::new(storage::LocalStorage::open()),
    )?;
    let host = Host::new(engine, document.clone(), table);
    HOST.with(|h| *h.borrow_mut() = Some(host.clone()));

    let registry_for_engine = registry.clone();
    host.dispatch(move |engine, out| engine.init(registry_for_engine, out));

    // Each piece of wiring is independent; one failing must not stop the rest.
    if let Err(e) = observer::wire_observers(&host, &registry) {
        log::error!("reveal observers unavailable: {:?}", e);
    }
    events::wire_pointer_handlers(&host, &registry);
    events::wire_scroll(&host);
    events::wire_submit_guard(&host);
    events::wire_theme_toggle(&host);
    events::wire_anchor_scroll(&document);
    events::wire_first_input_focus(&document);
    Ok(())
}
