use crate::host::Host;
use fx_core::constants::SOS_MESSAGE;
use std::rc::Rc;
use web_sys as web;

/// Flash the emergency overlay, then block on the alert dialog.
pub fn trigger_sos(host: Option<&Rc<Host>>) {
    match host {
        Some(h) => {
            h.dispatch(|engine, out| engine.trigger_sos(out));
        }
        None => log::debug!("[sos] engine not ready; showing alert only"),
    }
    if let Some(window) = web::window() {
        _ = window.alert_with_message(SOS_MESSAGE);
    }
}
