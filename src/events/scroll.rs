use crate::dom;
use crate::host::Host;
use std::rc::Rc;
use web_sys as web;

/// Scroll samples only record the offset; the engine coalesces them into at
/// most one parallax update per animation frame.
pub fn wire_scroll(host: &Rc<Host>) {
    let Some(window) = web::window() else {
        return;
    };
    let h = host.clone();
    let win = window.clone();
    dom::listen(&window, "scroll", move |_: web::Event| {
        let offset = win.page_y_offset().unwrap_or(0.0) as f32;
        h.dispatch(|engine, out| engine.on_scroll(offset, out));
    });
}
