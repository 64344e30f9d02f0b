use crate::dom;
use crate::host::Host;
use fx_core::{TargetId, TargetRegistry};
use std::rc::Rc;
use web_sys as web;

/// Document-wide trail plus per-element magnetic, glow and ripple handlers.
pub fn wire_pointer_handlers(host: &Rc<Host>, registry: &TargetRegistry) {
    wire_trail(host);
    for &target in &registry.magnetic {
        wire_magnetic(host, target);
    }
    for &target in &registry.glow {
        wire_glow(host, target);
    }
    for &target in &registry.ripple {
        wire_ripple(host, target);
    }
}

fn wire_trail(host: &Rc<Host>) {
    let h = host.clone();
    dom::listen(host.document(), "mousemove", move |ev: web::MouseEvent| {
        let pos = dom::client_pos(&ev);
        h.dispatch(|engine, out| engine.on_pointer_move(pos, out));
    });
}

fn wire_magnetic(host: &Rc<Host>, target: TargetId) {
    let Some(el) = host.target(target).cloned() else {
        return;
    };

    let h = host.clone();
    let el_move = el.clone();
    dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&el_move);
        let pos = dom::client_pos(&ev);
        h.dispatch(|engine, out| engine.on_magnetic_move(target, rect, pos, out));
    });

    let h = host.clone();
    dom::listen(&el, "mouseleave", move |_: web::MouseEvent| {
        h.dispatch(|engine, out| engine.on_magnetic_leave(target, out));
    });
}

fn wire_glow(host: &Rc<Host>, target: TargetId) {
    let Some(el) = host.target(target).cloned() else {
        return;
    };
    let h = host.clone();
    let el_move = el.clone();
    dom::listen(&el, "mousemove", move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&el_move);
        let pos = dom::client_pos(&ev);
        h.dispatch(|engine, out| engine.on_card_move(target, rect, pos, out));
    });
}

fn wire_ripple(host: &Rc<Host>, target: TargetId) {
    let Some(el) = host.target(target).cloned() else {
        return;
    };
    let h = host.clone();
    let el_click = el.clone();
    dom::listen(&el, "click", move |ev: web::MouseEvent| {
        let rect = dom::element_rect(&el_click);
        let pos = dom::client_pos(&ev);
        h.dispatch(|engine, out| engine.on_click(target, rect, pos, out));
    });
}
