use crate::constants::*;
use crate::dom;
use crate::host::Host;
use crate::targets::TargetTable;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Submit buttons go busy for a fixed period; the submission itself is not
/// intercepted.
pub fn wire_submit_guard(host: &Rc<Host>) {
    for form in dom::query_all(host.document(), FORM_SELECTOR) {
        let h = host.clone();
        let form_el = form.clone();
        dom::listen(&form, "submit", move |_: web::Event| {
            let Some(button) = form_el.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten() else {
                return;
            };
            let enabled = button
                .dyn_ref::<web::HtmlButtonElement>()
                .map(|b| !b.disabled())
                .unwrap_or(false);
            let Some(id) = TargetTable::id_of(&button) else {
                return;
            };
            if enabled {
                let label = button.inner_html();
                h.dispatch(|engine, out| engine.on_submit(id, &label, out));
            }
        });
    }
}

pub fn wire_theme_toggle(host: &Rc<Host>) {
    let Some(button) = host.document().get_element_by_id(THEME_TOGGLE_ID) else {
        return;
    };
    let h = host.clone();
    dom::listen(&button, "click", move |_: web::MouseEvent| {
        let theme = h.dispatch(|engine, out| engine.toggle_theme(out));
        log::debug!("[theme] switched to {}", theme.as_str());
    });
}

/// In-page anchors scroll smoothly to their target when it exists.
pub fn wire_anchor_scroll(document: &web::Document) {
    for anchor in dom::query_all(document, ANCHOR_SELECTOR) {
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: web::MouseEvent| {
            let href = link.get_attribute("href").unwrap_or_default();
            if href.is_empty() || href == "#" {
                return;
            }
            if let Ok(Some(target)) = doc.query_selector(&href) {
                ev.prevent_default();
                let opts = web::ScrollIntoViewOptions::new();
                opts.set_behavior(web::ScrollBehavior::Smooth);
                opts.set_block(web::ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&opts);
            }
        });
    }
}

pub fn wire_first_input_focus(document: &web::Document) {
    let input = document
        .query_selector(FIRST_INPUT_SELECTOR)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok());
    if let Some(input) = input {
        if input.value().is_empty() {
            _ = input.focus();
        }
    }
}
