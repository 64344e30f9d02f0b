//! Resolves page markers into the engine's target registry.
//!
//! Each element gets one registry slot no matter how many effects select it;
//! the slot index is written to the element so observer entries and event
//! handlers can map back to it.

use crate::constants::*;
use crate::dom;
use fx_core::{TargetId, TargetRegistry};
use web_sys as web;

#[derive(Default)]
pub struct TargetTable {
    elements: Vec<web::Element>,
}

impl TargetTable {
    pub fn intern(&mut self, el: &web::Element) -> TargetId {
        if let Some(id) = Self::id_of(el) {
            if self.elements.get(id.0 as usize).is_some_and(|known| known == el) {
                return id;
            }
        }
        let id = TargetId(self.elements.len() as u32);
        _ = el.set_attribute(TARGET_ATTR, &id.0.to_string());
        self.elements.push(el.clone());
        id
    }

    pub fn id_of(el: &web::Element) -> Option<TargetId> {
        el.get_attribute(TARGET_ATTR)
            .and_then(|v| v.parse::<u32>().ok())
            .map(TargetId)
    }

    #[inline]
    pub fn get(&self, id: TargetId) -> Option<&web::Element> {
        self.elements.get(id.0 as usize)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }
}

fn intern_all(table: &mut TargetTable, document: &web::Document, selector: &str) -> Vec<TargetId> {
    dom::query_all(document, selector)
        .iter()
        .map(|el| table.intern(el))
        .collect()
}

/// Snapshot of the page's effect targets at init time.
pub fn collect(document: &web::Document) -> (TargetTable, TargetRegistry) {
    let mut table = TargetTable::default();
    let mut registry = TargetRegistry {
        magnetic: intern_all(&mut table, document, MAGNETIC_SELECTOR),
        ripple: intern_all(&mut table, document, RIPPLE_SELECTOR),
        glow: intern_all(&mut table, document, GLOW_SELECTOR),
        reveal: intern_all(&mut table, document, REVEAL_SELECTOR),
        notices: intern_all(&mut table, document, NOTICE_SELECTOR),
        ..Default::default()
    };

    registry.typing = dom::query_all(document, TYPING_SELECTOR)
        .iter()
        .map(|el| (table.intern(el), el.text_content().unwrap_or_default()))
        .collect();
    registry.progress = dom::query_all(document, PROGRESS_SELECTOR)
        .iter()
        .map(|el| (table.intern(el), dom::inline_style(el, "width")))
        .collect();

    registry.parallax = document
        .query_selector(PARALLAX_SELECTOR)
        .ok()
        .flatten()
        .map(|el| table.intern(&el));

    registry.submit_buttons = dom::query_all(document, FORM_SELECTOR)
        .iter()
        .filter_map(|form| form.query_selector(SUBMIT_BUTTON_SELECTOR).ok().flatten())
        .map(|button| table.intern(&button))
        .collect();

    registry.theme_icon = document
        .get_element_by_id(THEME_TOGGLE_ID)
        .and_then(|btn| btn.query_selector(THEME_ICON_SELECTOR).ok().flatten())
        .map(|icon| table.intern(&icon));

    log::debug!(
        "[targets] {} elements: magnetic={} ripple={} reveal={} typing={} progress={} notices={}",
        table.len(),
        registry.magnetic.len(),
        registry.ripple.len(),
        registry.reveal.len(),
        registry.typing.len(),
        registry.progress.len(),
        registry.notices.len()
    );
    (table, registry)
}
