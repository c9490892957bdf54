//! Age-gate overlay: the write side of the consent collaborator.

use wasm_bindgen::closure::Closure;
use web_sys as web;

use crate::constants::{AGE_ENTER_ID, AGE_EXIT_ID, AGE_OVERLAY_ID, AGE_STORAGE_KEY, ENTERED_EVENT};
use crate::dom;
use crate::lifecycle::Lifecycle;

fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(AGE_OVERLAY_ID) {
        _ = el.class_list().add_1("hidden");
        // fallback for environments without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Wire the overlay buttons. If the session is already verified the overlay
/// is dismissed immediately and nothing else happens.
pub fn wire_age_gate(lifecycle: &mut Lifecycle, already_verified: bool) {
    let Some(document) = dom::window_document() else {
        return;
    };

    if already_verified {
        hide(&document);
        return;
    }

    if let Some(enter) = document.get_element_by_id(AGE_ENTER_ID) {
        let document = document.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            if let Some(storage) = web::window().and_then(|w| w.session_storage().ok().flatten()) {
                _ = storage.set_item(AGE_STORAGE_KEY, "true");
            }
            if let (Some(window), Ok(event)) = (web::window(), web::Event::new(ENTERED_EVENT)) {
                _ = window.dispatch_event(&event);
            }
            hide(&document);
            log::info!("[age-gate] entered");
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(enter.as_ref(), "click", closure);
    }

    if let Some(exit) = document.get_element_by_id(AGE_EXIT_ID) {
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            if let Some(window) = web::window() {
                _ = window.location().set_href(crate::constants::AGE_EXIT_URL);
            }
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(exit.as_ref(), "click", closure);
    }
}
