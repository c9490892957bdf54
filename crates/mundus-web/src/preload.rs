//! Cocktail image preloading with an eased percent display.
//!
//! A load attempt counts as complete whether it succeeds or fails; a broken
//! asset must not wedge the overlay. The displayed number eases toward the
//! actual percentage and the overlay holds for a minimum wall time.

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::closure::Closure;
use web_sys as web;

use mundus_core::assets::{asset_url, PreloadProgress, COCKTAIL_IMAGES};

use crate::constants::{PRELOAD_COMPLETE_EVENT, PRELOAD_OVERLAY_ID, PRELOAD_PERCENT_ID};
use crate::dom;
use crate::lifecycle::Lifecycle;

pub fn start(lifecycle: &mut Lifecycle) {
    let Some(document) = dom::window_document() else {
        return;
    };
    // no overlay in the markup, nothing to account for
    let Some(overlay) = document.get_element_by_id(PRELOAD_OVERLAY_ID) else {
        return;
    };
    let percent_el = document.get_element_by_id(PRELOAD_PERCENT_ID);

    let progress = Rc::new(RefCell::new(PreloadProgress::new(COCKTAIL_IMAGES.len())));

    for image in COCKTAIL_IMAGES {
        let Ok(img) = web::HtmlImageElement::new() else {
            progress.borrow_mut().bump();
            continue;
        };
        for event in ["load", "error"] {
            let progress = progress.clone();
            let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
                progress.borrow_mut().bump();
            }) as Box<dyn FnMut(_)>);
            lifecycle.listen(img.as_ref(), event, closure);
        }
        img.set_src(&asset_url(image.file));
    }

    let started = Instant::now();
    let mut done = false;
    dom::start_frame_loop(move |_ts| {
        if done {
            return false;
        }
        let mut p = progress.borrow_mut();
        let shown = p.tick_display();
        if let Some(el) = &percent_el {
            el.set_text_content(Some(&shown.to_string()));
        }
        if p.is_ready(started.elapsed().as_millis() as f64) {
            done = true;
            _ = overlay.class_list().add_1("hidden");
            _ = overlay.set_attribute("style", "display:none");
            if let (Some(window), Ok(event)) =
                (web::window(), web::Event::new(PRELOAD_COMPLETE_EVENT))
            {
                _ = window.dispatch_event(&event);
            }
            log::info!("[preload] complete");
            return false;
        }
        true
    });
}
