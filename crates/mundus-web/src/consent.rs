//! Read side of the session consent gate.
//!
//! The age-gate overlay owns the stored flag; the drawing layer only reads
//! it once at mount and subscribes to the "entered" notification. The latch
//! never un-sets, even if storage is cleared mid-session.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys as web;

use mundus_core::StrokeEngine;

use crate::constants::{AGE_STORAGE_KEY, ENTERED_EVENT};
use crate::lifecycle::Lifecycle;

pub fn stored_consent() -> bool {
    web::window()
        .and_then(|w| w.session_storage().ok().flatten())
        .and_then(|s| s.get_item(AGE_STORAGE_KEY).ok().flatten())
        .map(|v| v == "true")
        .unwrap_or(false)
}

/// Subscribe once for the runtime "entered" event and latch the engine.
pub fn wire_entered(lifecycle: &mut Lifecycle, engine: Rc<RefCell<StrokeEngine>>) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
        engine.borrow_mut().grant_consent();
        log::info!("[consent] drawing enabled");
    }) as Box<dyn FnMut(_)>);
    lifecycle.listen(window.as_ref(), ENTERED_EVENT, closure);
}
