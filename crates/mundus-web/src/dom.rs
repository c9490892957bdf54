use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

#[inline]
pub fn viewport_size() -> (f64, f64) {
    let w = web::window();
    let width = w
        .as_ref()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = w
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// One-shot animation-frame callback; ownership moves to the JS side so the
/// closure is reclaimed after it fires.
pub fn raf_once(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Self-rescheduling animation-frame loop. The callback receives the frame
/// timestamp and keeps the loop alive by returning `true`.
pub fn start_frame_loop(mut f: impl FnMut(f64) -> bool + 'static) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if !f(ts) {
            return;
        }
        if let Some(w) = web::window() {
            if let Some(cb) = tick_clone.borrow().as_ref() {
                _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = web::window() {
        if let Some(cb) = tick.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
