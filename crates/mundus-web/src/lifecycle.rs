//! Scoped ownership of event listeners and pending timeouts.
//!
//! Every listener and timer an effect registers goes through a [`Lifecycle`]
//! guard; `release()` unregisters and cancels the lot, and runs again on
//! drop. Callbacks that may still be in flight when the owner goes away must
//! check their target's liveness before acting.

use std::any::Any;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ListenerGuard {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    // Keeps the Rust closure alive while the listener is registered.
    _closure: Box<dyn Any>,
}

#[derive(Default)]
pub struct Lifecycle {
    listeners: Vec<ListenerGuard>,
    timers: Vec<i32>,
    timer_closures: Vec<Box<dyn Any>>,
}

impl Lifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `closure` as a listener for `event` on `target`, keeping both
    /// registered until release.
    pub fn listen<T: ?Sized + 'static>(
        &mut self,
        target: &web::EventTarget,
        event: &'static str,
        closure: Closure<T>,
    ) {
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        _ = target.add_event_listener_with_callback(event, &callback);
        self.listeners.push(ListenerGuard {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        });
    }

    /// Schedule a one-shot timeout owned by this lifecycle.
    pub fn timeout(&mut self, ms: i32, f: impl FnOnce() + 'static) {
        let Some(window) = web::window() else {
            return;
        };
        let closure = Closure::once(f);
        if let Ok(id) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            ms,
        ) {
            self.timers.push(id);
            self.timer_closures.push(Box::new(closure));
        }
    }

    /// Unregister every listener and cancel every pending timeout. Safe to
    /// call more than once.
    pub fn release(&mut self) {
        if let Some(window) = web::window() {
            for id in self.timers.drain(..) {
                window.clear_timeout_with_handle(id);
            }
        }
        self.timer_closures.clear();
        for guard in self.listeners.drain(..) {
            _ = guard
                .target
                .remove_event_listener_with_callback(guard.event, &guard.callback);
        }
    }
}

impl Drop for Lifecycle {
    fn drop(&mut self) {
        self.release();
    }
}
