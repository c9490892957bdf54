//! Event wiring for the two pointer-driven effects.
//!
//! Follows the same shape as the rest of the front-end: a small wiring
//! struct of shared `Rc<RefCell<..>>` state, one closure per event kind,
//! all registered through the lifecycle guard.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use web_sys as web;

use mundus_core::constants::DOUBLE_TAP_WINDOW_MS;
use mundus_core::{ContainerBounds, ScrollFx, StrokeEngine, TrailSpawner};

use crate::dom;
use crate::input;
use crate::lifecycle::Lifecycle;
use crate::sketch::SketchCanvas;
use crate::trail::DomTrailSurface;

#[derive(Clone)]
pub struct SketchWiring {
    pub engine: Rc<RefCell<StrokeEngine>>,
    pub sketch: Rc<RefCell<SketchCanvas>>,
    pub scroll_fx: Rc<RefCell<ScrollFx>>,
}

impl SketchWiring {
    fn handle_move(&self, client_x: f64, client_y: f64) {
        let sketch = self.sketch.borrow();
        let pos = input::client_to_element_px(client_x, client_y, sketch.element());
        let batch = self
            .engine
            .borrow_mut()
            .pointer_move(pos.x, pos.y, dom::now_ms());
        sketch.draw_batch(&batch);
    }

    fn handle_clear(&self) {
        if self.engine.borrow_mut().clear() {
            self.sketch.borrow().clear();
        }
    }
}

pub fn wire_sketch(lifecycle: &mut Lifecycle, w: SketchWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    // track the mount-time scroll offset so the first gate check is honest
    w.engine
        .borrow_mut()
        .set_scroll_offset(dom::scroll_y() as f32);

    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            w.handle_move(ev.client_x() as f64, ev.client_y() as f64);
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "mousemove", closure);
    }

    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            w.handle_clear();
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "mousedown", closure);
    }

    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = input::single_touch(&ev) {
                let sketch = w.sketch.borrow();
                let pos = input::client_to_element_px(
                    touch.client_x() as f64,
                    touch.client_y() as f64,
                    sketch.element(),
                );
                drop(sketch);
                w.engine
                    .borrow_mut()
                    .begin_touch(pos.x, pos.y, dom::now_ms());
            }
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "touchstart", closure);
    }

    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
            if let Some(touch) = input::single_touch(&ev) {
                w.handle_move(touch.client_x() as f64, touch.client_y() as f64);
            }
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "touchmove", closure);
    }

    {
        // double-tap clears, mirroring the desktop click
        let w = w.clone();
        let last_tap = Cell::new(0.0_f64);
        let closure = Closure::wrap(Box::new(move |_ev: web::TouchEvent| {
            let now = dom::now_ms();
            if now - last_tap.get() < DOUBLE_TAP_WINDOW_MS {
                w.handle_clear();
            }
            last_tap.set(now);
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "touchend", closure);
    }

    {
        let w = w.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            let y = dom::scroll_y();
            let (_, vh) = dom::viewport_size();
            w.engine.borrow_mut().set_scroll_offset(y as f32);
            let frame = w.scroll_fx.borrow_mut().on_scroll(y as f32, vh as f32);
            w.sketch.borrow().apply_fx(&frame);
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "scroll", closure);
    }

    {
        let w = w;
        let closure = Closure::wrap(Box::new(move |_ev: web::Event| {
            w.sketch.borrow_mut().resize();
            w.engine.borrow_mut().reset();
        }) as Box<dyn FnMut(_)>);
        lifecycle.listen(target, "resize", closure);
    }
}

#[derive(Clone)]
pub struct TrailWiring {
    pub spawner: Rc<RefCell<TrailSpawner>>,
    pub surface: Rc<RefCell<DomTrailSurface>>,
}

pub fn wire_trail(lifecycle: &mut Lifecycle, w: TrailWiring) {
    let Some(window) = web::window() else {
        return;
    };
    let target: &web::EventTarget = window.as_ref();

    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut surface = w.surface.borrow_mut();
        // recompute the rect every event so layout shifts are tolerated
        let rect = surface.container().get_bounding_client_rect();
        let bounds = ContainerBounds {
            left: rect.left() as f32,
            top: rect.top() as f32,
            width: rect.width() as f32,
            height: rect.height() as f32,
        };
        w.spawner.borrow_mut().pointer_move(
            ev.client_x() as f32,
            ev.client_y() as f32,
            dom::now_ms(),
            bounds,
            &mut *surface,
        );
    }) as Box<dyn FnMut(_)>);
    lifecycle.listen(target, "pointermove", closure);
}
