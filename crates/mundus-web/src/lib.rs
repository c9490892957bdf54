#![cfg(target_arch = "wasm32")]
//! WASM entry point: resolves the page's mount nodes and wires the ink
//! sketch, cocktail trail, age gate, preloader and contact form. Every
//! effect degrades to a silent no-op when its mount node is absent.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

use mundus_core::assets::COCKTAIL_IMAGES;
use mundus_core::{
    ConsentLatch, ImageDeck, ScrollFx, StrokeConfig, StrokeEngine, TrailConfig, TrailSpawner,
};

mod consent;
mod constants;
mod contact;
mod dom;
mod events;
mod input;
mod lifecycle;
mod overlay;
mod preload;
mod sketch;
mod trail;

use constants::{SKETCH_CANVAS_ID, TRAIL_CONTAINER_ID};
use lifecycle::Lifecycle;
use sketch::SketchCanvas;
use trail::DomTrailSurface;

thread_local! {
    // Keeps every listener/timer guard alive for the page's lifetime;
    // replacing it releases them all.
    static APP: RefCell<Option<Rc<RefCell<Lifecycle>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("mundus-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let lifecycle = Rc::new(RefCell::new(Lifecycle::new()));

    {
        let mut lc = lifecycle.borrow_mut();

        let verified = consent::stored_consent();
        overlay::wire_age_gate(&mut lc, verified);
        preload::start(&mut lc);
        contact::wire_contact(&mut lc);
        wire_sketch_layer(&mut lc, &document, verified);
        wire_trail_section(&mut lc, &document, &lifecycle);
    }

    APP.with(|app| *app.borrow_mut() = Some(lifecycle));
    Ok(())
}

fn wire_sketch_layer(lc: &mut Lifecycle, document: &web::Document, verified: bool) {
    let Some(canvas) = document
        .get_element_by_id(SKETCH_CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
    else {
        log::info!("[sketch] no canvas, layer disabled");
        return;
    };
    let Some(sketch) = SketchCanvas::new(canvas) else {
        log::info!("[sketch] no 2d context, layer disabled");
        return;
    };

    let engine = Rc::new(RefCell::new(StrokeEngine::new(
        StrokeConfig::default(),
        ConsentLatch::from_stored(verified),
    )));
    consent::wire_entered(lc, engine.clone());

    events::wire_sketch(
        lc,
        events::SketchWiring {
            engine,
            sketch: Rc::new(RefCell::new(sketch)),
            scroll_fx: Rc::new(RefCell::new(ScrollFx::new(dom::scroll_y() as f32))),
        },
    );
}

fn wire_trail_section(
    lc: &mut Lifecycle,
    document: &web::Document,
    lifecycle: &Rc<RefCell<Lifecycle>>,
) {
    let Some(container) = document
        .get_element_by_id(TRAIL_CONTAINER_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };

    let reduced_motion = input::prefers_reduced_motion();
    if !input::is_fine_pointer_desktop() || reduced_motion {
        trail::mount_static_fallback(&container, reduced_motion, lc);
        return;
    }

    let deck = ImageDeck::new(COCKTAIL_IMAGES.len(), js_sys::Date::now() as u64);
    let spawner = Rc::new(RefCell::new(TrailSpawner::new(TrailConfig::default(), deck)));
    let surface = Rc::new(RefCell::new(DomTrailSurface::new(
        container,
        lifecycle.clone(),
    )));

    events::wire_trail(
        lc,
        events::TrailWiring {
            spawner: spawner.clone(),
            surface: surface.clone(),
        },
    );

    // lifetime expiry runs off the frame clock, same epoch as the spawns
    dom::start_frame_loop(move |ts| {
        spawner.borrow_mut().tick(ts, &mut *surface.borrow_mut());
        true
    });
}
