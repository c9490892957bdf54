//! DOM surface for the cocktail trail, plus the static fallback path.

use std::cell::RefCell;
use std::rc::Rc;

use fnv::FnvHashMap;
use wasm_bindgen::JsCast;
use web_sys as web;

use mundus_core::assets::{asset_url, COCKTAIL_IMAGES};
use mundus_core::constants::{TRAIL_ENTRANCE_SCALE, TRAIL_FADE_DELAY_MS, TRAIL_FADE_MS};
use mundus_core::{SpawnRequest, SpriteHandle, StaticFallback, TrailSurface};

use crate::dom;
use crate::lifecycle::Lifecycle;

/// Materializes spawn requests as absolutely-positioned `<img>` cards.
///
/// Entrance and fade are CSS transitions; the final detach is driven by the
/// spawner's expiry tick or cap eviction, whichever comes first, and the
/// handle map makes the second removal a no-op.
pub struct DomTrailSurface {
    container: web::HtmlElement,
    elements: FnvHashMap<u64, web::HtmlImageElement>,
    next_id: u64,
    lifecycle: Rc<RefCell<Lifecycle>>,
}

impl DomTrailSurface {
    pub fn new(container: web::HtmlElement, lifecycle: Rc<RefCell<Lifecycle>>) -> Self {
        Self {
            container,
            elements: FnvHashMap::default(),
            next_id: 0,
            lifecycle,
        }
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    fn build_card(&self, req: &SpawnRequest) -> Option<web::HtmlImageElement> {
        let document = dom::window_document()?;
        let image = COCKTAIL_IMAGES.get(req.image_index)?;
        let img: web::HtmlImageElement =
            document.create_element("img").ok()?.dyn_into().ok()?;
        img.set_src(&asset_url(image.file));
        img.set_alt(image.name);

        let style = img.style();
        _ = style.set_property("position", "absolute");
        _ = style.set_property("left", "0");
        _ = style.set_property("top", "0");
        _ = style.set_property("width", "200px");
        _ = style.set_property("height", "auto");
        _ = style.set_property("aspect-ratio", "2/3");
        _ = style.set_property("object-fit", "cover");
        _ = style.set_property("pointer-events", "none");
        _ = style.set_property("z-index", "10");
        _ = style.set_property("border-radius", "8px");
        _ = style.set_property(
            "box-shadow",
            "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 10px 10px -5px rgba(0, 0, 0, 0.04)",
        );
        if let Some(color) = req.backdrop_color {
            _ = style.set_property("background-color", color);
        }
        _ = style.set_property("opacity", "1");
        _ = style.set_property(
            "transition",
            &format!(
                "transform 0.6s cubic-bezier(0.16, 1, 0.3, 1), opacity {TRAIL_FADE_MS}ms ease-out"
            ),
        );
        _ = style.set_property(
            "transform",
            &format!(
                "translate3d({}px, {}px, 0) scale({})",
                req.x,
                req.y,
                req.scale * TRAIL_ENTRANCE_SCALE
            ),
        );
        Some(img)
    }
}

impl TrailSurface for DomTrailSurface {
    fn spawn(&mut self, req: &SpawnRequest) -> Option<SpriteHandle> {
        let img = self.build_card(req)?;
        self.container.append_child(&img).ok()?;

        let id = self.next_id;
        self.next_id += 1;
        self.elements.insert(id, img.clone());

        // Entrance tween on the next frame, fade-out shortly after. Both
        // check liveness: the card may already be gone by cap eviction.
        let final_transform =
            format!("translate3d({}px, {}px, 0) scale({})", req.x, req.y, req.scale);
        let img_enter = img.clone();
        dom::raf_once(move || {
            if img_enter.parent_node().is_some() {
                _ = img_enter.style().set_property("transform", &final_transform);
            }
        });
        let img_fade = img;
        self.lifecycle
            .borrow_mut()
            .timeout(TRAIL_FADE_DELAY_MS as i32, move || {
                if img_fade.parent_node().is_some() {
                    _ = img_fade.style().set_property("opacity", "0");
                }
            });

        Some(SpriteHandle(id))
    }

    fn remove(&mut self, handle: SpriteHandle) {
        if let Some(img) = self.elements.remove(&handle.0) {
            img.remove();
        }
    }
}

/// Coarse-pointer / reduced-motion path: a single centered image, advanced
/// on tap. No timers, no spawning.
pub fn mount_static_fallback(
    container: &web::HtmlElement,
    reduced_motion: bool,
    lifecycle: &mut Lifecycle,
) {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Ok(el) = document.create_element("img") else {
        return;
    };
    let Ok(img) = el.dyn_into::<web::HtmlImageElement>() else {
        return;
    };

    let fallback = Rc::new(RefCell::new(StaticFallback::new(
        COCKTAIL_IMAGES.len(),
        reduced_motion,
    )));
    let show = {
        let img = img.clone();
        move |index: usize| {
            if let Some(image) = COCKTAIL_IMAGES.get(index) {
                img.set_src(&asset_url(image.file));
                img.set_alt(image.name);
            }
        }
    };
    show(fallback.borrow().current());

    let style = img.style();
    _ = style.set_property("width", "256px");
    _ = style.set_property("height", "auto");
    _ = style.set_property("aspect-ratio", "2/3");
    _ = style.set_property("object-fit", "cover");
    _ = style.set_property("margin", "auto");
    _ = style.set_property("border-radius", "8px");
    if container.append_child(&img).is_err() {
        return;
    }

    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::Event| {
        let index = fallback.borrow_mut().advance();
        show(index);
    }) as Box<dyn FnMut(web::Event)>);
    lifecycle.listen(container, "click", closure);
}
