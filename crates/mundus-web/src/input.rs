use glam::Vec2;
use web_sys as web;

use crate::constants::DESKTOP_MIN_WIDTH;
use crate::dom;

/// Client coordinates -> css-pixel position on the element. The sketch
/// context carries the device-pixel-ratio transform, so css px is the
/// drawing space.
#[inline]
pub fn client_to_element_px(client_x: f64, client_y: f64, el: &web::Element) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

#[inline]
fn media_matches(query: &str) -> bool {
    web::window()
        .and_then(|w| w.match_media(query).ok())
        .flatten()
        .map(|m| m.matches())
        .unwrap_or(false)
}

/// Fine pointer on a desktop-sized viewport: the animated pipelines run.
pub fn is_fine_pointer_desktop() -> bool {
    let (width, _) = dom::viewport_size();
    media_matches("(pointer: fine)") && width >= DESKTOP_MIN_WIDTH
}

pub fn prefers_reduced_motion() -> bool {
    media_matches("(prefers-reduced-motion: reduce)")
}

/// The single touch of a one-finger gesture, if that is what this is.
pub fn single_touch(ev: &web::TouchEvent) -> Option<web::Touch> {
    let touches = ev.touches();
    if touches.length() == 1 {
        touches.item(0)
    } else {
        None
    }
}
