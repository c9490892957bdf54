//! Scroll-driven post-processing for the ink layer.

use crate::constants::{SCROLL_BLUR_SPAN_PX, SCROLL_HUE_PER_PX};

/// Style values for one scroll update, applied to the canvas as CSS
/// transform/filter. All idempotent-in-the-limit; last writer wins.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FxFrame {
    pub progress: f32,
    pub scale: f32,
    pub blur_px: f32,
    pub hue_deg: f32,
}

/// Tracks scroll position and the cumulative hue rotation.
///
/// Scale and blur follow normalized progress over one viewport height; the
/// hue accumulates with total scroll *distance* traveled, so reversing
/// direction keeps advancing it rather than unwinding.
#[derive(Clone, Copy, Debug)]
pub struct ScrollFx {
    last_y: f32,
    hue_deg: f32,
}

impl ScrollFx {
    pub fn new(initial_y: f32) -> Self {
        Self {
            last_y: initial_y,
            hue_deg: 0.0,
        }
    }

    pub fn hue_deg(&self) -> f32 {
        self.hue_deg
    }

    pub fn on_scroll(&mut self, scroll_y: f32, viewport_h: f32) -> FxFrame {
        let delta = (scroll_y - self.last_y).abs();
        self.last_y = scroll_y;
        self.hue_deg += delta * SCROLL_HUE_PER_PX;

        let progress = if viewport_h > 0.0 {
            (scroll_y / viewport_h).clamp(0.0, 1.0)
        } else {
            0.0
        };

        FxFrame {
            progress,
            scale: 1.0 + progress,
            blur_px: progress * SCROLL_BLUR_SPAN_PX,
            hue_deg: self.hue_deg,
        }
    }
}
