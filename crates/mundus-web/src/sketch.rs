//! Canvas-2D rasterization for the ink stroke layer.

use wasm_bindgen::JsCast;
use web_sys as web;

use mundus_core::assets::{STROKE_COLOR, STROKE_GLOW_BLUR, STROKE_GLOW_COLOR};
use mundus_core::{FxFrame, Stamp};

use crate::constants::SKETCH_FX_TRANSITION;
use crate::dom;

pub struct SketchCanvas {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    dpr: f64,
}

impl SketchCanvas {
    /// Missing context means the whole layer is a cosmetic no-op; the caller
    /// simply skips wiring it.
    pub fn new(canvas: web::HtmlCanvasElement) -> Option<Self> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .ok()?;
        _ = canvas
            .style()
            .set_property("transition", SKETCH_FX_TRANSITION);
        let mut sketch = Self {
            canvas,
            ctx,
            dpr: 1.0,
        };
        sketch.resize();
        Some(sketch)
    }

    /// Recompute the DPR-scaled backing buffer to fill the viewport. Wipes
    /// everything; existing strokes are not rescaled.
    pub fn resize(&mut self) {
        let Some(window) = web::window() else {
            return;
        };
        self.dpr = window.device_pixel_ratio().max(1.0);
        let (w, h) = dom::viewport_size();
        self.canvas.set_width((w * self.dpr) as u32);
        self.canvas.set_height((h * self.dpr) as u32);
        let style = self.canvas.style();
        _ = style.set_property("width", &format!("{w}px"));
        _ = style.set_property("height", &format!("{h}px"));
        _ = self
            .ctx
            .set_transform(self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0);
    }

    /// Stamp a batch as one filled path so the glow shadow is paid once.
    pub fn draw_batch(&self, stamps: &[Stamp]) {
        if stamps.is_empty() {
            return;
        }
        self.ctx.set_shadow_color(STROKE_GLOW_COLOR);
        self.ctx.set_shadow_blur(STROKE_GLOW_BLUR);
        self.ctx.set_fill_style_str(STROKE_COLOR);

        self.ctx.begin_path();
        for stamp in stamps {
            let (x, y, r) = (stamp.x as f64, stamp.y as f64, stamp.radius as f64);
            self.ctx.move_to(x + r, y);
            _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
        }
        self.ctx.fill();

        self.ctx.set_shadow_color("transparent");
        self.ctx.set_shadow_blur(0.0);
    }

    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            self.canvas.width() as f64 / self.dpr,
            self.canvas.height() as f64 / self.dpr,
        );
    }

    /// Apply a scroll frame as CSS transform/filter; the transition property
    /// set at construction eases between writes.
    pub fn apply_fx(&self, fx: &FxFrame) {
        let style = self.canvas.style();
        _ = style.set_property("transform", &format!("scale({})", fx.scale));
        _ = style.set_property(
            "filter",
            &format!("blur({}px) hue-rotate({}deg)", fx.blur_px, fx.hue_deg),
        );
    }

    pub fn element(&self) -> &web::HtmlCanvasElement {
        &self.canvas
    }
}
