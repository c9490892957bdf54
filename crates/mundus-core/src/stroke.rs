//! Pointer-to-stroke engine: turns raw pointer movement into batches of
//! variable-width ink stamps.
//!
//! The engine holds no rendering state beyond the point buffer; every
//! qualifying move returns the stamps the surface should rasterize, so the
//! same code runs under a browser canvas or a headless test harness feeding
//! synthetic timestamps.

use glam::Vec2;

use crate::consent::ConsentLatch;
use crate::constants::*;
use crate::spline::{sample_segment, Stamp, StampBatch};
use crate::spring::{Ema, WidthSpring};

/// One sampled location along the current stroke with its render width.
#[derive(Clone, Copy, Debug)]
pub struct StrokePoint {
    pub pos: Vec2,
    pub width: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct StrokeConfig {
    pub min_width: f32,
    pub max_width: f32,
    pub velocity_ceiling: f32,
    pub smooth_window: u32,
    pub tension: f32,
    pub damping: f32,
    pub point_cap: usize,
    pub point_keep: usize,
    pub scroll_cutoff: f32,
}

impl Default for StrokeConfig {
    fn default() -> Self {
        Self {
            min_width: STROKE_MIN_WIDTH,
            max_width: STROKE_MAX_WIDTH,
            velocity_ceiling: STROKE_VELOCITY_CEILING,
            smooth_window: STROKE_SMOOTH_WINDOW,
            tension: STROKE_WIDTH_TENSION,
            damping: STROKE_WIDTH_DAMPING,
            point_cap: STROKE_POINT_CAP,
            point_keep: STROKE_POINT_KEEP,
            scroll_cutoff: STROKE_SCROLL_CUTOFF_PX,
        }
    }
}

pub struct StrokeEngine {
    cfg: StrokeConfig,
    points: Vec<StrokePoint>,
    velocity: Ema,
    spring: WidthSpring,
    last_sample: Option<(Vec2, f64)>,
    consent: ConsentLatch,
    scroll_y: f32,
}

impl StrokeEngine {
    pub fn new(cfg: StrokeConfig, consent: ConsentLatch) -> Self {
        let spring = WidthSpring::new(cfg.min_width, cfg.max_width, cfg.tension, cfg.damping);
        Self {
            cfg,
            points: Vec::new(),
            velocity: Ema::new(cfg.smooth_window),
            spring,
            last_sample: None,
            consent,
            scroll_y: 0.0,
        }
    }

    /// The user passed the age gate mid-session.
    pub fn grant_consent(&mut self) {
        self.consent.latch();
    }

    pub fn is_enabled(&self) -> bool {
        self.consent.is_enabled()
    }

    /// Latest vertical scroll offset; the ink layer is hero-only.
    pub fn set_scroll_offset(&mut self, y: f32) {
        self.scroll_y = y;
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[StrokePoint] {
        &self.points
    }

    pub fn smoothed_velocity(&self) -> f32 {
        self.velocity.value()
    }

    pub fn current_width(&self) -> f32 {
        self.spring.current()
    }

    /// Map smoothed pointer speed to a target width. Inverse and quadratic:
    /// faster movement thins the stroke, saturating at the velocity ceiling.
    fn target_width(&self, velocity: f32) -> f32 {
        let normalized = (velocity / self.cfg.velocity_ceiling).min(1.0);
        let t = normalized * normalized;
        self.cfg.max_width - t * (self.cfg.max_width - self.cfg.min_width)
    }

    /// Feed one pointer sample. Returns the stamps to rasterize: a single
    /// stamp for the first point of a fresh stroke, nothing while the spline
    /// window fills, then one batch per 4-point window.
    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) -> StampBatch {
        let mut out = StampBatch::new();
        if !self.consent.is_enabled() || self.scroll_y > self.cfg.scroll_cutoff {
            return out;
        }

        let pos = Vec2::new(x, y);
        let (dist, dt) = match self.last_sample {
            Some((prev, t)) => (prev.distance(pos), (now_ms - t) as f32),
            None => (0.0, 0.0),
        };
        self.last_sample = Some((pos, now_ms));

        let instant_velocity = if dt > 0.0 { dist / dt } else { 0.0 };
        let smoothed = self.velocity.update(instant_velocity);
        let target = self.target_width(smoothed);
        let width = self.spring.update(target, dt);

        self.points.push(StrokePoint { pos, width });

        if self.points.len() >= 4 {
            let len = self.points.len();
            let window = [
                self.points[len - 4],
                self.points[len - 3],
                self.points[len - 2],
                self.points[len - 1],
            ];
            out = sample_segment(&window);
        } else if self.points.len() == 1 {
            // Fresh stroke: no spline span exists yet, stamp the point itself.
            out.push(Stamp {
                x,
                y,
                radius: (width / 2.0).max(0.5),
            });
        }

        if self.points.len() > self.cfg.point_cap {
            let drop = self.points.len() - self.cfg.point_keep;
            self.points.drain(..drop);
        }

        out
    }

    /// Single-finger touch start: prime the sample state so the first move
    /// doesn't inherit a stale distance, and start the stroke wide.
    pub fn begin_touch(&mut self, x: f32, y: f32, now_ms: f64) {
        if !self.consent.is_enabled() || self.scroll_y > self.cfg.scroll_cutoff {
            return;
        }
        self.last_sample = Some((Vec2::new(x, y), now_ms));
        self.points.clear();
        self.velocity.reset();
        self.spring.reset();
    }

    /// Click / double-tap clear. Returns whether the surface should wipe;
    /// false when the gate suppressed the gesture.
    pub fn clear(&mut self) -> bool {
        if !self.consent.is_enabled() || self.scroll_y > self.cfg.scroll_cutoff {
            return false;
        }
        self.reset();
        true
    }

    /// Resize path: the backing buffer was recreated, so all stroke state is
    /// stale. No attempt is made to rescale existing strokes.
    pub fn reset(&mut self) {
        self.points.clear();
        self.velocity.reset();
        self.spring.reset();
        self.last_sample = None;
    }
}
