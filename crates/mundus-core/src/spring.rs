//! Scalar smoothing primitives shared by the stroke engine.

use crate::constants::{SPRING_MAX_FRAME_MS, SPRING_SUBSTEP_MS, SPRING_TIME_SCALE};

/// Exponential moving average over a sample window.
///
/// `alpha = 2 / (window + 1)`, the classic EMA smoothing factor. Converges
/// monotonically toward a constant input, which keeps velocity-driven width
/// from flickering on jittery pointer data.
#[derive(Clone, Copy, Debug)]
pub struct Ema {
    alpha: f32,
    value: f32,
}

impl Ema {
    pub fn new(window: u32) -> Self {
        Self {
            alpha: 2.0 / (window as f32 + 1.0),
            value: 0.0,
        }
    }

    pub fn update(&mut self, sample: f32) -> f32 {
        self.value = self.value * (1.0 - self.alpha) + sample * self.alpha;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}

/// Tension/damping spring that eases the rendered stroke width toward its
/// velocity-derived target.
///
/// Integration is sub-stepped into fixed slices so the result is stable at
/// variable frame rates; the output is clamped into `[min, max]`.
#[derive(Clone, Copy, Debug)]
pub struct WidthSpring {
    min: f32,
    max: f32,
    tension: f32,
    damping: f32,
    current: f32,
    velocity: f32,
}

impl WidthSpring {
    pub fn new(min: f32, max: f32, tension: f32, damping: f32) -> Self {
        Self {
            min,
            max,
            tension,
            damping,
            current: max,
            velocity: 0.0,
        }
    }

    /// Advance the spring by `dt_ms` toward `target` and return the new width.
    pub fn update(&mut self, target: f32, dt_ms: f32) -> f32 {
        let clamped_dt = dt_ms.min(SPRING_MAX_FRAME_MS).max(0.0);
        let substeps = ((clamped_dt / SPRING_SUBSTEP_MS).round() as i32).max(1);
        let sub_dt = clamped_dt / substeps as f32;

        for _ in 0..substeps {
            let force = (target - self.current) * self.tension;
            let drag = -self.velocity * self.damping;
            self.velocity += (force + drag) * (sub_dt / SPRING_TIME_SCALE);
            self.current += self.velocity * (sub_dt / SPRING_TIME_SCALE);
        }

        self.current = self.current.clamp(self.min, self.max);
        self.current
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    /// Back to the rest configuration: maximum width, no motion.
    pub fn reset(&mut self) {
        self.current = self.max;
        self.velocity = 0.0;
    }
}
