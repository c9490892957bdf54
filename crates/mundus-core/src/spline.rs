//! Catmull-Rom interpolation of pointer samples into stamp batches.

use smallvec::SmallVec;

use crate::constants::{STROKE_MIN_SEGMENT_LEN, STROKE_STAMP_SPACING};
use crate::stroke::StrokePoint;

/// One filled circle along the stroke path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stamp {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// Per-event batch of stamps; rendered as a single path fill so the glow
/// shadow is applied once per segment.
pub type StampBatch = SmallVec<[Stamp; 16]>;

/// Centripetal-free Catmull-Rom basis through p1..p2 with p0/p3 as tangents.
#[inline]
pub fn catmull_rom(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    0.5 * (2.0 * p1
        + (-p0 + p2) * t
        + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
        + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Sample the middle span (p1 -> p2) of a 4-point window.
///
/// Step count grows with segment length and shrinks with average width:
/// thin fast strokes stamp densely to avoid gaps, thick slow ones coarsely.
/// Spans shorter than half a pixel produce nothing.
pub fn sample_segment(window: &[StrokePoint; 4]) -> StampBatch {
    let [p0, p1, p2, p3] = window;
    let mut out = StampBatch::new();

    let dx = p2.pos.x - p1.pos.x;
    let dy = p2.pos.y - p1.pos.y;
    let segment_len = (dx * dx + dy * dy).sqrt();
    if segment_len < STROKE_MIN_SEGMENT_LEN {
        return out;
    }

    let avg_width = (p1.width + p2.width) / 2.0;
    let step_size = (avg_width * STROKE_STAMP_SPACING).max(0.5);
    let steps = ((segment_len / step_size).ceil() as usize).max(2);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        let x = catmull_rom(p0.pos.x, p1.pos.x, p2.pos.x, p3.pos.x, t);
        let y = catmull_rom(p0.pos.y, p1.pos.y, p2.pos.y, p3.pos.y, t);
        let w = p1.width + (p2.width - p1.width) * t;
        out.push(Stamp {
            x,
            y,
            radius: (w / 2.0).max(0.5),
        });
    }
    out
}
