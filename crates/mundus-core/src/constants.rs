/// Interaction tuning constants for the sketch and trail effects.
///
/// These constants express intended behavior (thresholds, clamp limits,
/// spring coefficients) and keep magic numbers out of the code.
// Stroke width bounds (css px)
pub const STROKE_MIN_WIDTH: f32 = 1.5;
pub const STROKE_MAX_WIDTH: f32 = 152.0;

// Pointer speed at which the stroke saturates at its thinnest (px per ms)
pub const STROKE_VELOCITY_CEILING: f32 = 1.8;

// Exponential moving average window for pointer speed (samples)
pub const STROKE_SMOOTH_WINDOW: u32 = 7;

// Width spring coefficients
pub const STROKE_WIDTH_TENSION: f32 = 0.1;
pub const STROKE_WIDTH_DAMPING: f32 = 0.72;

// Spring integration: clamp a frame to this many ms, sub-step in slices
pub const SPRING_MAX_FRAME_MS: f32 = 64.0;
pub const SPRING_SUBSTEP_MS: f32 = 8.0;
pub const SPRING_TIME_SCALE: f32 = 16.0;

// Spline stamp density: spacing as a fraction of local stroke width
pub const STROKE_STAMP_SPACING: f32 = 0.2;

// Segments shorter than this render nothing (px)
pub const STROKE_MIN_SEGMENT_LEN: f32 = 0.5;

// Point buffer: trim from the front once past the cap
pub const STROKE_POINT_CAP: usize = 50;
pub const STROKE_POINT_KEEP: usize = 30;

// The ink layer is hero-only; ignore pointer input past this scroll offset
pub const STROKE_SCROLL_CUTOFF_PX: f32 = 100.0;

// Scroll post-processing over one viewport height of progress
pub const SCROLL_BLUR_SPAN_PX: f32 = 6.0;
pub const SCROLL_HUE_PER_PX: f32 = 0.5;

// Double-tap window for the touch clear gesture (ms)
pub const DOUBLE_TAP_WINDOW_MS: f64 = 350.0;

// Trail spawn gates
pub const TRAIL_DISTANCE_THRESHOLD: f32 = 30.0; // px since last accepted spawn
pub const TRAIL_THROTTLE_MS: f64 = 15.0; // ms since last accepted spawn

// Trail capacity and lifetime
pub const TRAIL_MAX_ACTIVE: usize = 50;
pub const TRAIL_FADE_MS: f64 = 1500.0;
pub const TRAIL_REMOVAL_BUFFER_MS: f64 = 200.0;
pub const TRAIL_FADE_DELAY_MS: f64 = 300.0;

// Velocity -> card scale mapping
pub const TRAIL_VELOCITY_CEILING: f32 = 4.0; // px per ms
pub const TRAIL_MIN_SCALE: f32 = 0.8;
pub const TRAIL_MAX_SCALE: f32 = 1.5;
pub const TRAIL_ENTRANCE_SCALE: f32 = 0.9; // of target, before the entrance tween

// Card geometry (css px); 2:3 poster aspect, nudged off the cursor
pub const TRAIL_CARD_WIDTH: f32 = 200.0;
pub const TRAIL_CARD_HEIGHT: f32 = 300.0;
pub const TRAIL_CARD_OFFSET: f32 = 20.0;

// Preloader pacing
pub const PRELOAD_MIN_DISPLAY_MS: f64 = 1800.0;
pub const PRELOAD_DISPLAY_EASE: f32 = 0.08;
pub const PRELOAD_SNAP_EPSILON: f32 = 0.5;
