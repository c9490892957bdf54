// Scroll post-processing: progress mapping and the distance-cumulative hue.

use mundus_core::ScrollFx;

#[test]
fn progress_drives_scale_and_blur_and_clamps_at_one_viewport() {
    let mut fx = ScrollFx::new(0.0);

    let frame = fx.on_scroll(500.0, 1000.0);
    assert_eq!(frame.progress, 0.5);
    assert_eq!(frame.scale, 1.5);
    assert_eq!(frame.blur_px, 3.0);

    let frame = fx.on_scroll(2500.0, 1000.0);
    assert_eq!(frame.progress, 1.0, "progress saturates past one viewport");
    assert_eq!(frame.scale, 2.0);
    assert_eq!(frame.blur_px, 6.0);
}

#[test]
fn hue_accumulates_with_distance_not_position() {
    let mut fx = ScrollFx::new(0.0);

    fx.on_scroll(400.0, 1000.0);
    let down = fx.hue_deg();
    assert_eq!(down, 200.0); // 400px * 0.5deg

    // scrolling straight back up keeps advancing the hue
    let frame = fx.on_scroll(0.0, 1000.0);
    assert_eq!(frame.hue_deg, 400.0);
    assert!(frame.hue_deg > down, "reversing must not unwind the hue");
    assert_eq!(frame.progress, 0.0, "position-driven values do revert");
}

#[test]
fn zero_viewport_height_is_a_safe_no_op() {
    let mut fx = ScrollFx::new(0.0);
    let frame = fx.on_scroll(300.0, 0.0);
    assert_eq!(frame.progress, 0.0);
    assert_eq!(frame.scale, 1.0);
}
