// Host-side tests for the trail spawner: gating, cap eviction, bounds
// clamping and lifetime expiry against a recording surface.

use mundus_core::{
    ContainerBounds, ImageDeck, SpawnRequest, SpriteHandle, StaticFallback, TrailConfig,
    TrailSpawner, TrailSurface,
};

/// Surface that records every spawn and removal instead of rendering.
#[derive(Default)]
struct RecordingSurface {
    next_id: u64,
    spawns: Vec<(SpriteHandle, SpawnRequest)>,
    removals: Vec<SpriteHandle>,
}

impl TrailSurface for RecordingSurface {
    fn spawn(&mut self, req: &SpawnRequest) -> Option<SpriteHandle> {
        let handle = SpriteHandle(self.next_id);
        self.next_id += 1;
        self.spawns.push((handle, *req));
        Some(handle)
    }

    fn remove(&mut self, handle: SpriteHandle) {
        self.removals.push(handle);
    }
}

fn wide_bounds() -> ContainerBounds {
    ContainerBounds {
        left: 0.0,
        top: 0.0,
        width: 1000.0,
        height: 940.0,
    }
}

fn spawner_with(cfg: TrailConfig) -> TrailSpawner {
    let deck = ImageDeck::new(14, 7);
    TrailSpawner::new(cfg, deck)
}

#[test]
fn events_outside_the_container_are_ignored() {
    let mut spawner = spawner_with(TrailConfig::default());
    let mut surface = RecordingSurface::default();

    let spawned = spawner.pointer_move(1500.0, 100.0, 100.0, wide_bounds(), &mut surface);
    assert!(spawned.is_none());
    assert!(surface.spawns.is_empty());
    assert_eq!(spawner.active_count(), 0);
}

#[test]
fn throttle_and_distance_gates_suppress_dense_events() {
    let mut spawner = spawner_with(TrailConfig::default());
    let mut surface = RecordingSurface::default();
    let bounds = wide_bounds();

    // first in-bounds event has no prior spawn to gate against
    assert!(spawner
        .pointer_move(100.0, 100.0, 100.0, bounds, &mut surface)
        .is_some());

    // too soon (5ms < 15ms throttle)
    assert!(spawner
        .pointer_move(200.0, 100.0, 105.0, bounds, &mut surface)
        .is_none());

    // far enough in time, but only 5px of travel (< 30px threshold)
    assert!(spawner
        .pointer_move(105.0, 100.0, 130.0, bounds, &mut surface)
        .is_none());

    // clears both gates: exactly one more spawn
    assert!(spawner
        .pointer_move(140.0, 100.0, 146.0, bounds, &mut surface)
        .is_some());

    assert_eq!(surface.spawns.len(), 2);
}

#[test]
fn velocity_maps_to_scale_within_the_configured_range() {
    let cfg = TrailConfig::default();
    let mut spawner = spawner_with(cfg);
    let mut surface = RecordingSurface::default();
    let bounds = wide_bounds();

    // first spawn has no velocity history: minimum scale
    spawner.pointer_move(500.0, 500.0, 0.0, bounds, &mut surface);
    assert_eq!(surface.spawns[0].1.scale, cfg.min_scale);

    // 400px in 20ms = 20 px/ms, far past the 4 px/ms ceiling: max scale
    spawner.pointer_move(900.0, 500.0, 20.0, bounds, &mut surface);
    assert_eq!(surface.spawns[1].1.scale, cfg.max_scale);

    // 40px in 40ms = 1 px/ms: a quarter of the way up the range
    spawner.pointer_move(860.0, 500.0, 60.0, bounds, &mut surface);
    let expected = cfg.min_scale + 0.25 * (cfg.max_scale - cfg.min_scale);
    assert!((surface.spawns[2].1.scale - expected).abs() < 1e-4);
}

#[test]
fn spawn_positions_clamp_fully_inside_the_container() {
    let cfg = TrailConfig::default();
    let bounds = wide_bounds();
    let corners = [
        (0.0_f32, 0.0_f32),
        (bounds.width, 0.0),
        (0.0, bounds.height),
        (bounds.width, bounds.height),
        (500.0, 470.0),
    ];

    for (x, y) in corners {
        // fresh spawner per case so the gates cannot interfere
        let mut spawner = spawner_with(cfg);
        let mut surface = RecordingSurface::default();
        spawner.pointer_move(x, y, 0.0, bounds, &mut surface);

        let req = surface.spawns[0].1;
        assert!(req.x >= 0.0 && req.x <= bounds.width - cfg.card_width);
        assert!(req.y >= 0.0 && req.y <= bounds.height - cfg.card_height);
    }
}

#[test]
fn cap_evicts_oldest_first_and_count_never_exceeds_it() {
    // cap 3, fade 1000ms; five qualifying spawns 50ms apart
    let cfg = TrailConfig {
        max_active: 3,
        fade_ms: 1000.0,
        ..TrailConfig::default()
    };
    let mut spawner = spawner_with(cfg);
    let mut surface = RecordingSurface::default();
    let bounds = wide_bounds();

    let mut peak = 0;
    for i in 0..5u32 {
        let x = 100.0 + i as f32 * 100.0;
        let t = i as f64 * 50.0;
        let spawned = spawner.pointer_move(x, 400.0, t, bounds, &mut surface);
        assert!(spawned.is_some(), "spawn {i} should clear the gates");
        peak = peak.max(spawner.active_count());
    }

    assert_eq!(peak, 3, "active count peaks at the cap");
    // spawns #1 and #2 were cap-evicted long before their fade timers
    assert_eq!(surface.removals, vec![SpriteHandle(0), SpriteHandle(1)]);

    // their natural expiry is a no-op: tick only removes the survivors
    spawner.tick(10_000.0, &mut surface);
    assert_eq!(spawner.active_count(), 0);
    assert_eq!(
        surface.removals,
        vec![
            SpriteHandle(0),
            SpriteHandle(1),
            SpriteHandle(2),
            SpriteHandle(3),
            SpriteHandle(4),
        ],
        "every instance is removed exactly once"
    );
}

#[test]
fn tick_expires_instances_after_fade_plus_buffer() {
    let cfg = TrailConfig::default(); // fade 1500 + 200 buffer
    let mut spawner = spawner_with(cfg);
    let mut surface = RecordingSurface::default();
    let bounds = wide_bounds();

    spawner.pointer_move(100.0, 100.0, 0.0, bounds, &mut surface);
    spawner.pointer_move(200.0, 100.0, 500.0, bounds, &mut surface);
    assert_eq!(spawner.active_count(), 2);

    spawner.tick(1699.0, &mut surface);
    assert_eq!(spawner.active_count(), 2, "nothing expires early");

    spawner.tick(1700.0, &mut surface);
    assert_eq!(spawner.active_count(), 1, "first instance expired");
    assert_eq!(surface.removals, vec![SpriteHandle(0)]);

    spawner.tick(2200.0, &mut surface);
    assert_eq!(spawner.active_count(), 0);
}

#[test]
fn clear_all_detaches_every_live_instance() {
    let mut spawner = spawner_with(TrailConfig::default());
    let mut surface = RecordingSurface::default();
    let bounds = wide_bounds();

    for i in 0..3u32 {
        spawner.pointer_move(100.0 + i as f32 * 100.0, 100.0, i as f64 * 50.0, bounds, &mut surface);
    }
    spawner.clear_all(&mut surface);
    assert_eq!(spawner.active_count(), 0);
    assert_eq!(surface.removals.len(), 3);
}

#[test]
fn colored_backdrop_variant_assigns_palette_colors() {
    let cfg = TrailConfig {
        colored_backdrop: true,
        ..TrailConfig::default()
    };
    let mut spawner = spawner_with(cfg);
    let mut surface = RecordingSurface::default();
    spawner.pointer_move(500.0, 500.0, 0.0, wide_bounds(), &mut surface);
    let color = surface.spawns[0].1.backdrop_color;
    assert!(color.is_some());
    assert!(mundus_core::assets::BACKDROP_PALETTE.contains(&color.unwrap()));

    // and stays off by default
    let mut plain = spawner_with(TrailConfig::default());
    let mut surface2 = RecordingSurface::default();
    plain.pointer_move(500.0, 500.0, 0.0, wide_bounds(), &mut surface2);
    assert!(surface2.spawns[0].1.backdrop_color.is_none());
}

#[test]
fn static_fallback_advances_sequentially_and_wraps() {
    let mut fallback = StaticFallback::new(3, false);
    assert_eq!(fallback.current(), 0);
    assert_eq!(fallback.advance(), 1);
    assert_eq!(fallback.advance(), 2);
    assert_eq!(fallback.advance(), 0, "wraps past the end of the deck");
}

#[test]
fn static_fallback_is_inert_under_reduced_motion() {
    let mut fallback = StaticFallback::new(3, true);
    assert_eq!(fallback.advance(), 0);
    assert_eq!(fallback.advance(), 0);
}
