//! Pointer-to-sprite trail: transient cocktail cards that follow the cursor.
//!
//! The spawner is rendering-technology agnostic. It speaks to the host
//! through [`TrailSurface`] and is driven by explicit timestamps, so the
//! gating, scaling, eviction and lifetime rules all run under a headless
//! test harness exactly as they do against the DOM.

use std::collections::VecDeque;

use glam::Vec2;
use rand::prelude::*;

use crate::assets::BACKDROP_PALETTE;
use crate::constants::*;
use crate::deck::ImageDeck;

/// Opaque identity for one spawned card, issued by the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpriteHandle(pub u64);

/// Everything the surface needs to materialize one card.
#[derive(Clone, Copy, Debug)]
pub struct SpawnRequest {
    pub image_index: usize,
    /// Top-left corner, container-local css px, already clamped in-bounds.
    pub x: f32,
    pub y: f32,
    /// Final scale after the entrance tween.
    pub scale: f32,
    pub backdrop_color: Option<&'static str>,
}

/// Rendering capability the spawner drives.
///
/// `remove` must tolerate a handle whose artifact is already gone: the
/// unconditional lifetime timer and cap eviction can race, and whichever
/// fires second has to be a no-op.
pub trait TrailSurface {
    fn spawn(&mut self, req: &SpawnRequest) -> Option<SpriteHandle>;
    fn remove(&mut self, handle: SpriteHandle);
}

/// Container rectangle in client coordinates, recomputed by the caller on
/// every event so layout shifts are tolerated.
#[derive(Clone, Copy, Debug)]
pub struct ContainerBounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl ContainerBounds {
    fn contains(&self, client_x: f32, client_y: f32) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

#[derive(Clone, Copy, Debug)]
pub struct TrailConfig {
    pub distance_threshold: f32,
    pub throttle_ms: f64,
    pub max_active: usize,
    pub fade_ms: f64,
    pub removal_buffer_ms: f64,
    pub velocity_ceiling: f32,
    pub min_scale: f32,
    pub max_scale: f32,
    pub card_width: f32,
    pub card_height: f32,
    pub card_offset: f32,
    /// Cosmetic variant: give each card a random palette backdrop.
    pub colored_backdrop: bool,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            distance_threshold: TRAIL_DISTANCE_THRESHOLD,
            throttle_ms: TRAIL_THROTTLE_MS,
            max_active: TRAIL_MAX_ACTIVE,
            fade_ms: TRAIL_FADE_MS,
            removal_buffer_ms: TRAIL_REMOVAL_BUFFER_MS,
            velocity_ceiling: TRAIL_VELOCITY_CEILING,
            min_scale: TRAIL_MIN_SCALE,
            max_scale: TRAIL_MAX_SCALE,
            card_width: TRAIL_CARD_WIDTH,
            card_height: TRAIL_CARD_HEIGHT,
            card_offset: TRAIL_CARD_OFFSET,
            colored_backdrop: false,
        }
    }
}

struct ActiveSprite {
    handle: SpriteHandle,
    expires_at: f64,
}

pub struct TrailSpawner {
    cfg: TrailConfig,
    deck: ImageDeck,
    last_spawn: Option<(Vec2, f64)>,
    active: VecDeque<ActiveSprite>,
}

impl TrailSpawner {
    pub fn new(cfg: TrailConfig, deck: ImageDeck) -> Self {
        Self {
            cfg,
            deck,
            last_spawn: None,
            active: VecDeque::new(),
        }
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    pub fn config(&self) -> &TrailConfig {
        &self.cfg
    }

    /// One raw pointer-move in client coordinates. Returns the handle of the
    /// card spawned by this event, if any gate let it through.
    pub fn pointer_move<S: TrailSurface>(
        &mut self,
        client_x: f32,
        client_y: f32,
        now_ms: f64,
        bounds: ContainerBounds,
        surface: &mut S,
    ) -> Option<SpriteHandle> {
        if !bounds.contains(client_x, client_y) {
            return None;
        }
        let local = Vec2::new(client_x - bounds.left, client_y - bounds.top);

        // Both gates measure from the last *accepted* spawn, decoupling
        // spawn density from raw event frequency.
        let velocity = match self.last_spawn {
            Some((prev, t)) => {
                if now_ms - t < self.cfg.throttle_ms {
                    return None;
                }
                let dist = prev.distance(local);
                if dist < self.cfg.distance_threshold {
                    return None;
                }
                dist / (now_ms - t).max(1.0) as f32
            }
            None => 0.0,
        };
        self.last_spawn = Some((local, now_ms));

        let norm = velocity.clamp(0.0, self.cfg.velocity_ceiling) / self.cfg.velocity_ceiling;
        let scale = self.cfg.min_scale + norm * (self.cfg.max_scale - self.cfg.min_scale);

        let image_index = self.deck.next();
        let backdrop_color = if self.cfg.colored_backdrop {
            BACKDROP_PALETTE.choose(self.deck.rng_mut()).copied()
        } else {
            None
        };

        // Center on the pointer, nudge, then keep the card fully visible.
        let max_x = (bounds.width - self.cfg.card_width).max(0.0);
        let max_y = (bounds.height - self.cfg.card_height).max(0.0);
        let x = (local.x - self.cfg.card_width / 2.0 + self.cfg.card_offset).clamp(0.0, max_x);
        let y = (local.y - self.cfg.card_height / 2.0 + self.cfg.card_offset).clamp(0.0, max_y);

        let req = SpawnRequest {
            image_index,
            x,
            y,
            scale,
            backdrop_color,
        };
        let handle = surface.spawn(&req)?;

        self.active.push_back(ActiveSprite {
            handle,
            expires_at: now_ms + self.cfg.fade_ms + self.cfg.removal_buffer_ms,
        });

        // FIFO eviction keeps the cap an invariant at operation boundaries.
        while self.active.len() > self.cfg.max_active {
            if let Some(oldest) = self.active.pop_front() {
                log::debug!("[trail] cap eviction of {:?}", oldest.handle);
                surface.remove(oldest.handle);
            }
        }

        Some(handle)
    }

    /// Remove instances whose unconditional lifetime elapsed. Expiry times
    /// are monotone in spawn order, so draining from the front suffices.
    pub fn tick<S: TrailSurface>(&mut self, now_ms: f64, surface: &mut S) {
        while self
            .active
            .front()
            .is_some_and(|sprite| sprite.expires_at <= now_ms)
        {
            if let Some(sprite) = self.active.pop_front() {
                surface.remove(sprite.handle);
            }
        }
    }

    /// Teardown: detach every live card so no scheduled callback fires
    /// against a disposed surface.
    pub fn clear_all<S: TrailSurface>(&mut self, surface: &mut S) {
        while let Some(sprite) = self.active.pop_front() {
            surface.remove(sprite.handle);
        }
    }
}

/// Coarse-pointer / reduced-motion path: one static image, tap to advance.
/// No timers, no spawning, no physics.
#[derive(Clone, Copy, Debug)]
pub struct StaticFallback {
    index: usize,
    len: usize,
    reduced_motion: bool,
}

impl StaticFallback {
    pub fn new(len: usize, reduced_motion: bool) -> Self {
        Self {
            index: 0,
            len,
            reduced_motion,
        }
    }

    pub fn current(&self) -> usize {
        self.index
    }

    /// Advance to the next image (sequential, wraps). Inert under reduced
    /// motion, where the image stays fixed.
    pub fn advance(&mut self) -> usize {
        if !self.reduced_motion && self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }
}
