//! Static asset manifest and preload accounting.
//!
//! The manifest is configuration, not algorithm: the deck and the preloader
//! both index into it, and the stroke renderer takes its ink colors from
//! here.

use crate::constants::{PRELOAD_DISPLAY_EASE, PRELOAD_MIN_DISPLAY_MS, PRELOAD_SNAP_EPSILON};

/// Gold ink for the sketch layer.
pub const STROKE_COLOR: &str = "#d4af37";
pub const STROKE_GLOW_COLOR: &str = "rgba(212, 175, 55, 0.25)";
pub const STROKE_GLOW_BLUR: f64 = 10.0;

pub const COCKTAIL_PATH_PREFIX: &str = "/cocktail-images/";

#[derive(Clone, Copy, Debug)]
pub struct CocktailImage {
    pub name: &'static str,
    pub file: &'static str,
    pub color: &'static str,
}

/// Colored-background loop followed by the transparent loop.
pub const COCKTAIL_IMAGES: &[CocktailImage] = &[
    CocktailImage { name: "Red", file: "COLOREDBG-COCKTAIL-1.png", color: "#EF4444" },
    CocktailImage { name: "Orange", file: "COLOREDBG-COCKTAIL-2.png", color: "#F97316" },
    CocktailImage { name: "Yellow", file: "COLOREDBG-COCKTAIL-3.png", color: "#EAB308" },
    CocktailImage { name: "Green", file: "COLOREDBG-COCKTAIL-4.png", color: "#22C55E" },
    CocktailImage { name: "Light Blue", file: "COLOREDBG-COCKTAIL-5.png", color: "#0EA5E9" },
    CocktailImage { name: "Dark Blue", file: "COLOREDBG-COCKTAIL-6.png", color: "#1E3A8A" },
    CocktailImage { name: "Purple", file: "COLOREDBG-COCKTAIL-7.png", color: "#A855F7" },
    CocktailImage { name: "Red NoBg", file: "NOBG-COCKTAIL-1.png", color: "#EF4444" },
    CocktailImage { name: "Orange NoBg", file: "NOBG-COCKTAIL-2.png", color: "#F97316" },
    CocktailImage { name: "Yellow NoBg", file: "NOBG-COCKTAIL-3.png", color: "#EAB308" },
    CocktailImage { name: "Green NoBg", file: "NOBG-COCKTAIL-4.png", color: "#22C55E" },
    CocktailImage { name: "Light Blue NoBg", file: "NOBG-COCKTAIL-5.png", color: "#0EA5E9" },
    CocktailImage { name: "Dark Blue NoBg", file: "NOBG-COCKTAIL-6.png", color: "#1E3A8A" },
    CocktailImage { name: "Purple NoBg", file: "NOBG-COCKTAIL-7.png", color: "#A855F7" },
];

/// Backdrop palette for the colored-background trail variant.
pub const BACKDROP_PALETTE: &[&str] = &[
    "#EF4444", "#F97316", "#EAB308", "#22C55E", "#0EA5E9", "#1E3A8A", "#A855F7",
];

pub fn asset_url(file: &str) -> String {
    format!("{COCKTAIL_PATH_PREFIX}{file}")
}

/// Preload bookkeeping shared by the loading overlay.
///
/// A load attempt completes regardless of outcome: a broken asset must not
/// wedge the progress counter short of 100. The displayed percent eases
/// toward the actual one and snaps once it is close, and the overlay holds
/// for a minimum wall time even on a warm cache.
#[derive(Clone, Copy, Debug)]
pub struct PreloadProgress {
    total: usize,
    completed: usize,
    display: f32,
}

impl PreloadProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            completed: 0,
            display: 0.0,
        }
    }

    /// One asset finished loading, successfully or not.
    pub fn bump(&mut self) {
        self.completed = (self.completed + 1).min(self.total);
    }

    pub fn actual_percent(&self) -> f32 {
        if self.total == 0 {
            return 100.0;
        }
        (self.completed as f32 / self.total as f32 * 100.0).round()
    }

    /// Ease the displayed percent one step toward the actual and return it.
    pub fn tick_display(&mut self) -> u32 {
        let actual = self.actual_percent();
        let mut next = self.display + (actual - self.display) * PRELOAD_DISPLAY_EASE;
        if actual - next < PRELOAD_SNAP_EPSILON {
            next = actual;
        }
        self.display = next;
        next.floor() as u32
    }

    pub fn display_percent(&self) -> f32 {
        self.display
    }

    /// Ready to dismiss: everything accounted for, display caught up, and
    /// the minimum hold time elapsed.
    pub fn is_ready(&self, elapsed_ms: f64) -> bool {
        self.actual_percent() >= 100.0
            && self.display >= 99.5
            && elapsed_ms >= PRELOAD_MIN_DISPLAY_MS
    }
}
