//! Shuffle-bag ordering over the cocktail catalog.

use rand::prelude::*;

/// Deals every image exactly once per pass, then reshuffles.
///
/// A shuffle bag rather than independent sampling: visible repetition while
/// the pointer sweeps across the section reads as a bug, so full coverage is
/// guaranteed before any index comes around again.
pub struct ImageDeck {
    order: Vec<usize>,
    cursor: usize,
    rng: StdRng,
}

impl ImageDeck {
    pub fn new(len: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order: Vec<usize> = (0..len).collect();
        order.shuffle(&mut rng);
        Self {
            order,
            cursor: 0,
            rng,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Next image index; reshuffles and resets the cursor on exhaustion.
    /// An empty deck always yields 0, which no catalog resolves.
    pub fn next(&mut self) -> usize {
        if self.order.is_empty() {
            return 0;
        }
        if self.cursor >= self.order.len() {
            self.order.shuffle(&mut self.rng);
            self.cursor = 0;
        }
        let idx = self.order[self.cursor];
        self.cursor += 1;
        idx
    }

    /// Position within the current pass, for tests and diagnostics.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub(crate) fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}
