//! Randomized expansion of BOM line items
//!
//! Each original item spawns `k` derived items, `k` drawn uniformly from the
//! run's [`Bounds`]. A derived item keeps the original name and adds a
//! uniformly drawn integer delta to the price. Originals and derived items
//! are then shuffled together.

use crate::types::{BomData, Bounds, Item};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Smallest price increase for a derived item
pub const PRICE_DELTA_MIN: u32 = 100;

/// Largest price increase for a derived item
pub const PRICE_DELTA_MAX: u32 = 10_000;

/// Expand `items` and return originals plus derived items in shuffled order
pub fn expand<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, items: &[Item]) -> Vec<Item> {
    let mut result: Vec<Item> = items.to_vec();

    for item in items {
        let count = rng.gen_range(bounds.minimum()..=bounds.maximum());
        result.extend((0..count).map(|_| {
            let delta = rng.gen_range(PRICE_DELTA_MIN..=PRICE_DELTA_MAX);
            Item::new(item.name.clone(), item.price + f64::from(delta))
        }));
    }

    debug!(
        originals = items.len(),
        total = result.len(),
        "expanded line items"
    );

    result.shuffle(rng);
    result
}

impl BomData {
    /// Expanded, shuffled rows for this run's items
    pub fn expanded<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Item> {
        expand(rng, self.bounds, &self.items)
    }
}
