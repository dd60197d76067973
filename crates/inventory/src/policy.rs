//! Thresholds that decide when an item counts as overstocked.

use serde::{Deserialize, Serialize};

pub const DEFAULT_QUANTITY_THRESHOLD: u64 = 50;
pub const DEFAULT_MIN_SELLERS: usize = 2;

/// An item is overstocked when its event-wide quantity is strictly above
/// `quantity_threshold` and at least `min_sellers` trucks carry it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverstockPolicy {
    pub quantity_threshold: u64,
    pub min_sellers: usize,
}

impl Default for OverstockPolicy {
    fn default() -> Self {
        Self {
            quantity_threshold: DEFAULT_QUANTITY_THRESHOLD,
            min_sellers: DEFAULT_MIN_SELLERS,
        }
    }
}

impl OverstockPolicy {
    pub fn is_overstocked(&self, quantity: u64, sellers: usize) -> bool {
        quantity > self.quantity_threshold && sellers >= self.min_sellers
    }
}
