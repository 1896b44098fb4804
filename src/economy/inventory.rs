//! Inventory
//!
//! Ledger of refined resources (string-keyed) and crafted bolts.
//! Bolts are tracked separately from resources because the block
//! fastening system consumes them under different rules.

use std::collections::HashMap;

use crate::types::GridSize;

/// Default fraction of attached bolts returned when a block is dismantled.
pub const BOLT_RECOVERY_RATE: f32 = 0.9;

/// A single actor's resource and bolt holdings.
///
/// All mutations are check-then-act: a consume that would drive a counter
/// negative returns `false` and leaves the ledger untouched. Resource keys
/// are free-form strings; unknown keys read as zero stock.
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    resources: HashMap<String, i32>,
    small_bolts: i32,
    large_bolts: i32,
}

impl Inventory {
    /// Create an empty inventory
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a refined resource. Amounts <= 0 are ignored.
    pub fn add_resource(&mut self, key: &str, amount: i32) {
        if amount <= 0 {
            return;
        }
        *self.resources.entry(key.to_string()).or_insert(0) += amount;
    }

    /// Current amount of a resource (unknown keys read as zero)
    pub fn resource_amount(&self, key: &str) -> i32 {
        self.resources.get(key).copied().unwrap_or(0)
    }

    /// Check if we hold at least `amount` of a resource
    pub fn has_resource(&self, key: &str, amount: i32) -> bool {
        self.resource_amount(key) >= amount
    }

    /// Consume a resource (returns false, with no mutation, if insufficient)
    pub fn consume_resource(&mut self, key: &str, amount: i32) -> bool {
        if amount <= 0 {
            return true;
        }
        if !self.has_resource(key, amount) {
            return false;
        }
        if let Some(stored) = self.resources.get_mut(key) {
            *stored -= amount;
        }
        true
    }

    /// All resource amounts (read-only, for UI)
    pub fn all_resources(&self) -> impl Iterator<Item = (&str, i32)> + '_ {
        self.resources.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Bolts held for the given grid size
    pub fn bolt_count(&self, grid: GridSize) -> i32 {
        match grid {
            GridSize::Small => self.small_bolts,
            GridSize::Large => self.large_bolts,
        }
    }

    /// Add crafted bolts. Amounts <= 0 are ignored.
    pub fn add_bolts(&mut self, grid: GridSize, amount: i32) {
        if amount <= 0 {
            return;
        }
        match grid {
            GridSize::Small => self.small_bolts += amount,
            GridSize::Large => self.large_bolts += amount,
        }
    }

    /// Check if we hold at least `required` bolts of the given size
    pub fn has_bolts(&self, grid: GridSize, required: i32) -> bool {
        self.bolt_count(grid) >= required
    }

    /// Consume bolts (returns false, with no mutation, if insufficient)
    pub fn consume_bolts(&mut self, grid: GridSize, required: i32) -> bool {
        if required <= 0 {
            return true;
        }
        if !self.has_bolts(grid, required) {
            return false;
        }
        match grid {
            GridSize::Small => self.small_bolts -= required,
            GridSize::Large => self.large_bolts -= required,
        }
        true
    }

    /// Credit back a fraction of removed bolts (dismantling). Floors, so a
    /// rate below 1.0 always loses at least the fractional remainder.
    pub fn recover_bolts(&mut self, grid: GridSize, count: i32, rate: f32) {
        let recovered = (count.max(0) as f32 * rate).floor() as i32;
        self.add_bolts(grid, recovered);
    }
}
