//! Bolt Crafting
//!
//! Crafts bolts from iron ingots over time. One sequential run per
//! crafter; each batch consumes its input up front and credits its yield
//! only after the batch timer elapses, so a run dropped mid-batch loses
//! that batch's input without ever crediting its output.

use serde::{Deserialize, Serialize};

use crate::economy::inventory::Inventory;
use crate::types::GridSize;

/// Resource key of the crafting input material.
pub const CRAFT_INPUT: &str = "IronIngot";

/// Tunable crafting parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoltCraftConfig {
    /// Iron ingots consumed per batch
    pub iron_per_batch: i32,
    /// Small bolts produced per batch
    pub small_yield: i32,
    /// Large bolts produced per batch
    pub large_yield: i32,
    /// Seconds per batch
    pub craft_time_seconds: f32,
}

impl Default for BoltCraftConfig {
    fn default() -> Self {
        Self {
            iron_per_batch: 1,
            small_yield: 60,
            large_yield: 50,
            craft_time_seconds: 1.0,
        }
    }
}

/// An in-progress crafting run
#[derive(Debug, Clone)]
struct CraftRun {
    grid: GridSize,
    batches_left: i32,
    /// Seconds until the in-flight batch completes
    timer: f32,
    /// Input for the current batch has been consumed; its yield is owed
    batch_in_flight: bool,
}

/// Sequential bolt production from inventory iron.
///
/// Start a run with [`start_small`](BoltCrafter::start_small) or
/// [`start_large`](BoltCrafter::start_large), then drive it with
/// [`update`](BoltCrafter::update) each frame. A run ends early, without
/// error, the first time the inventory cannot cover another batch.
#[derive(Debug, Clone)]
pub struct BoltCrafter {
    config: BoltCraftConfig,
    run: Option<CraftRun>,
    stop_requested: bool,
}

impl Default for BoltCrafter {
    fn default() -> Self {
        Self::new(BoltCraftConfig::default())
    }
}

impl BoltCrafter {
    pub fn new(config: BoltCraftConfig) -> Self {
        Self {
            config,
            run: None,
            stop_requested: false,
        }
    }

    /// Crafting parameters in use
    pub fn config(&self) -> &BoltCraftConfig {
        &self.config
    }

    /// True while a run is in progress
    pub fn is_crafting(&self) -> bool {
        self.run.is_some()
    }

    /// True if the inventory covers at least one batch
    pub fn can_craft(&self, inventory: &Inventory) -> bool {
        inventory.has_resource(CRAFT_INPUT, self.config.iron_per_batch)
    }

    /// Begin a small-bolt run of up to `batches` batches.
    ///
    /// Ignored while a run is already in progress or when the inventory
    /// cannot cover a single batch.
    pub fn start_small(&mut self, inventory: &Inventory, batches: i32) {
        self.start(GridSize::Small, inventory, batches);
    }

    /// Begin a large-bolt run of up to `batches` batches.
    pub fn start_large(&mut self, inventory: &Inventory, batches: i32) {
        self.start(GridSize::Large, inventory, batches);
    }

    fn start(&mut self, grid: GridSize, inventory: &Inventory, batches: i32) {
        if self.run.is_some() || batches <= 0 || !self.can_craft(inventory) {
            return;
        }
        println!("[BoltCraft] Starting {} bolt run: {} batches", grid.name(), batches);
        self.stop_requested = false;
        self.run = Some(CraftRun {
            grid,
            batches_left: batches,
            timer: 0.0,
            batch_in_flight: false,
        });
    }

    /// Ask the current run to stop.
    ///
    /// Honored only at batch boundaries: an in-flight batch (input already
    /// consumed) still finishes and credits its yield before the run ends.
    pub fn request_stop(&mut self) {
        if self.run.is_some() {
            self.stop_requested = true;
        }
    }

    /// Advance the run by `delta_seconds`.
    ///
    /// Consumes input at each batch start and credits bolts as batch timers
    /// elapse; a large delta may complete several batches in one call. The
    /// run ends when its batch count is exhausted, a stop was requested, or
    /// the inventory cannot cover the next batch.
    pub fn update(&mut self, inventory: &mut Inventory, delta_seconds: f32) {
        let Some(run) = self.run.as_mut() else {
            return;
        };
        let mut remaining = delta_seconds.max(0.0);
        let mut finished = false;

        loop {
            if !run.batch_in_flight {
                // Batch boundary: honor stops, then pay for the next batch.
                if self.stop_requested
                    || run.batches_left <= 0
                    || !inventory.consume_resource(CRAFT_INPUT, self.config.iron_per_batch)
                {
                    finished = true;
                    break;
                }
                run.batches_left -= 1;
                run.timer = self.config.craft_time_seconds;
                run.batch_in_flight = true;
            }

            if remaining < run.timer {
                run.timer -= remaining;
                break;
            }

            // Batch complete: credit its yield.
            remaining -= run.timer;
            let credited = match run.grid {
                GridSize::Small => self.config.small_yield,
                GridSize::Large => self.config.large_yield,
            };
            inventory.add_bolts(run.grid, credited);
            run.batch_in_flight = false;
        }

        if finished {
            self.run = None;
            self.stop_requested = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inventory_with_iron(amount: i32) -> Inventory {
        let mut inv = Inventory::new();
        inv.add_resource(CRAFT_INPUT, amount);
        inv
    }

    #[test]
    fn test_full_run_credits_all_batches() {
        let mut inv = inventory_with_iron(3);
        let mut crafter = BoltCrafter::default();

        crafter.start_small(&inv, 3);
        assert!(crafter.is_crafting());

        crafter.update(&mut inv, 10.0);

        assert!(!crafter.is_crafting());
        assert_eq!(inv.bolt_count(GridSize::Small), 180); // 3 * 60
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 0);
    }

    #[test]
    fn test_run_ends_early_when_iron_runs_out() {
        // 3-batch run, iron for only 2: exactly 2 yields, no error.
        let mut inv = inventory_with_iron(2);
        let mut crafter = BoltCrafter::default();

        crafter.start_small(&inv, 3);
        crafter.update(&mut inv, 10.0);

        assert!(!crafter.is_crafting());
        assert_eq!(inv.bolt_count(GridSize::Small), 120);
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 0);
    }

    #[test]
    fn test_input_consumed_before_yield_credited() {
        let mut inv = inventory_with_iron(1);
        let mut crafter = BoltCrafter::default();

        crafter.start_large(&inv, 1);
        crafter.update(&mut inv, 0.25);

        // Mid-batch: input gone, nothing credited yet.
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 0);
        assert_eq!(inv.bolt_count(GridSize::Large), 0);

        crafter.update(&mut inv, 0.75);
        assert_eq!(inv.bolt_count(GridSize::Large), 50);
        assert!(!crafter.is_crafting());
    }

    #[test]
    fn test_stop_request_finishes_in_flight_batch() {
        let mut inv = inventory_with_iron(5);
        let mut crafter = BoltCrafter::default();

        crafter.start_small(&inv, 3);
        crafter.update(&mut inv, 0.5); // First batch in flight
        crafter.request_stop();
        crafter.update(&mut inv, 10.0);

        // The in-flight batch still credited; no further batch started.
        assert!(!crafter.is_crafting());
        assert_eq!(inv.bolt_count(GridSize::Small), 60);
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 4);
    }

    #[test]
    fn test_start_rejected_while_running() {
        let mut inv = inventory_with_iron(10);
        let mut crafter = BoltCrafter::default();

        crafter.start_small(&inv, 1);
        crafter.start_small(&inv, 5); // Ignored: already running
        crafter.update(&mut inv, 10.0);

        assert_eq!(inv.bolt_count(GridSize::Small), 60); // One batch only
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 9);
    }

    #[test]
    fn test_start_rejected_without_iron() {
        let inv = Inventory::new();
        let mut crafter = BoltCrafter::default();

        assert!(!crafter.can_craft(&inv));
        crafter.start_small(&inv, 2);
        assert!(!crafter.is_crafting());
    }

    #[test]
    fn test_large_delta_completes_multiple_batches() {
        let mut inv = inventory_with_iron(4);
        let mut crafter = BoltCrafter::new(BoltCraftConfig {
            craft_time_seconds: 2.0,
            ..BoltCraftConfig::default()
        });

        crafter.start_large(&inv, 4);
        crafter.update(&mut inv, 5.0); // 2 full batches + 1s into the third

        assert_eq!(inv.bolt_count(GridSize::Large), 100);
        assert_eq!(inv.resource_amount(CRAFT_INPUT), 1); // Third batch paid for
        assert!(crafter.is_crafting());

        crafter.update(&mut inv, 1.0);
        assert_eq!(inv.bolt_count(GridSize::Large), 150);
    }
}
