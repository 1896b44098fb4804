//! Economy Module
//!
//! Player-side resource handling: the inventory ledger of refined
//! resources and bolts, and timed bolt crafting from iron ingots.

pub mod bolt_crafting;
pub mod inventory;

pub use bolt_crafting::{BoltCraftConfig, BoltCrafter, CRAFT_INPUT};
pub use inventory::{BOLT_RECOVERY_RATE, Inventory};
