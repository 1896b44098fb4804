//! SpaceLite Core
//!
//! Structural assembly core for a modular block construction game:
//! the inventory ledger of refined resources and bolts, timed bolt
//! crafting, the block fastening state machine, and the placement
//! transaction tying them together.
//!
//! Rendering, physics reaction, and world-object lifecycle live outside
//! this crate. Blocks talk to those collaborators through
//! [`StructuralEvent`] signals and read-only queries; the core holds no
//! physics or scene handles.
//!
//! # Modules
//!
//! - [`types`] - shared enums (block category, grid size)
//! - [`economy`] - inventory ledger and bolt crafting
//! - [`blocks`] - block definitions, catalog, and structural state
//! - [`systems`] - the placement transaction

pub mod blocks;
pub mod economy;
pub mod systems;
pub mod types;

pub use types::{BlockCategory, GridSize};

pub use economy::{BOLT_RECOVERY_RATE, BoltCraftConfig, BoltCrafter, CRAFT_INPUT, Inventory};

pub use blocks::{
    Block, BlockCatalog, BlockDefinition, CatalogError, DamageResult, RecipeEntry,
    StructuralEvent, StructuralState,
};
pub use blocks::{DEFAULT_LARGE_GRID_BOLTS, DEFAULT_SMALL_GRID_BOLTS};

pub use systems::{BoltShortfall, Placement, PlacementError, place, place_from_catalog};
