//! Blocks Module
//!
//! Static block definitions (the catalog), the per-placed-block structural
//! state machine, and the signals blocks emit to world collaborators.

pub mod block;
pub mod definition;
pub mod events;

pub use block::{Block, DamageResult, LARGE_GRID_MAX_HEALTH, SMALL_GRID_MAX_HEALTH, StructuralState};
pub use definition::{
    BlockCatalog, BlockDefinition, CatalogError, DEFAULT_LARGE_GRID_BOLTS,
    DEFAULT_SMALL_GRID_BOLTS, RecipeEntry,
};
pub use events::StructuralEvent;
