//! Block Placement
//!
//! The placement transaction: recipe check and consumption, bolt check and
//! consumption, and initial block state, as one operation against a single
//! inventory.
//!
//! A recipe shortfall rejects the placement with no mutation. A bolt
//! shortfall does not: the block is placed loose and the shortfall is
//! surfaced as an advisory for the UI to display.

use crate::blocks::block::Block;
use crate::blocks::definition::{BlockCatalog, BlockDefinition};
use crate::blocks::events::StructuralEvent;
use crate::economy::inventory::Inventory;
use crate::types::GridSize;

/// Advisory attached to a placement that went in loose for lack of bolts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoltShortfall {
    pub grid_size: GridSize,
    pub required: i32,
    pub available: i32,
}

/// A successful placement.
#[derive(Debug)]
pub struct Placement {
    pub block: Block,
    /// Present when the block was placed loose for lack of bolts
    pub bolt_shortfall: Option<BoltShortfall>,
}

/// Why a placement was rejected. The inventory is untouched in every case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Block name not present in the catalog (configuration error)
    UnknownBlock(String),
    /// A recipe component is missing or short
    MissingResource {
        resource: String,
        required: i32,
        available: i32,
    },
}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::UnknownBlock(name) => {
                write!(f, "unknown block definition: {name}")
            }
            PlacementError::MissingResource {
                resource,
                required,
                available,
            } => write!(
                f,
                "missing resource: {resource} x{required} (have {available})"
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Place a block from its definition.
///
/// Checks the whole recipe before consuming any of it, then either bolts
/// the block down (consuming bolts) or places it loose with a
/// [`BoltShortfall`] advisory. Structural signals for the new block are
/// appended to `events`.
pub fn place(
    def: &BlockDefinition,
    grid: GridSize,
    inventory: &mut Inventory,
    events: &mut Vec<StructuralEvent>,
) -> Result<Placement, PlacementError> {
    if def.has_recipe() {
        // All-or-nothing: verify every line before consuming the first.
        for entry in &def.recipe {
            if !inventory.has_resource(&entry.resource, entry.amount) {
                return Err(PlacementError::MissingResource {
                    resource: entry.resource.clone(),
                    required: entry.amount,
                    available: inventory.resource_amount(&entry.resource),
                });
            }
        }
        for entry in &def.recipe {
            inventory.consume_resource(&entry.resource, entry.amount);
        }
    }

    let required = def.required_bolts(grid);
    let mut block = Block::new(def, grid);

    if inventory.consume_bolts(grid, required) {
        block.set_bolted(required, events);
        println!(
            "[Placement] Placed {} bolted ({} {} bolts)",
            def.name,
            required,
            grid.name()
        );
        Ok(Placement {
            block,
            bolt_shortfall: None,
        })
    } else {
        let available = inventory.bolt_count(grid);
        block.set_bolted(0, events);
        println!(
            "[Placement] Placed {} loose: needs {} {} bolts, have {}",
            def.name,
            required,
            grid.name(),
            available
        );
        Ok(Placement {
            block,
            bolt_shortfall: Some(BoltShortfall {
                grid_size: grid,
                required,
                available,
            }),
        })
    }
}

/// Place a block by catalog name.
///
/// An unknown name is a configuration error: nothing is consumed and no
/// block is created.
pub fn place_from_catalog(
    catalog: &BlockCatalog,
    name: &str,
    grid: GridSize,
    inventory: &mut Inventory,
    events: &mut Vec<StructuralEvent>,
) -> Result<Placement, PlacementError> {
    let def = catalog
        .get(name)
        .ok_or_else(|| PlacementError::UnknownBlock(name.to_string()))?;
    place(def, grid, inventory, events)
}
