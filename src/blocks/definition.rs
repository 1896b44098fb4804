//! Block Definitions
//!
//! Static, read-only parameters for each placeable block type: category,
//! grid size, crafting recipe, and bolt requirements. Definitions are
//! authored as JSON and loaded into a [`BlockCatalog`] once, before any
//! placement happens.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::{BlockCategory, GridSize};

/// Default bolts for a block placed on the small grid.
pub const DEFAULT_SMALL_GRID_BOLTS: i32 = 4;

/// Default bolts for a block placed on the large grid.
pub const DEFAULT_LARGE_GRID_BOLTS: i32 = 6;

fn default_small_bolts() -> i32 {
    DEFAULT_SMALL_GRID_BOLTS
}

fn default_large_bolts() -> i32 {
    DEFAULT_LARGE_GRID_BOLTS
}

fn unset_override() -> i32 {
    -1
}

/// One recipe line: a refined resource and the amount consumed on placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeEntry {
    pub resource: String,
    pub amount: i32,
}

/// Static parameters for one block type.
///
/// Immutable after catalog load; shared by reference across every placement
/// of the type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub name: String,
    pub category: BlockCategory,
    pub grid_size: GridSize,
    /// Refined components consumed on placement (may be empty)
    #[serde(default)]
    pub recipe: Vec<RecipeEntry>,
    #[serde(default = "default_small_bolts")]
    pub base_small_grid_bolts: i32,
    #[serde(default = "default_large_bolts")]
    pub base_large_grid_bolts: i32,
    /// Per-block override; any negative value means "use the base value"
    #[serde(default = "unset_override")]
    pub override_small_grid_bolts: i32,
    #[serde(default = "unset_override")]
    pub override_large_grid_bolts: i32,
}

impl BlockDefinition {
    /// Create a definition with no recipe and default bolt requirements.
    pub fn new(name: &str, category: BlockCategory, grid_size: GridSize) -> Self {
        Self {
            name: name.to_string(),
            category,
            grid_size,
            recipe: Vec::new(),
            base_small_grid_bolts: DEFAULT_SMALL_GRID_BOLTS,
            base_large_grid_bolts: DEFAULT_LARGE_GRID_BOLTS,
            override_small_grid_bolts: -1,
            override_large_grid_bolts: -1,
        }
    }

    /// Bolts required when placed on `grid`: the override if set (>= 0),
    /// else the grid-size base.
    pub fn required_bolts(&self, grid: GridSize) -> i32 {
        match grid {
            GridSize::Small => {
                if self.override_small_grid_bolts >= 0 {
                    self.override_small_grid_bolts
                } else {
                    self.base_small_grid_bolts
                }
            }
            GridSize::Large => {
                if self.override_large_grid_bolts >= 0 {
                    self.override_large_grid_bolts
                } else {
                    self.base_large_grid_bolts
                }
            }
        }
    }

    /// True if this definition declares a well-formed, non-empty recipe.
    pub fn has_recipe(&self) -> bool {
        !self.recipe.is_empty()
            && self
                .recipe
                .iter()
                .all(|entry| !entry.resource.is_empty() && entry.amount > 0)
    }
}

/// Name-keyed, read-only collection of block definitions.
#[derive(Debug, Clone, Default)]
pub struct BlockCatalog {
    defs: HashMap<String, BlockDefinition>,
}

impl BlockCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition, validating it first.
    pub fn insert(&mut self, def: BlockDefinition) -> Result<(), CatalogError> {
        validate(&def)?;
        if self.defs.contains_key(&def.name) {
            return Err(CatalogError::DuplicateName(def.name));
        }
        self.defs.insert(def.name.clone(), def);
        Ok(())
    }

    /// Look up a definition by block name
    pub fn get(&self, name: &str) -> Option<&BlockDefinition> {
        self.defs.get(name)
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Parse a catalog from a JSON array of definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let defs: Vec<BlockDefinition> = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for def in defs {
            catalog.insert(def)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

fn validate(def: &BlockDefinition) -> Result<(), CatalogError> {
    if def.name.is_empty() {
        return Err(CatalogError::EmptyName);
    }
    for entry in &def.recipe {
        if entry.resource.is_empty() || entry.amount <= 0 {
            return Err(CatalogError::BadRecipeEntry {
                block: def.name.clone(),
                resource: entry.resource.clone(),
                amount: entry.amount,
            });
        }
    }
    Ok(())
}

/// Errors that can occur while loading a block catalog.
#[derive(Debug)]
pub enum CatalogError {
    /// A definition has an empty name.
    EmptyName,
    /// Two definitions share a name.
    DuplicateName(String),
    /// A recipe entry has an empty resource name or non-positive amount.
    BadRecipeEntry {
        block: String,
        resource: String,
        amount: i32,
    },
    /// Standard I/O error.
    IoError(std::io::Error),
    /// JSON deserialization error.
    JsonError(serde_json::Error),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::EmptyName => write!(f, "block definition with empty name"),
            CatalogError::DuplicateName(name) => {
                write!(f, "duplicate block definition: {name}")
            }
            CatalogError::BadRecipeEntry {
                block,
                resource,
                amount,
            } => write!(
                f,
                "bad recipe entry in {block}: resource '{resource}' amount {amount}"
            ),
            CatalogError::IoError(e) => write!(f, "IO error: {e}"),
            CatalogError::JsonError(e) => write!(f, "JSON error: {e}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<std::io::Error> for CatalogError {
    fn from(e: std::io::Error) -> Self {
        CatalogError::IoError(e)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::JsonError(e)
    }
}
