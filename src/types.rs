//! Shared Types
//!
//! Enums used across the economy, blocks, and placement modules.

use serde::{Deserialize, Serialize};

/// Functional category of a block type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCategory {
    Structure,
    Propulsion,
    Power,
    Utility,
    Weapon,
}

impl BlockCategory {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            BlockCategory::Structure => "Structure",
            BlockCategory::Propulsion => "Propulsion",
            BlockCategory::Power => "Power",
            BlockCategory::Utility => "Utility",
            BlockCategory::Weapon => "Weapon",
        }
    }
}

/// Grid size class a block occupies.
///
/// Drives bolt requirements, which bolt counter is consumed, and max health.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GridSize {
    #[default]
    Small,
    Large,
}

impl GridSize {
    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            GridSize::Small => "small",
            GridSize::Large => "large",
        }
    }
}
