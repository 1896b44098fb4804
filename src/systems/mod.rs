//! Systems Module
//!
//! Higher-level operations composing the economy and blocks layers.

pub mod placement;

pub use placement::{BoltShortfall, Placement, PlacementError, place, place_from_catalog};
