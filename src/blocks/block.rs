//! Block State
//!
//! Per-placed-block structural state: bolts attached versus required, the
//! fastened / loose / destroyed lifecycle, and health. All physical
//! consequences are delegated to collaborators via [`StructuralEvent`]s.

use crate::blocks::definition::BlockDefinition;
use crate::blocks::events::{
    DEBRIS_REMOVAL_DELAY_SECONDS, DESTRUCTION_EXPLOSION_FORCE, DESTRUCTION_EXPLOSION_RADIUS,
    LOOSE_DAMAGE_IMPULSE_SCALE, LOOSE_SHAKE_INTENSITY, StructuralEvent,
};
use crate::economy::inventory::{BOLT_RECOVERY_RATE, Inventory};
use crate::types::GridSize;

/// Max health for a large-grid block type.
pub const LARGE_GRID_MAX_HEALTH: f32 = 300.0;

/// Max health for any other block type.
pub const SMALL_GRID_MAX_HEALTH: f32 = 100.0;

/// Structural lifecycle of a placed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralState {
    /// Fully bolted down and functional
    Fastened,
    /// Missing bolts; physically unstable until re-fastened
    Loose,
    /// Health reached zero; inert debris (terminal)
    Destroyed,
}

/// Outcome of applying damage to a block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageResult {
    pub destroyed: bool,
    pub remaining_health: f32,
}

/// A placed block's structural state.
///
/// Created by placement with zero bolts attached; transitions between
/// `Fastened` and `Loose` as bolts are attached or removed, and ends either
/// destroyed (health reaching zero) or dismantled. Both ends are terminal:
/// a destroyed block ignores further mutation, and
/// [`dismantle`](Block::dismantle) consumes the block outright.
#[derive(Debug, Clone)]
pub struct Block {
    name: String,
    grid_size: GridSize,
    required_bolts: i32,
    bolts_attached: i32,
    bolt_deficit: i32,
    state: StructuralState,
    health: f32,
    max_health: f32,
}

impl Block {
    /// Create an unbolted block from its definition, placed on `grid_size`.
    ///
    /// Bolt requirements follow the grid the block is placed on; health
    /// follows the definition's native grid size.
    pub fn new(def: &BlockDefinition, grid_size: GridSize) -> Self {
        let required = def.required_bolts(grid_size);
        let max_health = match def.grid_size {
            GridSize::Large => LARGE_GRID_MAX_HEALTH,
            GridSize::Small => SMALL_GRID_MAX_HEALTH,
        };

        Self {
            name: def.name.clone(),
            grid_size,
            required_bolts: required,
            bolts_attached: 0,
            bolt_deficit: required,
            state: if required > 0 {
                StructuralState::Loose
            } else {
                StructuralState::Fastened
            },
            health: max_health,
            max_health,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    pub fn required_bolts(&self) -> i32 {
        self.required_bolts
    }

    pub fn bolts_attached(&self) -> i32 {
        self.bolts_attached
    }

    /// Bolts still missing before the block counts as fastened
    pub fn bolt_deficit(&self) -> i32 {
        self.bolt_deficit
    }

    pub fn state(&self) -> StructuralState {
        self.state
    }

    pub fn health(&self) -> f32 {
        self.health
    }

    pub fn max_health(&self) -> f32 {
        self.max_health
    }

    /// True when every required bolt is attached (and the block is intact)
    pub fn is_bolted(&self) -> bool {
        self.state != StructuralState::Destroyed && self.bolts_attached >= self.required_bolts
    }

    /// Set the absolute attached-bolt count and re-derive deficit and state.
    ///
    /// Ignored once destroyed.
    pub fn set_bolted(&mut self, count: i32, events: &mut Vec<StructuralEvent>) {
        if self.state == StructuralState::Destroyed {
            return;
        }
        self.bolts_attached = count.max(0);
        self.bolt_deficit = (self.required_bolts - self.bolts_attached).max(0);

        if self.bolts_attached >= self.required_bolts {
            if self.state != StructuralState::Fastened {
                self.state = StructuralState::Fastened;
                events.push(StructuralEvent::BecameStatic);
            }
        } else {
            self.enter_loose(events);
        }
    }

    /// Force the loose state: the block becomes physically reactive and a
    /// shake advisory is emitted. Safe to call repeatedly.
    pub fn enter_loose(&mut self, events: &mut Vec<StructuralEvent>) {
        if self.state == StructuralState::Destroyed {
            return;
        }
        self.state = StructuralState::Loose;
        events.push(StructuralEvent::BecameReactive);
        events.push(StructuralEvent::Instability {
            intensity: LOOSE_SHAKE_INTENSITY,
        });
    }

    /// Take as many missing bolts as the inventory can supply.
    ///
    /// Partial refills leave the block loose; callers re-query
    /// [`bolt_deficit`](Block::bolt_deficit) to see what is still missing.
    pub fn add_bolts_from_inventory(
        &mut self,
        inventory: &mut Inventory,
        events: &mut Vec<StructuralEvent>,
    ) {
        if self.state == StructuralState::Destroyed {
            return;
        }
        let missing = (self.required_bolts - self.bolts_attached).max(0);
        if missing <= 0 {
            return;
        }

        let to_take = inventory.bolt_count(self.grid_size).min(missing);
        if to_take <= 0 || !inventory.consume_bolts(self.grid_size, to_take) {
            return;
        }

        self.bolts_attached += to_take;
        self.bolt_deficit = (self.required_bolts - self.bolts_attached).max(0);
        if self.bolt_deficit == 0 && self.state != StructuralState::Fastened {
            self.state = StructuralState::Fastened;
            events.push(StructuralEvent::BecameStatic);
        }
    }

    /// Dismantle the block, crediting back 90% of its attached bolts
    /// (floored). Recipe materials are not refunded.
    ///
    /// Consumes the block; the world removes it on the `Removed` signal.
    pub fn dismantle(mut self, inventory: &mut Inventory, events: &mut Vec<StructuralEvent>) {
        if self.state != StructuralState::Destroyed {
            let removed = self.bolts_attached;
            self.bolts_attached = 0;
            self.bolt_deficit = self.required_bolts;
            self.state = StructuralState::Loose;
            inventory.recover_bolts(self.grid_size, removed, BOLT_RECOVERY_RATE);
        }
        events.push(StructuralEvent::Removed);
    }

    /// Apply damage.
    ///
    /// Health reaching zero destroys the block: bolts are zeroed with no
    /// recovery, the deficit is cleared (debris is not re-fastenable), and
    /// the destruction signal carries the explosion parameters and debris
    /// removal delay. Damage to an already-destroyed block does nothing.
    pub fn apply_damage(
        &mut self,
        amount: f32,
        events: &mut Vec<StructuralEvent>,
    ) -> DamageResult {
        if self.state == StructuralState::Destroyed {
            return DamageResult {
                destroyed: true,
                remaining_health: 0.0,
            };
        }

        self.health -= amount.max(0.0);
        if self.health <= 0.0 {
            self.health = 0.0;
            self.bolts_attached = 0;
            self.bolt_deficit = 0;
            self.state = StructuralState::Destroyed;
            events.push(StructuralEvent::Destroyed {
                explosion_force: DESTRUCTION_EXPLOSION_FORCE,
                explosion_radius: DESTRUCTION_EXPLOSION_RADIUS,
                removal_delay_seconds: DEBRIS_REMOVAL_DELAY_SECONDS,
            });
            return DamageResult {
                destroyed: true,
                remaining_health: 0.0,
            };
        }

        // Loose blocks get knocked around by hits.
        if self.state == StructuralState::Loose {
            events.push(StructuralEvent::Instability {
                intensity: amount * LOOSE_DAMAGE_IMPULSE_SCALE,
            });
        }

        DamageResult {
            destroyed: false,
            remaining_health: self.health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlockCategory;

    fn small_def() -> BlockDefinition {
        BlockDefinition::new("TestBlock", BlockCategory::Structure, GridSize::Small)
    }

    fn large_def() -> BlockDefinition {
        BlockDefinition::new("BigBlock", BlockCategory::Structure, GridSize::Large)
    }

    #[test]
    fn test_new_block_is_loose_with_full_deficit() {
        let block = Block::new(&small_def(), GridSize::Small);

        assert_eq!(block.required_bolts(), 4);
        assert_eq!(block.bolts_attached(), 0);
        assert_eq!(block.bolt_deficit(), 4);
        assert_eq!(block.state(), StructuralState::Loose);
        assert!(!block.is_bolted());
    }

    #[test]
    fn test_max_health_by_grid_size() {
        assert_eq!(Block::new(&small_def(), GridSize::Small).max_health(), 100.0);
        assert_eq!(Block::new(&large_def(), GridSize::Large).max_health(), 300.0);
    }

    #[test]
    fn test_set_bolted_transitions() {
        let mut events = Vec::new();
        let mut block = Block::new(&small_def(), GridSize::Small);

        block.set_bolted(4, &mut events);
        assert_eq!(block.state(), StructuralState::Fastened);
        assert_eq!(block.bolt_deficit(), 0);
        assert!(events.contains(&StructuralEvent::BecameStatic));

        events.clear();
        block.set_bolted(2, &mut events);
        assert_eq!(block.state(), StructuralState::Loose);
        assert_eq!(block.bolt_deficit(), 2);
        assert!(events.contains(&StructuralEvent::BecameReactive));
        assert!(events.contains(&StructuralEvent::Instability {
            intensity: crate::blocks::events::LOOSE_SHAKE_INTENSITY
        }));
    }

    #[test]
    fn test_deficit_derivation() {
        let mut events = Vec::new();
        let mut block = Block::new(&small_def(), GridSize::Small);

        for attached in 0..=4 {
            block.set_bolted(attached, &mut events);
            assert_eq!(block.bolt_deficit(), 4 - attached);
        }

        block.set_bolted(9, &mut events); // Over-attachment clamps deficit at 0
        assert_eq!(block.bolt_deficit(), 0);
        assert_eq!(block.state(), StructuralState::Fastened);
    }

    #[test]
    fn test_add_bolts_partial_then_full() {
        let mut events = Vec::new();
        let mut inv = Inventory::new();
        let mut block = Block::new(&small_def(), GridSize::Small);

        inv.add_bolts(GridSize::Small, 3);
        block.add_bolts_from_inventory(&mut inv, &mut events);

        // Partial: takes everything available, stays loose.
        assert_eq!(block.bolts_attached(), 3);
        assert_eq!(block.bolt_deficit(), 1);
        assert_eq!(block.state(), StructuralState::Loose);
        assert_eq!(inv.bolt_count(GridSize::Small), 0);

        inv.add_bolts(GridSize::Small, 5);
        block.add_bolts_from_inventory(&mut inv, &mut events);

        // Takes only the missing bolt, becomes fastened.
        assert_eq!(block.bolts_attached(), 4);
        assert_eq!(block.state(), StructuralState::Fastened);
        assert_eq!(inv.bolt_count(GridSize::Small), 4);
        assert!(events.contains(&StructuralEvent::BecameStatic));
    }

    #[test]
    fn test_dismantle_recovers_90_percent() {
        let mut events = Vec::new();
        let mut inv = Inventory::new();
        let mut def = small_def();
        def.override_small_grid_bolts = 10;

        let mut block = Block::new(&def, GridSize::Small);
        block.set_bolted(10, &mut events);

        events.clear();
        block.dismantle(&mut inv, &mut events);

        assert_eq!(inv.bolt_count(GridSize::Small), 9); // floor(10 * 0.9)
        assert_eq!(events, vec![StructuralEvent::Removed]);
    }

    #[test]
    fn test_destruction_zeroes_bolts_without_recovery() {
        let mut events = Vec::new();
        let mut inv = Inventory::new();
        let mut def = small_def();
        def.override_small_grid_bolts = 5;

        let mut block = Block::new(&def, GridSize::Small);
        block.set_bolted(5, &mut events);

        events.clear();
        let result = block.apply_damage(150.0, &mut events);

        assert!(result.destroyed);
        assert_eq!(block.state(), StructuralState::Destroyed);
        assert_eq!(block.bolts_attached(), 0);
        assert_eq!(block.bolt_deficit(), 0); // Cleared, not recomputed
        assert_eq!(inv.bolt_count(GridSize::Small), 0); // No recovery
        assert!(matches!(events[0], StructuralEvent::Destroyed { .. }));
    }

    #[test]
    fn test_damage_while_loose_emits_instability() {
        let mut events = Vec::new();
        let mut block = Block::new(&small_def(), GridSize::Small);

        let result = block.apply_damage(40.0, &mut events);

        assert!(!result.destroyed);
        assert_eq!(result.remaining_health, 60.0);
        assert!(events.contains(&StructuralEvent::Instability { intensity: 20.0 }));
    }

    #[test]
    fn test_damage_while_fastened_is_quiet() {
        let mut events = Vec::new();
        let mut block = Block::new(&small_def(), GridSize::Small);
        block.set_bolted(4, &mut events);

        events.clear();
        block.apply_damage(40.0, &mut events);
        assert!(events.is_empty());
    }

    #[test]
    fn test_destroyed_is_terminal() {
        let mut events = Vec::new();
        let mut block = Block::new(&small_def(), GridSize::Small);
        block.apply_damage(200.0, &mut events);

        events.clear();
        block.set_bolted(4, &mut events);
        block.enter_loose(&mut events);
        let result = block.apply_damage(50.0, &mut events);

        assert_eq!(block.state(), StructuralState::Destroyed);
        assert_eq!(block.bolts_attached(), 0);
        assert!(result.destroyed);
        assert!(events.is_empty());
    }

    #[test]
    fn test_dismantle_destroyed_block_recovers_nothing() {
        let mut events = Vec::new();
        let mut inv = Inventory::new();
        let mut block = Block::new(&small_def(), GridSize::Small);
        block.set_bolted(4, &mut events);
        block.apply_damage(500.0, &mut events);

        events.clear();
        block.dismantle(&mut inv, &mut events);

        assert_eq!(inv.bolt_count(GridSize::Small), 0);
        assert_eq!(events, vec![StructuralEvent::Removed]);
    }

    #[test]
    fn test_zero_requirement_block_starts_fastened() {
        let mut def = small_def();
        def.override_small_grid_bolts = 0;

        let block = Block::new(&def, GridSize::Small);
        assert_eq!(block.state(), StructuralState::Fastened);
        assert!(block.is_bolted());
    }
}
