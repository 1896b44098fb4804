//! Structural Events
//!
//! Signals emitted by blocks to the world/physics collaborator. The core
//! holds no physics or scene handles; collaborators subscribe to these
//! instead and own any continuous animation or actual object removal.

/// Shake advisory intensity reported when a block enters the loose state.
pub const LOOSE_SHAKE_INTENSITY: f32 = 0.5;

/// Fraction of incoming damage reported as instability while loose.
pub const LOOSE_DAMAGE_IMPULSE_SCALE: f32 = 0.5;

/// Explosion force the world should apply when a block is destroyed.
pub const DESTRUCTION_EXPLOSION_FORCE: f32 = 200.0;

/// Explosion radius for block destruction.
pub const DESTRUCTION_EXPLOSION_RADIUS: f32 = 3.0;

/// Seconds the world keeps destroyed debris around before removing it.
pub const DEBRIS_REMOVAL_DELAY_SECONDS: f32 = 5.0;

/// Signals from the block core to its world/physics collaborators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StructuralEvent {
    /// Block should become physically reactive (loose: may jiggle or fall)
    BecameReactive,
    /// Block should become static again (fully bolted down)
    BecameStatic,
    /// Instability advisory; intensity drives shake/impulse effects
    Instability { intensity: f32 },
    /// Block destroyed. The world applies the explosion and removes the
    /// debris after the delay.
    Destroyed {
        explosion_force: f32,
        explosion_radius: f32,
        removal_delay_seconds: f32,
    },
    /// Block dismantled; the world removes it immediately
    Removed,
}
