//! Cleanup system: removes entities tagged as destroyed.

use hecs::{Entity, World};

use invaders_core::components::Destroyed;

/// Despawn every entity carrying the `Destroyed` tag.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, _destroyed) in world.query_mut::<&Destroyed>() {
        despawn_buffer.push(entity);
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
