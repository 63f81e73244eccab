//! Projectile pool: missile launch, bounds checks, and deactivation.
//!
//! Projectiles are never despawned. A projectile that hits something or
//! leaves the playfield is deactivated and parked until reused.

use hecs::{Entity, World};

use invaders_core::components::Projectile;
use invaders_core::constants::{FIELD_HEIGHT, MISSILE_SPEED};
use invaders_core::enums::ProjectileKind;
use invaders_core::events::GameEvent;
use invaders_core::types::{Position, Velocity};

use crate::world_setup;

/// Launch a missile from `(x, y)`, reusing an inactive pooled missile if one exists.
pub fn launch_missile(world: &mut World, x: f32, y: f32, events: &mut Vec<GameEvent>) -> Entity {
    // Linear scan; the last inactive missile found wins.
    let mut reusable = None;
    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if projectile.kind == ProjectileKind::Missile && !projectile.active {
            reusable = Some(entity);
        }
    }

    let position = Position::new(x, y);
    let entity = match reusable {
        Some(entity) => {
            if let Ok((projectile, pos, vel)) =
                world.query_one_mut::<(&mut Projectile, &mut Position, &mut Velocity)>(entity)
            {
                projectile.active = true;
                *pos = position;
                *vel = Velocity::new(0.0, MISSILE_SPEED);
            }
            entity
        }
        None => world_setup::spawn_missile(world, position),
    };

    events.push(GameEvent::MissileLaunched { x, y });
    entity
}

/// Deactivate a projectile: it stops, stops colliding, and returns to the pool.
pub fn deactivate(world: &mut World, entity: Entity) {
    if let Ok((projectile, vel)) = world.query_one_mut::<(&mut Projectile, &mut Velocity)>(entity)
    {
        projectile.active = false;
        *vel = Velocity::zero();
    }
}

/// Deactivate the bullet once it passes the top edge and missiles once they
/// pass the bottom edge.
pub fn run_bounds(world: &mut World) {
    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &Position, &mut Velocity)>()
    {
        if !projectile.active {
            continue;
        }

        let out_of_bounds = match projectile.kind {
            ProjectileKind::Bullet => pos.y < 0.0,
            ProjectileKind::Missile => pos.y > FIELD_HEIGHT,
        };

        if out_of_bounds {
            projectile.active = false;
            *vel = Velocity::zero();
        }
    }
}

/// Number of missile entities in the pool, active or not.
pub fn missile_pool_size(world: &World) -> usize {
    world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, p)| p.kind == ProjectileKind::Missile)
        .count()
}
