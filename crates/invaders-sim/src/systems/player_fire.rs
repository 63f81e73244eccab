//! Player fire system: launches the single bullet from the ship.

use hecs::World;

use invaders_core::components::{Player, Projectile};
use invaders_core::constants::BULLET_SPEED;
use invaders_core::enums::ProjectileKind;
use invaders_core::events::GameEvent;
use invaders_core::types::{Position, Velocity};

use crate::engine::InputState;

/// Fire the bullet if the fire key is held and no bullet is in flight.
pub fn run(world: &mut World, input: &InputState, events: &mut Vec<GameEvent>) {
    if !input.fire {
        return;
    }

    let player_pos = match world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
    {
        Some(pos) => pos,
        None => return,
    };

    for (_entity, (projectile, pos, vel)) in
        world.query_mut::<(&mut Projectile, &mut Position, &mut Velocity)>()
    {
        if projectile.kind != ProjectileKind::Bullet || projectile.active {
            continue;
        }

        *pos = player_pos;
        *vel = Velocity::new(0.0, -BULLET_SPEED);
        projectile.active = true;
        events.push(GameEvent::ShotFired);
        break;
    }
}
