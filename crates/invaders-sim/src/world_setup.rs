//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship, the invader formation, shields, and the
//! projectile pool entries with appropriate component bundles.

use hecs::{Entity, World};

use invaders_core::components::*;
use invaders_core::constants::*;
use invaders_core::enums::*;
use invaders_core::types::{Hitbox, Position, Velocity};

use crate::formation;

/// Set up a fresh game world: shields, player, formation, and the parked bullet.
pub fn setup_game(world: &mut World) {
    world.clear();
    spawn_shields(world);
    spawn_player(world);
    spawn_formation(world);
    spawn_bullet(world);
}

/// Spawn the player's ship at its start position, at rest.
pub fn spawn_player(world: &mut World) -> Entity {
    world.spawn((
        Player,
        Position::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
        Velocity::zero(),
        Hitbox::from_size(PLAYER_WIDTH, PLAYER_HEIGHT),
    ))
}

/// Spawn all 55 invaders in row-major order.
pub fn spawn_formation(world: &mut World) {
    for index in 0..INVADER_COUNT {
        spawn_invader(world, formation::slot(index));
    }
}

/// Spawn one invader into a formation slot.
pub fn spawn_invader(world: &mut World, slot: FormationSlot) -> Entity {
    world.spawn((
        Invader {
            kind: formation::kind_for(slot),
        },
        slot,
        formation::spawn_position(slot),
        Hitbox::from_size(INVADER_WIDTH, INVADER_HEIGHT),
        Animation::default(),
    ))
}

/// Spawn the four shields, each an arch of blocks.
pub fn spawn_shields(world: &mut World) {
    for &origin_x in &SHIELD_ORIGINS_X {
        for &(dx, dy) in &SHIELD_LAYOUT {
            spawn_shield_block(world, Position::new(origin_x + dx, SHIELD_BASE_Y + dy));
        }
    }
}

pub fn spawn_shield_block(world: &mut World, position: Position) -> Entity {
    world.spawn((
        ShieldBlock::default(),
        position,
        Hitbox::from_size(BLOCK_WIDTH, BLOCK_HEIGHT),
    ))
}

/// Spawn the player's bullet, parked and inactive until first fire.
pub fn spawn_bullet(world: &mut World) -> Entity {
    world.spawn((
        Projectile {
            kind: ProjectileKind::Bullet,
            active: false,
        },
        Position::default(),
        Velocity::zero(),
        Hitbox::from_size(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
    ))
}

/// Spawn a new active missile heading down from `position`.
pub fn spawn_missile(world: &mut World, position: Position) -> Entity {
    world.spawn((
        Projectile {
            kind: ProjectileKind::Missile,
            active: true,
        },
        position,
        Velocity::new(0.0, MISSILE_SPEED),
        Hitbox::from_size(PROJECTILE_WIDTH, PROJECTILE_HEIGHT),
    ))
}
