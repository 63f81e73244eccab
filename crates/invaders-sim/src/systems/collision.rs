//! Collision system: AABB overlap checks between gameplay entities.
//!
//! Pairs are resolved in a fixed order each tick:
//! player×invader, invader×bullet, bullet×shield, missile×shield, player×missile.
//! Entities destroyed or deactivated earlier in the tick take no further part.

use hecs::{Entity, World};
use tracing::debug;

use invaders_core::components::*;
use invaders_core::constants::INVADER_POINTS;
use invaders_core::enums::*;
use invaders_core::events::GameEvent;
use invaders_core::types::{Hitbox, Position};

use crate::score::ScoreState;
use crate::systems::projectiles;

/// Collision-relevant view of one entity, captured at the start of the pass.
#[derive(Debug, Clone, Copy)]
struct Body<T> {
    entity: Entity,
    pos: Position,
    hitbox: Hitbox,
    data: T,
    live: bool,
}

impl<T> Body<T> {
    fn overlaps<U>(&self, other: &Body<U>) -> bool {
        self.live
            && other.live
            && Hitbox::overlaps(&self.pos, &self.hitbox, &other.pos, &other.hitbox)
    }
}

/// Resolve all collisions for this tick. Returns the outcome if the game ended.
pub fn run(
    world: &mut World,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> Option<GameOutcome> {
    let player = world
        .query::<(&Player, &Position, &Hitbox)>()
        .iter()
        .next()
        .map(|(entity, (_, pos, hitbox))| Body {
            entity,
            pos: *pos,
            hitbox: *hitbox,
            data: (),
            live: true,
        });

    // Formation order, so the front-most invader in a column is hit first on ties.
    let mut slotted: Vec<(FormationSlot, Body<InvaderKind>)> = world
        .query::<(&Invader, &FormationSlot, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (invader, slot, pos, hitbox))| {
            (
                *slot,
                Body {
                    entity,
                    pos: *pos,
                    hitbox: *hitbox,
                    data: invader.kind,
                    live: true,
                },
            )
        })
        .collect();
    slotted.sort_by(|a, b| b.0.cmp(&a.0));
    let mut invaders: Vec<Body<InvaderKind>> = slotted.into_iter().map(|(_, body)| body).collect();

    let mut blocks: Vec<Body<BlockCondition>> = world
        .query::<(&ShieldBlock, &Position, &Hitbox)>()
        .iter()
        .map(|(entity, (block, pos, hitbox))| Body {
            entity,
            pos: *pos,
            hitbox: *hitbox,
            data: block.condition,
            live: true,
        })
        .collect();

    let mut projectiles_in_flight: Vec<Body<ProjectileKind>> = world
        .query::<(&Projectile, &Position, &Hitbox)>()
        .iter()
        .filter(|(_, (projectile, _, _))| projectile.active)
        .map(|(entity, (projectile, pos, hitbox))| Body {
            entity,
            pos: *pos,
            hitbox: *hitbox,
            data: projectile.kind,
            live: true,
        })
        .collect();

    // 1. Player × invader
    if let Some(player) = &player {
        if invaders.iter().any(|invader| player.overlaps(invader)) {
            return Some(GameOutcome::Collision);
        }
    }

    let mut outcome = None;

    // 2. Invader × bullet
    for bullet in projectiles_in_flight
        .iter_mut()
        .filter(|p| p.data == ProjectileKind::Bullet)
    {
        let Some(invader) = invaders.iter_mut().find(|invader| invader.overlaps(&*bullet)) else {
            continue;
        };

        invader.live = false;
        bullet.live = false;
        let _ = world.insert_one(invader.entity, Destroyed);
        projectiles::deactivate(world, bullet.entity);

        let cleared = score.invader_destroyed(INVADER_POINTS);
        events.push(GameEvent::InvaderDestroyed {
            kind: invader.data,
            points: INVADER_POINTS,
        });
        debug!(kind = ?invader.data, score = score.score, "invader destroyed");

        if cleared {
            outcome.get_or_insert(GameOutcome::Victory);
        }
    }

    // 3. Bullet × shield, then 4. missile × shield
    for kind in [ProjectileKind::Bullet, ProjectileKind::Missile] {
        for projectile in projectiles_in_flight.iter_mut().filter(|p| p.data == kind) {
            let Some(block) = blocks.iter_mut().find(|block| block.overlaps(&*projectile)) else {
                continue;
            };

            projectile.live = false;
            projectiles::deactivate(world, projectile.entity);
            damage_block(world, block, events);
        }
    }

    // 5. Player × missile
    if let Some(player) = &player {
        for missile in projectiles_in_flight
            .iter_mut()
            .filter(|p| p.data == ProjectileKind::Missile)
        {
            if !player.overlaps(&*missile) {
                continue;
            }

            missile.live = false;
            projectiles::deactivate(world, missile.entity);

            let out_of_lives = score.life_lost();
            events.push(GameEvent::PlayerHit {
                lives_remaining: score.lives,
            });
            debug!(lives = score.lives, "player hit");

            if out_of_lives {
                outcome.get_or_insert(GameOutcome::LivesExhausted);
                break;
            }
        }
    }

    outcome
}

/// Apply one hit to a shield block: intact blocks crack, cracked blocks go.
fn damage_block(world: &mut World, block: &mut Body<BlockCondition>, events: &mut Vec<GameEvent>) {
    match block.data {
        BlockCondition::Intact => {
            block.data = BlockCondition::Damaged;
            if let Ok(mut shield) = world.get::<&mut ShieldBlock>(block.entity) {
                shield.condition = BlockCondition::Damaged;
            }
            events.push(GameEvent::ShieldDamaged);
        }
        BlockCondition::Damaged => {
            block.live = false;
            let _ = world.insert_one(block.entity, Destroyed);
            events.push(GameEvent::ShieldDestroyed);
        }
    }
}
