//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use invaders_core::components::*;
use invaders_core::enums::*;
use invaders_core::events::GameEvent;
use invaders_core::state::*;
use invaders_core::types::{Hitbox, Position, SimTime};

use crate::score::ScoreState;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    events: Vec<GameEvent>,
    score: &ScoreState,
) -> GameStateSnapshot {
    let (bullet, missiles) = build_projectiles(world);

    GameStateSnapshot {
        time: *time,
        phase,
        outcome,
        player: build_player(world),
        invaders: build_invaders(world),
        shield_blocks: build_shield_blocks(world),
        bullet,
        missiles,
        score: ScoreView {
            score: score.score,
            lives: score.lives,
            invaders_remaining: score.invaders_remaining,
        },
        events,
    }
}

fn build_player(world: &World) -> Option<PlayerView> {
    world
        .query::<(&Player, &Position, &Hitbox)>()
        .iter()
        .next()
        .map(|(_, (_, pos, hitbox))| PlayerView {
            position: *pos,
            width: hitbox.size().x,
            height: hitbox.size().y,
        })
}

/// Build InvaderView list in formation order.
fn build_invaders(world: &World) -> Vec<InvaderView> {
    let mut invaders: Vec<InvaderView> = world
        .query::<(&Invader, &FormationSlot, &Position, &Hitbox, &Animation)>()
        .iter()
        .map(|(_, (invader, slot, pos, hitbox, anim))| InvaderView {
            row: slot.row,
            column: slot.column,
            kind: invader.kind,
            position: *pos,
            frame: anim.frame,
            width: hitbox.size().x,
            height: hitbox.size().y,
        })
        .collect();

    invaders.sort_by_key(|i| (i.row, i.column));
    invaders
}

/// Build ShieldBlockView list, left to right then top to bottom.
fn build_shield_blocks(world: &World) -> Vec<ShieldBlockView> {
    let mut blocks: Vec<ShieldBlockView> = world
        .query::<(&ShieldBlock, &Position, &Hitbox)>()
        .iter()
        .map(|(_, (block, pos, hitbox))| ShieldBlockView {
            position: *pos,
            condition: block.condition,
            width: hitbox.size().x,
            height: hitbox.size().y,
        })
        .collect();

    blocks.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });
    blocks
}

/// Split active projectiles into the player bullet and invader missiles.
fn build_projectiles(world: &World) -> (Option<ProjectileView>, Vec<ProjectileView>) {
    let mut bullet = None;
    let mut missiles = Vec::new();

    for (_, (projectile, pos, hitbox)) in world
        .query::<(&Projectile, &Position, &Hitbox)>()
        .iter()
    {
        if !projectile.active {
            continue;
        }

        let view = ProjectileView {
            kind: projectile.kind,
            position: *pos,
            width: hitbox.size().x,
            height: hitbox.size().y,
        };
        match projectile.kind {
            ProjectileKind::Bullet => bullet = Some(view),
            ProjectileKind::Missile => missiles.push(view),
        }
    }

    missiles.sort_by(|a, b| {
        a.position
            .x
            .total_cmp(&b.position.x)
            .then(a.position.y.total_cmp(&b.position.y))
    });
    (bullet, missiles)
}
