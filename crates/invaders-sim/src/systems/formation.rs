//! Formation system: steps the invaders and rolls for missile launches.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use invaders_core::components::{Invader, Player};
use invaders_core::enums::GameOutcome;
use invaders_core::events::GameEvent;
use invaders_core::types::Position;

use crate::formation::{self, FormationState};
use crate::systems::projectiles;

/// Advance the formation if a step is due on this tick.
///
/// Returns `Overrun` if a drop brought any invader down to the player's row.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    state: &mut FormationState,
    tick: u64,
    events: &mut Vec<GameEvent>,
) -> Option<GameOutcome> {
    let update = formation::evaluate(tick, state.direction)?;
    state.direction = update.direction;

    let player_y = world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| pos.y);

    let mut overrun = false;
    let mut launches = Vec::new();

    for (_entity, (_invader, pos)) in world.query_mut::<(&Invader, &mut Position)>() {
        if update.dropped {
            pos.y += update.dy;
            if player_y.is_some_and(|y| pos.y >= y) {
                overrun = true;
            }
        }

        pos.x += update.dx;
        if formation::missile_roll(rng) {
            launches.push(*pos);
        }
    }

    for pos in launches {
        projectiles::launch_missile(world, pos.x, pos.y, events);
    }

    if update.dropped {
        debug!(tick, direction = ?update.direction, "formation dropped and reversed");
    }

    events.push(GameEvent::FormationAdvanced {
        direction: update.direction,
        dropped: update.dropped,
    });

    overrun.then_some(GameOutcome::Overrun)
}
