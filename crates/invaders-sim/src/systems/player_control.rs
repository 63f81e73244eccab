//! Player control system: turns held direction keys into ship velocity.

use hecs::World;

use invaders_core::components::Player;
use invaders_core::constants::{PLAYER_MAX_X, PLAYER_MIN_X, PLAYER_SPEED};
use invaders_core::types::{Position, Velocity};

use crate::engine::InputState;

/// Set the ship's horizontal velocity from the held keys.
///
/// Holding both directions leaves the current velocity untouched.
pub fn run(world: &mut World, input: &InputState) {
    for (_entity, (_player, pos, vel)) in
        world.query_mut::<(&Player, &Position, &mut Velocity)>()
    {
        match (input.left, input.right) {
            (true, false) => {
                vel.x = if pos.x > PLAYER_MIN_X {
                    -PLAYER_SPEED
                } else {
                    0.0
                };
            }
            (false, true) => {
                vel.x = if pos.x < PLAYER_MAX_X {
                    PLAYER_SPEED
                } else {
                    0.0
                };
            }
            (false, false) => vel.x = 0.0,
            (true, true) => {}
        }
    }
}
