//! Animation system: cycles invader sprite frames.

use hecs::World;

use invaders_core::components::{Animation, Invader};
use invaders_core::constants::{INVADER_FRAME_COUNT, INVADER_FRAME_TICKS};

pub fn run(world: &mut World) {
    for (_entity, (_invader, anim)) in world.query_mut::<(&Invader, &mut Animation)>() {
        anim.elapsed_ticks += 1;
        if anim.elapsed_ticks >= INVADER_FRAME_TICKS {
            anim.elapsed_ticks = 0;
            anim.frame = (anim.frame + 1) % INVADER_FRAME_COUNT;
        }
    }
}
