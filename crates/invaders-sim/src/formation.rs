//! Invader formation timing and layout.
//!
//! Pure functions that decide when and how far the formation moves and
//! where each invader starts. No ECS dependency; operates on plain data.

use rand::Rng;

use invaders_core::components::FormationSlot;
use invaders_core::constants::*;
use invaders_core::enums::{InvaderKind, MoveDirection};
use invaders_core::types::Position;

/// Movement to apply to every live invader on a formation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormationUpdate {
    /// Direction after this step (reversed if the formation dropped).
    pub direction: MoveDirection,
    pub dx: f32,
    pub dy: f32,
    pub dropped: bool,
}

/// Formation movement state carried between ticks.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormationState {
    pub direction: MoveDirection,
}

/// Evaluate the formation timer for the given tick.
///
/// Steps happen every `FORMATION_STEP_INTERVAL` ticks. Every
/// `FORMATION_REVERSE_INTERVAL` ticks the step also drops the formation
/// and reverses direction before moving sideways.
pub fn evaluate(tick: u64, direction: MoveDirection) -> Option<FormationUpdate> {
    if tick == 0 || !tick.is_multiple_of(FORMATION_STEP_INTERVAL) {
        return None;
    }

    let dropped = tick.is_multiple_of(FORMATION_REVERSE_INTERVAL);
    let direction = if dropped {
        direction.reversed()
    } else {
        direction
    };

    Some(FormationUpdate {
        direction,
        dx: FORMATION_STEP * direction.sign(),
        dy: if dropped { FORMATION_DROP } else { 0.0 },
        dropped,
    })
}

/// Roll whether one invader launches a missile on this step.
/// Two independent draws from `0..=MISSILE_ROLL_MAX` must match.
pub fn missile_roll<R: Rng>(rng: &mut R) -> bool {
    let a = rng.gen_range(0..=MISSILE_ROLL_MAX);
    let b = rng.gen_range(0..=MISSILE_ROLL_MAX);
    a == b
}

/// Formation slot for the invader with spawn index `index` (row-major).
pub fn slot(index: u32) -> FormationSlot {
    FormationSlot {
        row: index / FORMATION_COLUMNS,
        column: index % FORMATION_COLUMNS,
    }
}

/// Spawn position for a formation slot.
pub fn spawn_position(slot: FormationSlot) -> Position {
    Position::new(
        FORMATION_COLUMN_SPACING * (slot.column + 1) as f32,
        FORMATION_TOP_Y + FORMATION_ROW_SPACING * slot.row as f32,
    )
}

/// Kind of invader that occupies a slot.
pub fn kind_for(slot: FormationSlot) -> InvaderKind {
    InvaderKind::for_row(slot.row)
}
