//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Invader species, determined by formation row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InvaderKind {
    /// Back rank of the formation (row 0), farthest from the player.
    #[default]
    Top,
    /// Rows 1 and 2.
    Middle,
    /// Rows 3 and 4.
    Bottom,
}

impl InvaderKind {
    /// Kind for a formation row.
    pub fn for_row(row: u32) -> Self {
        match row {
            0 => InvaderKind::Top,
            1 | 2 => InvaderKind::Middle,
            _ => InvaderKind::Bottom,
        }
    }
}

/// Projectile kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectileKind {
    /// The player's shot. Only one is ever in flight.
    Bullet,
    /// Dropped by invaders.
    Missile,
}

/// Damage state of a shield block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockCondition {
    #[default]
    Intact,
    /// Hit once; the next hit destroys it.
    Damaged,
}

/// Lateral direction of the formation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    Left,
    #[default]
    Right,
}

impl MoveDirection {
    pub fn reversed(self) -> Self {
        match self {
            MoveDirection::Left => MoveDirection::Right,
            MoveDirection::Right => MoveDirection::Left,
        }
    }

    /// Sign of the x-axis step for this direction.
    pub fn sign(self) -> f32 {
        match self {
            MoveDirection::Left => -1.0,
            MoveDirection::Right => 1.0,
        }
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Every invader was destroyed.
    Victory,
    /// The last life was lost to a missile.
    LivesExhausted,
    /// The formation descended to the player's row.
    Overrun,
    /// An invader touched the player ship.
    Collision,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Title,
    Active,
    Paused,
    GameOver,
}
