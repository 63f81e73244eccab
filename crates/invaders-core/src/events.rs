//! Events emitted by the simulation for HUD feedback and logging.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// Player bullet left the ship.
    ShotFired,
    /// An invader dropped a missile.
    MissileLaunched { x: f32, y: f32 },
    InvaderDestroyed { kind: InvaderKind, points: u32 },
    /// A shield block took its first hit.
    ShieldDamaged,
    /// A damaged shield block was shot away.
    ShieldDestroyed,
    PlayerHit { lives_remaining: u32 },
    /// The formation stepped; `dropped` is set when it also descended.
    FormationAdvanced {
        direction: MoveDirection,
        dropped: bool,
    },
    GameOver { outcome: GameOutcome },
}
