//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks the player's ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Player;

/// Marks a formation invader.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Invader {
    pub kind: InvaderKind,
}

/// Grid slot an invader was spawned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FormationSlot {
    pub row: u32,
    pub column: u32,
}

/// Two-frame sprite cycle.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Animation {
    /// Index of the frame currently shown.
    pub frame: u8,
    /// Ticks spent on the current frame.
    pub elapsed_ticks: u32,
}

/// Pooled projectile. Inactive projectiles stay in the world, parked and
/// motionless, until the pool hands them out again.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    pub kind: ProjectileKind,
    pub active: bool,
}

/// A single block of a shield.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ShieldBlock {
    pub condition: BlockCondition,
}

/// Tags an entity for removal by the cleanup system.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Destroyed;
