//! Game state snapshot: the complete visible state handed to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime};

/// Complete game state published after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    /// Set once the game has ended.
    pub outcome: Option<GameOutcome>,
    /// Absent on the title screen.
    pub player: Option<PlayerView>,
    pub invaders: Vec<InvaderView>,
    pub shield_blocks: Vec<ShieldBlockView>,
    /// The player bullet, when in flight.
    pub bullet: Option<ProjectileView>,
    /// Missiles currently in flight.
    pub missiles: Vec<ProjectileView>,
    pub score: ScoreView,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvaderView {
    pub row: u32,
    pub column: u32,
    pub kind: InvaderKind,
    pub position: Position,
    /// Animation frame index.
    pub frame: u8,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShieldBlockView {
    pub position: Position,
    pub condition: BlockCondition,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub kind: ProjectileKind,
    pub position: Position,
    pub width: f32,
    pub height: f32,
}

/// Score and lives for the HUD.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreView {
    pub score: u32,
    pub lives: u32,
    pub invaders_remaining: u32,
}
