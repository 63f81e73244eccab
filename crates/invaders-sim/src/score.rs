//! Score and lives, the counters the HUD shows.
//!
//! Owned by `SimulationEngine`, NOT stored as ECS components.

use invaders_core::constants::{INVADER_COUNT, STARTING_LIVES};

/// Running score state tracked by the engine.
#[derive(Debug, Clone)]
pub struct ScoreState {
    pub score: u32,
    pub lives: u32,
    pub invaders_remaining: u32,
}

impl Default for ScoreState {
    fn default() -> Self {
        Self {
            score: 0,
            lives: STARTING_LIVES,
            invaders_remaining: INVADER_COUNT,
        }
    }
}

impl ScoreState {
    /// Record a destroyed invader. Returns `true` when none remain.
    pub fn invader_destroyed(&mut self, points: u32) -> bool {
        self.score = self.score.saturating_add(points);
        self.invaders_remaining = self.invaders_remaining.saturating_sub(1);
        self.invaders_remaining == 0
    }

    /// Record a hit on the player. Returns `true` when no lives remain.
    pub fn life_lost(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }
}
