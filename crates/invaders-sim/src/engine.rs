//! The simulation engine.
//!
//! `SimulationEngine` owns the hecs ECS world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless
//! (no windowing dependency), enabling deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use invaders_core::commands::PlayerCommand;
use invaders_core::enums::{GameOutcome, GamePhase};
use invaders_core::events::GameEvent;
use invaders_core::state::GameStateSnapshot;
use invaders_core::types::SimTime;

use crate::formation::FormationState;
use crate::score::ScoreState;
use crate::systems;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// Held-key state, as last reported by the frontend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    outcome: Option<GameOutcome>,
    input: InputState,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<GameEvent>,
    formation: FormationState,
    score: ScoreState,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            outcome: None,
            input: InputState::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            formation: FormationState::default(),
            score: ScoreState::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            // Systems see the 1-based number of the tick being simulated.
            self.time.advance();
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.outcome,
            events,
            &self.score,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// How the last game ended, if it has.
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world (for tests that stage collisions).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get a read-only reference to the score state.
    #[cfg(test)]
    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Get a mutable reference to the score state.
    #[cfg(test)]
    pub fn score_mut(&mut self) -> &mut ScoreState {
        &mut self.score
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::SetInput { left, right, fire } => {
                self.input = InputState { left, right, fire };
            }
            PlayerCommand::StartGame => {
                if matches!(self.phase, GamePhase::Title | GamePhase::GameOver) {
                    world_setup::setup_game(&mut self.world);
                    self.formation = FormationState::default();
                    self.score = ScoreState::default();
                    self.outcome = None;
                    self.time = SimTime::default();
                    self.phase = GamePhase::Active;
                    info!("game started");
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::ReturnToTitle => {
                if matches!(self.phase, GamePhase::Paused | GamePhase::GameOver) {
                    self.world.clear();
                    self.score = ScoreState::default();
                    self.outcome = None;
                    self.time = SimTime::default();
                    self.phase = GamePhase::Title;
                }
            }
        }
    }

    /// Run all systems in order. The first system to end the game stops the tick.
    fn run_systems(&mut self) {
        // 1. Player control
        systems::player_control::run(&mut self.world, &self.input);
        // 2. Player fire
        systems::player_fire::run(&mut self.world, &self.input, &mut self.events);
        // 3. Formation step + missile launches
        if let Some(outcome) = systems::formation::run(
            &mut self.world,
            &mut self.rng,
            &mut self.formation,
            self.time.tick,
            &mut self.events,
        ) {
            self.end_game(outcome);
            return;
        }
        // 4. Movement integration
        systems::movement::run(&mut self.world);
        // 5. Projectile bounds
        systems::projectiles::run_bounds(&mut self.world);
        // 6. Collisions
        let outcome = systems::collision::run(&mut self.world, &mut self.score, &mut self.events);
        // 7. Animation
        systems::animation::run(&mut self.world);
        // 8. Cleanup (destroyed invaders and shield blocks)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if let Some(outcome) = outcome {
            self.end_game(outcome);
        }
    }

    /// Freeze the game with the given outcome.
    fn end_game(&mut self, outcome: GameOutcome) {
        self.phase = GamePhase::GameOver;
        self.outcome = Some(outcome);
        self.events.push(GameEvent::GameOver { outcome });
        info!(
            ?outcome,
            score = self.score.score,
            lives = self.score.lives,
            tick = self.time.tick,
            "game over"
        );
    }
}
