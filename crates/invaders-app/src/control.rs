//! Render-loop side of the game loop thread.
//!
//! These functions are called once per frame by `main`. They bridge input and
//! drawing to the game loop thread via channels.

use invaders_core::commands::PlayerCommand;
use invaders_core::state::GameStateSnapshot;
use invaders_sim::engine::SimConfig;
use tracing::{info, warn};

use crate::error::AppError;
use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation(state: &AppState, config: SimConfig) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;

    if *running {
        return Err(AppError::SimulationAlreadyRunning);
    }

    let (cmd_tx, handle) = game_loop::spawn_game_loop(config, state.latest_snapshot.clone())?;

    *state.command_tx.lock().map_err(|_| AppError::LockPoisoned)? = Some(cmd_tx);
    *state.loop_handle.lock().map_err(|_| AppError::LockPoisoned)? = Some(handle);
    *running = true;

    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<(), AppError> {
    let tx_lock = state.command_tx.lock().map_err(|_| AppError::LockPoisoned)?;

    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .map_err(|_| AppError::ChannelClosed),
        None => Err(AppError::SimulationNotStarted),
    }
}

/// Latest published snapshot, if the loop has ticked at least once.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>, AppError> {
    let lock = state
        .latest_snapshot
        .lock()
        .map_err(|_| AppError::LockPoisoned)?;
    Ok(lock.clone())
}

/// Ask the game loop to exit and join its thread. No-op when not running.
pub fn stop_simulation(state: &AppState) -> Result<(), AppError> {
    let mut running = state.running.lock().map_err(|_| AppError::LockPoisoned)?;
    if !*running {
        return Ok(());
    }

    if let Some(tx) = state
        .command_tx
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take()
    {
        // The loop may already be gone; joining below still succeeds.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }

    let handle = state
        .loop_handle
        .lock()
        .map_err(|_| AppError::LockPoisoned)?
        .take();
    if let Some(handle) = handle {
        if handle.join().is_err() {
            warn!("game loop thread panicked");
        }
    }

    *running = false;
    info!("simulation stopped");
    Ok(())
}
