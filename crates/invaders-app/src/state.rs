//! What the render loop keeps between frames to talk to the simulation thread.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use invaders_core::commands::PlayerCommand;
use invaders_core::state::GameStateSnapshot;

/// Messages on the render loop → game loop channel.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Queued on the engine and applied at the next tick.
    PlayerCommand(PlayerCommand),
    /// Stop ticking and let the thread exit.
    Shutdown,
}

/// Handles to a (possibly not yet started) game loop thread.
///
/// Every field sits behind a lock so `control` can take `&AppState`.
/// The snapshot slot is the one piece the game loop thread also holds.
pub struct AppState {
    /// Filled by `start_simulation`, taken by `stop_simulation`.
    pub command_tx: Mutex<Option<mpsc::Sender<GameLoopCommand>>>,
    /// Overwritten after every tick; the render loop draws whatever is here.
    pub latest_snapshot: Arc<Mutex<Option<GameStateSnapshot>>>,
    /// Joined on shutdown.
    pub loop_handle: Mutex<Option<JoinHandle<()>>>,
    pub running: Mutex<bool>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            command_tx: Mutex::new(None),
            latest_snapshot: Arc::new(Mutex::new(None)),
            loop_handle: Mutex::new(None),
            running: Mutex::new(false),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}
