use std::io;

use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to load config: {0}")]
    Config(#[from] ConfigError),
    #[error("simulation already running")]
    SimulationAlreadyRunning,
    #[error("simulation not started")]
    SimulationNotStarted,
    #[error("game loop channel closed")]
    ChannelClosed,
    #[error("failed to spawn game loop thread: {0}")]
    Spawn(#[source] io::Error),
    #[error("shared state lock poisoned")]
    LockPoisoned,
}
