//! Player commands sent from the frontend to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use serde::{Deserialize, Serialize};

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    /// Current held-key state. Stays in effect until the next `SetInput`.
    SetInput { left: bool, right: bool, fire: bool },
    /// Build a fresh game and start playing (from the title or game-over screen).
    StartGame,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Abandon the current game and go back to the title screen.
    ReturnToTitle,
}
