//! Keyboard mapping and edge detection.
//!
//! `read_keys` samples macroquad once per frame; `InputTracker` turns those
//! samples into the commands the simulation understands.

use invaders_core::commands::PlayerCommand;
use invaders_core::enums::GamePhase;
use macroquad::input::{is_key_down, is_key_pressed, KeyCode};

/// One frame of keyboard state. Held keys for movement and fire,
/// presses for menu actions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub fire: bool,
    pub start: bool,
    pub pause: bool,
    pub back: bool,
}

pub fn read_keys() -> KeyState {
    KeyState {
        left: is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::D),
        fire: is_key_down(KeyCode::Space),
        start: is_key_pressed(KeyCode::Enter),
        pause: is_key_pressed(KeyCode::P),
        back: is_key_pressed(KeyCode::Escape),
    }
}

/// Remembers the last held-key state sent so `SetInput` goes out only on change.
#[derive(Debug, Default)]
pub struct InputTracker {
    sent: Option<(bool, bool, bool)>,
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands for this frame, given the phase of the latest snapshot.
    pub fn update(&mut self, keys: KeyState, phase: GamePhase) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();

        match phase {
            GamePhase::Title | GamePhase::GameOver => {
                if keys.start {
                    commands.push(PlayerCommand::StartGame);
                } else if keys.back && phase == GamePhase::GameOver {
                    commands.push(PlayerCommand::ReturnToTitle);
                }
            }
            GamePhase::Active => {
                if keys.pause {
                    commands.push(PlayerCommand::Pause);
                }
            }
            GamePhase::Paused => {
                if keys.pause {
                    commands.push(PlayerCommand::Resume);
                } else if keys.back {
                    commands.push(PlayerCommand::ReturnToTitle);
                }
            }
        }

        let held = (keys.left, keys.right, keys.fire);
        if self.sent != Some(held) {
            self.sent = Some(held);
            commands.push(PlayerCommand::SetInput {
                left: keys.left,
                right: keys.right,
                fire: keys.fire,
            });
        }

        commands
    }
}
