//! Windowed frontend for the invaders simulation.
//!
//! This crate runs the engine on its own thread and drives it from a
//! macroquad render loop: keyboard in, snapshots out.

pub mod assets;
pub mod config;
pub mod control;
pub mod error;
pub mod game_loop;
pub mod input;
pub mod logging;
pub mod render;
pub mod state;

pub use invaders_core as core;
