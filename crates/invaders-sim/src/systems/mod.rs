//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components or is passed in.

pub mod animation;
pub mod cleanup;
pub mod collision;
pub mod formation;
pub mod movement;
pub mod player_control;
pub mod player_fire;
pub mod projectiles;
pub mod snapshot;
