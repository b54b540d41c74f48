//! # Life Rules
//!
//! The rules crate for the Game of Life - players, buffs, stat deltas and the
//! subscriber interface that actions use to change a player.
//! This crate holds no I/O and no randomness; the game crate drives it.

pub mod entities;
pub mod error;
pub mod mechanics;
pub mod world_state;

pub use entities::*;
pub use error::*;
pub use mechanics::*;
pub use world_state::*;
