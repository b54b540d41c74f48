//! # Life Game
//!
//! The playable side of the Game of Life. Actions are trait objects bound to
//! menu commands; each one reaches a player only through
//! [`life_rules::ActionSubscriber`].
//!
//! ## Core Components
//!
//! - **actions**: `Move`, `Jog`, `MountainJog` and `AdminSuicide`
//! - **game**: the command menu and the turn loop
//! - **rng**: seeded randomness so games can be replayed
//! - **config**: defaults, TOML file and CLI overrides

pub mod actions;
pub mod cli;
pub mod config;
pub mod error;
pub mod game;
pub mod rng;

pub use actions::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use rng::*;
