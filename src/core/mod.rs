//! Core game state and logic.

pub mod actions;
pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod progression;

pub use actions::*;
pub use config::*;
pub use constants::*;
pub use error::*;
pub use game_state::*;
pub use progression::*;
