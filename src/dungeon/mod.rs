//! Dungeon floors: encounter types and the floor resolver.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
