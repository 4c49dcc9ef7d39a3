//! Combat resolution: the fight loop, fleeing, and victory rewards.

pub mod logic;
pub mod rewards;
pub mod types;

pub use logic::*;
pub use rewards::*;
pub use types::*;
