//! External collaborators: character store, leaderboard, and flavor text.

pub mod leaderboard;
pub mod narrator;
pub mod store;

pub use leaderboard::*;
pub use narrator::*;
pub use store::*;
