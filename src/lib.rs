//! Delve - Dungeon Crawler Game Engine
//!
//! Character building, enemy scaling, combat, traps and treasure, durability
//! and the shop economy, plus the session that strings them together. Storage,
//! the leaderboard and flavor text sit behind traits in [`services`].

pub mod character;
pub mod combat;
pub mod core;
pub mod data;
pub mod dungeon;
pub mod enemies;
pub mod items;
pub mod services;
pub mod shop;
pub mod simulator;
