//! Balance simulator for Monte Carlo analysis.
//!
//! Runs many seeded playthroughs of a bot through real game sessions to see
//! how deep each race and class gets, how often it dies and how much gold it
//! keeps.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
