//! Simulation configuration.

use crate::data::{Class, Race};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulated characters
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Session operations per character before the run is cut off
    pub max_actions_per_run: u32,

    pub race: Race,
    pub class: Class,

    /// Drink a potion between floors below this HP fraction
    pub heal_threshold: f64,

    /// Head back to the shop below this HP fraction when out of potions
    pub retreat_threshold: f64,

    /// Potions the bot keeps in its bag after shopping
    pub potions_to_stock: usize,

    /// Log verbosity (2 = print every run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_actions_per_run: 2_000,
            race: Race::Human,
            class: Class::Fighter,
            heal_threshold: 0.35,
            retreat_threshold: 0.5,
            potions_to_stock: 3,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small seeded run for smoke tests
    pub fn quick_check(seed: u64) -> Self {
        Self {
            num_runs: 5,
            seed: Some(seed),
            max_actions_per_run: 400,
            verbosity: 0,
            ..Default::default()
        }
    }

    /// Compare one race/class build against the default policy
    pub fn build_comparison(race: Race, class: Class) -> Self {
        Self {
            num_runs: 200,
            race,
            class,
            ..Default::default()
        }
    }

    /// Bot that never retreats and carries no spare potions
    pub fn reckless(num_runs: u32) -> Self {
        Self {
            num_runs,
            heal_threshold: 0.0,
            retreat_threshold: 0.0,
            potions_to_stock: 0,
            ..Default::default()
        }
    }
}
