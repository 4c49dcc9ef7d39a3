//! Drives real [`GameSession`]s with a simple bot policy.
//!
//! The bot only uses the public session API, so every rule it runs into is the
//! same one a player would.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::character::Character;
use crate::core::{Action, GameSession, Phase, Services};
use crate::shop::{buy_price, repair_all_cost};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::warn;

const SIM_USER: &str = "simbot";

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let stats = simulate_single_run(config, rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Level {}, Deepest Dungeon {}, Cleared {}, Fights Won {}, Deaths {}",
                run_idx + 1,
                config.num_runs,
                stats.final_level,
                stats.deepest_dungeon,
                stats.dungeons_completed,
                stats.fights_won,
                stats.deaths
            );
        }
        all_runs.push(stats);
    }

    SimReport::from_runs(all_runs)
}

fn simulate_single_run(config: &SimConfig, rng: StdRng) -> RunStats {
    let mut services = Services::in_memory();
    if let Err(e) = services.store.register(SIM_USER, SIM_USER) {
        warn!(error = %e, "simulation account could not be registered");
    }
    let character = match Character::create("Simbot", config.race, config.class) {
        Ok(c) => c,
        Err(e) => {
            warn!(error = %e, "simulation character could not be created");
            return RunStats::default();
        }
    };

    let mut session = GameSession::new(character, SIM_USER, services, rng);
    session.start();

    let mut stats = RunStats {
        deepest_dungeon: session.dungeon_level(),
        ..Default::default()
    };

    while stats.actions_taken < config.max_actions_per_run {
        match session.phase() {
            Phase::Shop => {
                stats.actions_taken += shop_visit(&mut session, config);
                let _ = session.enter_dungeon();
            }
            Phase::DungeonCleared => {
                if should_retreat(&session, config) {
                    let _ = session.return_to_shop();
                } else {
                    let _ = session.proceed_to_next_dungeon();
                }
            }
            Phase::Dungeon => {
                if session.encounter().is_combat() {
                    let deaths_before = session.deaths();
                    let _ = session.fight();
                    if session.deaths() == deaths_before {
                        stats.fights_won += 1;
                    }
                } else if hp_fraction(session.character()) < config.heal_threshold
                    && potion_index(session.character()).is_some()
                {
                    drink_potion(&mut session);
                } else if session.floor_depth() > 0 && should_retreat(&session, config) {
                    let _ = session.return_to_shop();
                } else {
                    let _ = session.explore();
                }
            }
        }
        stats.actions_taken += 1;
        stats.deepest_dungeon = stats.deepest_dungeon.max(session.dungeon_level());
    }

    let character = session.character();
    stats.final_level = character.level;
    stats.final_gold = character.wallet_gold + character.vault_gold;
    stats.dungeons_completed = character.dungeons_completed;
    stats.deaths = session.deaths();
    stats
}

/// Spends points, repairs, tops up HP and buys potions. Returns the number of
/// session calls made.
fn shop_visit(session: &mut GameSession, config: &SimConfig) -> u32 {
    let mut calls = 0;

    while session.character().stat_points > 0 {
        let attr = session.character().attributes.lowest();
        calls += 1;
        if session.perform(Action::AllocatePoint(attr)).is_err() {
            break;
        }
    }

    let cost = repair_all_cost(session.character());
    if cost > 0 && session.character().wallet_gold >= cost {
        calls += 1;
        let _ = session.perform(Action::RepairAll);
    }

    while session.character().current_hp < session.character().derived.max_hp {
        let Some(index) = potion_index(session.character()) else {
            break;
        };
        calls += 1;
        if session.perform(Action::UseItem(index)).is_err() {
            break;
        }
    }

    while potion_count(session.character()) < config.potions_to_stock {
        let Some(id) = cheapest_potion(session) else {
            break;
        };
        calls += 1;
        if session.perform(Action::Buy(id)).is_err() {
            break;
        }
    }

    calls
}

fn drink_potion(session: &mut GameSession) {
    if let Some(index) = potion_index(session.character()) {
        let _ = session.perform(Action::UseItem(index));
    }
}

/// Low on HP with nothing to drink but enough gold to buy something.
fn should_retreat(session: &GameSession, config: &SimConfig) -> bool {
    hp_fraction(session.character()) < config.retreat_threshold
        && potion_index(session.character()).is_none()
        && cheapest_potion(session).is_some()
}

fn cheapest_potion(session: &GameSession) -> Option<crate::data::ItemId> {
    let wallet = session.character().wallet_gold;
    session
        .shop_stock()
        .iter()
        .copied()
        .filter(|id| id.definition().is_healing())
        .filter(|id| buy_price(&id.definition()) <= wallet)
        .min_by_key(|id| buy_price(&id.definition()))
}

fn hp_fraction(character: &Character) -> f64 {
    if character.derived.max_hp == 0 {
        return 0.0;
    }
    character.current_hp as f64 / character.derived.max_hp as f64
}

fn potion_index(character: &Character) -> Option<usize> {
    character
        .bag
        .iter()
        .position(|item| item.definition().is_healing())
}

fn potion_count(character: &Character) -> usize {
    character
        .bag
        .iter()
        .filter(|item| item.definition().is_healing())
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_simulation_is_reproducible() {
        let config = SimConfig::quick_check(12345);
        let a = run_simulation(&config);
        let b = run_simulation(&config);
        assert_eq!(a.runs, b.runs);
        assert_eq!(a.num_runs, 5);
    }

    #[test]
    fn test_runs_respect_action_budget() {
        let config = SimConfig {
            num_runs: 2,
            seed: Some(1),
            max_actions_per_run: 50,
            verbosity: 0,
            ..Default::default()
        };
        let report = run_simulation(&config);
        for run in &report.runs {
            assert!(run.final_level >= 1);
            assert!(run.deepest_dungeon >= 1);
            // One shop visit may overshoot by its own calls
            assert!(run.actions_taken >= 50);
        }
    }

    #[test]
    fn test_hp_fraction() {
        let mut c = Character::create("Frac", crate::data::Race::Human, crate::data::Class::Fighter).unwrap();
        c.current_hp = c.derived.max_hp / 2;
        let frac = hp_fraction(&c);
        assert!(frac > 0.4 && frac <= 0.5);
    }
}
