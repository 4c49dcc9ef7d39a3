//! Turn-by-turn fight resolution and fleeing.

use super::rewards::claim_victory;
use super::types::{Burn, CombatOutcome, CombatResult, FleeOutcome, FleeResult};
use crate::character::{AttributeType, Character};
use crate::core::constants::*;
use crate::data::Race;
use crate::enemies::Enemy;
use rand::Rng;
use tracing::debug;

/// Damage of one blow after defense. Never below [`COMBAT_MIN_DAMAGE`].
pub fn hit_damage(attack: i32, defense: i32) -> u32 {
    attack.saturating_sub(defense).max(COMBAT_MIN_DAMAGE) as u32
}

/// Dragonborn opening breath. Uses base strength, not the resolved value.
pub fn breath_damage(level: u32, base_strength: i32) -> u32 {
    (level as f64 * DRAGONBORN_BREATH_PER_LEVEL + base_strength as f64 / DRAGONBORN_BREATH_STR_DIVISOR)
        .ceil()
        .max(0.0) as u32
}

/// Per-tick damage of a Dragonborn ignite.
pub fn burn_damage(level: u32, base_strength: i32) -> u32 {
    (level as f64 * DRAGONBORN_BURN_PER_LEVEL + base_strength as f64 / DRAGONBORN_BURN_STR_DIVISOR)
        .ceil()
        .max(0.0) as u32
}

pub fn dodge_chance(race: Race, luck: i32) -> f64 {
    let race_bonus = if race == Race::Elf { ELF_DODGE_BONUS } else { 0.0 };
    (DODGE_BASE_CHANCE + race_bonus + luck as f64 * DODGE_LUCK_MULT).min(DODGE_MAX_CHANCE)
}

pub fn flee_fail_chance(is_boss: bool, luck: i32) -> f64 {
    let base = if is_boss {
        FLEE_BOSS_FAIL_CHANCE
    } else {
        FLEE_FAIL_BASE_CHANCE
    };
    (base - luck as f64 * FLEE_LUCK_REDUCTION_PER_POINT).max(FLEE_MIN_FAIL_CHANCE)
}

/// A flee roll escapes only when it lands strictly above the fail chance.
pub fn flee_succeeds(roll: f64, fail_chance: f64) -> bool {
    roll > fail_chance
}

/// The player's strike for this round, including the Dragonborn opener.
fn player_strike(
    character: &Character,
    enemy: &Enemy,
    first_round: bool,
    burn: &mut Burn,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> u32 {
    let mut damage = hit_damage(character.derived.attack, enemy.defense);

    if first_round && character.race == Race::Dragonborn {
        let base_str = character.attributes.get(AttributeType::Strength);
        let breath = breath_damage(character.level, base_str);
        damage += breath;
        log.push(format!(
            "[Draconic Breath] You exhale a gout of flame for {} extra damage!",
            breath
        ));
        if rng.gen::<f64>() < DRAGONBORN_IGNITE_CHANCE {
            let per_tick = burn_damage(character.level, base_str);
            damage += per_tick;
            *burn = Burn {
                damage: per_tick,
                rounds_left: DRAGONBORN_BURN_ROUNDS,
            };
            log.push(format!("The {} is set ablaze!", enemy.name));
        }
    }

    damage
}

/// Fights `enemy` to the end. On victory every post-fight consequence is
/// already applied to `character`; on defeat the caller runs the death flow.
pub fn fight(character: &mut Character, mut enemy: Enemy, rng: &mut impl Rng) -> CombatOutcome {
    let mut log = Vec::new();
    let mut burn = Burn::default();
    let mut rounds = 0;

    while character.current_hp > 0 && enemy.is_alive() {
        character.recompute();
        let first_round = rounds == 0;
        rounds += 1;

        let damage = player_strike(character, &enemy, first_round, &mut burn, rng, &mut log);
        enemy.take_damage(damage);
        log.push(format!("You hit the {} for {} damage.", enemy.name, damage));
        if !enemy.is_alive() {
            break;
        }

        if let Some(tick) = burn.tick() {
            enemy.take_damage(tick);
            log.push(format!("The {} burns for {} damage.", enemy.name, tick));
            if !enemy.is_alive() {
                break;
            }
        }

        if rng.gen::<f64>() < dodge_chance(character.race, character.derived.luck) {
            log.push(format!("You dodged the {}'s attack!", enemy.name));
            continue;
        }

        let taken = hit_damage(enemy.attack, character.derived.defense);
        character.take_damage(taken);
        log.push(format!("The {} hits you for {} damage.", enemy.name, taken));
    }

    debug!(
        enemy = %enemy.name,
        rounds,
        player_hp = character.current_hp,
        won = !enemy.is_alive(),
        "fight resolved"
    );

    let result = if enemy.is_alive() {
        log.push(format!("You were overwhelmed by the {}.", enemy.name));
        CombatResult::Defeat {
            reason: format!("slain by a {}", enemy.name),
        }
    } else {
        CombatResult::Victory(claim_victory(character, &enemy, rng, &mut log))
    };

    CombatOutcome { result, rounds, log }
}

/// One attempt to run away. A failed attempt costs one enemy hit.
pub fn flee(character: &mut Character, enemy: &Enemy, rng: &mut impl Rng) -> FleeOutcome {
    let mut log = Vec::new();
    let fail_chance = flee_fail_chance(enemy.is_boss, character.derived.luck);

    if flee_succeeds(rng.gen::<f64>(), fail_chance) {
        log.push("You successfully escaped!".to_string());
        return FleeOutcome {
            result: FleeResult::Escaped,
            log,
        };
    }

    let damage = hit_damage(enemy.attack, character.derived.defense);
    character.take_damage(damage);
    log.push("Escape failed!".to_string());
    if !character.is_dead() {
        log.push(format!("The {} hits you for {} damage.", enemy.name, damage));
    }
    FleeOutcome {
        result: FleeResult::Caught { damage },
        log,
    }
}
