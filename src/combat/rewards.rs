//! What happens after the enemy falls: feast, wear, XP, gold, loot, level-ups.

use super::types::VictoryReport;
use crate::character::{apply_level_ups, Character};
use crate::core::constants::*;
use crate::data::Race;
use crate::enemies::Enemy;
use crate::items::{wear_equipment, ItemInstance};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Tiefling feast heal for killing an enemy with `enemy_max_hp`.
pub fn feast_heal(enemy_max_hp: u32) -> u32 {
    (enemy_max_hp as f64 * TIEFLING_FEAST_FRACTION).ceil() as u32
}

pub fn victory_xp(enemy_xp: u64, xp_bonus: f64, race: Race) -> u64 {
    let race_mult = if race == Race::Human { HUMAN_XP_MULT } else { 1.0 };
    (enemy_xp as f64 * (1.0 + xp_bonus) * race_mult).floor() as u64
}

pub fn victory_gold(enemy_gold: u64, gold_bonus: f64, luck: i32) -> u64 {
    let mult = 1.0 + gold_bonus + luck as f64 * LUCK_GOLD_BONUS;
    (enemy_gold as f64 * mult).floor().max(0.0) as u64
}

/// Applies every post-victory consequence to `character`, in order.
pub fn claim_victory(
    character: &mut Character,
    enemy: &Enemy,
    rng: &mut impl Rng,
    log: &mut Vec<String>,
) -> VictoryReport {
    log.push(format!("You defeated the {}!", enemy.name));

    let mut feast = 0;
    if character.race == Race::Tiefling {
        feast = character.heal(feast_heal(enemy.max_hp));
        if feast > 0 {
            log.push(format!(
                "[Demonic Feast] You draw strength from the fallen foe, recovering {} HP.",
                feast
            ));
        }
    }

    // Bonuses are read before wear so gear lost in this fight still pays out.
    let xp_bonus = character.derived.xp_bonus;
    let gold_bonus = character.derived.gold_bonus;
    let luck = character.derived.luck;

    log.extend(wear_equipment(character, enemy.is_boss));

    let xp_gained = victory_xp(enemy.xp, xp_bonus, character.race);
    let gold_gained = victory_gold(enemy.gold, gold_bonus, luck);
    character.xp += xp_gained;
    character.credit_gold(gold_gained);
    log.push(format!("You found {}g and gained {} XP.", gold_gained, xp_gained));

    let mut drop = None;
    if rng.gen::<f64>() < enemy.drop_chance {
        drop = enemy.drops.choose(rng).copied();
        if let Some(id) = drop {
            let item = ItemInstance::new(id);
            log.push(format!("The {} dropped {}!", enemy.name, item.display_name()));
            character.bag.push(item);
        }
    }

    let level_before = character.level;
    log.extend(apply_level_ups(character));

    if enemy.is_boss {
        info!(
            character = %character.name,
            boss = %enemy.name,
            xp = xp_gained,
            gold = gold_gained,
            "boss defeated"
        );
    }

    VictoryReport {
        enemy_name: enemy.name.clone(),
        was_boss: enemy.is_boss,
        xp_gained,
        gold_gained,
        drop,
        levels_gained: character.level - level_before,
        feast_heal: feast,
    }
}
