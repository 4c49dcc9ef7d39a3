//! Floor resolution: boss gate, trap, treasure, or combat.

use super::types::{Encounter, ExploreOutcome, FloorEvent, TrapOutcome, TreasureOutcome};
use crate::character::Character;
use crate::core::constants::*;
use crate::data::{ItemCategory, ItemId, Race};
use crate::enemies::{generate_enemy, max_roaming_tier, ScalingLevels};
use crate::items::ItemInstance;
use rand::seq::SliceRandom;
use rand::Rng;

pub fn trap_chance(race: Race) -> f64 {
    if race == Race::Elf {
        TRAP_CHANCE * ELF_TRAP_CHANCE_MULT
    } else {
        TRAP_CHANCE
    }
}

pub fn treasure_chance(race: Race) -> f64 {
    if race == Race::Elf {
        TREASURE_CHANCE + ELF_TREASURE_BONUS
    } else {
        TREASURE_CHANCE
    }
}

/// Raw trap damage; `roll` in `[0, 1)` picks the 0.8x..1.2x variance.
pub fn trap_damage(dungeon_level: u32, floor_depth: u32, roll: f64) -> u32 {
    let base = TRAP_DAMAGE_BASE
        + dungeon_level as f64 * TRAP_DAMAGE_PER_DUNGEON_LEVEL
        + floor_depth as f64 * TRAP_DAMAGE_PER_FLOOR;
    (base * (roll * TRAP_DAMAGE_VARIANCE_SPAN + TRAP_DAMAGE_VARIANCE_MIN)).round() as u32
}

pub fn trap_avoid_chance(luck: i32) -> f64 {
    luck as f64 * TRAP_LUCK_AVOID_CHANCE_PER_POINT
}

pub fn trap_reduce_chance(luck: i32) -> f64 {
    TRAP_REDUCE_BASE_CHANCE + luck as f64 * TRAP_LUCK_REDUCE_CHANCE_PER_POINT
}

/// Chest gold; `roll` in `[0, 1)` picks the spread.
pub fn treasure_gold(dungeon_level: u32, luck: i32, gold_bonus: f64, roll: f64) -> u64 {
    let spread = TREASURE_GOLD_SPREAD_BASE + dungeon_level as f64 * TREASURE_GOLD_SPREAD_PER_DUNGEON_LEVEL;
    let flat = TREASURE_GOLD_FLAT + luck as f64 * TREASURE_GOLD_PER_LUCK;
    ((roll * spread + flat) * (1.0 + gold_bonus)).floor().max(0.0) as u64
}

/// Amulets and rings a chest can hold at this dungeon level.
pub fn treasure_item_pool(dungeon_level: u32) -> Vec<ItemId> {
    let max_tier = max_roaming_tier(dungeon_level);
    ItemId::ALL
        .iter()
        .copied()
        .filter(|id| {
            let def = id.definition();
            matches!(def.category, ItemCategory::Amulet | ItemCategory::Ring) && def.tier <= max_tier
        })
        .collect()
}

fn spring_trap(
    character: &mut Character,
    rng: &mut impl Rng,
    dungeon_level: u32,
    floor_depth: u32,
    log: &mut Vec<String>,
) -> TrapOutcome {
    log.push("Encounter: Trap!".to_string());
    let damage = trap_damage(dungeon_level, floor_depth, rng.gen::<f64>());
    let luck = character.derived.luck;

    if rng.gen::<f64>() < trap_avoid_chance(luck) {
        log.push("With incredible agility, you avoid the trap completely!".to_string());
        return TrapOutcome::Avoided;
    }

    let reduced = rng.gen::<f64>() < trap_reduce_chance(luck);
    let damage = if reduced {
        (damage as f64 * 0.5).ceil() as u32
    } else {
        damage
    };
    character.take_damage(damage);
    log.push(format!("You sprung a trap! It hits you for {} damage.", damage));
    TrapOutcome::Triggered { damage, reduced }
}

fn open_chest(
    character: &mut Character,
    rng: &mut impl Rng,
    dungeon_level: u32,
    log: &mut Vec<String>,
) -> TreasureOutcome {
    log.push("Encounter: Treasure!".to_string());
    let gold = treasure_gold(
        dungeon_level,
        character.derived.luck,
        character.derived.gold_bonus,
        rng.gen::<f64>(),
    );
    character.credit_gold(gold);
    log.push(format!("You found a chest with {}g!", gold));

    let mut item = None;
    if rng.gen::<f64>() < TREASURE_ITEM_CHANCE {
        item = treasure_item_pool(dungeon_level).choose(rng).copied();
        if let Some(id) = item {
            let found = ItemInstance::new(id);
            log.push(format!("The chest also contains a {}!", found.display_name()));
            character.bag.push(found);
        }
    }
    TreasureOutcome { gold, item }
}

/// Resolves one floor. Traps and chests are applied to `character`
/// immediately; the caller handles death if a trap was lethal.
pub fn explore(
    character: &mut Character,
    rng: &mut impl Rng,
    dungeon_level: u32,
    floor_depth: u32,
) -> ExploreOutcome {
    let mut log = Vec::new();
    let levels = ScalingLevels {
        player_level: character.level,
        dungeon_level,
        floor_depth,
    };

    if floor_depth >= MAX_FLOORS_PER_DUNGEON {
        let boss = generate_enemy(rng, levels, true);
        log.push("The Guardian of the Floor appears!".to_string());
        log.push(format!("The {} blocks your path!", boss.name));
        return ExploreOutcome {
            event: FloorEvent::Boss,
            encounter: Encounter::Enemy(boss),
            log,
        };
    }

    let roll = rng.gen::<f64>();
    let trap_threshold = trap_chance(character.race);
    let treasure_threshold = trap_threshold + treasure_chance(character.race);

    if roll < trap_threshold {
        let outcome = spring_trap(character, rng, dungeon_level, floor_depth, &mut log);
        ExploreOutcome {
            event: FloorEvent::Trap(outcome),
            encounter: Encounter::Cleared,
            log,
        }
    } else if roll < treasure_threshold {
        let outcome = open_chest(character, rng, dungeon_level, &mut log);
        ExploreOutcome {
            event: FloorEvent::Treasure(outcome),
            encounter: Encounter::Cleared,
            log,
        }
    } else {
        let enemy = generate_enemy(rng, levels, false);
        log.push("Encounter: Combat!".to_string());
        log.push(format!("A wild {} appears!", enemy.name));
        ExploreOutcome {
            event: FloorEvent::Combat,
            encounter: Encounter::Enemy(enemy),
            log,
        }
    }
}
