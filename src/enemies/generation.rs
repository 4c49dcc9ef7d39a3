use super::types::Enemy;
use crate::core::constants::*;
use crate::data::{
    boss_pool, EnemyKind, EnemyTemplate, Prefix, MEDIUM_PREFIXES, NO_PREFIX_MULTIPLIERS,
    STRONG_PREFIXES, WEAKENED_PREFIXES, WEAK_PREFIXES,
};
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Inputs to the enemy level factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalingLevels {
    pub player_level: u32,
    pub dungeon_level: u32,
    pub floor_depth: u32,
}

impl ScalingLevels {
    pub fn level_factor(&self) -> f64 {
        self.player_level as f64 * ENEMY_SCALING_PLAYER_LVL_WEIGHT
            + self.dungeon_level as f64 * ENEMY_SCALING_DUNGEON_LVL_WEIGHT
            + self.floor_depth as f64 * ENEMY_SCALING_DEPTH_WEIGHT
    }
}

/// Final enemy numbers after scaling, variance, rounding and minimums.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaledStats {
    pub hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub xp: u64,
    pub gold: u64,
}

/// One entry in a prefix draw. `prefix == None` keeps the plain name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrefixEntry {
    pub prefix: Option<Prefix>,
    pub weight: u32,
}

impl PrefixEntry {
    pub fn multipliers(&self) -> [f64; 5] {
        self.prefix.map_or(NO_PREFIX_MULTIPLIERS, |p| p.multipliers)
    }
}

/// `ceil(dungeon_level / 2)`.
pub fn dungeon_tier(dungeon_level: u32) -> u32 {
    dungeon_level.div_ceil(2)
}

/// Highest template tier that roams a dungeon level.
pub fn max_roaming_tier(dungeon_level: u32) -> u32 {
    dungeon_tier(dungeon_level) + 1
}

pub fn boss_tier(dungeon_level: u32) -> u32 {
    dungeon_tier(dungeon_level).clamp(1, BOSS_POOL_MAX_TIER)
}

/// Multiplies `value` by `1 ± 5%`, where `roll` in `[0, 1)` picks the point.
pub fn apply_variance(value: f64, roll: f64) -> f64 {
    value * (1.0 + (roll - 0.5) * 2.0 * ENEMY_STAT_VARIANCE)
}

/// Scales a template. `rolls` are the variance draws for hp, atk, def, xp, gold;
/// pass `[0.5; 5]` for no variance.
pub fn scale_enemy(
    template: &EnemyTemplate,
    multipliers: [f64; 5],
    levels: ScalingLevels,
    rolls: [f64; 5],
) -> ScaledStats {
    let factor = levels.level_factor();
    let [hp_mult, atk_mult, def_mult, xp_mult, gold_mult] = multipliers;

    let scaled_hp = template.base_hp * hp_mult + template.scale_hp * factor;
    let scaled_atk = template.base_atk * atk_mult + template.scale_atk * factor;
    let scaled_def = template.base_def * def_mult + template.scale_def * factor;
    let scaled_xp = template.base_xp * xp_mult + template.scale_xp * factor;
    let scaled_gold = template.base_gold * gold_mult + template.scale_gold * factor;

    let gold_level_mult = 1.0
        + MONSTER_GOLD_PLAYER_LEVEL_SCALE * levels.player_level.saturating_sub(1) as f64;

    let hp = apply_variance(scaled_hp, rolls[0]).ceil().max(ENEMY_MIN_HP as f64);
    let attack = apply_variance(scaled_atk, rolls[1]).ceil().max(ENEMY_MIN_ATTACK as f64);
    let defense = apply_variance(scaled_def, rolls[2]).ceil().max(ENEMY_MIN_DEFENSE as f64);
    let xp = apply_variance(scaled_xp, rolls[3]).ceil().max(0.0);
    let gold = (apply_variance(scaled_gold, rolls[4]) * gold_level_mult).ceil().max(0.0);

    ScaledStats {
        hp: hp as u32,
        attack: attack as i32,
        defense: defense as i32,
        xp: xp as u64,
        gold: gold as u64,
    }
}

/// Prefix candidates for a roaming `kind` at `dungeon_level`.
///
/// Far out-of-tier enemies and early boss candidates draw only from the
/// weakened pool; otherwise stronger pools unlock with depth and push the
/// unprefixed weight down.
pub fn prefix_pool(kind: EnemyKind, dungeon_level: u32) -> Vec<PrefixEntry> {
    let tier_diff = kind.template().tier as i64 - dungeon_level as i64;
    let weakened = tier_diff >= WEAKENED_TIER_GAP
        || (kind.is_boss_candidate() && dungeon_level < BOSS_CANDIDATE_SAFE_DUNGEON_LEVEL);

    let entry = |p: &Prefix| PrefixEntry {
        prefix: Some(*p),
        weight: p.weight,
    };

    if weakened {
        return WEAKENED_PREFIXES.iter().map(entry).collect();
    }

    let mut none_weight = PREFIX_NONE_WEIGHT;
    let mut pool = Vec::new();
    for ((unlock_level, weight), prefixes) in [
        (PREFIX_WEAK_UNLOCK, &WEAK_PREFIXES[..]),
        (PREFIX_MEDIUM_UNLOCK, &MEDIUM_PREFIXES[..]),
        (PREFIX_STRONG_UNLOCK, &STRONG_PREFIXES[..]),
    ] {
        if dungeon_level >= unlock_level {
            pool.extend(prefixes.iter().map(entry));
            none_weight = weight;
        }
    }
    pool.insert(
        0,
        PrefixEntry {
            prefix: None,
            weight: none_weight,
        },
    );
    pool
}

/// Walks the pool subtracting weights from `roll * total` until it goes negative.
pub fn pick_weighted(pool: &[PrefixEntry], roll: f64) -> Option<PrefixEntry> {
    let total: u32 = pool.iter().map(|e| e.weight).sum();
    let mut remaining = roll * total as f64;
    for entry in pool {
        remaining -= entry.weight as f64;
        if remaining < 0.0 {
            return Some(*entry);
        }
    }
    None
}

pub fn select_prefix(rng: &mut impl Rng, kind: EnemyKind, dungeon_level: u32) -> Option<Prefix> {
    let pool = prefix_pool(kind, dungeon_level);
    pick_weighted(&pool, rng.gen::<f64>()).and_then(|entry| entry.prefix)
}

fn roll_variance(rng: &mut impl Rng) -> [f64; 5] {
    [rng.gen(), rng.gen(), rng.gen(), rng.gen(), rng.gen()]
}

/// Creates the enemy for an encounter.
pub fn generate_enemy(rng: &mut impl Rng, levels: ScalingLevels, is_boss: bool) -> Enemy {
    let dungeon_level = levels.dungeon_level.max(1);

    let (kind, name, multipliers) = if is_boss {
        let kind = boss_pool(boss_tier(dungeon_level))
            .choose(rng)
            .copied()
            .unwrap_or(EnemyKind::Kobold);
        let name = format!("{} {}", BOSS_NAME_PREFIX, kind.template().name);
        (kind, name, BOSS_MULTIPLIERS)
    } else {
        let max_tier = max_roaming_tier(dungeon_level);
        let candidates: Vec<EnemyKind> = EnemyKind::ALL
            .iter()
            .copied()
            .filter(|k| k.template().tier <= max_tier)
            .collect();
        let kind = candidates.choose(rng).copied().unwrap_or(EnemyKind::Rat);
        match select_prefix(rng, kind, dungeon_level) {
            Some(prefix) => (
                kind,
                format!("{} {}", prefix.name, kind.template().name),
                prefix.multipliers,
            ),
            None => (kind, kind.template().name.to_string(), NO_PREFIX_MULTIPLIERS),
        }
    };

    let template = kind.template();
    let stats = scale_enemy(&template, multipliers, levels, roll_variance(rng));
    debug!(
        enemy = %name,
        hp = stats.hp,
        attack = stats.attack,
        defense = stats.defense,
        is_boss,
        "enemy generated"
    );

    Enemy {
        name,
        kind,
        tier: template.tier,
        hp: stats.hp,
        max_hp: stats.hp,
        attack: stats.attack,
        defense: stats.defense,
        xp: stats.xp,
        gold: stats.gold,
        drop_chance: template.drop_chance,
        drops: template.drops,
        is_boss,
    }
}
