// Derived stat formulas
pub const HP_BASE_START: u32 = 65;
pub const HP_PER_CON: u32 = 10;
pub const ATK_BASE_START: i32 = 5;
pub const ATK_PER_STR: i32 = 1;
pub const DEF_BASE_START: i32 = 0;
pub const DEF_PER_DEX: i32 = 1;

// Character creation
pub const STARTING_ATTRIBUTE_VALUE: i32 = 5;
pub const NUM_ATTRIBUTES: usize = 4;
pub const INITIAL_GOLD: u64 = 20;
pub const STARTING_XP_TO_NEXT_LEVEL: u64 = 60;
pub const CHARACTER_NAME_MAX_LENGTH: usize = 16;

// XP and leveling
pub const XP_CURVE_MULT: f64 = 1.42;
pub const STAT_POINTS_LEVEL_DIVISOR: u32 = 4;

// Half-Orc "Growing Rage": (hp ratio below, strength mult, dexterity mult)
pub const RAGE_SEVERE: (f64, f64, f64) = (0.25, 1.30, 0.80);
pub const RAGE_MILD: (f64, f64, f64) = (0.50, 1.15, 0.90);

// Racial passives
pub const HUMAN_XP_MULT: f64 = 1.1;
pub const HUMAN_ADAPTABILITY_INTERVAL: u32 = 4;
pub const DWARF_DURABILITY_LOSS_MULT: f64 = 0.5;
pub const TIEFLING_FEAST_FRACTION: f64 = 0.05;
pub const ELF_TRAP_CHANCE_MULT: f64 = 0.6;
pub const ELF_TREASURE_BONUS: f64 = 0.05;
pub const ELF_DODGE_BONUS: f64 = 0.05;
pub const DRAGONBORN_BREATH_PER_LEVEL: f64 = 1.5;
pub const DRAGONBORN_BREATH_STR_DIVISOR: f64 = 3.0;
pub const DRAGONBORN_IGNITE_CHANCE: f64 = 0.25;
pub const DRAGONBORN_BURN_PER_LEVEL: f64 = 0.75;
pub const DRAGONBORN_BURN_STR_DIVISOR: f64 = 4.0;
pub const DRAGONBORN_BURN_ROUNDS: u32 = 2;

// Combat
pub const COMBAT_MIN_DAMAGE: i32 = 1;
pub const DODGE_BASE_CHANCE: f64 = 0.01;
pub const DODGE_LUCK_MULT: f64 = 0.006;
pub const DODGE_MAX_CHANCE: f64 = 0.60;
pub const LUCK_GOLD_BONUS: f64 = 0.012;
pub const FLEE_FAIL_BASE_CHANCE: f64 = 0.65;
pub const FLEE_BOSS_FAIL_CHANCE: f64 = 0.75;
pub const FLEE_LUCK_REDUCTION_PER_POINT: f64 = 0.01;
pub const FLEE_MIN_FAIL_CHANCE: f64 = 0.1;

// Floors and encounters
pub const MAX_FLOORS_PER_DUNGEON: u32 = 10;
pub const TRAP_CHANCE: f64 = 0.15;
pub const TREASURE_CHANCE: f64 = 0.20;
pub const TRAP_DAMAGE_BASE: f64 = 8.0;
pub const TRAP_DAMAGE_PER_DUNGEON_LEVEL: f64 = 3.0;
pub const TRAP_DAMAGE_PER_FLOOR: f64 = 2.0;
pub const TRAP_DAMAGE_VARIANCE_MIN: f64 = 0.8;
pub const TRAP_DAMAGE_VARIANCE_SPAN: f64 = 0.4;
pub const TRAP_LUCK_AVOID_CHANCE_PER_POINT: f64 = 0.0075;
pub const TRAP_REDUCE_BASE_CHANCE: f64 = 0.10;
pub const TRAP_LUCK_REDUCE_CHANCE_PER_POINT: f64 = 0.015;
pub const TREASURE_GOLD_SPREAD_BASE: f64 = 15.0;
pub const TREASURE_GOLD_SPREAD_PER_DUNGEON_LEVEL: f64 = 5.0;
pub const TREASURE_GOLD_FLAT: f64 = 5.0;
pub const TREASURE_GOLD_PER_LUCK: f64 = 0.5;
pub const TREASURE_ITEM_CHANCE: f64 = 0.25;

// Enemy scaling
pub const ENEMY_SCALING_PLAYER_LVL_WEIGHT: f64 = 0.40;
pub const ENEMY_SCALING_DUNGEON_LVL_WEIGHT: f64 = 0.85;
pub const ENEMY_SCALING_DEPTH_WEIGHT: f64 = 0.15;
pub const ENEMY_STAT_VARIANCE: f64 = 0.05;
pub const MONSTER_GOLD_PLAYER_LEVEL_SCALE: f64 = 0.04;
pub const ENEMY_MIN_HP: u32 = 8;
pub const ENEMY_MIN_ATTACK: i32 = 1;
pub const ENEMY_MIN_DEFENSE: i32 = 0;
pub const BOSS_NAME_PREFIX: &str = "Guardian";
pub const BOSS_POOL_MAX_TIER: u32 = 5;
// hp, atk, def, xp, gold
pub const BOSS_MULTIPLIERS: [f64; 5] = [2.0, 1.75, 1.5, 1.75, 2.0];
// Tier differences at or above this force a weakened prefix
pub const WEAKENED_TIER_GAP: i64 = 2;
// Boss candidates roaming below this dungeon level are always weakened
pub const BOSS_CANDIDATE_SAFE_DUNGEON_LEVEL: u32 = 3;
pub const PREFIX_NONE_WEIGHT: u32 = 100;
// (dungeon level unlock, None weight once unlocked)
pub const PREFIX_WEAK_UNLOCK: (u32, u32) = (1, 60);
pub const PREFIX_MEDIUM_UNLOCK: (u32, u32) = (4, 40);
pub const PREFIX_STRONG_UNLOCK: (u32, u32) = (8, 20);

// Durability
pub const MAX_DURABILITY: u32 = 100;
pub const DURABILITY_LOSS_WEAPON_ARMOR_NORMAL: u32 = 4;
pub const DURABILITY_LOSS_WEAPON_ARMOR_BOSS: u32 = 10;
pub const DURABILITY_LOSS_AMULET_RING_NORMAL: u32 = 2;
pub const DURABILITY_LOSS_AMULET_RING_BOSS: u32 = 6;
// 1g per 2%
pub const REPAIR_COST_PER_PERCENT: f64 = 0.5;

// Shop
pub const SHOP_BUY_MULT: f64 = 1.8;
pub const SHOP_SELL_MULT: f64 = 0.5;
pub const SHOP_BASE_STOCK_SIZE: usize = 5;
pub const SHOP_RARE_ITEM_CHANCE: f64 = 0.25;
pub const MAX_ITEM_TIER: u32 = 7;

// Leaderboard
pub const LEADERBOARD_SIZE: usize = 20;

// Session journal
pub const SESSION_LOG_CAPACITY: usize = 30;
