use super::attributes::Attributes;
use super::derived_stats::DerivedStats;
use crate::core::constants::*;
use crate::core::error::{StoreError, StoreResult};
use crate::data::{Class, ItemId, Race};
use crate::items::{Equipment, EquipmentSlot, ItemInstance};

/// The player character. A value type: actions take one and return a new one.
///
/// `derived` is a cache of [`DerivedStats`]; call [`Character::recompute`]
/// after touching attributes, equipment or HP.
#[derive(Debug, Clone, PartialEq)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub race: Race,
    pub class: Class,
    pub level: u32,
    pub attributes: Attributes,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub stat_points: u32,

    pub wallet_gold: u64,
    pub vault_gold: u64,
    pub gold_accumulated_run: u64,

    pub bag: Vec<ItemInstance>,
    pub equipment: Equipment,
    pub vault_items: Vec<ItemInstance>,

    pub current_dungeon_level: u32,
    pub dungeons_completed: u32,
    pub max_dungeon_level_reached: u32,

    pub current_hp: u32,
    pub derived: DerivedStats,
}

impl Character {
    /// A new level 1 character with the starting kit.
    pub fn create(name: &str, race: Race, class: Class) -> StoreResult<Self> {
        let name = validate_name(name)?;

        let mut attributes = Attributes::new();
        attributes.add(&race.attribute_bonuses());

        let starting_gold = INITIAL_GOLD + race.gold_bonus();

        let mut equipment = Equipment::new();
        equipment.set(EquipmentSlot::Weapon, Some(ItemInstance::new(ItemId::RustyDagger)));
        equipment.set(EquipmentSlot::Armor, Some(ItemInstance::new(ItemId::TornClothes)));

        let mut character = Self {
            id: format!("char_{}", uuid::Uuid::new_v4()),
            name,
            race,
            class,
            level: 1,
            attributes,
            xp: 0,
            xp_to_next_level: STARTING_XP_TO_NEXT_LEVEL,
            stat_points: 0,
            wallet_gold: starting_gold,
            vault_gold: 0,
            gold_accumulated_run: starting_gold,
            bag: vec![
                ItemInstance::new(ItemId::SmallPotion),
                ItemInstance::new(ItemId::SmallPotion),
            ],
            equipment,
            vault_items: Vec::new(),
            current_dungeon_level: 1,
            dungeons_completed: 0,
            max_dungeon_level_reached: 1,
            current_hp: 0,
            derived: DerivedStats::default(),
        };
        character.heal_full();
        Ok(character)
    }

    /// Rebuilds derived stats and clamps HP into `[0, max_hp]`.
    pub fn recompute(&mut self) {
        self.derived = DerivedStats::calculate_derived_stats(
            &self.attributes,
            &self.equipment,
            self.race,
            self.class,
            self.current_hp,
        );
        if self.current_hp > self.derived.max_hp {
            self.current_hp = self.derived.max_hp;
            self.derived = DerivedStats::calculate_derived_stats(
                &self.attributes,
                &self.equipment,
                self.race,
                self.class,
                self.current_hp,
            );
        }
    }

    /// Consuming form of [`Character::recompute`].
    pub fn resolved(mut self) -> Self {
        self.recompute();
        self
    }

    pub fn heal_full(&mut self) {
        self.recompute();
        self.current_hp = self.derived.max_hp;
        self.recompute();
    }

    /// Heals up to max HP; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = self.current_hp.saturating_add(amount).min(self.derived.max_hp);
        self.recompute();
        self.current_hp - before
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
        self.recompute();
    }

    pub fn is_dead(&self) -> bool {
        self.current_hp == 0
    }

    /// Credits gold earned in the dungeon to the wallet and the run total.
    pub fn credit_gold(&mut self, amount: u64) {
        self.wallet_gold += amount;
        self.gold_accumulated_run += amount;
    }

    /// Gold the run total resets to after a death.
    pub fn starting_gold(&self) -> u64 {
        INITIAL_GOLD + self.race.gold_bonus()
    }
}

/// Trims and checks a character name.
pub fn validate_name(name: &str) -> StoreResult<String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err(StoreError::InvalidName("Name cannot be empty".to_string()));
    }

    if trimmed.chars().count() > CHARACTER_NAME_MAX_LENGTH {
        return Err(StoreError::InvalidName(format!(
            "Name must be {} characters or less",
            CHARACTER_NAME_MAX_LENGTH
        )));
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(StoreError::InvalidName(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        ));
    }

    Ok(trimmed.to_string())
}
