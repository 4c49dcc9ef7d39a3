use super::attributes::Attributes;
use super::derived_stats::DerivedStats;
use super::types::Character;
use crate::core::error::{StoreError, StoreResult};
use crate::data::{Class, Race};
use crate::items::{Equipment, ItemInstance};
use serde::{Deserialize, Serialize};

/// Persistent snapshot of a character. Derived stats and current HP are
/// not stored; loading recomputes them and starts at full health.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedCharacter {
    pub id: String,
    pub name: String,
    pub race: Race,
    pub class: Class,
    pub level: u32,
    pub xp: u64,
    pub xp_to_next_level: u64,
    pub stat_points: u32,
    pub attributes: Attributes,
    pub wallet_gold: u64,
    pub gold_accumulated_run: u64,
    #[serde(default)]
    pub bag: Vec<ItemInstance>,
    #[serde(default)]
    pub equipment: Equipment,
    pub dungeons_completed: u32,
    pub max_dungeon_level_reached: u32,
    pub current_dungeon_level: u32,
    #[serde(default)]
    pub vault_gold: u64,
    #[serde(default)]
    pub vault_items: Vec<ItemInstance>,
}

impl Character {
    pub fn to_saved(&self) -> SavedCharacter {
        SavedCharacter {
            id: self.id.clone(),
            name: self.name.clone(),
            race: self.race,
            class: self.class,
            level: self.level,
            xp: self.xp,
            xp_to_next_level: self.xp_to_next_level,
            stat_points: self.stat_points,
            attributes: self.attributes,
            wallet_gold: self.wallet_gold,
            gold_accumulated_run: self.gold_accumulated_run,
            bag: self.bag.clone(),
            equipment: self.equipment,
            dungeons_completed: self.dungeons_completed,
            max_dungeon_level_reached: self.max_dungeon_level_reached,
            current_dungeon_level: self.current_dungeon_level,
            vault_gold: self.vault_gold,
            vault_items: self.vault_items.clone(),
        }
    }

    /// Rebuilds a character from a snapshot at full HP. Snapshots that no
    /// running game could have produced are rejected.
    pub fn from_saved(saved: SavedCharacter) -> StoreResult<Self> {
        if saved.level == 0 {
            return Err(StoreError::CorruptSnapshot(format!("{}: level 0", saved.id)));
        }
        if saved.xp_to_next_level == 0 {
            return Err(StoreError::CorruptSnapshot(format!(
                "{}: zero xp threshold",
                saved.id
            )));
        }
        // Broken gear may stay equipped (the death penalty can zero it)
        if let Some((slot, item)) = saved
            .equipment
            .iter_equipped()
            .find(|(slot, item)| item.slot() != Some(*slot))
        {
            return Err(StoreError::CorruptSnapshot(format!(
                "{}: {} cannot go in the {} slot",
                saved.id,
                item.display_name(),
                slot.name()
            )));
        }

        let mut character = Character {
            id: saved.id,
            name: saved.name,
            race: saved.race,
            class: saved.class,
            level: saved.level,
            attributes: saved.attributes,
            xp: saved.xp,
            xp_to_next_level: saved.xp_to_next_level,
            stat_points: saved.stat_points,
            wallet_gold: saved.wallet_gold,
            vault_gold: saved.vault_gold,
            gold_accumulated_run: saved.gold_accumulated_run,
            bag: saved.bag,
            equipment: saved.equipment,
            vault_items: saved.vault_items,
            current_dungeon_level: saved.current_dungeon_level.max(1),
            dungeons_completed: saved.dungeons_completed,
            max_dungeon_level_reached: saved.max_dungeon_level_reached.max(1),
            current_hp: 0,
            derived: DerivedStats::default(),
        };
        character.heal_full();
        Ok(character)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemId;
    use crate::items::EquipmentSlot;

    #[test]
    fn test_snapshot_restores_character_at_full_hp() {
        let mut c = Character::create("Saver", Race::Tiefling, Class::Ranger).unwrap();
        c.wallet_gold = 321;
        c.vault_items.push(ItemInstance::new(ItemId::Katana));
        c.take_damage(15);

        let restored = Character::from_saved(c.to_saved()).unwrap();
        assert_eq!(restored.wallet_gold, 321);
        assert_eq!(restored.vault_items.len(), 1);
        assert_eq!(restored.current_hp, restored.derived.max_hp);
        assert_eq!(restored.derived, {
            let mut healed = c.clone();
            healed.heal_full();
            healed.derived
        });
    }

    #[test]
    fn test_snapshot_with_zero_xp_threshold_is_rejected() {
        let c = Character::create("Saver", Race::Human, Class::Fighter).unwrap();
        let mut saved = c.to_saved();
        saved.xp_to_next_level = 0;
        assert!(matches!(
            Character::from_saved(saved),
            Err(StoreError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_at_level_zero_is_rejected() {
        let c = Character::create("Saver", Race::Human, Class::Fighter).unwrap();
        let mut saved = c.to_saved();
        saved.level = 0;
        assert!(matches!(
            Character::from_saved(saved),
            Err(StoreError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_with_misplaced_item_is_rejected() {
        let c = Character::create("Saver", Race::Human, Class::Fighter).unwrap();
        let mut saved = c.to_saved();
        saved
            .equipment
            .set(EquipmentSlot::Ring, Some(ItemInstance::new(ItemId::Katana)));
        assert!(matches!(
            Character::from_saved(saved),
            Err(StoreError::CorruptSnapshot(_))
        ));
    }

    #[test]
    fn test_snapshot_with_worn_out_gear_still_loads() {
        let c = Character::create("Saver", Race::Human, Class::Fighter).unwrap();
        let mut saved = c.to_saved();
        let mut katana = ItemInstance::new(ItemId::Katana);
        katana.durability = Some(0);
        saved.equipment.set(EquipmentSlot::Weapon, Some(katana));

        let loaded = Character::from_saved(saved).unwrap();
        assert!(loaded.equipment.get(EquipmentSlot::Weapon).unwrap().is_broken());
        assert_eq!(loaded.derived, {
            let mut bare = c.clone();
            bare.equipment.set(EquipmentSlot::Weapon, None);
            bare.heal_full();
            bare.derived
        });
    }

    #[test]
    fn test_snapshot_json_rejects_unknown_item() {
        let c = Character::create("Saver", Race::Elf, Class::Rogue).unwrap();
        let json = serde_json::to_string(&c.to_saved()).unwrap();
        let corrupted = json.replace("small_potion", "mystery_potion");
        assert!(serde_json::from_str::<SavedCharacter>(&corrupted).is_err());
    }

    #[test]
    fn test_snapshot_omits_derived_fields() {
        let c = Character::create("Saver", Race::Elf, Class::Rogue).unwrap();
        let json = serde_json::to_value(c.to_saved()).unwrap();
        assert!(json.get("current_hp").is_none());
        assert!(json.get("derived").is_none());
    }
}
