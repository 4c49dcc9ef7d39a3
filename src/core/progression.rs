//! Run bookkeeping: best depth reached, dungeon advancement, the death penalty.

use crate::character::Character;
use crate::items::halve_equipped_durability;
use tracing::info;

/// Deepest point reached during the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunBest {
    pub dungeon_level: u32,
    pub floor: u32,
}

impl RunBest {
    pub fn starting_at(dungeon_level: u32) -> Self {
        Self {
            dungeon_level,
            floor: 0,
        }
    }

    /// Records arriving on `floor` of `dungeon_level`.
    pub fn record_floor(&mut self, dungeon_level: u32, floor: u32) {
        if dungeon_level > self.dungeon_level {
            self.dungeon_level = dungeon_level;
            self.floor = floor;
        } else if dungeon_level == self.dungeon_level {
            self.floor = self.floor.max(floor);
        }
    }

    pub fn record_new_dungeon(&mut self, dungeon_level: u32) {
        self.dungeon_level = self.dungeon_level.max(dungeon_level);
        self.floor = 0;
    }
}

impl Default for RunBest {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// Moves the character to the next dungeon level. Returns the new level.
pub fn advance_dungeon(character: &mut Character) -> u32 {
    let next = character.current_dungeon_level + 1;
    character.current_dungeon_level = next;
    character.max_dungeon_level_reached = character.max_dungeon_level_reached.max(next);
    next
}

/// Strips the character down after a death: empty wallet and bag, half
/// durability on worn gear, back to dungeon level 1 at full health.
/// Level, XP, attributes and the vault are kept.
pub fn apply_death_penalty(character: &mut Character) {
    halve_equipped_durability(&mut character.equipment);
    character.wallet_gold = 0;
    character.gold_accumulated_run = character.starting_gold();
    character.bag.clear();
    character.current_dungeon_level = 1;
    character.heal_full();
    info!(character = %character.name, level = character.level, "death penalty applied");
}

pub fn defeat_log(reason: &str, dungeon_level: u32, floor: u32) -> Vec<String> {
    vec![
        format!(
            "[DEFEATED] You were {} in Dungeon Lvl {} on Floor {}.",
            reason, dungeon_level, floor
        ),
        "You awaken at the shop, keeping your level, XP, attributes, and vaulted items.".to_string(),
        "However, you lose all gold and inventory items from your bag, and your equipped items' durability is halved."
            .to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Class, ItemId, Race};
    use crate::items::{EquipmentSlot, ItemInstance};

    #[test]
    fn test_run_best_tracking() {
        let mut best = RunBest::starting_at(2);
        best.record_floor(2, 3);
        best.record_floor(2, 1);
        assert_eq!(best, RunBest { dungeon_level: 2, floor: 3 });
        best.record_floor(1, 9);
        assert_eq!(best.floor, 3);
        best.record_new_dungeon(3);
        assert_eq!(best, RunBest { dungeon_level: 3, floor: 0 });
        best.record_floor(3, 1);
        assert_eq!(best.floor, 1);
    }

    #[test]
    fn test_advance_dungeon_tracks_max() {
        let mut c = Character::create("Climber", Race::Elf, Class::Ranger).unwrap();
        c.max_dungeon_level_reached = 5;
        assert_eq!(advance_dungeon(&mut c), 2);
        assert_eq!(c.max_dungeon_level_reached, 5);
        c.current_dungeon_level = 5;
        assert_eq!(advance_dungeon(&mut c), 6);
        assert_eq!(c.max_dungeon_level_reached, 6);
    }

    #[test]
    fn test_death_penalty() {
        let mut c = Character::create("Doomed", Race::Dwarf, Class::Fighter).unwrap();
        c.wallet_gold = 500;
        c.vault_gold = 300;
        c.gold_accumulated_run = 900;
        c.vault_items.push(ItemInstance::new(ItemId::RingOfMight));
        c.current_dungeon_level = 4;
        if let Some(weapon) = c.equipment.get_mut(EquipmentSlot::Weapon) {
            weapon.durability = Some(77);
        }
        c.current_hp = 0;
        c.recompute();

        apply_death_penalty(&mut c);

        assert_eq!(c.wallet_gold, 0);
        assert_eq!(c.gold_accumulated_run, 20 + 25);
        assert!(c.bag.is_empty());
        assert_eq!(c.vault_gold, 300);
        assert_eq!(c.vault_items.len(), 1);
        assert_eq!(c.current_dungeon_level, 1);
        assert_eq!(c.current_hp, c.derived.max_hp);
        assert_eq!(
            c.equipment.get(EquipmentSlot::Weapon).and_then(|i| i.durability),
            Some(38)
        );
        assert_eq!(
            c.equipment.get(EquipmentSlot::Armor).and_then(|i| i.durability),
            Some(50)
        );
    }

    #[test]
    fn test_defeat_log_header() {
        let log = defeat_log("killed by a trap", 2, 7);
        assert_eq!(log[0], "[DEFEATED] You were killed by a trap in Dungeon Lvl 2 on Floor 7.");
        assert_eq!(log.len(), 3);
    }
}
