use super::attributes::{AttributeType, Attributes};
use crate::core::constants::*;
use crate::data::{Class, Race};
use crate::items::{Equipment, EquipmentSlot};

/// Combat-facing numbers computed from base attributes, equipment, race and class.
///
/// Never persisted: always rebuilt with [`DerivedStats::calculate_derived_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedStats {
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub strength: i32,
    pub constitution: i32,
    pub dexterity: i32,
    pub luck: i32,
    pub xp_bonus: f64,
    pub gold_bonus: f64,
    /// Half-Orc rage is active (HP below half).
    pub raging: bool,
}

/// Equipment bonuses summed over every non-broken equipped item.
#[derive(Debug, Clone, Copy, Default)]
struct EquipmentBonuses {
    flat: [i32; NUM_ATTRIBUTES],
    percent: [f64; NUM_ATTRIBUTES],
    hp_pct: f64,
    attack: i32,
    defense: i32,
    xp_bonus: f64,
    gold_bonus: f64,
}

impl EquipmentBonuses {
    fn collect(equipment: &Equipment) -> Self {
        let mut bonuses = Self::default();
        for (_, item) in equipment.iter_active() {
            let stats = item.definition().stats;
            for attr in AttributeType::all() {
                bonuses.flat[attr.index()] += stats.flat(attr);
                bonuses.percent[attr.index()] += stats.percent(attr);
            }
            bonuses.hp_pct += stats.hp_pct;
            bonuses.attack += stats.attack;
            bonuses.defense += stats.defense;
            bonuses.xp_bonus += stats.xp_bonus;
            bonuses.gold_bonus += stats.gold_bonus;
        }
        bonuses
    }
}

impl DerivedStats {
    /// Resolves final stats. Order matters: every step floors, and rage
    /// floors again on top of the class multiplier.
    pub fn calculate_derived_stats(
        base: &Attributes,
        equipment: &Equipment,
        race: Race,
        class: Class,
        current_hp: u32,
    ) -> Self {
        let bonuses = EquipmentBonuses::collect(equipment);

        // (base + flat) * (1 + item%) * (1 + class%)
        let mut totals = Attributes::zero();
        for attr in AttributeType::all() {
            let with_flat = base.get(attr) + bonuses.flat[attr.index()];
            let with_percent = with_flat as f64 * (1.0 + bonuses.percent[attr.index()]);
            let total = (with_percent * (1.0 + class.percent_bonus(attr))).floor();
            totals.set(attr, total as i32);
        }

        let constitution = totals.get(AttributeType::Constitution);
        let hp_before_pct = HP_BASE_START as i64 + constitution as i64 * HP_PER_CON as i64;
        let max_hp = ((hp_before_pct as f64) * (1.0 + bonuses.hp_pct)).floor().max(1.0) as u32;

        let mut strength = totals.get(AttributeType::Strength);
        let mut dexterity = totals.get(AttributeType::Dexterity);
        let mut raging = false;
        if race == Race::HalfOrc {
            let hp_ratio = if current_hp > 0 && max_hp > 0 {
                current_hp as f64 / max_hp as f64
            } else {
                1.0
            };
            for (threshold, str_mult, dex_mult) in [RAGE_SEVERE, RAGE_MILD] {
                if hp_ratio < threshold {
                    strength = (strength as f64 * str_mult).floor() as i32;
                    dexterity = (dexterity as f64 * dex_mult).floor() as i32;
                    raging = true;
                    break;
                }
            }
        }
        totals.set(AttributeType::Strength, strength);
        totals.set(AttributeType::Dexterity, dexterity);

        let mut scaling_attack = 0;
        let mut scaling_defense = 0;
        for (slot, item) in equipment.iter_active() {
            let stats = item.definition().stats;
            let bonus: i32 = [stats.scaling, stats.secondary_scaling]
                .into_iter()
                .flatten()
                .map(|s| (totals.get(s.attribute) as f64 * s.multiplier).floor() as i32)
                .sum();
            match slot {
                EquipmentSlot::Weapon => scaling_attack += bonus,
                EquipmentSlot::Armor => scaling_defense += bonus,
                EquipmentSlot::Amulet | EquipmentSlot::Ring => {}
            }
        }

        Self {
            max_hp,
            attack: ATK_BASE_START + strength * ATK_PER_STR + bonuses.attack + scaling_attack,
            defense: DEF_BASE_START + dexterity * DEF_PER_DEX + bonuses.defense + scaling_defense,
            strength,
            constitution,
            dexterity,
            luck: totals.get(AttributeType::Luck),
            xp_bonus: bonuses.xp_bonus,
            gold_bonus: bonuses.gold_bonus,
            raging,
        }
    }

    pub fn get(&self, attr: AttributeType) -> i32 {
        match attr {
            AttributeType::Strength => self.strength,
            AttributeType::Constitution => self.constitution,
            AttributeType::Dexterity => self.dexterity,
            AttributeType::Luck => self.luck,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ItemId;
    use crate::items::ItemInstance;

    fn equip(items: &[ItemId]) -> Equipment {
        let mut eq = Equipment::new();
        for id in items {
            let item = ItemInstance::new(*id);
            if let Some(slot) = item.slot() {
                eq.set(slot, Some(item));
            }
        }
        eq
    }

    #[test]
    fn test_human_barbarian_strength_floors() {
        let base = Attributes::from_values(6, 6, 6, 6);
        let stats = DerivedStats::calculate_derived_stats(
            &base,
            &Equipment::new(),
            Race::Human,
            Class::Barbarian,
            100,
        );
        // 6 * 1.15 = 6.9 -> 6
        assert_eq!(stats.strength, 6);
        assert_eq!(stats.attack, 11);
        assert_eq!(stats.max_hp, 65 + 6 * 10);
        assert_eq!(stats.defense, 6);
    }

    #[test]
    fn test_flat_then_percent_then_class() {
        // STR 10 + 3 (Brawler) = 13, * 1.10 (Might) = 14.3, * 1.15 = 16.445 -> 16
        let base = Attributes::from_values(10, 5, 5, 5);
        let eq = equip(&[ItemId::BrawlerAmulet, ItemId::RingOfMight]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Dwarf, Class::Barbarian, 1);
        assert_eq!(stats.strength, 16);
        assert_eq!(stats.attack, 5 + 16);
    }

    #[test]
    fn test_hp_percent_applies_after_constitution() {
        let base = Attributes::from_values(5, 5, 5, 5);
        let eq = equip(&[ItemId::CharmOfVitality]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        // (65 + 50) * 1.1 = 126.5 -> 126
        assert_eq!(stats.max_hp, 126);
    }

    #[test]
    fn test_weapon_scaling_uses_final_attribute() {
        // Wooden Club: ATK 4 + floor(STR * 0.1)
        let base = Attributes::from_values(20, 5, 5, 5);
        let eq = equip(&[ItemId::WoodenClub]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        assert_eq!(stats.attack, 5 + 20 + 4 + 2);
    }

    #[test]
    fn test_secondary_scaling_sums() {
        // Soul Reaver: 45 + floor(STR*0.3) + floor(CON*0.2)
        let base = Attributes::from_values(10, 10, 5, 5);
        let eq = equip(&[ItemId::SoulReaver]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        assert_eq!(stats.attack, 5 + 10 + 45 + 3 + 2);
    }

    #[test]
    fn test_armor_scaling_goes_to_defense() {
        // Scale Mail: DEF 9 + floor(CON*0.2)
        let base = Attributes::from_values(5, 12, 4, 5);
        let eq = equip(&[ItemId::ScaleMail]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        // DEX 4 * 1.15 = 4.6 -> 4
        assert_eq!(stats.defense, 4 + 9 + 2);
    }

    #[test]
    fn test_broken_items_contribute_nothing() {
        let base = Attributes::from_values(5, 5, 5, 5);
        let mut eq = equip(&[ItemId::RingOfPrecision]);
        let intact =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        if let Some(ring) = eq.get_mut(EquipmentSlot::Ring) {
            ring.durability = Some(0);
        }
        let broken =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Rogue, 1);
        assert_eq!(intact.attack - broken.attack, 5);
    }

    #[test]
    fn test_negative_item_defense() {
        let base = Attributes::from_values(5, 5, 2, 5);
        let eq = equip(&[ItemId::BerserkerRing]);
        let stats =
            DerivedStats::calculate_derived_stats(&base, &eq, Race::Elf, Class::Gambler, 1);
        assert_eq!(stats.defense, 2 - 8);
    }

    #[test]
    fn test_half_orc_rage_thresholds() {
        let base = Attributes::from_values(10, 5, 10, 5);
        let eq = Equipment::new();
        let calc = |hp| {
            DerivedStats::calculate_derived_stats(&base, &eq, Race::HalfOrc, Class::Gambler, hp)
        };
        let max_hp = calc(1000).max_hp;
        assert_eq!(max_hp, 65 + 50);

        let calm = calc(max_hp);
        assert_eq!((calm.strength, calm.dexterity, calm.raging), (10, 10, false));

        let mild = calc(max_hp / 2 - 1);
        assert_eq!((mild.strength, mild.dexterity, mild.raging), (11, 9, true));

        let severe = calc(max_hp / 4 - 1);
        assert_eq!((severe.strength, severe.dexterity), (13, 8));

        // Zero HP counts as no rage
        let dead = calc(0);
        assert_eq!(dead.strength, 10);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let base = Attributes::from_values(9, 7, 8, 6);
        let eq = equip(&[ItemId::Katana, ItemId::MithrilPlate, ItemId::SageAmulet]);
        let a = DerivedStats::calculate_derived_stats(&base, &eq, Race::Human, Class::Fighter, 50);
        let b = DerivedStats::calculate_derived_stats(&base, &eq, Race::Human, Class::Fighter, 50);
        assert_eq!(a, b);
    }
}
