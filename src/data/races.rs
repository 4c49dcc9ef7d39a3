use crate::character::attributes::Attributes;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    HalfOrc,
    Tiefling,
    Dragonborn,
}

impl Race {
    pub fn all() -> [Race; 6] {
        [
            Race::Human,
            Race::Dwarf,
            Race::Elf,
            Race::HalfOrc,
            Race::Tiefling,
            Race::Dragonborn,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Race::Human => "Human",
            Race::Dwarf => "Dwarf",
            Race::Elf => "Elf",
            Race::HalfOrc => "Half-Orc",
            Race::Tiefling => "Tiefling",
            Race::Dragonborn => "Dragonborn",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Race::Human => "Versatile and adaptable, starts balanced.",
            Race::Dwarf => "Sturdy and strong, but less agile.",
            Race::Elf => "Agile and perceptive, but more fragile.",
            Race::HalfOrc => "Brutal and powerful, but with little luck.",
            Race::Tiefling => {
                "Descendants of infernal lineage, they possess a defiant resilience."
            }
            Race::Dragonborn => {
                "Drawing power from their draconic ancestry, their attacks are fearsome."
            }
        }
    }

    /// Flat bonuses added to the starting attributes (STR, CON, DEX, LCK).
    pub fn attribute_bonuses(&self) -> Attributes {
        match self {
            Race::Human => Attributes::from_values(1, 1, 1, 1),
            Race::Dwarf => Attributes::from_values(2, 2, -1, 1),
            Race::Elf => Attributes::from_values(0, -1, 3, 2),
            Race::HalfOrc => Attributes::from_values(3, 2, -1, -1),
            Race::Tiefling => Attributes::from_values(0, 1, 1, 1),
            Race::Dragonborn => Attributes::from_values(2, 1, 0, 0),
        }
    }

    /// Extra starting gold, also restored as run gold after every death.
    pub fn gold_bonus(&self) -> u64 {
        match self {
            Race::Human => 10,
            Race::Dwarf => 25,
            Race::Elf => 15,
            Race::HalfOrc | Race::Tiefling | Race::Dragonborn => 0,
        }
    }

    pub fn passive_name(&self) -> &'static str {
        match self {
            Race::Human => "Adaptability",
            Race::Dwarf => "Skilled Artisan",
            Race::Elf => "Keen Senses",
            Race::HalfOrc => "Growing Rage",
            Race::Tiefling => "Demonic Feast",
            Race::Dragonborn => "Draconic Breath",
        }
    }

    pub fn passive_description(&self) -> &'static str {
        match self {
            Race::Human => {
                "+10% XP gained. Every 4 levels, gain a scaling bonus (+1 at lvl 4, +2 at lvl 8, etc.) to your lowest base attribute."
            }
            Race::Dwarf => "Item durability loss in combat is halved.",
            Race::Elf => {
                "Reduces trap trigger chance by 40%, increases treasure find chance by 25%, and grants a 5% base chance to dodge attacks."
            }
            Race::HalfOrc => {
                "Below 50% HP, gain +15% STR but lose -10% DEX. Below 25% HP, these effects double to +30% STR and -20% DEX."
            }
            Race::Tiefling => "Recover 5% of the defeated monster's max HP upon defeating it.",
            Race::Dragonborn => {
                "Deal bonus elemental damage on your first attack. Has a chance to ignite the enemy, dealing bonus damage instantly and causing them to burn for 2 additional rounds."
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::AttributeType;

    #[test]
    fn test_racial_bonuses() {
        let elf = Race::Elf.attribute_bonuses();
        assert_eq!(elf.get(AttributeType::Dexterity), 3);
        assert_eq!(elf.get(AttributeType::Constitution), -1);

        let orc = Race::HalfOrc.attribute_bonuses();
        assert_eq!(orc.get(AttributeType::Strength), 3);
        assert_eq!(orc.get(AttributeType::Luck), -1);
    }

    #[test]
    fn test_gold_bonus() {
        assert_eq!(Race::Dwarf.gold_bonus(), 25);
        assert_eq!(Race::Dragonborn.gold_bonus(), 0);
    }

    #[test]
    fn test_every_race_has_a_passive() {
        for race in Race::all() {
            assert!(!race.passive_name().is_empty());
            assert!(!race.passive_description().is_empty());
        }
    }
}
