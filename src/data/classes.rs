use crate::character::attributes::AttributeType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Class {
    Barbarian,
    Fighter,
    Ranger,
    Rogue,
    Paladin,
    Gambler,
}

impl Class {
    pub fn all() -> [Class; 6] {
        [
            Class::Barbarian,
            Class::Fighter,
            Class::Ranger,
            Class::Rogue,
            Class::Paladin,
            Class::Gambler,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Class::Barbarian => "Barbarian",
            Class::Fighter => "Fighter",
            Class::Ranger => "Ranger",
            Class::Rogue => "Rogue",
            Class::Paladin => "Paladin",
            Class::Gambler => "Gambler",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Class::Barbarian => {
                "Channels primal fury into devastating attacks. +15% bonus to total Strength."
            }
            Class::Fighter => {
                "A master of arms, equally adept in attack and defense. +5% bonus to STR, DEX, and CON."
            }
            Class::Ranger => {
                "A keen-eyed survivor who strikes from the shadows. +10% bonus to DEX and +5% to LCK."
            }
            Class::Rogue => {
                "A phantom of the battlefield, avoiding blows with uncanny grace. +15% bonus to total Dexterity."
            }
            Class::Paladin => {
                "An unbreakable bastion of resilience and martial prowess. +10% bonus to CON and +5% to STR."
            }
            Class::Gambler => "Relies on fortune and grit. +10% bonus to LCK and +5% to CON.",
        }
    }

    /// Percent multiplier applied to the total of an attribute (0.0 when none).
    pub fn percent_bonus(&self, attr: AttributeType) -> f64 {
        use AttributeType::*;
        match (self, attr) {
            (Class::Barbarian, Strength) => 0.15,
            (Class::Fighter, Strength | Dexterity | Constitution) => 0.05,
            (Class::Ranger, Dexterity) => 0.10,
            (Class::Ranger, Luck) => 0.05,
            (Class::Rogue, Dexterity) => 0.15,
            (Class::Paladin, Constitution) => 0.10,
            (Class::Paladin, Strength) => 0.05,
            (Class::Gambler, Luck) => 0.10,
            (Class::Gambler, Constitution) => 0.05,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_bonuses_default_to_zero() {
        assert_eq!(Class::Barbarian.percent_bonus(AttributeType::Strength), 0.15);
        assert_eq!(Class::Barbarian.percent_bonus(AttributeType::Luck), 0.0);
        assert_eq!(Class::Fighter.percent_bonus(AttributeType::Luck), 0.0);
        assert_eq!(Class::Fighter.percent_bonus(AttributeType::Constitution), 0.05);
    }

    #[test]
    fn test_every_class_boosts_something() {
        for class in Class::all() {
            let total: f64 = AttributeType::all()
                .iter()
                .map(|a| class.percent_bonus(*a))
                .sum();
            assert!(total > 0.0, "{} has no bonus", class.name());
        }
    }
}
