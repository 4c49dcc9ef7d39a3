//! The item catalogue.
//!
//! Every item is an `ItemId` variant; `ItemId::definition()` is an exhaustive
//! match, so adding an item without stats is a compile error.

use crate::character::attributes::AttributeType;
use crate::items::types::EquipmentSlot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemCategory {
    Consumable,
    Weapon,
    Armor,
    Amulet,
    Ring,
}

impl ItemCategory {
    /// The equipment slot this category goes into, if any.
    pub fn slot(&self) -> Option<EquipmentSlot> {
        match self {
            ItemCategory::Consumable => None,
            ItemCategory::Weapon => Some(EquipmentSlot::Weapon),
            ItemCategory::Armor => Some(EquipmentSlot::Armor),
            ItemCategory::Amulet => Some(EquipmentSlot::Amulet),
            ItemCategory::Ring => Some(EquipmentSlot::Ring),
        }
    }
}

/// Adds `floor(attribute * multiplier)` to attack (weapons) or defense (armor).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    pub attribute: AttributeType,
    pub multiplier: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemStats {
    pub heal: u32,
    pub attack: i32,
    pub defense: i32,
    pub strength: i32,
    pub constitution: i32,
    pub dexterity: i32,
    pub luck: i32,
    pub strength_pct: f64,
    pub constitution_pct: f64,
    pub dexterity_pct: f64,
    pub luck_pct: f64,
    pub hp_pct: f64,
    pub xp_bonus: f64,
    pub gold_bonus: f64,
    pub scaling: Option<Scaling>,
    pub secondary_scaling: Option<Scaling>,
}

impl ItemStats {
    pub const NONE: ItemStats = ItemStats {
        heal: 0,
        attack: 0,
        defense: 0,
        strength: 0,
        constitution: 0,
        dexterity: 0,
        luck: 0,
        strength_pct: 0.0,
        constitution_pct: 0.0,
        dexterity_pct: 0.0,
        luck_pct: 0.0,
        hp_pct: 0.0,
        xp_bonus: 0.0,
        gold_bonus: 0.0,
        scaling: None,
        secondary_scaling: None,
    };

    pub fn flat(&self, attr: AttributeType) -> i32 {
        match attr {
            AttributeType::Strength => self.strength,
            AttributeType::Constitution => self.constitution,
            AttributeType::Dexterity => self.dexterity,
            AttributeType::Luck => self.luck,
        }
    }

    pub fn percent(&self, attr: AttributeType) -> f64 {
        match attr {
            AttributeType::Strength => self.strength_pct,
            AttributeType::Constitution => self.constitution_pct,
            AttributeType::Dexterity => self.dexterity_pct,
            AttributeType::Luck => self.luck_pct,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemDef {
    pub name: &'static str,
    pub icon: &'static str,
    pub category: ItemCategory,
    pub stats: ItemStats,
    pub value: u64,
    pub durable: bool,
    pub tier: u32,
}

impl ItemDef {
    pub fn is_healing(&self) -> bool {
        self.category == ItemCategory::Consumable && self.stats.heal > 0
    }

    /// Compact stat line, e.g. `(ATK+4, Scales w/ STR)`. Empty when the item has no stats.
    pub fn stats_summary(&self) -> String {
        let s = &self.stats;
        let mut parts: Vec<String> = Vec::new();
        if s.heal > 0 {
            parts.push(format!("Heals {}", s.heal));
        }
        if s.attack != 0 {
            parts.push(format!("ATK+{}", s.attack));
        }
        if s.defense != 0 {
            parts.push(format!("DEF{:+}", s.defense));
        }
        for attr in AttributeType::all() {
            let flat = s.flat(attr);
            if flat != 0 {
                parts.push(format!("{}+{}", attr.abbrev(), flat));
            }
        }
        for attr in AttributeType::all() {
            let pct = s.percent(attr);
            if pct != 0.0 {
                parts.push(format!("{}+{:.0}%", attr.abbrev(), pct * 100.0));
            }
        }
        if s.hp_pct != 0.0 {
            parts.push(format!("HP+{:.0}%", s.hp_pct * 100.0));
        }
        if s.xp_bonus != 0.0 {
            parts.push(format!("XP+{:.0}%", s.xp_bonus * 100.0));
        }
        if s.gold_bonus != 0.0 {
            parts.push(format!("Gold+{:.0}%", s.gold_bonus * 100.0));
        }
        if let Some(scaling) = s.scaling {
            let mut text = format!("Scales w/ {}", scaling.attribute.abbrev());
            if let Some(secondary) = s.secondary_scaling {
                text.push_str(&format!(" + {}", secondary.attribute.abbrev()));
            }
            parts.push(text);
        }

        if parts.is_empty() {
            String::new()
        } else {
            format!("({})", parts.join(", "))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemId {
    // Consumables
    SmallPotion,
    MediumPotion,
    LargePotion,
    MegaPotion,
    SuperPotion,
    FinalElixir,
    OilOfMending,
    StoneskinDraught,
    ElixirOfVigor,
    // Weapons
    RustyDagger,
    WoodenClub,
    ShortSword,
    Mace,
    Rapier,
    HandAxe,
    Longsword,
    Morningstar,
    Warhammer,
    BastardSword,
    Scimitar,
    BattleAxe,
    SteelGreatsword,
    Halberd,
    RunicBlade,
    EarthquakeMaul,
    Katana,
    GlimmeringMace,
    Dragonfang,
    SoulReaver,
    // Armor
    TornClothes,
    LeatherArmor,
    HardenedLeather,
    ChainMail,
    StuddedLeather,
    ScaleMail,
    SplintMail,
    SteelBreastplate,
    HalfPlate,
    FullPlate,
    ObsidianPlate,
    MithrilPlate,
    ElvenChainmail,
    Dragonscale,
    ArchonPlate,
    // Amulets
    CharmOfVitality,
    BrawlerAmulet,
    ScholarsTalisman,
    GuardianAmulet,
    PendantOfAvarice,
    SwiftAmulet,
    ChokerOfProsperity,
    SageAmulet,
    FortuneAmulet,
    HerosMedallion,
    GorgetOfCommand,
    HeartOfTheTitan,
    // Rings
    RingOfAgility,
    RingOfMight,
    RingOfProtection,
    RingOfResilience,
    RingOfPrecision,
    GamblersRing,
    BandOfTheStalwart,
    WarriorsSignet,
    BandOfShadows,
    ViperRing,
    HeroKingRing,
    BerserkerRing,
    SovereignBand,
    OverlordRing,
}

const fn scales(attribute: AttributeType, multiplier: f64) -> Option<Scaling> {
    Some(Scaling {
        attribute,
        multiplier,
    })
}

const fn potion(name: &'static str, icon: &'static str, heal: u32, value: u64, tier: u32) -> ItemDef {
    ItemDef {
        name,
        icon,
        category: ItemCategory::Consumable,
        stats: ItemStats { heal, ..ItemStats::NONE },
        value,
        durable: false,
        tier,
    }
}

const fn gear(
    category: ItemCategory,
    name: &'static str,
    icon: &'static str,
    stats: ItemStats,
    value: u64,
    tier: u32,
) -> ItemDef {
    ItemDef {
        name,
        icon,
        category,
        stats,
        value,
        durable: true,
        tier,
    }
}

impl ItemId {
    pub const ALL: [ItemId; 70] = [
        ItemId::SmallPotion,
        ItemId::MediumPotion,
        ItemId::LargePotion,
        ItemId::MegaPotion,
        ItemId::SuperPotion,
        ItemId::FinalElixir,
        ItemId::OilOfMending,
        ItemId::StoneskinDraught,
        ItemId::ElixirOfVigor,
        ItemId::RustyDagger,
        ItemId::WoodenClub,
        ItemId::ShortSword,
        ItemId::Mace,
        ItemId::Rapier,
        ItemId::HandAxe,
        ItemId::Longsword,
        ItemId::Morningstar,
        ItemId::Warhammer,
        ItemId::BastardSword,
        ItemId::Scimitar,
        ItemId::BattleAxe,
        ItemId::SteelGreatsword,
        ItemId::Halberd,
        ItemId::RunicBlade,
        ItemId::EarthquakeMaul,
        ItemId::Katana,
        ItemId::GlimmeringMace,
        ItemId::Dragonfang,
        ItemId::SoulReaver,
        ItemId::TornClothes,
        ItemId::LeatherArmor,
        ItemId::HardenedLeather,
        ItemId::ChainMail,
        ItemId::StuddedLeather,
        ItemId::ScaleMail,
        ItemId::SplintMail,
        ItemId::SteelBreastplate,
        ItemId::HalfPlate,
        ItemId::FullPlate,
        ItemId::ObsidianPlate,
        ItemId::MithrilPlate,
        ItemId::ElvenChainmail,
        ItemId::Dragonscale,
        ItemId::ArchonPlate,
        ItemId::CharmOfVitality,
        ItemId::BrawlerAmulet,
        ItemId::ScholarsTalisman,
        ItemId::GuardianAmulet,
        ItemId::PendantOfAvarice,
        ItemId::SwiftAmulet,
        ItemId::ChokerOfProsperity,
        ItemId::SageAmulet,
        ItemId::FortuneAmulet,
        ItemId::HerosMedallion,
        ItemId::GorgetOfCommand,
        ItemId::HeartOfTheTitan,
        ItemId::RingOfAgility,
        ItemId::RingOfMight,
        ItemId::RingOfProtection,
        ItemId::RingOfResilience,
        ItemId::RingOfPrecision,
        ItemId::GamblersRing,
        ItemId::BandOfTheStalwart,
        ItemId::WarriorsSignet,
        ItemId::BandOfShadows,
        ItemId::ViperRing,
        ItemId::HeroKingRing,
        ItemId::BerserkerRing,
        ItemId::SovereignBand,
        ItemId::OverlordRing,
    ];

    pub fn name(&self) -> &'static str {
        self.definition().name
    }

    pub fn definition(&self) -> ItemDef {
        use AttributeType::{Constitution as Con, Dexterity as Dex, Luck as Lck, Strength as Str};
        use ItemCategory::{Amulet, Armor, Ring, Weapon};
        const N: ItemStats = ItemStats::NONE;

        match self {
            ItemId::SmallPotion => potion("Small Potion", "💧", 40, 20, 1),
            ItemId::MediumPotion => potion("Medium Potion", "💧", 90, 55, 2),
            ItemId::LargePotion => potion("Large Potion", "💧", 160, 110, 3),
            ItemId::MegaPotion => potion("Mega Potion", "💧", 250, 180, 4),
            ItemId::SuperPotion => potion("Super Potion", "💧", 400, 320, 5),
            ItemId::FinalElixir => potion("Final Elixir", "💧", 700, 550, 6),
            ItemId::OilOfMending => potion("Oil of Mending", "🧪", 60, 35, 2),
            ItemId::StoneskinDraught => potion("Stoneskin Draught", "🧪", 120, 75, 3),
            ItemId::ElixirOfVigor => potion("Elixir of Vigor", "🧪", 200, 140, 4),

            ItemId::RustyDagger => gear(Weapon, "Rusty Dagger", "🔪", ItemStats { attack: 2, ..N }, 15, 1),
            ItemId::WoodenClub => gear(
                Weapon,
                "Wooden Club",
                "🪵",
                ItemStats { attack: 4, scaling: scales(Str, 0.1), ..N },
                45,
                1,
            ),
            ItemId::ShortSword => gear(
                Weapon,
                "Short Sword",
                "🗡️",
                ItemStats { attack: 6, scaling: scales(Dex, 0.15), ..N },
                90,
                2,
            ),
            ItemId::Mace => gear(Weapon, "Mace", "🔨", ItemStats { attack: 8, ..N }, 150, 2),
            ItemId::Rapier => gear(
                Weapon,
                "Rapier",
                "🗡️",
                ItemStats { attack: 7, scaling: scales(Dex, 0.20), ..N },
                170,
                2,
            ),
            ItemId::HandAxe => gear(
                Weapon,
                "Hand Axe",
                "🪓",
                ItemStats { attack: 10, scaling: scales(Str, 0.2), ..N },
                220,
                3,
            ),
            ItemId::Longsword => gear(Weapon, "Longsword", "🗡️", ItemStats { attack: 12, ..N }, 300, 3),
            ItemId::Morningstar => gear(
                Weapon,
                "Morningstar",
                "🔨",
                ItemStats { attack: 11, scaling: scales(Str, 0.18), ..N },
                260,
                3,
            ),
            ItemId::Warhammer => gear(
                Weapon,
                "Warhammer",
                "🔨",
                ItemStats { attack: 15, scaling: scales(Str, 0.25), ..N },
                450,
                4,
            ),
            ItemId::BastardSword => gear(
                Weapon,
                "Bastard Sword",
                "⚔️",
                ItemStats { attack: 17, scaling: scales(Dex, 0.2), ..N },
                550,
                4,
            ),
            ItemId::Scimitar => gear(
                Weapon,
                "Scimitar",
                "🗡️",
                ItemStats { attack: 16, scaling: scales(Dex, 0.22), ..N },
                500,
                4,
            ),
            ItemId::BattleAxe => gear(Weapon, "Battle Axe", "🪓", ItemStats { attack: 20, ..N }, 700, 5),
            ItemId::SteelGreatsword => gear(
                Weapon,
                "Steel Greatsword",
                "⚔️",
                ItemStats { attack: 24, scaling: scales(Str, 0.3), ..N },
                900,
                5,
            ),
            ItemId::Halberd => gear(
                Weapon,
                "Halberd",
                "🪓",
                ItemStats { attack: 22, scaling: scales(Str, 0.28), ..N },
                800,
                5,
            ),
            ItemId::RunicBlade => gear(
                Weapon,
                "Runic Blade",
                "✨",
                ItemStats { attack: 28, luck: 2, scaling: scales(Lck, 0.5), ..N },
                1200,
                6,
            ),
            ItemId::EarthquakeMaul => gear(
                Weapon,
                "Earthquake Maul",
                "🔨",
                ItemStats { attack: 33, scaling: scales(Con, 0.4), ..N },
                1500,
                6,
            ),
            ItemId::Katana => gear(
                Weapon,
                "Katana",
                "⚔️",
                ItemStats { attack: 25, scaling: scales(Dex, 0.4), ..N },
                1350,
                6,
            ),
            ItemId::GlimmeringMace => gear(
                Weapon,
                "Glimmering Mace",
                "✨",
                ItemStats { attack: 30, luck: 3, scaling: scales(Lck, 0.6), ..N },
                1600,
                6,
            ),
            ItemId::Dragonfang => gear(
                Weapon,
                "Dragonfang",
                "🐉",
                ItemStats { attack: 40, scaling: scales(Str, 0.4), ..N },
                2500,
                7,
            ),
            ItemId::SoulReaver => gear(
                Weapon,
                "Soul Reaver",
                "💀",
                ItemStats {
                    attack: 45,
                    scaling: scales(Str, 0.3),
                    secondary_scaling: scales(Con, 0.2),
                    ..N
                },
                2800,
                7,
            ),

            ItemId::TornClothes => gear(Armor, "Torn Clothes", "👕", ItemStats { defense: 1, ..N }, 12, 1),
            ItemId::LeatherArmor => gear(Armor, "Leather Armor", "🧥", ItemStats { defense: 3, ..N }, 55, 1),
            ItemId::HardenedLeather => gear(
                Armor,
                "Hardened Leather",
                "🧥",
                ItemStats { defense: 5, scaling: scales(Dex, 0.15), ..N },
                110,
                2,
            ),
            ItemId::ChainMail => gear(Armor, "Chain Mail", "⛓️", ItemStats { defense: 7, ..N }, 200, 2),
            ItemId::StuddedLeather => gear(
                Armor,
                "Studded Leather",
                "🧥",
                ItemStats { defense: 6, scaling: scales(Dex, 0.18), ..N },
                180,
                2,
            ),
            ItemId::ScaleMail => gear(
                Armor,
                "Scale Mail",
                "🛡️",
                ItemStats { defense: 9, scaling: scales(Con, 0.2), ..N },
                320,
                3,
            ),
            ItemId::SplintMail => gear(
                Armor,
                "Splint Mail",
                "⛓️",
                ItemStats { defense: 8, scaling: scales(Con, 0.25), ..N },
                280,
                3,
            ),
            ItemId::SteelBreastplate => gear(
                Armor,
                "Steel Breastplate",
                "🛡️",
                ItemStats { defense: 11, ..N },
                450,
                4,
            ),
            ItemId::HalfPlate => gear(
                Armor,
                "Half Plate",
                "🛡️",
                ItemStats { defense: 12, dexterity: -2, ..N },
                520,
                4,
            ),
            ItemId::FullPlate => gear(
                Armor,
                "Full Plate Armor",
                "🛡️",
                ItemStats { defense: 14, scaling: scales(Con, 0.3), ..N },
                750,
                5,
            ),
            ItemId::ObsidianPlate => gear(
                Armor,
                "Obsidian Plate",
                "🛡️",
                ItemStats { defense: 16, attack: 5, scaling: scales(Str, 0.15), ..N },
                950,
                5,
            ),
            ItemId::MithrilPlate => gear(
                Armor,
                "Mithril Plate",
                "✨",
                ItemStats { defense: 18, scaling: scales(Dex, 0.3), ..N },
                1300,
                6,
            ),
            ItemId::ElvenChainmail => gear(
                Armor,
                "Elven Chainmail",
                "✨",
                ItemStats { defense: 15, scaling: scales(Dex, 0.4), ..N },
                1500,
                6,
            ),
            ItemId::Dragonscale => gear(
                Armor,
                "Dragonscale Armor",
                "🐉",
                ItemStats { defense: 22, scaling: scales(Str, 0.25), ..N },
                2200,
                7,
            ),
            ItemId::ArchonPlate => gear(
                Armor,
                "Archon Plate",
                "🛡️",
                ItemStats { defense: 25, hp_pct: 0.10, scaling: scales(Con, 0.35), ..N },
                2600,
                7,
            ),

            ItemId::CharmOfVitality => gear(
                Amulet,
                "Charm of Vitality",
                "📿",
                ItemStats { hp_pct: 0.10, ..N },
                150,
                2,
            ),
            ItemId::BrawlerAmulet => gear(
                Amulet,
                "Amulet of the Brawler",
                "📿",
                ItemStats { strength: 3, ..N },
                200,
                2,
            ),
            ItemId::ScholarsTalisman => gear(
                Amulet,
                "Scholar's Talisman",
                "📿",
                ItemStats { xp_bonus: 0.15, ..N },
                300,
                3,
            ),
            ItemId::GuardianAmulet => gear(
                Amulet,
                "Amulet of the Guardian",
                "📿",
                ItemStats { constitution: 3, ..N },
                250,
                3,
            ),
            ItemId::PendantOfAvarice => gear(
                Amulet,
                "Pendant of Avarice",
                "📿",
                ItemStats { gold_bonus: 0.20, ..N },
                400,
                4,
            ),
            ItemId::SwiftAmulet => gear(
                Amulet,
                "Amulet of the Swift",
                "📿",
                ItemStats { dexterity: 3, ..N },
                220,
                4,
            ),
            ItemId::ChokerOfProsperity => gear(
                Amulet,
                "Choker of Prosperity",
                "📿",
                ItemStats { hp_pct: 0.15, gold_bonus: 0.15, ..N },
                750,
                5,
            ),
            ItemId::SageAmulet => gear(
                Amulet,
                "Amulet of the Sage",
                "📿",
                ItemStats { hp_pct: 0.10, xp_bonus: 0.20, ..N },
                900,
                5,
            ),
            ItemId::FortuneAmulet => gear(
                Amulet,
                "Amulet of Fortune",
                "📿",
                ItemStats { luck: 5, gold_bonus: 0.10, ..N },
                600,
                5,
            ),
            ItemId::HerosMedallion => gear(
                Amulet,
                "Hero's Medallion",
                "📿",
                ItemStats { hp_pct: 0.20, xp_bonus: 0.20, gold_bonus: 0.20, ..N },
                1500,
                6,
            ),
            ItemId::GorgetOfCommand => gear(
                Amulet,
                "Gorget of Command",
                "📿",
                ItemStats { strength_pct: 0.12, constitution_pct: 0.12, ..N },
                1200,
                6,
            ),
            ItemId::HeartOfTheTitan => gear(
                Amulet,
                "Heart of the Titan",
                "📿",
                ItemStats { hp_pct: 0.30, ..N },
                1800,
                7,
            ),

            ItemId::RingOfAgility => gear(
                Ring,
                "Ring of Agility",
                "💍",
                ItemStats { dexterity_pct: 0.10, ..N },
                180,
                2,
            ),
            ItemId::RingOfMight => gear(
                Ring,
                "Ring of Might",
                "💍",
                ItemStats { strength_pct: 0.10, ..N },
                180,
                2,
            ),
            ItemId::RingOfProtection => gear(
                Ring,
                "Ring of Protection",
                "💍",
                ItemStats { defense: 3, ..N },
                220,
                2,
            ),
            ItemId::RingOfResilience => gear(
                Ring,
                "Ring of Resilience",
                "💍",
                ItemStats { constitution_pct: 0.15, ..N },
                350,
                3,
            ),
            ItemId::RingOfPrecision => gear(
                Ring,
                "Ring of Precision",
                "💍",
                ItemStats { attack: 5, ..N },
                300,
                3,
            ),
            ItemId::GamblersRing => gear(
                Ring,
                "Gambler's Ring",
                "💍",
                ItemStats { luck_pct: 0.20, ..N },
                500,
                4,
            ),
            ItemId::BandOfTheStalwart => gear(
                Ring,
                "Band of the Stalwart",
                "💍",
                ItemStats { defense: 4, constitution_pct: 0.10, ..N },
                650,
                4,
            ),
            ItemId::WarriorsSignet => gear(
                Ring,
                "Warrior's Signet",
                "💍",
                ItemStats { strength_pct: 0.15, constitution_pct: 0.10, ..N },
                800,
                5,
            ),
            ItemId::BandOfShadows => gear(
                Ring,
                "Band of Shadows",
                "💍",
                ItemStats { dexterity_pct: 0.15, luck_pct: 0.10, ..N },
                850,
                5,
            ),
            ItemId::ViperRing => gear(
                Ring,
                "Ring of the Viper",
                "💍",
                ItemStats { attack: 6, dexterity_pct: 0.10, ..N },
                900,
                5,
            ),
            ItemId::HeroKingRing => gear(
                Ring,
                "Ring of the Hero-King",
                "💍",
                ItemStats { strength_pct: 0.20, constitution_pct: 0.20, ..N },
                1600,
                6,
            ),
            ItemId::BerserkerRing => gear(
                Ring,
                "Ring of the Berserker",
                "💍",
                ItemStats { strength_pct: 0.25, defense: -8, ..N },
                1200,
                6,
            ),
            ItemId::SovereignBand => gear(
                Ring,
                "Sovereign Band",
                "💍",
                ItemStats {
                    strength_pct: 0.15,
                    dexterity_pct: 0.15,
                    constitution_pct: 0.15,
                    ..N
                },
                2500,
                7,
            ),
            ItemId::OverlordRing => gear(
                Ring,
                "Ring of the Overlord",
                "💍",
                ItemStats { strength: 3, constitution: 3, dexterity: 3, luck: 3, ..N },
                2800,
                7,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn count(category: ItemCategory) -> usize {
        ItemId::ALL
            .iter()
            .filter(|id| id.definition().category == category)
            .count()
    }

    #[test]
    fn test_catalogue_counts() {
        assert_eq!(count(ItemCategory::Consumable), 9);
        assert_eq!(count(ItemCategory::Weapon), 20);
        assert_eq!(count(ItemCategory::Armor), 15);
        assert_eq!(count(ItemCategory::Amulet), 12);
        assert_eq!(count(ItemCategory::Ring), 14);
    }

    #[test]
    fn test_all_is_unique() {
        let set: HashSet<ItemId> = ItemId::ALL.iter().copied().collect();
        assert_eq!(set.len(), ItemId::ALL.len());
    }

    #[test]
    fn test_only_gear_is_durable() {
        for id in ItemId::ALL {
            let def = id.definition();
            assert_eq!(def.durable, def.category != ItemCategory::Consumable, "{}", def.name);
            assert!((1..=7).contains(&def.tier), "{}", def.name);
            assert!(def.value > 0);
        }
    }

    #[test]
    fn test_stats_summary() {
        assert_eq!(
            ItemId::WoodenClub.definition().stats_summary(),
            "(ATK+4, Scales w/ STR)"
        );
        assert_eq!(ItemId::SmallPotion.definition().stats_summary(), "(Heals 40)");
        assert_eq!(
            ItemId::BerserkerRing.definition().stats_summary(),
            "(DEF-8, STR+25%)"
        );
        assert_eq!(
            ItemId::SoulReaver.definition().stats_summary(),
            "(ATK+45, Scales w/ STR + CON)"
        );
        assert_eq!(
            ItemId::RunicBlade.definition().stats_summary(),
            "(ATK+28, LCK+2, Scales w/ LCK)"
        );
    }

    #[test]
    fn test_serde_uses_snake_case_ids() {
        let json = serde_json::to_string(&ItemId::RustyDagger).unwrap();
        assert_eq!(json, "\"rusty_dagger\"");
        let back: ItemId = serde_json::from_str("\"small_potion\"").unwrap();
        assert_eq!(back, ItemId::SmallPotion);
        assert!(serde_json::from_str::<ItemId>("\"excalibur\"").is_err());
    }
}
