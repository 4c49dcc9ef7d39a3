use super::items::ItemId;
use serde::{Deserialize, Serialize};

/// Base numbers an enemy is scaled from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub name: &'static str,
    pub tier: u32,
    pub base_hp: f64,
    pub scale_hp: f64,
    pub base_atk: f64,
    pub scale_atk: f64,
    pub base_def: f64,
    pub scale_def: f64,
    pub base_xp: f64,
    pub scale_xp: f64,
    pub base_gold: f64,
    pub scale_gold: f64,
    pub drop_chance: f64,
    pub drops: &'static [ItemId],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Rat,
    Bat,
    Imp,
    Kobold,
    Zombie,
    Pixie,
    Wolf,
    Boar,
    Spider,
    Snake,
    Ghost,
    Cultist,
    Harpy,
    Worm,
    Naga,
    Orc,
    Elemental,
    Bear,
    Troll,
    Basilisk,
    Golem,
    Yeti,
    Xanthous,
    Dragon,
}

/// Templates that serve as bosses; roaming copies are weakened in early dungeons.
pub const BOSS_CANDIDATES: [EnemyKind; 8] = [
    EnemyKind::Basilisk,
    EnemyKind::Dragon,
    EnemyKind::Golem,
    EnemyKind::Orc,
    EnemyKind::Troll,
    EnemyKind::Bear,
    EnemyKind::Xanthous,
    EnemyKind::Yeti,
];

/// Bosses available at a boss tier (1-5). Out-of-range tiers clamp.
pub fn boss_pool(tier: u32) -> &'static [EnemyKind] {
    use EnemyKind::*;
    match tier {
        0 | 1 => &[Kobold, Zombie],
        2 => &[Cultist, Harpy, Naga],
        3 => &[Orc, Troll, Basilisk, Bear],
        4 => &[Golem, Yeti, Xanthous],
        _ => &[Dragon],
    }
}

#[allow(clippy::too_many_arguments)]
const fn template(
    name: &'static str,
    tier: u32,
    hp: (f64, f64),
    atk: (f64, f64),
    def: (f64, f64),
    xp: (f64, f64),
    gold: (f64, f64),
    drop_chance: f64,
    drops: &'static [ItemId],
) -> EnemyTemplate {
    EnemyTemplate {
        name,
        tier,
        base_hp: hp.0,
        scale_hp: hp.1,
        base_atk: atk.0,
        scale_atk: atk.1,
        base_def: def.0,
        scale_def: def.1,
        base_xp: xp.0,
        scale_xp: xp.1,
        base_gold: gold.0,
        scale_gold: gold.1,
        drop_chance,
        drops,
    }
}

impl EnemyKind {
    pub const ALL: [EnemyKind; 24] = [
        EnemyKind::Rat,
        EnemyKind::Bat,
        EnemyKind::Imp,
        EnemyKind::Kobold,
        EnemyKind::Zombie,
        EnemyKind::Pixie,
        EnemyKind::Wolf,
        EnemyKind::Boar,
        EnemyKind::Spider,
        EnemyKind::Snake,
        EnemyKind::Ghost,
        EnemyKind::Cultist,
        EnemyKind::Harpy,
        EnemyKind::Worm,
        EnemyKind::Naga,
        EnemyKind::Orc,
        EnemyKind::Elemental,
        EnemyKind::Bear,
        EnemyKind::Troll,
        EnemyKind::Basilisk,
        EnemyKind::Golem,
        EnemyKind::Yeti,
        EnemyKind::Xanthous,
        EnemyKind::Dragon,
    ];

    pub fn is_boss_candidate(&self) -> bool {
        BOSS_CANDIDATES.contains(self)
    }

    pub fn template(&self) -> EnemyTemplate {
        use ItemId::*;
        match self {
            // (base, scale) pairs: hp, atk, def, xp, gold
            EnemyKind::Rat => template("Rat", 1, (30.0, 7.0), (6.0, 1.3), (1.0, 0.25), (5.0, 1.8), (1.0, 0.6), 0.06, &[SmallPotion]),
            EnemyKind::Bat => template("Bat", 1, (28.0, 6.0), (7.0, 1.5), (0.0, 0.2), (6.0, 2.2), (2.0, 0.8), 0.04, &[]),
            EnemyKind::Imp => template("Imp", 1, (35.0, 7.5), (8.0, 1.6), (2.0, 0.3), (10.0, 4.0), (4.0, 1.3), 0.09, &[SmallPotion]),
            EnemyKind::Kobold => template("Kobold", 1, (45.0, 8.5), (7.0, 1.5), (3.0, 0.4), (12.0, 4.5), (5.0, 1.5), 0.15, &[RustyDagger, SmallPotion]),
            EnemyKind::Zombie => template("Zombie", 1, (70.0, 10.0), (6.0, 1.2), (1.0, 0.35), (11.0, 4.0), (3.0, 1.0), 0.07, &[TornClothes]),
            EnemyKind::Pixie => template("Pixie", 1, (25.0, 4.5), (8.0, 1.4), (1.0, 0.3), (9.0, 3.0), (4.0, 0.9), 0.04, &[]),

            EnemyKind::Wolf => template("Wolf", 2, (40.0, 8.5), (9.0, 1.6), (2.0, 0.4), (13.0, 4.8), (6.0, 2.2), 0.10, &[LeatherArmor, SmallPotion, Rapier]),
            EnemyKind::Boar => template("Boar", 2, (65.0, 10.0), (7.0, 1.4), (4.0, 0.5), (16.0, 5.0), (8.0, 2.5), 0.08, &[WoodenClub]),
            EnemyKind::Spider => template("Spider", 2, (45.0, 9.0), (10.0, 1.7), (2.0, 0.35), (17.0, 5.5), (9.0, 2.8), 0.08, &[]),
            EnemyKind::Snake => template("Snake", 2, (42.0, 8.0), (7.0, 1.5), (5.0, 0.6), (14.0, 4.8), (7.0, 2.2), 0.09, &[RustyDagger]),
            EnemyKind::Ghost => template("Ghost", 2, (40.0, 7.5), (11.0, 1.8), (4.0, 0.5), (19.0, 6.5), (10.0, 2.8), 0.02, &[]),
            EnemyKind::Cultist => template("Cultist", 2, (55.0, 9.5), (12.0, 1.9), (4.0, 0.55), (25.0, 7.5), (14.0, 4.5), 0.18, &[MediumPotion, ShortSword, BrawlerAmulet]),
            EnemyKind::Harpy => template("Harpy", 2, (50.0, 8.0), (10.0, 2.0), (3.0, 0.4), (22.0, 7.0), (12.0, 4.0), 0.12, &[OilOfMending]),
            EnemyKind::Worm => template("Worm", 2, (70.0, 11.0), (6.0, 1.2), (3.0, 0.5), (16.0, 5.5), (8.0, 2.8), 0.05, &[HardenedLeather]),
            EnemyKind::Naga => template("Naga", 2, (65.0, 10.0), (8.0, 1.8), (6.0, 0.65), (24.0, 7.5), (15.0, 5.0), 0.11, &[MediumPotion]),

            EnemyKind::Orc => template("Orc", 3, (80.0, 12.0), (13.0, 1.7), (5.0, 0.6), (30.0, 8.0), (15.0, 5.0), 0.14, &[HandAxe, HardenedLeather, MediumPotion, Morningstar, RingOfProtection]),
            EnemyKind::Elemental => template("Elemental", 3, (60.0, 9.0), (12.0, 2.0), (8.0, 0.8), (38.0, 8.5), (19.0, 5.0), 0.08, &[StoneskinDraught]),
            EnemyKind::Bear => template("Bear", 3, (90.0, 12.5), (12.0, 1.6), (5.0, 0.65), (35.0, 9.0), (17.0, 5.0), 0.09, &[LargePotion]),
            EnemyKind::Troll => template("Troll", 3, (100.0, 14.0), (14.0, 1.8), (4.0, 0.5), (40.0, 10.0), (20.0, 6.0), 0.11, &[Longsword, LargePotion, GuardianAmulet]),
            EnemyKind::Basilisk => template("Basilisk", 3, (85.0, 12.0), (13.0, 1.9), (7.0, 0.75), (42.0, 9.5), (24.0, 6.0), 0.13, &[ChainMail, SplintMail]),

            EnemyKind::Golem => template("Golem", 4, (120.0, 15.0), (14.0, 1.5), (12.0, 1.0), (60.0, 12.5), (33.0, 9.0), 0.12, &[SteelBreastplate, Mace, Scimitar, RingOfPrecision]),
            EnemyKind::Yeti => template("Yeti", 4, (100.0, 14.0), (16.0, 2.0), (6.0, 0.7), (55.0, 13.5), (38.0, 10.0), 0.11, &[BattleAxe, ElixirOfVigor]),
            EnemyKind::Xanthous => template("Xanthous", 4, (90.0, 12.5), (18.0, 2.2), (8.0, 0.85), (70.0, 14.5), (42.0, 11.0), 0.12, &[MegaPotion, Longsword]),
            EnemyKind::Dragon => template("Dragon", 4, (150.0, 16.0), (20.0, 2.5), (9.0, 0.8), (100.0, 17.0), (55.0, 14.0), 0.20, &[SteelGreatsword, MegaPotion, SwiftAmulet]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_tiers() {
        let tier_counts = (1..=4)
            .map(|t| EnemyKind::ALL.iter().filter(|k| k.template().tier == t).count())
            .collect::<Vec<_>>();
        assert_eq!(tier_counts, vec![6, 9, 5, 4]);
    }

    #[test]
    fn test_rat_numbers() {
        let rat = EnemyKind::Rat.template();
        assert_eq!(rat.base_hp, 30.0);
        assert_eq!(rat.scale_hp, 7.0);
        assert_eq!(rat.drops, &[ItemId::SmallPotion]);
    }

    #[test]
    fn test_boss_pool_clamps() {
        assert_eq!(boss_pool(1), &[EnemyKind::Kobold, EnemyKind::Zombie]);
        assert_eq!(boss_pool(5), &[EnemyKind::Dragon]);
        assert_eq!(boss_pool(9), &[EnemyKind::Dragon]);
    }

    #[test]
    fn test_boss_candidates() {
        assert!(EnemyKind::Dragon.is_boss_candidate());
        assert!(!EnemyKind::Rat.is_boss_candidate());
    }
}
