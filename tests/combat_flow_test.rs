//! Integration test: fights, fleeing and enemy generation through the public API

use delve::character::Character;
use delve::combat::{fight, flee, victory_gold, victory_xp, CombatResult, FleeResult};
use delve::data::{Class, EnemyKind, ItemId, Race};
use delve::enemies::{generate_enemy, Enemy, ScalingLevels};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn create_test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(12345)
}

fn pushover() -> Enemy {
    Enemy {
        name: "Sickly Rat".to_string(),
        kind: EnemyKind::Rat,
        tier: 1,
        hp: 1,
        max_hp: 1,
        attack: 1,
        defense: 0,
        xp: 1_000,
        gold: 50,
        drop_chance: 1.0,
        drops: &[ItemId::SmallPotion],
        is_boss: false,
    }
}

fn juggernaut() -> Enemy {
    Enemy {
        name: "Juggernaut".to_string(),
        kind: EnemyKind::Orc,
        tier: 4,
        hp: 1_000_000,
        max_hp: 1_000_000,
        attack: 100_000,
        defense: 100_000,
        xp: 0,
        gold: 0,
        drop_chance: 0.0,
        drops: &[],
        is_boss: false,
    }
}

#[test]
fn test_victory_applies_rewards_in_one_call() {
    let mut rng = create_test_rng();
    let mut c = Character::create("Victor", Race::Dwarf, Class::Fighter).unwrap();
    let xp_bonus = c.derived.xp_bonus;
    let gold_bonus = c.derived.gold_bonus;
    let luck = c.derived.luck;
    let wallet = c.wallet_gold;

    let outcome = fight(&mut c, pushover(), &mut rng);

    assert_eq!(outcome.rounds, 1);
    let report = match outcome.result {
        CombatResult::Victory(report) => report,
        CombatResult::Defeat { .. } => panic!("a one hp rat cannot win"),
    };
    assert_eq!(report.xp_gained, victory_xp(1_000, xp_bonus, Race::Dwarf));
    assert_eq!(report.gold_gained, victory_gold(50, gold_bonus, luck));
    assert_eq!(c.wallet_gold, wallet + report.gold_gained);
    assert_eq!(report.drop, Some(ItemId::SmallPotion));
    assert_eq!(c.bag.len(), 3);
    assert!(report.levels_gained > 0);
    assert_eq!(c.level, 1 + report.levels_gained);
    assert!(c.stat_points > 0);
    assert!(outcome.log.iter().any(|l| l == "You defeated the Sickly Rat!"));
    assert!(outcome.log.iter().any(|l| l == "The Sickly Rat dropped Small Potion!"));
}

#[test]
fn test_defeat_reports_reason() {
    let mut rng = create_test_rng();
    let mut c = Character::create("Loser", Race::Elf, Class::Rogue).unwrap();

    let outcome = fight(&mut c, juggernaut(), &mut rng);

    assert!(!outcome.is_victory());
    assert_eq!(
        outcome.result,
        CombatResult::Defeat {
            reason: "slain by a Juggernaut".to_string()
        }
    );
    assert!(c.is_dead());
    assert_eq!(
        outcome.log.last().map(String::as_str),
        Some("You were overwhelmed by the Juggernaut.")
    );
}

#[test]
fn test_flee_either_escapes_or_costs_a_hit() {
    let mut rng = create_test_rng();
    let enemy = pushover();
    for _ in 0..50 {
        let mut c = Character::create("Runner", Race::Human, Class::Gambler).unwrap();
        let hp = c.current_hp;
        let outcome = flee(&mut c, &enemy, &mut rng);
        match outcome.result {
            FleeResult::Escaped => {
                assert_eq!(c.current_hp, hp);
                assert_eq!(outcome.log, vec!["You successfully escaped!".to_string()]);
            }
            FleeResult::Caught { damage } => {
                assert_eq!(c.current_hp, hp - damage);
                assert_eq!(outcome.log[0], "Escape failed!");
            }
        }
    }
}

#[test]
fn test_generated_enemies_scale_with_depth() {
    let mut rng = create_test_rng();
    let shallow: u32 = (0..200)
        .map(|_| {
            generate_enemy(
                &mut rng,
                ScalingLevels {
                    player_level: 1,
                    dungeon_level: 1,
                    floor_depth: 1,
                },
                false,
            )
            .max_hp
        })
        .sum();
    let deep: u32 = (0..200)
        .map(|_| {
            generate_enemy(
                &mut rng,
                ScalingLevels {
                    player_level: 15,
                    dungeon_level: 8,
                    floor_depth: 9,
                },
                false,
            )
            .max_hp
        })
        .sum();
    assert!(deep > shallow);
}

#[test]
fn test_bosses_are_flagged_and_named() {
    let mut rng = create_test_rng();
    let boss = generate_enemy(
        &mut rng,
        ScalingLevels {
            player_level: 3,
            dungeon_level: 2,
            floor_depth: 10,
        },
        true,
    );
    assert!(boss.is_boss);
    assert!(boss.name.contains("Guardian"));
    assert_eq!(boss.hp, boss.max_hp);
}
