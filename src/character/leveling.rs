//! XP curve, level-ups and stat point allocation.

use super::attributes::AttributeType;
use super::types::Character;
use crate::core::constants::*;
use crate::core::error::ActionError;
use crate::data::Race;
use tracing::info;

/// Next XP threshold after a level-up.
pub fn next_xp_threshold(current: u64) -> u64 {
    (current as f64 * XP_CURVE_MULT).floor() as u64
}

/// Stat points granted when leaving `old_level`.
pub fn stat_points_for_level_up(old_level: u32) -> u32 {
    1 + old_level / STAT_POINTS_LEVEL_DIVISOR
}

/// Human "Adaptability" bonus at `new_level`, if this level earns one.
pub fn adaptability_bonus(new_level: u32) -> Option<i32> {
    if new_level % HUMAN_ADAPTABILITY_INTERVAL == 0 {
        Some(1 + ((new_level - 1) / HUMAN_ADAPTABILITY_INTERVAL) as i32)
    } else {
        None
    }
}

/// Adds XP and applies every level-up it pays for.
pub fn gain_xp(character: &mut Character, amount: u64) -> Vec<String> {
    character.xp += amount;
    apply_level_ups(character)
}

pub fn apply_level_ups(character: &mut Character) -> Vec<String> {
    let mut log = Vec::new();
    let start_level = character.level;

    while character.xp >= character.xp_to_next_level {
        let old_level = character.level;
        character.level += 1;
        character.xp -= character.xp_to_next_level;
        character.xp_to_next_level = next_xp_threshold(character.xp_to_next_level);
        character.stat_points += stat_points_for_level_up(old_level);

        if character.race == Race::Human {
            if let Some(bonus) = adaptability_bonus(character.level) {
                let lowest = character.attributes.lowest();
                character.attributes.add_to(lowest, bonus);
                log.push(format!(
                    "[Adaptability] Your versatility grows! You gained +{} to your lowest stat: {}.",
                    bonus,
                    lowest.name()
                ));
            }
        }
    }

    if character.level > start_level {
        info!(
            character = %character.name,
            from = start_level,
            to = character.level,
            "level up"
        );
        log.push(format!("LEVEL UP! You are now level {}!", character.level));
        character.recompute();
    }
    log
}

/// Spends one stat point on `attr`. Constitution also restores HP.
pub fn allocate_point(character: &mut Character, attr: AttributeType) -> Result<String, ActionError> {
    if character.stat_points == 0 {
        return Err(ActionError::NoStatPoints);
    }
    character.stat_points -= 1;
    character.attributes.increment(attr);
    if attr == AttributeType::Constitution {
        character.current_hp += HP_PER_CON;
    }
    character.recompute();
    Ok(format!("{} increased to {}.", attr.name(), character.attributes.get(attr)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::attributes::Attributes;
    use crate::data::Class;

    fn create(race: Race) -> Character {
        Character::create("Tester", race, Class::Fighter).unwrap()
    }

    #[test]
    fn test_xp_curve() {
        assert_eq!(next_xp_threshold(60), 85);
        assert_eq!(next_xp_threshold(85), 120);
    }

    #[test]
    fn test_stat_points_grow_every_four_levels() {
        assert_eq!(stat_points_for_level_up(1), 1);
        assert_eq!(stat_points_for_level_up(3), 1);
        assert_eq!(stat_points_for_level_up(4), 2);
        assert_eq!(stat_points_for_level_up(8), 3);
    }

    #[test]
    fn test_adaptability_bonus() {
        assert_eq!(adaptability_bonus(3), None);
        assert_eq!(adaptability_bonus(4), Some(1));
        assert_eq!(adaptability_bonus(8), Some(2));
        assert_eq!(adaptability_bonus(12), Some(3));
    }

    #[test]
    fn test_single_level_up() {
        let mut c = create(Race::Elf);
        let log = gain_xp(&mut c, 70);
        assert_eq!(c.level, 2);
        assert_eq!(c.xp, 10);
        assert_eq!(c.xp_to_next_level, 85);
        assert_eq!(c.stat_points, 1);
        assert!(log.iter().any(|l| l.contains("LEVEL UP")));
    }

    #[test]
    fn test_multi_level_up_terminates() {
        let mut c = create(Race::Dwarf);
        gain_xp(&mut c, 1_000_000);
        assert!(c.level > 10);
        assert!(c.xp < c.xp_to_next_level);
    }

    #[test]
    fn test_human_adaptability_raises_lowest() {
        let mut c = create(Race::Human);
        c.attributes = Attributes::from_values(8, 8, 3, 8);
        c.level = 3;
        c.xp_to_next_level = 10;
        let log = gain_xp(&mut c, 10);
        assert_eq!(c.level, 4);
        assert_eq!(c.attributes.get(AttributeType::Dexterity), 4);
        assert!(log.iter().any(|l| l.contains("Adaptability")));
    }

    #[test]
    fn test_non_human_gets_no_adaptability() {
        let mut c = create(Race::Elf);
        let before = c.attributes;
        c.level = 3;
        c.xp_to_next_level = 10;
        gain_xp(&mut c, 10);
        assert_eq!(c.attributes, before);
    }

    #[test]
    fn test_allocate_constitution_restores_hp() {
        let mut c = create(Race::Elf);
        c.stat_points = 1;
        c.take_damage(20);
        let hp = c.current_hp;
        allocate_point(&mut c, AttributeType::Constitution).unwrap();
        assert_eq!(c.current_hp, hp + 10);
        assert_eq!(c.stat_points, 0);
    }

    #[test]
    fn test_allocate_without_points_fails() {
        let mut c = create(Race::Elf);
        assert_eq!(
            allocate_point(&mut c, AttributeType::Luck),
            Err(ActionError::NoStatPoints)
        );
    }
}
