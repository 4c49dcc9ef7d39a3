//! Bag management: equip, unequip, consume, and best-replacement search.

use super::types::{EquipmentSlot, ItemInstance};
use crate::character::Character;
use crate::core::error::ActionError;

/// Bag index of the most valuable intact item for `slot`.
/// Ties go to the earliest bag position.
pub fn best_replacement(bag: &[ItemInstance], slot: EquipmentSlot) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;
    for (index, item) in bag.iter().enumerate() {
        if item.slot() != Some(slot) || item.is_broken() {
            continue;
        }
        let value = item.definition().value;
        if best.map_or(true, |(_, best_value)| value > best_value) {
            best = Some((index, value));
        }
    }
    best.map(|(index, _)| index)
}

/// Moves the best bag candidate into an empty `slot`. Returns its name.
pub fn auto_equip_best(character: &mut Character, slot: EquipmentSlot) -> Option<String> {
    let index = best_replacement(&character.bag, slot)?;
    let item = character.bag.remove(index);
    let name = item.definition().name.to_string();
    character.equipment.set(slot, Some(item));
    character.recompute();
    Some(name)
}

fn check_index(len: usize, index: usize) -> Result<(), ActionError> {
    if index >= len {
        Err(ActionError::IndexOutOfRange { index, len })
    } else {
        Ok(())
    }
}

/// Equips the bag item at `index`; the previously equipped item goes to the end of the bag.
pub fn equip(character: &mut Character, index: usize) -> Result<String, ActionError> {
    check_index(character.bag.len(), index)?;
    let def = character.bag[index].definition();
    let slot = def
        .category
        .slot()
        .ok_or_else(|| ActionError::NotEquippable(def.name.to_string()))?;

    let item = character.bag.remove(index);
    if let Some(previous) = character.equipment.set(slot, Some(item)) {
        character.bag.push(previous);
    }
    character.recompute();
    Ok(format!("Equipped {}.", def.name))
}

pub fn unequip(character: &mut Character, slot: EquipmentSlot) -> Result<String, ActionError> {
    let item = character
        .equipment
        .set(slot, None)
        .ok_or(ActionError::EmptySlot(slot))?;
    character.bag.push(item);
    character.recompute();
    Ok(format!("Unequipped {}.", item.definition().name))
}

/// Drinks a healing consumable. Rejected when it would heal nothing.
pub fn use_item(character: &mut Character, index: usize) -> Result<String, ActionError> {
    check_index(character.bag.len(), index)?;
    let def = character.bag[index].definition();
    if !def.is_healing() {
        return Err(ActionError::NotUsable(def.name.to_string()));
    }
    if character.current_hp >= character.derived.max_hp {
        return Err(ActionError::HpAlreadyFull);
    }

    character.bag.remove(index);
    let healed = character.heal(def.stats.heal);
    Ok(format!("You used {} and recovered {} HP.", def.name, healed))
}
