//! Equipment wear, breakage, and repair pricing.

use super::equipment::Equipment;
use super::inventory::auto_equip_best;
use super::types::{EquipmentSlot, ItemInstance};
use crate::character::Character;
use crate::core::constants::*;
use crate::data::Race;

/// Durability an item in `slot` loses after one won fight.
pub fn durability_loss(slot: EquipmentSlot, is_boss: bool, race: Race) -> u32 {
    let loss = match (slot, is_boss) {
        (EquipmentSlot::Weapon | EquipmentSlot::Armor, false) => DURABILITY_LOSS_WEAPON_ARMOR_NORMAL,
        (EquipmentSlot::Weapon | EquipmentSlot::Armor, true) => DURABILITY_LOSS_WEAPON_ARMOR_BOSS,
        (EquipmentSlot::Amulet | EquipmentSlot::Ring, false) => DURABILITY_LOSS_AMULET_RING_NORMAL,
        (EquipmentSlot::Amulet | EquipmentSlot::Ring, true) => DURABILITY_LOSS_AMULET_RING_BOSS,
    };
    if race == Race::Dwarf {
        (loss as f64 * DWARF_DURABILITY_LOSS_MULT).ceil() as u32
    } else {
        loss
    }
}

/// Wears every equipped item after a victory. Items reaching zero shatter and
/// are replaced with the best intact candidate from the bag.
pub fn wear_equipment(character: &mut Character, is_boss: bool) -> Vec<String> {
    let mut log = Vec::new();
    let mut broken_slots = Vec::new();

    for slot in EquipmentSlot::all() {
        let loss = durability_loss(slot, is_boss, character.race);
        let Some(item) = character.equipment.get_mut(slot) else {
            continue;
        };
        let Some(durability) = item.durability else {
            continue;
        };
        let remaining = durability.saturating_sub(loss);
        item.durability = Some(remaining);
        if remaining == 0 {
            log.push(format!("{} shattered!", item.definition().name));
            character.equipment.set(slot, None);
            broken_slots.push(slot);
        }
    }

    if !broken_slots.is_empty() {
        log.push("Searching for replacements in your bag...".to_string());
        for slot in EquipmentSlot::all() {
            if character.equipment.get(slot).is_none() {
                if let Some(name) = auto_equip_best(character, slot) {
                    log.push(format!("Automatically equipped {}!", name));
                }
            }
        }
    }

    character.recompute();
    log
}

/// Death penalty: every equipped item keeps half its durability (rounded down).
pub fn halve_equipped_durability(equipment: &mut Equipment) {
    for slot in EquipmentSlot::all() {
        if let Some(item) = equipment.get_mut(slot) {
            if let Some(durability) = item.durability {
                item.durability = Some(durability / 2);
            }
        }
    }
}

/// Gold needed to bring an item back to full durability (0 if nothing to fix).
pub fn repair_cost(item: &ItemInstance) -> u64 {
    match item.durability {
        Some(d) if d < MAX_DURABILITY => {
            ((MAX_DURABILITY - d) as f64 * REPAIR_COST_PER_PERCENT).ceil() as u64
        }
        _ => 0,
    }
}
