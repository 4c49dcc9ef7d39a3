//! Buying, selling and repairing. Every function leaves the character
//! untouched when it returns an error.

use crate::character::Character;
use crate::core::constants::*;
use crate::core::error::ActionError;
use crate::data::{ItemDef, ItemId};
use crate::items::{auto_equip_best, repair_cost, EquipmentSlot, ItemInstance};

pub fn buy_price(def: &ItemDef) -> u64 {
    (def.value as f64 * SHOP_BUY_MULT).ceil() as u64
}

pub fn sell_price(def: &ItemDef) -> u64 {
    ((def.value as f64 * SHOP_SELL_MULT).floor() as u64).max(1)
}

fn spend(character: &mut Character, cost: u64) -> Result<(), ActionError> {
    if character.wallet_gold < cost {
        return Err(ActionError::NotEnoughGold {
            needed: cost,
            available: character.wallet_gold,
        });
    }
    character.wallet_gold -= cost;
    Ok(())
}

pub fn buy(character: &mut Character, id: ItemId, stock: &[ItemId]) -> Result<String, ActionError> {
    let def = id.definition();
    if !stock.contains(&id) {
        return Err(ActionError::NotInStock(def.name.to_string()));
    }
    let price = buy_price(&def);
    spend(character, price)?;
    character.bag.push(ItemInstance::new(id));
    Ok(format!("You bought {} for {}g.", def.name, price))
}

pub fn sell(character: &mut Character, index: usize) -> Result<String, ActionError> {
    if index >= character.bag.len() {
        return Err(ActionError::IndexOutOfRange {
            index,
            len: character.bag.len(),
        });
    }
    let item = character.bag.remove(index);
    let def = item.definition();
    let price = sell_price(&def);
    character.credit_gold(price);
    Ok(format!("You sold {} for {}g.", def.name, price))
}

/// Sells straight off the body, then fills the slot from the bag if possible.
pub fn sell_equipped(character: &mut Character, slot: EquipmentSlot) -> Result<Vec<String>, ActionError> {
    let item = character
        .equipment
        .set(slot, None)
        .ok_or(ActionError::EmptySlot(slot))?;
    let def = item.definition();
    let price = sell_price(&def);
    character.credit_gold(price);
    character.recompute();

    let mut log = vec![format!("You sold your equipped {} for {}g.", def.name, price)];
    match auto_equip_best(character, slot) {
        Some(name) => log.push(format!("Automatically equipped {}!", name)),
        None => log.push("No replacement found in inventory.".to_string()),
    }
    Ok(log)
}

pub fn repair(character: &mut Character, slot: EquipmentSlot) -> Result<String, ActionError> {
    let item = character
        .equipment
        .get(slot)
        .copied()
        .ok_or(ActionError::EmptySlot(slot))?;
    let cost = repair_cost(&item);
    if cost == 0 {
        return Err(ActionError::NothingToRepair);
    }
    spend(character, cost)?;
    if let Some(equipped) = character.equipment.get_mut(slot) {
        equipped.durability = Some(MAX_DURABILITY);
    }
    character.recompute();
    Ok(format!("Repaired {} for {}g.", item.definition().name, cost))
}

/// Total gold to restore every equipped item.
pub fn repair_all_cost(character: &Character) -> u64 {
    character
        .equipment
        .iter_equipped()
        .map(|(_, item)| repair_cost(item))
        .sum()
}

/// Repairs everything or nothing.
pub fn repair_all(character: &mut Character) -> Result<String, ActionError> {
    let total = repair_all_cost(character);
    if total == 0 {
        return Err(ActionError::NothingToRepair);
    }
    spend(character, total)?;
    for slot in EquipmentSlot::all() {
        if let Some(item) = character.equipment.get_mut(slot) {
            if item.durability.is_some() {
                item.durability = Some(MAX_DURABILITY);
            }
        }
    }
    character.recompute();
    Ok(format!("Repaired all equipment for {}g.", total))
}
