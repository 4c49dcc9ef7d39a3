//! The vault keeps gold and items safe from the death penalty.

use crate::character::Character;
use crate::core::error::ActionError;

pub fn deposit_gold(character: &mut Character, amount: u64) -> Result<String, ActionError> {
    if amount == 0 {
        return Err(ActionError::InvalidAmount);
    }
    if character.wallet_gold < amount {
        return Err(ActionError::NotEnoughGold {
            needed: amount,
            available: character.wallet_gold,
        });
    }
    character.wallet_gold -= amount;
    character.vault_gold += amount;
    Ok(format!("Deposited {}g into the vault.", amount))
}

pub fn withdraw_gold(character: &mut Character, amount: u64) -> Result<String, ActionError> {
    if amount == 0 {
        return Err(ActionError::InvalidAmount);
    }
    if character.vault_gold < amount {
        return Err(ActionError::NotEnoughGold {
            needed: amount,
            available: character.vault_gold,
        });
    }
    character.vault_gold -= amount;
    character.wallet_gold += amount;
    Ok(format!("Withdrew {}g from the vault.", amount))
}

pub fn deposit_item(character: &mut Character, index: usize) -> Result<String, ActionError> {
    if index >= character.bag.len() {
        return Err(ActionError::IndexOutOfRange {
            index,
            len: character.bag.len(),
        });
    }
    let item = character.bag.remove(index);
    character.vault_items.push(item);
    Ok(format!("Stored {} in the vault.", item.definition().name))
}

pub fn withdraw_item(character: &mut Character, index: usize) -> Result<String, ActionError> {
    if index >= character.vault_items.len() {
        return Err(ActionError::IndexOutOfRange {
            index,
            len: character.vault_items.len(),
        });
    }
    let item = character.vault_items.remove(index);
    character.bag.push(item);
    Ok(format!("Took {} from the vault.", item.definition().name))
}
