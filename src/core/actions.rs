//! Player actions as pure `(Character, Action) -> (Character, log)` transformations.

use crate::character::{allocate_point, AttributeType, Character};
use crate::core::error::ActionError;
use crate::data::ItemId;
use crate::items::{equip, unequip, use_item, EquipmentSlot};
use crate::shop::{
    buy, deposit_gold, deposit_item, repair, repair_all, sell, sell_equipped, withdraw_gold,
    withdraw_item,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Equip(usize),
    Unequip(EquipmentSlot),
    UseItem(usize),
    AllocatePoint(AttributeType),
    Buy(ItemId),
    Sell(usize),
    SellEquipped(EquipmentSlot),
    Repair(EquipmentSlot),
    RepairAll,
    DepositGold(u64),
    WithdrawGold(u64),
    DepositItem(usize),
    WithdrawItem(usize),
}

impl Action {
    /// Bag and equipment changes, not allowed while an enemy is engaged.
    pub fn touches_inventory(&self) -> bool {
        matches!(self, Action::Equip(_) | Action::Unequip(_) | Action::UseItem(_))
    }

    /// Trading, repairs and vault transfers.
    pub fn requires_shop(&self) -> bool {
        !matches!(
            self,
            Action::Equip(_) | Action::Unequip(_) | Action::UseItem(_) | Action::AllocatePoint(_)
        )
    }
}

/// Runs `action` in place. On error the character may be partially touched;
/// use [`apply_action`] for the all-or-nothing form.
pub fn try_action(
    character: &mut Character,
    action: &Action,
    shop_stock: &[ItemId],
) -> Result<Vec<String>, ActionError> {
    let line = match *action {
        Action::Equip(index) => equip(character, index)?,
        Action::Unequip(slot) => unequip(character, slot)?,
        Action::UseItem(index) => use_item(character, index)?,
        Action::AllocatePoint(attr) => allocate_point(character, attr)?,
        Action::Buy(id) => buy(character, id, shop_stock)?,
        Action::Sell(index) => sell(character, index)?,
        Action::SellEquipped(slot) => return sell_equipped(character, slot),
        Action::Repair(slot) => repair(character, slot)?,
        Action::RepairAll => repair_all(character)?,
        Action::DepositGold(amount) => deposit_gold(character, amount)?,
        Action::WithdrawGold(amount) => withdraw_gold(character, amount)?,
        Action::DepositItem(index) => deposit_item(character, index)?,
        Action::WithdrawItem(index) => withdraw_item(character, index)?,
    };
    Ok(vec![line])
}

/// Applies `action` to a copy of `character`. A rejected action returns the
/// input unchanged, with the reason as its only log line.
pub fn apply_action(
    character: Character,
    action: &Action,
    shop_stock: &[ItemId],
) -> (Character, Vec<String>) {
    let mut next = character.clone();
    match try_action(&mut next, action, shop_stock) {
        Ok(log) => (next.resolved(), log),
        Err(err) => (character, vec![err.to_string()]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Class, Race};

    fn hero() -> Character {
        Character::create("Actor", Race::Human, Class::Fighter).unwrap()
    }

    #[test]
    fn test_rejected_action_leaves_character_untouched() {
        let c = hero();
        let (after, log) = apply_action(c.clone(), &Action::Sell(42), &[]);
        assert_eq!(after, c);
        assert_eq!(log, vec!["No item at position 42 (you have 2).".to_string()]);
    }

    #[test]
    fn test_use_item_at_full_hp_is_rejected() {
        let c = hero();
        let (after, log) = apply_action(c.clone(), &Action::UseItem(0), &[]);
        assert_eq!(after, c);
        assert_eq!(log, vec![ActionError::HpAlreadyFull.to_string()]);
    }

    #[test]
    fn test_buy_then_equip() {
        let mut c = hero();
        c.wallet_gold = 1_000;
        let stock = [ItemId::RingOfMight];
        let (c, _) = apply_action(c, &Action::Buy(ItemId::RingOfMight), &stock);
        let index = c.bag.len() - 1;
        let (c, log) = apply_action(c, &Action::Equip(index), &stock);
        assert_eq!(log, vec!["Equipped Ring of Might.".to_string()]);
        assert_eq!(
            c.equipment.get(EquipmentSlot::Ring).map(|i| i.id),
            Some(ItemId::RingOfMight)
        );
    }

    #[test]
    fn test_action_categories() {
        assert!(Action::Equip(0).touches_inventory());
        assert!(!Action::AllocatePoint(AttributeType::Luck).touches_inventory());
        assert!(!Action::AllocatePoint(AttributeType::Luck).requires_shop());
        assert!(Action::RepairAll.requires_shop());
        assert!(Action::WithdrawItem(0).requires_shop());
        assert!(!Action::UseItem(0).requires_shop());
    }
}
