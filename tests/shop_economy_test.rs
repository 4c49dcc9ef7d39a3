//! Integration test: buying, selling, repairs, the vault and the death penalty

use delve::character::Character;
use delve::core::{apply_action, apply_death_penalty, Action, MAX_DURABILITY};
use delve::data::{Class, ItemId, Race};
use delve::items::{EquipmentSlot, ItemInstance};
use delve::shop::{buy_price, max_shop_tier, restock, sell_price};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn merchant_customer() -> Character {
    let mut c = Character::create("Shopper", Race::Human, Class::Rogue).unwrap();
    c.wallet_gold = 500;
    c
}

#[test]
fn test_buy_requires_stock_and_gold() {
    let c = merchant_customer();
    let stock = [ItemId::Mace, ItemId::SmallPotion];

    let (c, log) = apply_action(c, &Action::Buy(ItemId::Katana), &stock);
    assert_eq!(log, vec!["Katana is not for sale right now.".to_string()]);
    assert_eq!(c.wallet_gold, 500);

    let price = buy_price(&ItemId::Mace.definition());
    assert_eq!(price, 270);
    let (c, _) = apply_action(c, &Action::Buy(ItemId::Mace), &stock);
    assert_eq!(c.wallet_gold, 500 - price);
    assert_eq!(c.bag.last().map(|i| i.id), Some(ItemId::Mace));

    // Stock is not consumed, but the wallet runs dry
    let (c, log) = apply_action(c, &Action::Buy(ItemId::Mace), &stock);
    assert_eq!(c.wallet_gold, 230);
    assert_eq!(log, vec!["Not enough gold: need 270, have 230.".to_string()]);
}

#[test]
fn test_sell_credits_wallet_and_run_total() {
    let c = merchant_customer();
    let run_before = c.gold_accumulated_run;
    let (c, log) = apply_action(c, &Action::Sell(0), &[]);
    assert_eq!(sell_price(&ItemId::SmallPotion.definition()), 10);
    assert_eq!(log, vec!["You sold Small Potion for 10g.".to_string()]);
    assert_eq!(c.wallet_gold, 510);
    assert_eq!(c.gold_accumulated_run, run_before + 10);
    assert_eq!(c.bag.len(), 1);
}

#[test]
fn test_sell_equipped_auto_equips_best_replacement() {
    let mut c = merchant_customer();
    c.bag.push(ItemInstance::new(ItemId::WoodenClub));
    c.bag.push(ItemInstance::new(ItemId::Mace));

    let (c, log) = apply_action(c, &Action::SellEquipped(EquipmentSlot::Weapon), &[]);
    assert_eq!(log[1], "Automatically equipped Mace!");
    assert_eq!(
        c.equipment.get(EquipmentSlot::Weapon).map(|i| i.id),
        Some(ItemId::Mace)
    );

    let (c, log) = apply_action(c, &Action::SellEquipped(EquipmentSlot::Ring), &[]);
    assert_eq!(log, vec!["Nothing equipped in the ring slot.".to_string()]);
    assert!(c.equipment.get(EquipmentSlot::Ring).is_none());
}

#[test]
fn test_repair_all_is_all_or_nothing() {
    let mut c = merchant_customer();
    let (c2, log) = apply_action(c.clone(), &Action::RepairAll, &[]);
    assert_eq!(log, vec!["Nothing needs repairing.".to_string()]);
    assert_eq!(c2, c);

    for slot in [EquipmentSlot::Weapon, EquipmentSlot::Armor] {
        if let Some(item) = c.equipment.get_mut(slot) {
            item.durability = Some(10);
        }
    }
    c.wallet_gold = 0;
    let broke = c.clone();
    let (c, _) = apply_action(c, &Action::RepairAll, &[]);
    assert_eq!(c, broke);

    let mut c = c;
    c.wallet_gold = 1_000;
    let (c, _) = apply_action(c, &Action::RepairAll, &[]);
    assert!(c.wallet_gold < 1_000);
    for (_, item) in c.equipment.iter_equipped() {
        assert_eq!(item.durability, Some(MAX_DURABILITY));
    }
}

#[test]
fn test_vault_survives_death_penalty() {
    let c = merchant_customer();
    let (c, _) = apply_action(c, &Action::DepositGold(300), &[]);
    let (c, _) = apply_action(c, &Action::DepositItem(0), &[]);
    assert_eq!(c.wallet_gold, 200);
    assert_eq!(c.vault_gold, 300);

    let mut c = c;
    c.take_damage(c.current_hp);
    apply_death_penalty(&mut c);

    assert_eq!(c.wallet_gold, 0);
    assert_eq!(c.gold_accumulated_run, c.starting_gold());
    assert!(c.bag.is_empty());
    assert_eq!(c.vault_gold, 300);
    assert_eq!(c.vault_items.len(), 1);
    assert_eq!(c.current_hp, c.derived.max_hp);
    assert_eq!(
        c.equipment.get(EquipmentSlot::Weapon).and_then(|i| i.durability),
        Some(MAX_DURABILITY / 2)
    );

    let (c, _) = apply_action(c, &Action::WithdrawItem(0), &[]);
    let (c, _) = apply_action(c, &Action::WithdrawGold(50), &[]);
    assert_eq!(c.bag.len(), 1);
    assert_eq!(c.wallet_gold, 50);
}

#[test]
fn test_stock_grows_with_completed_dungeons() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let early = restock(&mut rng, 0);
    assert!(early
        .iter()
        .all(|id| id.definition().tier <= max_shop_tier(0) + 1));
    assert!(early.iter().any(|id| id.definition().is_healing()));

    let late = restock(&mut rng, 9);
    assert!(late
        .iter()
        .all(|id| id.definition().tier <= max_shop_tier(9) + 1));
}
