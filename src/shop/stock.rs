//! Shop inventory rotation.

use crate::core::constants::*;
use crate::data::ItemId;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

/// Highest item tier the shop offers after `dungeons_completed` boss kills.
pub fn max_shop_tier(dungeons_completed: u32) -> u32 {
    (dungeons_completed.div_ceil(2) + 1).min(MAX_ITEM_TIER)
}

fn purchasable_up_to(max_tier: u32) -> Vec<ItemId> {
    ItemId::ALL
        .iter()
        .copied()
        .filter(|id| {
            let def = id.definition();
            def.value > 0 && def.tier <= max_tier
        })
        .collect()
}

/// Rolls a fresh stock list. Always contains at least one healing item when
/// any is available.
pub fn restock(rng: &mut impl Rng, dungeons_completed: u32) -> Vec<ItemId> {
    let max_tier = max_shop_tier(dungeons_completed);
    let available = purchasable_up_to(max_tier);

    let mut shuffled = available.clone();
    shuffled.shuffle(rng);
    let mut stock: Vec<ItemId> = shuffled.into_iter().take(SHOP_BASE_STOCK_SIZE).collect();

    if rng.gen::<f64>() < SHOP_RARE_ITEM_CHANCE {
        let rare_tier = (max_tier + 1).min(MAX_ITEM_TIER);
        let rares: Vec<ItemId> = ItemId::ALL
            .iter()
            .copied()
            .filter(|id| {
                let def = id.definition();
                def.value > 0 && def.tier == rare_tier && !stock.contains(id)
            })
            .collect();
        if let Some(rare) = rares.choose(rng) {
            stock.push(*rare);
        }
    }

    if !stock.iter().any(|id| id.definition().is_healing()) {
        let best_potion = available
            .iter()
            .copied()
            .filter(|id| id.definition().is_healing())
            .max_by_key(|id| id.definition().value);
        if let Some(potion) = best_potion {
            stock.push(potion);
        }
    }

    debug!(max_tier, items = stock.len(), "shop restocked");
    stock
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_max_shop_tier() {
        assert_eq!(max_shop_tier(0), 1);
        assert_eq!(max_shop_tier(1), 2);
        assert_eq!(max_shop_tier(2), 2);
        assert_eq!(max_shop_tier(3), 3);
        assert_eq!(max_shop_tier(40), MAX_ITEM_TIER);
    }

    #[test]
    fn test_restock_respects_tiers_and_heals() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for completed in 0..12 {
            let max_tier = max_shop_tier(completed);
            let stock = restock(&mut rng, completed);
            assert!(stock.len() >= SHOP_BASE_STOCK_SIZE);
            assert!(stock.len() <= SHOP_BASE_STOCK_SIZE + 2);
            assert!(stock.iter().any(|id| id.definition().is_healing()));
            for id in &stock {
                let def = id.definition();
                assert!(def.value > 0);
                assert!(def.tier <= (max_tier + 1).min(MAX_ITEM_TIER));
            }
        }
    }

    #[test]
    fn test_restock_has_no_duplicates() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        for _ in 0..50 {
            let stock = restock(&mut rng, 4);
            let mut seen = stock.clone();
            seen.sort_by_key(|id| id.name());
            seen.dedup();
            assert_eq!(seen.len(), stock.len());
        }
    }
}
