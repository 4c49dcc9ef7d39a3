use crate::data::{EnemyKind, ItemId};

/// A scaled enemy for a single encounter.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub kind: EnemyKind,
    pub tier: u32,
    pub hp: u32,
    pub max_hp: u32,
    pub attack: i32,
    pub defense: i32,
    pub xp: u64,
    pub gold: u64,
    pub drop_chance: f64,
    pub drops: &'static [ItemId],
    pub is_boss: bool,
}

impl Enemy {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }
}
