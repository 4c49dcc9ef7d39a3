use crate::core::constants::MAX_DURABILITY;
use crate::data::items::{ItemDef, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Amulet,
    Ring,
}

impl EquipmentSlot {
    pub fn all() -> [EquipmentSlot; 4] {
        [
            EquipmentSlot::Weapon,
            EquipmentSlot::Armor,
            EquipmentSlot::Amulet,
            EquipmentSlot::Ring,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            EquipmentSlot::Weapon => "weapon",
            EquipmentSlot::Armor => "armor",
            EquipmentSlot::Amulet => "amulet",
            EquipmentSlot::Ring => "ring",
        }
    }
}

impl fmt::Display for EquipmentSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A concrete item owned by the player.
///
/// `durability` is `None` for items that never wear out (consumables).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    pub id: ItemId,
    #[serde(default)]
    pub plus: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub durability: Option<u32>,
}

impl ItemInstance {
    /// A fresh copy of an item: full durability when the item can wear out.
    pub fn new(id: ItemId) -> Self {
        let durability = id.definition().durable.then_some(MAX_DURABILITY);
        Self {
            id,
            plus: 0,
            durability,
        }
    }

    pub fn definition(&self) -> ItemDef {
        self.id.definition()
    }

    pub fn is_broken(&self) -> bool {
        matches!(self.durability, Some(0))
    }

    pub fn slot(&self) -> Option<EquipmentSlot> {
        self.definition().category.slot()
    }

    pub fn display_name(&self) -> String {
        let def = self.definition();
        let mut name = format!("{} {}", def.icon, def.name);
        if self.plus > 0 {
            name.push_str(&format!(" +{}", self.plus));
        }
        if let Some(durability) = self.durability {
            name.push_str(&format!(" [{}%]", durability));
        }
        name
    }
}
