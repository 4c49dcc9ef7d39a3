use super::types::{EquipmentSlot, ItemInstance};
use serde::{Deserialize, Serialize};

/// Player equipment slots. At most one item per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<ItemInstance>,
    pub armor: Option<ItemInstance>,
    pub amulet: Option<ItemInstance>,
    pub ring: Option<ItemInstance>,
}

impl Equipment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemInstance> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_ref(),
            EquipmentSlot::Armor => self.armor.as_ref(),
            EquipmentSlot::Amulet => self.amulet.as_ref(),
            EquipmentSlot::Ring => self.ring.as_ref(),
        }
    }

    pub fn get_mut(&mut self, slot: EquipmentSlot) -> Option<&mut ItemInstance> {
        match slot {
            EquipmentSlot::Weapon => self.weapon.as_mut(),
            EquipmentSlot::Armor => self.armor.as_mut(),
            EquipmentSlot::Amulet => self.amulet.as_mut(),
            EquipmentSlot::Ring => self.ring.as_mut(),
        }
    }

    /// Puts `item` into `slot`, returning whatever was there.
    pub fn set(&mut self, slot: EquipmentSlot, item: Option<ItemInstance>) -> Option<ItemInstance> {
        let target = match slot {
            EquipmentSlot::Weapon => &mut self.weapon,
            EquipmentSlot::Armor => &mut self.armor,
            EquipmentSlot::Amulet => &mut self.amulet,
            EquipmentSlot::Ring => &mut self.ring,
        };
        std::mem::replace(target, item)
    }

    pub fn iter_equipped(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemInstance)> {
        EquipmentSlot::all()
            .into_iter()
            .filter_map(move |slot| self.get(slot).map(|item| (slot, item)))
    }

    /// Equipped items that still count towards stats (not broken).
    pub fn iter_active(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemInstance)> {
        self.iter_equipped().filter(|(_, item)| !item.is_broken())
    }
}
