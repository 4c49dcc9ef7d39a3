use crate::core::constants::{NUM_ATTRIBUTES, STARTING_ATTRIBUTE_VALUE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four base attributes, in tie-break order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AttributeType {
    Strength,
    Constitution,
    Dexterity,
    Luck,
}

impl AttributeType {
    pub fn all() -> [AttributeType; NUM_ATTRIBUTES] {
        [
            AttributeType::Strength,
            AttributeType::Constitution,
            AttributeType::Dexterity,
            AttributeType::Luck,
        ]
    }

    pub fn abbrev(&self) -> &'static str {
        match self {
            AttributeType::Strength => "STR",
            AttributeType::Constitution => "CON",
            AttributeType::Dexterity => "DEX",
            AttributeType::Luck => "LCK",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AttributeType::Strength => "Strength",
            AttributeType::Constitution => "Constitution",
            AttributeType::Dexterity => "Dexterity",
            AttributeType::Luck => "Luck",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            AttributeType::Strength => 0,
            AttributeType::Constitution => 1,
            AttributeType::Dexterity => 2,
            AttributeType::Luck => 3,
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Attribute values. Signed because items and racial penalties can push
/// a value below zero before allocation catches up.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Attributes {
    values: [i32; NUM_ATTRIBUTES],
}

impl Default for Attributes {
    fn default() -> Self {
        Self::new()
    }
}

impl Attributes {
    /// Every attribute at the starting value.
    pub fn new() -> Self {
        Self {
            values: [STARTING_ATTRIBUTE_VALUE; NUM_ATTRIBUTES],
        }
    }

    pub fn zero() -> Self {
        Self {
            values: [0; NUM_ATTRIBUTES],
        }
    }

    pub fn from_values(str: i32, con: i32, dex: i32, lck: i32) -> Self {
        Self {
            values: [str, con, dex, lck],
        }
    }

    pub fn get(&self, attr: AttributeType) -> i32 {
        self.values[attr.index()]
    }

    pub fn set(&mut self, attr: AttributeType, value: i32) {
        self.values[attr.index()] = value;
    }

    pub fn increment(&mut self, attr: AttributeType) {
        self.add_to(attr, 1);
    }

    pub fn add_to(&mut self, attr: AttributeType, amount: i32) {
        self.values[attr.index()] = self.values[attr.index()].saturating_add(amount);
    }

    /// Adds another Attributes' values to this one.
    pub fn add(&mut self, other: &Attributes) {
        for attr in AttributeType::all() {
            self.add_to(attr, other.get(attr));
        }
    }

    /// Lowest attribute; ties go to the first in `AttributeType::all()` order.
    pub fn lowest(&self) -> AttributeType {
        let mut lowest = AttributeType::Strength;
        for attr in AttributeType::all() {
            if self.get(attr) < self.get(lowest) {
                lowest = attr;
            }
        }
        lowest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_attributes() {
        let attrs = Attributes::new();
        for attr_type in AttributeType::all() {
            assert_eq!(attrs.get(attr_type), 5);
        }
    }

    #[test]
    fn test_get_set() {
        let mut attrs = Attributes::new();
        attrs.set(AttributeType::Strength, 16);
        assert_eq!(attrs.get(AttributeType::Strength), 16);
        assert_eq!(attrs.get(AttributeType::Dexterity), 5);
    }

    #[test]
    fn test_increment() {
        let mut attrs = Attributes::new();
        attrs.increment(AttributeType::Luck);
        assert_eq!(attrs.get(AttributeType::Luck), 6);
    }

    #[test]
    fn test_add_allows_negative_bonuses() {
        let mut attrs = Attributes::from_values(1, 1, 1, 1);
        attrs.add(&Attributes::from_values(2, 0, -3, 0));
        assert_eq!(attrs.get(AttributeType::Strength), 3);
        assert_eq!(attrs.get(AttributeType::Dexterity), -2);
    }

    #[test]
    fn test_lowest_breaks_ties_in_enumeration_order() {
        let attrs = Attributes::from_values(7, 4, 4, 4);
        assert_eq!(attrs.lowest(), AttributeType::Constitution);

        let attrs = Attributes::from_values(5, 5, 5, 5);
        assert_eq!(attrs.lowest(), AttributeType::Strength);

        let attrs = Attributes::from_values(5, 6, 7, 2);
        assert_eq!(attrs.lowest(), AttributeType::Luck);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, attr) in AttributeType::all().iter().enumerate() {
            assert_eq!(attr.index(), i);
        }
    }
}
