//! Floor encounter data structures.

use crate::data::ItemId;
use crate::enemies::Enemy;

/// What the player is facing on the current floor.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Encounter {
    /// Nothing resolved yet (dungeon entrance, or back from the shop).
    #[default]
    Exploring,
    /// An enemy blocks the way until fought or fled.
    Enemy(Enemy),
    /// The floor is done; the player may explore deeper.
    Cleared,
}

impl Encounter {
    pub fn enemy(&self) -> Option<&Enemy> {
        match self {
            Encounter::Enemy(enemy) => Some(enemy),
            _ => None,
        }
    }

    pub fn is_combat(&self) -> bool {
        matches!(self, Encounter::Enemy(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrapOutcome {
    Avoided,
    Triggered { damage: u32, reduced: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreasureOutcome {
    pub gold: u64,
    pub item: Option<ItemId>,
}

/// The kind of event a floor produced.
#[derive(Debug, Clone, PartialEq)]
pub enum FloorEvent {
    Boss,
    Combat,
    Trap(TrapOutcome),
    Treasure(TreasureOutcome),
}

/// Result of exploring one floor.
#[derive(Debug, Clone, PartialEq)]
pub struct ExploreOutcome {
    pub event: FloorEvent,
    pub encounter: Encounter,
    pub log: Vec<String>,
}
