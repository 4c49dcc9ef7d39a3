use crate::data::ItemId;

/// Everything a won fight paid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VictoryReport {
    pub enemy_name: String,
    pub was_boss: bool,
    pub xp_gained: u64,
    pub gold_gained: u64,
    pub drop: Option<ItemId>,
    pub levels_gained: u32,
    /// HP restored by the Tiefling feast passive.
    pub feast_heal: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatResult {
    Victory(VictoryReport),
    /// The player dropped to 0 HP. Carries the cause for the death log.
    Defeat { reason: String },
}

/// A fight resolved to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatOutcome {
    pub result: CombatResult,
    pub rounds: u32,
    pub log: Vec<String>,
}

impl CombatOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self.result, CombatResult::Victory(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FleeResult {
    Escaped,
    /// The enemy got a free hit in; the fight goes on unless the player died.
    Caught { damage: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleeOutcome {
    pub result: FleeResult,
    pub log: Vec<String>,
}

impl FleeOutcome {
    pub fn escaped(&self) -> bool {
        self.result == FleeResult::Escaped
    }
}

/// Dragonborn ignite state carried between rounds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Burn {
    pub damage: u32,
    pub rounds_left: u32,
}

impl Burn {
    pub fn is_active(&self) -> bool {
        self.rounds_left > 0 && self.damage > 0
    }

    /// Consumes one round; returns the damage to apply.
    pub fn tick(&mut self) -> Option<u32> {
        if !self.is_active() {
            return None;
        }
        self.rounds_left -= 1;
        Some(self.damage)
    }
}
