//! The active game session: one character moving between the shop and the dungeon.

use crate::character::Character;
use crate::combat::{self, CombatResult, FleeResult};
use crate::core::actions::{try_action, Action};
use crate::core::config::Services;
use crate::core::constants::SESSION_LOG_CAPACITY;
use crate::core::error::{ActionError, StoreResult};
use crate::core::progression::{advance_dungeon, apply_death_penalty, defeat_log, RunBest};
use crate::data::ItemId;
use crate::dungeon::{self, Encounter, FloorEvent};
use crate::services::{CharacterStore, LeaderboardEntry, LeaderboardService, Narrator};
use crate::shop::restock;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Shop,
    Dungeon,
    /// The floor boss is dead; proceed deeper or go back to the shop.
    DungeonCleared,
}

/// Owns the character for the length of a play session.
///
/// Every operation returns the log lines it produced and also appends them to
/// the bounded journal. Rejected operations leave the session unchanged; their
/// message is journaled as well.
pub struct GameSession {
    character: Character,
    username: String,
    rng: StdRng,
    shop_stock: Vec<ItemId>,
    encounter: Encounter,
    dungeon_level: u32,
    floor_depth: u32,
    run_best: RunBest,
    phase: Phase,
    journal: VecDeque<String>,
    deaths: u32,
    leaderboard_cache: Vec<LeaderboardEntry>,
    store: Box<dyn CharacterStore>,
    leaderboard: Box<dyn LeaderboardService>,
    narrator: Narrator,
}

impl GameSession {
    pub fn new(character: Character, username: &str, services: Services, rng: StdRng) -> Self {
        let dungeon_level = character.current_dungeon_level.max(1);
        Self {
            character,
            username: username.to_string(),
            rng,
            shop_stock: Vec::new(),
            encounter: Encounter::Exploring,
            dungeon_level,
            floor_depth: 0,
            run_best: RunBest::starting_at(dungeon_level),
            phase: Phase::Shop,
            journal: VecDeque::with_capacity(SESSION_LOG_CAPACITY),
            deaths: 0,
            leaderboard_cache: Vec::new(),
            store: services.store,
            leaderboard: services.leaderboard,
            narrator: services.narrator,
        }
    }

    pub fn with_seed(character: Character, username: &str, services: Services, seed: u64) -> Self {
        Self::new(character, username, services, StdRng::seed_from_u64(seed))
    }

    // === Accessors ===

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn encounter(&self) -> &Encounter {
        &self.encounter
    }

    pub fn dungeon_level(&self) -> u32 {
        self.dungeon_level
    }

    pub fn floor_depth(&self) -> u32 {
        self.floor_depth
    }

    pub fn run_best(&self) -> RunBest {
        self.run_best
    }

    pub fn shop_stock(&self) -> &[ItemId] {
        &self.shop_stock
    }

    pub fn journal(&self) -> impl Iterator<Item = &str> {
        self.journal.iter().map(String::as_str)
    }

    /// Deaths suffered in this session.
    pub fn deaths(&self) -> u32 {
        self.deaths
    }

    /// Last leaderboard snapshot (refreshed after every death).
    pub fn leaderboard(&self) -> &[LeaderboardEntry] {
        &self.leaderboard_cache
    }

    // === Journal ===

    fn record(&mut self, lines: &[String]) {
        for line in lines {
            if self.journal.len() >= SESSION_LOG_CAPACITY {
                self.journal.pop_front();
            }
            self.journal.push_back(line.clone());
        }
    }

    fn finish(&mut self, result: Result<Vec<String>, ActionError>) -> Result<Vec<String>, ActionError> {
        match &result {
            Ok(lines) => self.record(lines),
            Err(err) => self.record(&[err.to_string()]),
        }
        result
    }

    fn restock_shop(&mut self) {
        self.shop_stock = restock(&mut self.rng, self.character.dungeons_completed);
    }

    // === Lifecycle ===

    /// Resets to the shop at the character's current dungeon level.
    pub fn start(&mut self) -> Vec<String> {
        self.character.recompute();
        self.dungeon_level = self.character.current_dungeon_level.max(1);
        self.floor_depth = 0;
        self.run_best = RunBest::starting_at(self.dungeon_level);
        self.encounter = Encounter::Exploring;
        self.phase = Phase::Shop;
        self.journal.clear();
        self.restock_shop();
        let lines = vec!["Welcome to the shop. Prepare yourself for the dangers ahead.".to_string()];
        self.record(&lines);
        lines
    }

    pub fn save(&mut self) -> StoreResult<()> {
        self.store
            .upsert_character(&self.username, &self.character.to_saved())?;
        info!(character = %self.character.name, "character saved");
        Ok(())
    }

    fn save_best_effort(&mut self) {
        if let Err(e) = self.save() {
            warn!(character = %self.character.name, error = %e, "failed to save character");
        }
    }

    /// Saves and hands the character back.
    pub fn end_run(mut self) -> StoreResult<Character> {
        self.save()?;
        Ok(self.character)
    }

    // === Dungeon ===

    pub fn enter_dungeon(&mut self) -> Result<Vec<String>, ActionError> {
        let result = if self.phase != Phase::Shop {
            Err(ActionError::NotInShop)
        } else {
            self.phase = Phase::Dungeon;
            self.floor_depth = 0;
            self.encounter = Encounter::Exploring;
            Ok(vec![format!(
                "You are at the entrance of Dungeon Lvl {}. The path ahead is dark.",
                self.dungeon_level
            )])
        };
        self.finish(result)
    }

    pub fn explore(&mut self) -> Result<Vec<String>, ActionError> {
        let result = self.explore_inner();
        self.finish(result)
    }

    fn explore_inner(&mut self) -> Result<Vec<String>, ActionError> {
        if self.phase != Phase::Dungeon {
            return Err(ActionError::NotInDungeon);
        }
        if self.encounter.is_combat() {
            return Err(ActionError::InCombat);
        }

        self.floor_depth += 1;
        self.run_best.record_floor(self.dungeon_level, self.floor_depth);

        let outcome = dungeon::explore(
            &mut self.character,
            &mut self.rng,
            self.dungeon_level,
            self.floor_depth,
        );

        let context = match (&outcome.event, outcome.encounter.enemy()) {
            (FloorEvent::Boss, Some(boss)) => format!("Boss encounter: {}", boss.name),
            _ => format!("Exploring floor {}", self.floor_depth),
        };
        let flavor = self.narrator.describe(&context, &mut self.rng);

        let mut lines = vec![
            format!("--- Floor {} (Dungeon Lvl {}) ---", self.floor_depth, self.dungeon_level),
            format!("\"{}\"", flavor),
        ];
        lines.extend(outcome.log);
        self.encounter = outcome.encounter;

        if self.character.is_dead() {
            lines.extend(self.handle_defeat("killed by a trap"));
        }
        Ok(lines)
    }

    pub fn fight(&mut self) -> Result<Vec<String>, ActionError> {
        let result = self.fight_inner();
        self.finish(result)
    }

    fn fight_inner(&mut self) -> Result<Vec<String>, ActionError> {
        if self.phase != Phase::Dungeon {
            return Err(ActionError::NotInDungeon);
        }
        let enemy = match &self.encounter {
            Encounter::Enemy(enemy) => enemy.clone(),
            _ => return Err(ActionError::NoEnemy),
        };

        let outcome = combat::fight(&mut self.character, enemy, &mut self.rng);
        let mut lines = outcome.log;

        match outcome.result {
            CombatResult::Victory(report) => {
                self.encounter = Encounter::Cleared;
                if report.was_boss {
                    self.character.dungeons_completed += 1;
                    self.restock_shop();
                    self.phase = Phase::DungeonCleared;
                    lines.push("The merchant has new wares.".to_string());
                    info!(
                        character = %self.character.name,
                        dungeon_level = self.dungeon_level,
                        completed = self.character.dungeons_completed,
                        "dungeon cleared"
                    );
                }
            }
            CombatResult::Defeat { reason } => {
                lines.extend(self.handle_defeat(&reason));
            }
        }
        Ok(lines)
    }

    pub fn flee(&mut self) -> Result<Vec<String>, ActionError> {
        let result = self.flee_inner();
        self.finish(result)
    }

    fn flee_inner(&mut self) -> Result<Vec<String>, ActionError> {
        let enemy = match &self.encounter {
            Encounter::Enemy(enemy) => enemy.clone(),
            _ => return Err(ActionError::NoEnemy),
        };

        let outcome = combat::flee(&mut self.character, &enemy, &mut self.rng);
        let mut lines = outcome.log;

        match outcome.result {
            FleeResult::Escaped if enemy.is_boss => {
                lines.extend(self.go_to_shop());
            }
            FleeResult::Escaped => {
                self.encounter = Encounter::Cleared;
            }
            FleeResult::Caught { .. } if self.character.is_dead() => {
                lines.extend(self.handle_defeat("slain while fleeing"));
            }
            FleeResult::Caught { .. } => {}
        }
        Ok(lines)
    }

    pub fn return_to_shop(&mut self) -> Result<Vec<String>, ActionError> {
        let result = if self.phase == Phase::Shop {
            Err(ActionError::NotInDungeon)
        } else if self.encounter.is_combat() {
            Err(ActionError::InCombat)
        } else {
            Ok(self.go_to_shop())
        };
        self.finish(result)
    }

    fn go_to_shop(&mut self) -> Vec<String> {
        self.floor_depth = 0;
        self.encounter = Encounter::Exploring;
        self.phase = Phase::Shop;
        self.save_best_effort();
        vec!["You returned to the shop.".to_string()]
    }

    /// After a boss kill: on to the next dungeon level.
    pub fn proceed_to_next_dungeon(&mut self) -> Result<Vec<String>, ActionError> {
        let result = if self.phase != Phase::DungeonCleared {
            Err(ActionError::DungeonNotCleared)
        } else {
            self.character.current_dungeon_level = self.dungeon_level;
            self.dungeon_level = advance_dungeon(&mut self.character);
            self.floor_depth = 0;
            self.encounter = Encounter::Exploring;
            self.run_best.record_new_dungeon(self.dungeon_level);
            self.phase = Phase::Dungeon;
            Ok(vec![format!("You venture into Dungeon Level {}...", self.dungeon_level)])
        };
        self.finish(result)
    }

    // === Actions ===

    /// Applies a player action, rejecting it when the current phase forbids it.
    pub fn perform(&mut self, action: Action) -> Result<Vec<String>, ActionError> {
        let result = self.perform_inner(action);
        self.finish(result)
    }

    fn perform_inner(&mut self, action: Action) -> Result<Vec<String>, ActionError> {
        if action.touches_inventory() && self.encounter.is_combat() {
            return Err(ActionError::InCombat);
        }
        if action.requires_shop() && self.phase != Phase::Shop {
            return Err(ActionError::NotInShop);
        }
        let mut next = self.character.clone();
        let lines = try_action(&mut next, &action, &self.shop_stock)?;
        self.character = next.resolved();
        Ok(lines)
    }

    // === Defeat ===

    fn handle_defeat(&mut self, reason: &str) -> Vec<String> {
        let best = self.run_best;
        let entry = LeaderboardEntry::for_run(
            &self.character,
            &self.username,
            best.dungeon_level,
            best.floor,
        );
        if let Err(e) = self.leaderboard.submit(&entry) {
            warn!(error = %e, "failed to submit score");
        }
        self.leaderboard_cache = self.leaderboard.fetch().unwrap_or_else(|e| {
            warn!(error = %e, "failed to fetch leaderboard");
            Vec::new()
        });

        info!(
            character = %self.character.name,
            reason,
            dungeon_level = self.dungeon_level,
            floor = self.floor_depth,
            "character defeated"
        );
        let lines = defeat_log(reason, self.dungeon_level, self.floor_depth);

        apply_death_penalty(&mut self.character);
        self.save_best_effort();
        self.restock_shop();

        self.deaths += 1;
        self.dungeon_level = 1;
        self.floor_depth = 0;
        self.encounter = Encounter::Exploring;
        self.run_best = RunBest::starting_at(1);
        self.phase = Phase::Shop;
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Class, Race};
    use crate::enemies::Enemy;

    fn session() -> GameSession {
        let character = Character::create("Runner", Race::Human, Class::Fighter).unwrap();
        let mut services = Services::in_memory();
        services.store.register("tester", "pw").unwrap();
        let mut session = GameSession::with_seed(character, "tester", services, 12345);
        session.start();
        session
    }

    fn brute(is_boss: bool) -> Enemy {
        Enemy {
            name: "Brute".to_string(),
            kind: crate::data::EnemyKind::Orc,
            tier: 1,
            hp: 100_000,
            max_hp: 100_000,
            attack: 10_000,
            defense: 10_000,
            xp: 0,
            gold: 0,
            drop_chance: 0.0,
            drops: &[],
            is_boss,
        }
    }

    #[test]
    fn test_start_puts_session_in_shop() {
        let s = session();
        assert_eq!(s.phase(), Phase::Shop);
        assert_eq!(s.dungeon_level(), 1);
        assert!(!s.shop_stock().is_empty());
        assert_eq!(
            s.journal().collect::<Vec<_>>(),
            vec!["Welcome to the shop. Prepare yourself for the dangers ahead."]
        );
    }

    #[test]
    fn test_phase_guards() {
        let mut s = session();
        assert_eq!(s.explore(), Err(ActionError::NotInDungeon));
        assert_eq!(s.fight(), Err(ActionError::NotInDungeon));
        assert_eq!(s.proceed_to_next_dungeon(), Err(ActionError::DungeonNotCleared));
        s.enter_dungeon().unwrap();
        assert_eq!(s.perform(Action::RepairAll), Err(ActionError::NotInShop));
        assert_eq!(s.enter_dungeon(), Err(ActionError::NotInShop));
        // The rejection message is journaled
        assert!(s.journal().any(|l| l == "You can only do that in the shop."));
    }

    #[test]
    fn test_explore_advances_floor_and_best() {
        let mut s = session();
        s.enter_dungeon().unwrap();
        let lines = s.explore().unwrap();
        assert_eq!(lines[0], "--- Floor 1 (Dungeon Lvl 1) ---");
        assert_eq!(s.floor_depth(), 1);
        assert_eq!(s.run_best(), RunBest { dungeon_level: 1, floor: 1 });
    }

    #[test]
    fn test_inventory_locked_during_combat() {
        let mut s = session();
        s.enter_dungeon().unwrap();
        s.encounter = Encounter::Enemy(brute(false));
        assert_eq!(s.perform(Action::UseItem(0)), Err(ActionError::InCombat));
        assert_eq!(s.explore(), Err(ActionError::InCombat));
        assert_eq!(s.return_to_shop(), Err(ActionError::InCombat));
    }

    #[test]
    fn test_defeat_applies_penalty_and_submits_score() {
        let mut s = session();
        s.enter_dungeon().unwrap();
        s.floor_depth = 4;
        s.run_best = RunBest { dungeon_level: 1, floor: 4 };
        s.encounter = Encounter::Enemy(brute(false));

        let lines = s.fight().unwrap();

        assert!(lines.iter().any(|l| l == "[DEFEATED] You were slain by a Brute in Dungeon Lvl 1 on Floor 4."));
        assert_eq!(s.phase(), Phase::Shop);
        assert_eq!(s.deaths(), 1);
        let c = s.character();
        assert_eq!(c.wallet_gold, 0);
        assert!(c.bag.is_empty());
        assert_eq!(c.current_hp, c.derived.max_hp);
        assert_eq!(s.leaderboard().len(), 1);
        assert_eq!(s.leaderboard()[0].floor, 4);
        assert_eq!(s.run_best(), RunBest::starting_at(1));
    }

    #[test]
    fn test_journal_is_bounded() {
        let mut s = session();
        for _ in 0..(SESSION_LOG_CAPACITY + 10) {
            let _ = s.fight();
        }
        assert_eq!(s.journal().count(), SESSION_LOG_CAPACITY);
    }

    #[test]
    fn test_end_run_saves_character() {
        let s = session();
        let id = s.character().id.clone();
        let character = s.end_run().unwrap();
        assert_eq!(character.id, id);
    }
}
