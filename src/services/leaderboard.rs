//! Ranked best runs, local or over HTTP.

use crate::character::Character;
use crate::core::constants::LEADERBOARD_SIZE;
use crate::core::error::ServiceError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub username: String,
    pub player_name: String,
    pub player_race: String,
    pub player_class: String,
    pub level: u32,
    pub dungeon_level: u32,
    pub floor: u32,
    #[serde(rename = "gold_accumulated_run")]
    pub gold_accumulated_run: u64,
    pub date: String,
}

impl LeaderboardEntry {
    /// An entry for `character`'s best run, dated today (UTC).
    pub fn for_run(character: &Character, username: &str, dungeon_level: u32, floor: u32) -> Self {
        Self {
            id: character.id.clone(),
            username: username.to_string(),
            player_name: character.name.clone(),
            player_race: character.race.name().to_string(),
            player_class: character.class.name().to_string(),
            level: character.level,
            dungeon_level,
            floor,
            gold_accumulated_run: character.gold_accumulated_run,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Rank order: deeper dungeon, then floor, then level, then gold.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other
            .dungeon_level
            .cmp(&self.dungeon_level)
            .then(other.floor.cmp(&self.floor))
            .then(other.level.cmp(&self.level))
            .then(other.gold_accumulated_run.cmp(&self.gold_accumulated_run))
    }

    /// Progress-only comparison used when a character resubmits.
    pub fn is_not_worse_than(&self, other: &Self) -> bool {
        (self.dungeon_level, self.floor) >= (other.dungeon_level, other.floor)
    }
}

/// The server-side table rule: one entry per character id, top 20 only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardTable {
    entries: Vec<LeaderboardEntry>,
}

impl LeaderboardTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Upserts by id when the new run is not worse, then re-ranks.
    /// Returns whether the submission was stored.
    pub fn submit(&mut self, entry: LeaderboardEntry) -> bool {
        let stored = match self.entries.iter_mut().find(|e| e.id == entry.id) {
            Some(existing) => {
                if entry.is_not_worse_than(existing) {
                    *existing = entry;
                    true
                } else {
                    false
                }
            }
            None => {
                self.entries.push(entry);
                true
            }
        };
        self.entries.sort_by(LeaderboardEntry::rank_cmp);
        self.entries.truncate(LEADERBOARD_SIZE);
        stored
    }
}

pub trait LeaderboardService {
    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, ServiceError>;
    fn submit(&mut self, entry: &LeaderboardEntry) -> Result<(), ServiceError>;
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryLeaderboard {
    table: LeaderboardTable,
}

impl InMemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardService for InMemoryLeaderboard {
    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        Ok(self.table.entries().to_vec())
    }

    fn submit(&mut self, entry: &LeaderboardEntry) -> Result<(), ServiceError> {
        self.table.submit(entry.clone());
        Ok(())
    }
}

/// Blocking JSON client for a remote leaderboard endpoint (GET list, POST entry).
pub struct HttpLeaderboard {
    agent: ureq::Agent,
    url: String,
}

impl HttpLeaderboard {
    pub fn new(url: &str, timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        Self {
            agent,
            url: url.to_string(),
        }
    }
}

impl LeaderboardService for HttpLeaderboard {
    fn fetch(&self) -> Result<Vec<LeaderboardEntry>, ServiceError> {
        let entries: Vec<LeaderboardEntry> = self
            .agent
            .get(&self.url)
            .set("User-Agent", "delve")
            .call()?
            .into_json()?;
        debug!(count = entries.len(), "leaderboard fetched");
        Ok(entries)
    }

    fn submit(&mut self, entry: &LeaderboardEntry) -> Result<(), ServiceError> {
        self.agent
            .post(&self.url)
            .set("User-Agent", "delve")
            .send_json(entry)?;
        debug!(id = %entry.id, "score submitted");
        Ok(())
    }
}
