//! Runtime configuration and collaborator wiring.

use crate::core::error::{StoreError, StoreResult};
use crate::services::{
    CharacterStore, HttpLeaderboard, InMemoryLeaderboard, InMemoryStore, JsonFileStore,
    LeaderboardService, Narrator,
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;

pub const ENV_DATA_DIR: &str = "DELVE_DATA_DIR";
pub const ENV_LEADERBOARD_URL: &str = "DELVE_LEADERBOARD_URL";
pub const ENV_HTTP_TIMEOUT_MS: &str = "DELVE_HTTP_TIMEOUT_MS";

pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(5);

/// `~/.delve`
pub fn default_data_dir() -> StoreResult<PathBuf> {
    let home = dirs::home_dir().ok_or(StoreError::NoHomeDir)?;
    Ok(home.join(".delve"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub data_dir: PathBuf,
    pub leaderboard_url: Option<String>,
    pub http_timeout: Duration,
}

/// The collaborators a [`crate::core::GameSession`] talks to.
pub struct Services {
    pub store: Box<dyn CharacterStore>,
    pub leaderboard: Box<dyn LeaderboardService>,
    pub narrator: Narrator,
}

impl Services {
    /// Everything in memory, nothing touches disk or network.
    pub fn in_memory() -> Self {
        Self {
            store: Box::new(InMemoryStore::new()),
            leaderboard: Box::new(InMemoryLeaderboard::new()),
            narrator: Narrator::fallback(),
        }
    }
}

impl ServiceConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            leaderboard_url: None,
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Defaults overridden by `DELVE_*` environment variables.
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServiceConfig::from_env`] with an explicit variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> StoreResult<Self> {
        let data_dir = match lookup(ENV_DATA_DIR) {
            Some(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            _ => default_data_dir()?,
        };
        let mut config = Self::new(data_dir);

        config.leaderboard_url = lookup(ENV_LEADERBOARD_URL).filter(|url| !url.trim().is_empty());

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.http_timeout = Duration::from_millis(ms),
                Err(_) => warn!(value = %raw, "ignoring invalid {}", ENV_HTTP_TIMEOUT_MS),
            }
        }
        Ok(config)
    }

    /// File store under `data_dir`; HTTP leaderboard when a URL is set.
    pub fn build_services(&self) -> Services {
        let leaderboard: Box<dyn LeaderboardService> = match &self.leaderboard_url {
            Some(url) => Box::new(HttpLeaderboard::new(url, self.http_timeout)),
            None => Box::new(InMemoryLeaderboard::new()),
        };
        Services {
            store: Box::new(JsonFileStore::new(&self.data_dir)),
            leaderboard,
            narrator: Narrator::fallback(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/delve-test"),
            (ENV_LEADERBOARD_URL, "http://localhost:3000/api/leaderboard"),
            (ENV_HTTP_TIMEOUT_MS, "1500"),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/delve-test"));
        assert_eq!(
            config.leaderboard_url.as_deref(),
            Some("http://localhost:3000/api/leaderboard")
        );
        assert_eq!(config.http_timeout, Duration::from_millis(1500));
    }

    #[test]
    fn test_bad_timeout_keeps_default() {
        let config = ServiceConfig::from_lookup(lookup_from(&[
            (ENV_DATA_DIR, "/tmp/delve-test"),
            (ENV_LEADERBOARD_URL, "  "),
            (ENV_HTTP_TIMEOUT_MS, "soon"),
        ]))
        .unwrap();
        assert_eq!(config.http_timeout, DEFAULT_HTTP_TIMEOUT);
        assert_eq!(config.leaderboard_url, None);
    }

    #[test]
    fn test_build_services_without_url_is_offline() {
        let dir = std::env::temp_dir().join(format!("delve_config_{}", uuid::Uuid::new_v4()));
        let services = ServiceConfig::new(dir).build_services();
        assert!(services.leaderboard.fetch().unwrap().is_empty());
    }
}
