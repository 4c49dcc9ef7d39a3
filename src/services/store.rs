//! Account and character persistence.
//!
//! The whole store is one [`AccountBook`]. Writes never edit a loaded book in
//! place: each operation derives a new book and hands it to the backend.

use crate::character::SavedCharacter;
use crate::core::error::{StoreError, StoreResult};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const ACCOUNTS_FILE: &str = "accounts.json";

/// Lowercase hex SHA-256 of a password.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub username: String,
    pub password_hash: String,
    #[serde(default)]
    pub characters: BTreeMap<String, SavedCharacter>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccountBook {
    #[serde(default)]
    pub accounts: BTreeMap<String, Account>,
}

fn normalize_username(username: &str) -> StoreResult<String> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(StoreError::InvalidName("Username cannot be empty".to_string()));
    }
    Ok(trimmed.to_string())
}

impl AccountBook {
    pub fn account(&self, username: &str) -> StoreResult<&Account> {
        self.accounts
            .get(username.trim())
            .ok_or_else(|| StoreError::UnknownAccount(username.trim().to_string()))
    }

    pub fn with_account(&self, username: &str, password: &str) -> StoreResult<AccountBook> {
        let username = normalize_username(username)?;
        if self.accounts.contains_key(&username) {
            return Err(StoreError::DuplicateAccount(username));
        }
        let mut next = self.clone();
        next.accounts.insert(
            username.clone(),
            Account {
                username,
                password_hash: hash_password(password),
                characters: BTreeMap::new(),
            },
        );
        Ok(next)
    }

    pub fn verify(&self, username: &str, password: &str) -> StoreResult<&Account> {
        let account = self.account(username).map_err(|_| StoreError::BadCredentials)?;
        if account.password_hash != hash_password(password) {
            return Err(StoreError::BadCredentials);
        }
        Ok(account)
    }

    /// Inserts or replaces a character snapshot (last write wins per id).
    pub fn with_character(&self, username: &str, saved: &SavedCharacter) -> StoreResult<AccountBook> {
        self.account(username)?;
        let mut next = self.clone();
        if let Some(account) = next.accounts.get_mut(username.trim()) {
            account.characters.insert(saved.id.clone(), saved.clone());
        }
        Ok(next)
    }

    pub fn without_character(&self, username: &str, character_id: &str) -> StoreResult<AccountBook> {
        self.account(username)?;
        let mut next = self.clone();
        if let Some(account) = next.accounts.get_mut(username.trim()) {
            account.characters.remove(character_id);
        }
        Ok(next)
    }
}

/// Backend for account books. The provided methods implement every
/// operation on top of `load` and `save`.
pub trait CharacterStore {
    fn load(&self) -> StoreResult<AccountBook>;
    fn save(&mut self, book: &AccountBook) -> StoreResult<()>;

    fn register(&mut self, username: &str, password: &str) -> StoreResult<()> {
        let book = self.load()?.with_account(username, password)?;
        self.save(&book)?;
        info!(username = username.trim(), "account registered");
        Ok(())
    }

    fn authenticate(&self, username: &str, password: &str) -> StoreResult<()> {
        self.load()?.verify(username, password).map(|_| ())
    }

    fn characters(&self, username: &str) -> StoreResult<Vec<SavedCharacter>> {
        let book = self.load()?;
        Ok(book.account(username)?.characters.values().cloned().collect())
    }

    fn upsert_character(&mut self, username: &str, saved: &SavedCharacter) -> StoreResult<()> {
        let book = self.load()?.with_character(username, saved)?;
        self.save(&book)
    }

    fn delete_character(&mut self, username: &str, character_id: &str) -> StoreResult<()> {
        let book = self.load()?.without_character(username, character_id)?;
        self.save(&book)
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    book: AccountBook,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CharacterStore for InMemoryStore {
    fn load(&self) -> StoreResult<AccountBook> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &AccountBook) -> StoreResult<()> {
        self.book = book.clone();
        Ok(())
    }
}

/// Pretty-printed JSON file at `<data_dir>/accounts.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(ACCOUNTS_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CharacterStore for JsonFileStore {
    /// A missing file is an empty book; a corrupt one is an error.
    fn load(&self) -> StoreResult<AccountBook> {
        if !self.path.exists() {
            return Ok(AccountBook::default());
        }
        let json = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn save(&mut self, book: &AccountBook) -> StoreResult<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)?;
        }
        let json = serde_json::to_string_pretty(book)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
