//! Error types for player actions, external services and persistence.

use crate::items::EquipmentSlot;
use thiserror::Error;

/// A player action that was rejected. State is left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("Not enough gold: need {needed}, have {available}.")]
    NotEnoughGold { needed: u64, available: u64 },

    #[error("Nothing equipped in the {0} slot.")]
    EmptySlot(EquipmentSlot),

    #[error("No item at position {index} (you have {len}).")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0} cannot be equipped.")]
    NotEquippable(String),

    #[error("{0} cannot be used.")]
    NotUsable(String),

    #[error("Your HP is already full.")]
    HpAlreadyFull,

    #[error("No stat points to spend.")]
    NoStatPoints,

    #[error("Nothing needs repairing.")]
    NothingToRepair,

    #[error("{0} is not for sale right now.")]
    NotInStock(String),

    #[error("Invalid amount.")]
    InvalidAmount,

    #[error("You can't do that while fighting.")]
    InCombat,

    #[error("You can only do that in the shop.")]
    NotInShop,

    #[error("You can only do that inside a dungeon.")]
    NotInDungeon,

    #[error("There is no enemy to face.")]
    NoEnemy,

    #[error("The dungeon boss has not been defeated yet.")]
    DungeonNotCleared,
}

/// Failure talking to an external collaborator (leaderboard, flavor text).
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("decode error: {0}")]
    Decode(#[from] std::io::Error),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

impl From<ureq::Error> for ServiceError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::Status(code, _) => ServiceError::Status(code),
            ureq::Error::Transport(transport) => ServiceError::Transport(transport.to_string()),
        }
    }
}

/// Persistence and data integrity failures.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown account: {0}")]
    UnknownAccount(String),

    #[error("account already exists: {0}")]
    DuplicateAccount(String),

    #[error("invalid username or password")]
    BadCredentials,

    #[error("invalid character name: {0}")]
    InvalidName(String),

    #[error("could not determine home directory")]
    NoHomeDir,

    #[error("corrupt character snapshot: {0}")]
    CorruptSnapshot(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
