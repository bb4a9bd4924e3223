//! Persistence adapter: durable key-value slots for serialized state.
//!
//! # Responsibility
//! - Define the slot contract injected into stores.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Slot writes replace the full payload for a key atomically.
//! - Reading an absent key is `Ok(None)`, never an error.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod slot_repo;

pub use slot_repo::{SlotRepository, SqliteSlotRepository};

pub type PersistResult<T> = Result<T, PersistError>;

/// Failure while loading or saving persisted state.
#[derive(Debug)]
pub enum PersistError {
    Db(DbError),
    Serialize(serde_json::Error),
}

impl Display for PersistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize state: {err}"),
        }
    }
}

impl Error for PersistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<DbError> for PersistError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for PersistError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
