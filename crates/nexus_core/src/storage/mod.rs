//! Durable key/value storage port.
//!
//! # Responsibility
//! - Define the string key/value contract layout and preferences persist to.
//! - Provide in-memory and SQLite-backed implementations.
//!
//! # Invariants
//! - Reads of a missing key return `Ok(None)`, never an error.
//! - `set` overwrites any previous value for the key.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
pub mod prefs;
mod sqlite;

pub use memory::MemoryStore;
pub use prefs::{Preferences, QuickLink};
pub use sqlite::SqliteKvStore;

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by a backing store.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Connection schema is not at the version this build expects.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// A value could not be encoded before writing.
    Serialization(serde_json::Error),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "key/value store requires schema version {expected_version}, got {actual_version}"
            ),
            Self::Serialization(err) => write!(f, "failed to encode stored value: {err}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::UninitializedConnection { .. } => None,
            Self::Serialization(err) => Some(err),
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}

/// String key/value storage, the equivalent of per-browser local storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
    fn remove(&self, key: &str) -> StorageResult<()>;
    /// Removes every key.
    fn clear(&self) -> StorageResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        (**self).remove(key)
    }

    fn clear(&self) -> StorageResult<()> {
        (**self).clear()
    }
}
