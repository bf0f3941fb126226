//! SQLite home of the durable preference store.
//!
//! # Responsibility
//! - Open file or in-memory connections configured for core use.
//! - Bring the `kv_entries` schema up to date before any key/value access.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - Schema 1 holds a single table, `kv_entries(key, value, updated_at)`,
//!   mirroring browser local storage: one string value per string key.
//! - A store written by a newer build is refused, never downgraded.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to open or migrate the preference store.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    /// The store file was last migrated by a newer build.
    StoreFromNewerBuild { found: u32, supported: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::StoreFromNewerBuild { found, supported } => write!(
                f,
                "preference store schema {found} was written by a newer build (this build supports up to {supported})"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::StoreFromNewerBuild { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
