//! Persistence layer: durable key-value backing and hydration-safe cells.
//!
//! # Responsibility
//! - Abstract the durable string-keyed medium behind `BackingStore`.
//! - Provide the typed cell primitive every collection and the settings
//!   record persist through.
//!
//! # Invariants
//! - Callers above this layer never see a storage failure as an error;
//!   they observe defaults plus best-effort persistence.
//! - Schema version is tracked via `PRAGMA user_version` and migrations
//!   run before any key is read or written.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod backing;
pub mod cell;
pub mod migrations;
mod sqlite;

pub use backing::{BackingError, BackingResult, BackingStore, MemoryBackingStore};
pub use cell::{CellValue, PersistedCell};
pub use sqlite::{open_store, open_store_in_memory, SqliteBackingStore};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure opening or migrating the durable store.
#[derive(Debug)]
pub enum StoreError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        store_version: u32,
        latest_supported: u32,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                store_version,
                latest_supported,
            } => write!(
                f,
                "store schema version {store_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
