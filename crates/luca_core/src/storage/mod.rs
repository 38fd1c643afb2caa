//! Key-value persistence collaborator.
//!
//! # Responsibility
//! - Define the whole-record JSON-blob storage contract used by every
//!   persisted store.
//! - Keep backend details (SQLite, in-memory) behind one trait.
//!
//! # Invariants
//! - One key maps to at most one value; writes replace the whole value.
//! - Stores read their key once at load time and write synchronously
//!   after every mutation.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKvStorage;
pub use sqlite::SqliteKvStorage;

/// Stable storage keys for the session's persisted stores.
pub mod keys {
    pub const NOTES: &str = "notes-store";
    pub const TASKS: &str = "tasks-store";
    pub const SETTINGS: &str = "settings-store";
    pub const FUTURE_MESSAGES: &str = "future-messages-store";
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Backend failure while reading or writing a record.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

/// Whole-record key-value storage.
///
/// Values are opaque JSON strings; shaping and versioning of the blobs
/// is owned by the stores, not the backend.
pub trait KvStorage {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Writes `value` under `key`, replacing any previous value.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
    /// Removes the value under `key`; removing a missing key is a no-op.
    fn remove(&self, key: &str) -> StorageResult<()>;
}
