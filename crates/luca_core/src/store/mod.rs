//! Persisted stores shared across tool instances.
//!
//! # Responsibility
//! - Own the session-scoped note, task, future-message and settings data.
//! - Read each store's key once at load time; write the whole record
//!   back synchronously after every mutation.
//!
//! # Invariants
//! - Corrupt persisted JSON is treated as "no stored data" and the store
//!   loads its defaults; it is never propagated as a crash.
//! - Mutations are last-writer-wins; the session is single-user and
//!   single-threaded, so no locking exists anywhere in this layer.

use crate::storage::StorageError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod future_store;
pub mod note_store;
pub mod settings_store;
pub mod task_store;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while loading or saving a persisted store.
#[derive(Debug)]
pub enum StoreError {
    /// Backend read/write failure.
    Storage(StorageError),
    /// A record could not be serialized for writing.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize store record: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
