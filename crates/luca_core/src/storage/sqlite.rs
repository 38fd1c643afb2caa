//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory SQLite databases for session data.
//! - Apply schema migrations before any read/write.
//!
//! # Invariants
//! - Migration version is tracked via `PRAGMA user_version`.
//! - Returned storage handles have migrations fully applied.

use super::{KvStorage, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::path::Path;
use std::time::Instant;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: "CREATE TABLE IF NOT EXISTS kv_store (
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL,
        updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
    );",
}];

fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Key-value storage on a single SQLite connection.
///
/// The session core is single-threaded, so the connection sits behind a
/// `RefCell` rather than a lock.
#[derive(Debug)]
pub struct SqliteKvStorage {
    conn: RefCell<Connection>,
}

impl SqliteKvStorage {
    /// Opens (or creates) a database file and applies pending migrations.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        match Connection::open(path).map_err(StorageError::from).and_then(Self::bootstrap) {
            Ok(storage) => {
                info!(
                    "event=storage_open module=storage status=ok mode=file duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(storage)
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    /// Opens an in-memory database; used by tests and throwaway sessions.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        match Connection::open_in_memory()
            .map_err(StorageError::from)
            .and_then(Self::bootstrap)
        {
            Ok(storage) => {
                info!(
                    "event=storage_open module=storage status=ok mode=memory duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(storage)
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn bootstrap(mut conn: Connection) -> StorageResult<Self> {
        apply_migrations(&mut conn)?;
        Ok(Self {
            conn: RefCell::new(conn),
        })
    }
}

impl KvStorage for SqliteKvStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.conn.borrow();
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let conn = self.conn.borrow();
        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let conn = self.conn.borrow();
        conn.execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn apply_migrations(conn: &mut Connection) -> StorageResult<()> {
    let current: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let latest = latest_version();

    if current > latest {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest,
        });
    }
    if current == latest {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in MIGRATIONS {
        if migration.version <= current {
            continue;
        }
        tx.execute_batch(migration.sql)?;
        tx.execute_batch(&format!("PRAGMA user_version = {};", migration.version))?;
    }
    tx.commit()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::SqliteKvStorage;
    use crate::storage::{KvStorage, StorageError};

    #[test]
    fn write_read_round_trip_and_overwrite() {
        let storage = SqliteKvStorage::open_in_memory().unwrap();
        assert_eq!(storage.read("notes-store").unwrap(), None);

        storage.write("notes-store", "{\"notes\":[]}").unwrap();
        assert_eq!(
            storage.read("notes-store").unwrap().as_deref(),
            Some("{\"notes\":[]}")
        );

        storage.write("notes-store", "{\"notes\":[1]}").unwrap();
        assert_eq!(
            storage.read("notes-store").unwrap().as_deref(),
            Some("{\"notes\":[1]}")
        );
    }

    #[test]
    fn remove_is_idempotent() {
        let storage = SqliteKvStorage::open_in_memory().unwrap();
        storage.write("tasks-store", "{}").unwrap();
        storage.remove("tasks-store").unwrap();
        storage.remove("tasks-store").unwrap();
        assert_eq!(storage.read("tasks-store").unwrap(), None);
    }

    #[test]
    fn file_backed_storage_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luca.db");
        {
            let storage = SqliteKvStorage::open(&path).unwrap();
            storage.write("settings-store", "{\"theme\":\"Dark\"}").unwrap();
        }
        let storage = SqliteKvStorage::open(&path).unwrap();
        assert_eq!(
            storage.read("settings-store").unwrap().as_deref(),
            Some("{\"theme\":\"Dark\"}")
        );
    }

    #[test]
    fn newer_schema_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("luca.db");
        {
            let conn = rusqlite::Connection::open(&path).unwrap();
            conn.execute_batch("PRAGMA user_version = 99;").unwrap();
        }
        let err = SqliteKvStorage::open(&path).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedSchemaVersion { db_version: 99, .. }
        ));
    }
}
