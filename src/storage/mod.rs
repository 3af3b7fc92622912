//! Persistent key/value storage
//!
//! A SQLite-backed string store that outlives a single process, scoped to one
//! user profile directory. The client keeps its session token here.

use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

use crate::error::StorageError;

/// Schema version - increment to trigger nuke-and-rebuild
const SCHEMA_VERSION: i32 = 1;

/// Database file name inside the storage directory
pub const STORAGE_FILE: &str = "storage.db";

type Result<T> = std::result::Result<T, StorageError>;

/// SQLite-backed key/value storage
pub struct LocalStorage {
    conn: Connection,
}

impl LocalStorage {
    /// Open storage in a specific directory
    pub fn open_at(dir: &Path) -> Result<Self> {
        std::fs::create_dir_all(dir)
            .map_err(|e| StorageError::Io(format!("Failed to create storage dir: {}", e)))?;

        let db_path = dir.join(STORAGE_FILE);
        let conn = Connection::open(&db_path)?;

        let version: i32 = conn
            .pragma_query_value(None, "user_version", |r| r.get(0))
            .unwrap_or(0);

        if version != 0 && version != SCHEMA_VERSION {
            log::info!(
                "Storage schema version mismatch ({} != {}), rebuilding",
                version,
                SCHEMA_VERSION
            );
            drop(conn);
            std::fs::remove_file(&db_path)
                .map_err(|e| StorageError::Io(format!("Failed to remove storage DB: {}", e)))?;
            return Self::open_at(dir);
        }

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );
            "#,
        )?;

        conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;

        Ok(Self { conn })
    }

    /// Open a throwaway in-memory store
    #[cfg(test)]
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(
            "CREATE TABLE local_storage (
                key TEXT PRIMARY KEY NOT NULL,
                value TEXT NOT NULL,
                updated_at INTEGER NOT NULL
            );",
        )?;
        Ok(Self { conn })
    }

    /// Read the value stored under `key`
    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value
    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO local_storage (key, value, updated_at)
             VALUES (?1, ?2, ?3)",
            params![key, value, Utc::now().timestamp()],
        )?;
        Ok(())
    }

    /// Remove `key`. Returns whether anything was removed.
    pub fn remove_item(&self, key: &str) -> Result<bool> {
        let deleted = self
            .conn
            .execute("DELETE FROM local_storage WHERE key = ?1", [key])?;
        Ok(deleted > 0)
    }

    /// Unix timestamp of the last write to `key`
    pub fn updated_at(&self, key: &str) -> Result<Option<i64>> {
        let ts = self
            .conn
            .query_row(
                "SELECT updated_at FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(ts)
    }
}
