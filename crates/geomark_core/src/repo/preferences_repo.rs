//! Durable key-value preference slot contract and SQLite implementation.
//!
//! # Responsibility
//! - Read and replace opaque byte blobs under fixed string keys.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `write` has full-overwrite semantics: the previous blob is replaced.
//! - `read` of an absent key is `Ok(None)`, never an error.

use super::RepoResult;
use rusqlite::{params, Connection};

/// Key-value slot interface for durable preference blobs.
pub trait PreferencesRepository {
    fn read(&self, key: &str) -> RepoResult<Option<Vec<u8>>>;
    fn write(&self, key: &str, value: &[u8]) -> RepoResult<()>;
}

/// SQLite-backed preference slot over the `preferences` table.
pub struct SqlitePreferencesRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferencesRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferencesRepository for SqlitePreferencesRepository<'_> {
    fn read(&self, key: &str) -> RepoResult<Option<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM preferences WHERE key = ?1;")?;

        let mut rows = stmt.query(params![key])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(row.get(0)?));
        }

        Ok(None)
    }

    fn write(&self, key: &str, value: &[u8]) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;

        Ok(())
    }
}
