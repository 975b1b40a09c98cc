use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{params, OptionalExtension};

use super::KeyValueStore;
use crate::services::database::Database;

/// Key-value rows in the `key_value` table of a SQLite database.
pub struct SqliteKeyValueStore {
    db: Database,
}

impl SqliteKeyValueStore {
    /// Open (or create) the database file and make sure the table exists.
    pub fn open(path: &str) -> Result<Self> {
        let db = Database::new(path)?;
        Self::from_database(db)
    }

    pub fn in_memory() -> Result<Self> {
        Self::open(":memory:")
    }

    pub fn from_database(db: Database) -> Result<Self> {
        db.initialize_schema()?;
        Ok(Self { db })
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.db
            .connection()
            .query_row(
                "SELECT value FROM key_value WHERE key = ?",
                [key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read key {}", key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.db
            .connection()
            .execute(
                "INSERT INTO key_value (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                params![key, value, Local::now().to_rfc3339()],
            )
            .with_context(|| format!("Failed to write key {}", key))?;
        Ok(())
    }
}
