use anyhow::{Context, Result};
use rusqlite::Connection;

use super::schema;

/// SQLite connection backing the `key_value` snapshot table.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open `path`, creating the file if needed. `":memory:"` gives a
    /// throwaway database.
    ///
    /// # Examples
    /// ```
    /// use month_planner::services::database::Database;
    /// let db = Database::new(":memory:").unwrap();
    /// db.initialize_schema().unwrap();
    /// ```
    pub fn new(path: &str) -> Result<Self> {
        let conn =
            Connection::open(path).context(format!("Failed to open database at {}", path))?;

        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Creates the key-value table if it does not exist yet.
    pub fn initialize_schema(&self) -> Result<()> {
        schema::initialize_schema(self.connection())
    }
}
