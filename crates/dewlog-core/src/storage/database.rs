//! SQLite-backed key-value persistence.
//!
//! The surrounding app serializes the whole persisted subset of the engine
//! as JSON under [`ENGINE_KEY`] and replaces it wholesale on load -- the
//! merge semantics of the snapshot codec apply to explicit imports only.

use rusqlite::{params, Connection};

use super::data_dir;
use crate::error::CoreError;

/// kv key the engine state lives under.
pub const ENGINE_KEY: &str = "hydration_engine";

/// Key-value store at `~/.config/dewlog/dewlog.db`.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database, creating file and schema when missing.
    pub fn open() -> Result<Self, CoreError> {
        let path = data_dir()?.join("dewlog.db");
        let conn = Connection::open(path).map_err(CoreError::Storage)?;
        // Concurrent one-shot commands share the file.
        conn.busy_timeout(std::time::Duration::from_secs(5))
            .map_err(CoreError::Storage)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    /// Open an in-memory database (for tests).
    #[cfg(test)]
    pub fn open_memory() -> Result<Self, CoreError> {
        let conn = Connection::open_in_memory().map_err(CoreError::Storage)?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<(), rusqlite::Error> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Get a value from the kv store.
    pub fn kv_get(&self, key: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self.conn.prepare("SELECT value FROM kv WHERE key = ?1")?;
        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));
        match result {
            Ok(v) => Ok(Some(v)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Set a value in the kv store.
    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}
