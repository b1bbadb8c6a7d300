//! SQLite persistence backend (lightweight for CLI usage).

use crate::errors::{AppError, AppResult};
use crate::storage::StateStore;
use crate::storage::migrate::run_pending_migrations;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct SqliteStore {
    pub conn: Connection,
}

impl SqliteStore {
    pub fn open(path: &str) -> AppResult<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database and bring its schema up to date.
    /// Delegates all table creation / upgrades to the migration engine.
    pub fn open_and_init(path: &str) -> AppResult<Self> {
        let store = Self::open(path)?;
        run_pending_migrations(&store.conn)?;
        Ok(store)
    }

    /// Helper to execute a closure with a mutable connection reference.
    pub fn with_conn<F, T>(&mut self, func: F) -> rusqlite::Result<T>
    where
        F: FnOnce(&mut Connection) -> rusqlite::Result<T>,
    {
        func(&mut self.conn)
    }
}

impl StateStore for SqliteStore {
    fn load(&mut self, slot: &str) -> AppResult<Option<String>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM kv_state WHERE slot = ?1",
                [slot],
                |row| row.get(0),
            )
            .optional()?;
        Ok(payload)
    }

    fn save(&mut self, slot: &str, payload: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO kv_state (slot, payload, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(slot) DO UPDATE SET
                     payload = excluded.payload,
                     updated_at = excluded.updated_at",
                params![slot, payload, now],
            )
            .map_err(|e| AppError::Persistence(e.to_string()))?;
        Ok(())
    }

    fn record_op(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        // Timestamp locale, formattato in ISO 8601
        let now = Local::now().to_rfc3339();

        let mut stmt = self.conn.prepare_cached(
            "INSERT INTO log (date, operation, target, message)
             VALUES (?1, ?2, ?3, ?4)",
        )?;

        stmt.execute(params![now, operation, target, message])?;

        Ok(())
    }
}
