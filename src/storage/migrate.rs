use crate::storage::LEDGER_SLOT;
use crate::ui::messages::{success, warning};
use chrono::Local;
use rusqlite::{Connection, Error, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `kv_state` table exists.
fn kv_state_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv_state'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the legacy single-row `ledger_state` table exists.
fn ledger_state_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='ledger_state'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `kv_state` table has an `updated_at` column.
fn kv_state_has_updated_at_column(conn: &Connection) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('kv_state')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == "updated_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `kv_state` table with the modern schema (including `updated_at`).
fn create_kv_state_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_state (
            slot       TEXT PRIMARY KEY,
            payload    TEXT NOT NULL,
            updated_at TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

/// Add the `updated_at` column introduced in 0.4.1.
fn migrate_add_updated_at_column(conn: &Connection) -> Result<(), Error> {
    let version = "20250712_0041_add_updated_at";

    // 1) Verifica se già applicata
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    if chk.query_row([version], |_| Ok(())).optional()?.is_some() {
        return Ok(()); // già applicata
    }

    // 2) Esegui la migrazione
    conn.execute(
        "ALTER TABLE kv_state ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';",
        [],
    )
    .map_err(|e| {
        Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some(format!("Failed to add 'updated_at' column: {}", e)),
        )
    })?;

    // 3) Marca come applicata
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, 'Added updated_at to kv_state')",
        [version],
    )?;

    success(format!(
        "Migration applied: {} → added 'updated_at' to kv_state table",
        version
    ));

    Ok(())
}

/// Fold the legacy single-row `ledger_state` table (< 0.4.0) into `kv_state`.
/// The stored payload keeps its shape; only the slot layout changed.
fn migrate_ledger_state_to_kv(conn: &Connection) -> Result<()> {
    let payload: Option<String> = conn
        .query_row("SELECT json FROM ledger_state WHERE id = 1", [], |row| {
            row.get(0)
        })
        .optional()?;

    if let Some(json) = payload {
        let now = Local::now().to_rfc3339();
        conn.execute(
            "INSERT INTO kv_state (slot, payload, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO NOTHING",
            params![LEDGER_SLOT, json, now],
        )?;
    }

    conn.execute_batch("DROP TABLE ledger_state;")?;
    success("Migrated legacy ledger_state table into kv_state.");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invocata da SqliteStore::open_and_init().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure kv_state table exists
    let kv_exists = kv_state_table_exists(conn)?;

    // 3) Detect legacy schema (< 0.4.0)
    let legacy_exists = ledger_state_table_exists(conn)?;

    if legacy_exists {
        warning("Legacy schema detected — migrating stored ledger state...");
    }

    // 4) Create kv_state table if missing
    if !kv_exists {
        create_kv_state_table(conn)?;
        success("Created kv_state table (modern schema).");
    } else if !kv_state_has_updated_at_column(conn)? {
        migrate_add_updated_at_column(conn)?;
    }

    // 5) Fold any legacy state into the modern slot layout
    if legacy_exists {
        migrate_ledger_state_to_kv(conn)?;
    }

    Ok(())
}
