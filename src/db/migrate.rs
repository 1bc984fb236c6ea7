//! Versioned schema migrations for the workbook file.
//!
//! Applied versions are recorded in the internal `log` table as
//! `migration_applied` rows, so every migration runs exactly once per workbook.

use crate::db::log::ttlog;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

type Migration = fn(&Connection) -> Result<()>;

const MIGRATIONS: &[(&str, &str, Migration)] = &[
    (
        "20260301_0001_create_sheets",
        "Created sheets table",
        create_sheets_table,
    ),
    (
        "20260301_0002_create_cells",
        "Created cells table",
        create_cells_table,
    ),
    (
        "20260415_0003_index_log_operation",
        "Indexed log by operation",
        index_log_operation,
    ),
];

/// Ensure that the `log` table exists.
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

/// One row per sheet; the sheet's cells live in `cells`.
fn create_sheets_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sheets (
            name       TEXT PRIMARY KEY,
            created_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Row 0 of every sheet is its header; `data` is a JSON array of strings.
fn create_cells_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS cells (
            sheet    TEXT NOT NULL REFERENCES sheets(name),
            row_idx  INTEGER NOT NULL,
            data     TEXT NOT NULL,
            PRIMARY KEY (sheet, row_idx)
        );
        "#,
    )?;
    Ok(())
}

fn index_log_operation(conn: &Connection) -> Result<()> {
    conn.execute_batch("CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation, target);")?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Versions not yet applied to this workbook.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut pending = Vec::new();
    for (version, _, _) in MIGRATIONS {
        if !is_applied(conn, version)? {
            pending.push(*version);
        }
    }
    Ok(pending)
}

/// Public entry point: run all pending migrations.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, description, migration) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        migration(conn).map_err(|e| AppError::Migration(format!("{version}: {e}")))?;
        ttlog(conn, "migration_applied", version, description)?;
        applied += 1;
    }

    if applied > 0 {
        success(format!("Applied {applied} workbook migration(s)."));
    }

    Ok(applied)
}
