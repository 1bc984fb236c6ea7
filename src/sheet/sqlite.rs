//! Workbook backend: sheets stored as JSON rows inside a SQLite file.

use super::{Row, SheetBackend, SheetError, SheetHandle, SheetResult};
use crate::db::initialize::init_workbook;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

pub struct SqliteBackend {
    pool: DbPool,
    path: String,
}

impl std::fmt::Debug for SqliteBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteBackend")
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

impl SqliteBackend {
    /// Open (or create) the workbook file and bring its schema up to date.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_workbook(&pool.conn)?;
        Ok(Self {
            pool,
            path: path.to_string(),
        })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    fn ensure_exists(&self, handle: &SheetHandle) -> SheetResult<()> {
        let found: Option<i64> = self
            .pool
            .conn
            .query_row(
                "SELECT 1 FROM sheets WHERE name = ?1",
                [handle.name()],
                |row| row.get(0),
            )
            .optional()?;

        match found {
            Some(_) => Ok(()),
            None => Err(SheetError::permanent(format!(
                "worksheet not found: {}",
                handle.name()
            ))),
        }
    }
}

impl SheetBackend for SqliteBackend {
    fn open_table(&self, name: &str, header: &[&str]) -> SheetResult<SheetHandle> {
        let created = self.pool.conn.execute(
            "INSERT OR IGNORE INTO sheets (name, created_at) VALUES (?1, ?2)",
            params![name, Local::now().to_rfc3339()],
        )?;

        if created == 1 && !header.is_empty() {
            let data = serde_json::to_string(header)?;
            self.pool.conn.execute(
                "INSERT OR REPLACE INTO cells (sheet, row_idx, data) VALUES (?1, 0, ?2)",
                params![name, data],
            )?;
        }

        Ok(SheetHandle::new(name))
    }

    fn read_all_rows(&self, handle: &SheetHandle) -> SheetResult<Vec<Row>> {
        self.ensure_exists(handle)?;

        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT data FROM cells WHERE sheet = ?1 ORDER BY row_idx ASC")?;

        let rows = stmt.query_map([handle.name()], |row| row.get::<_, String>(0))?;

        let mut out = Vec::new();
        for r in rows {
            let data = r?;
            out.push(serde_json::from_str::<Row>(&data)?);
        }
        Ok(out)
    }

    fn clear(&self, handle: &SheetHandle) -> SheetResult<()> {
        self.ensure_exists(handle)?;
        self.pool
            .conn
            .execute("DELETE FROM cells WHERE sheet = ?1", [handle.name()])?;
        Ok(())
    }

    fn write_rows(&self, handle: &SheetHandle, rows: &[Row]) -> SheetResult<()> {
        self.ensure_exists(handle)?;

        let tx = self.pool.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT OR REPLACE INTO cells (sheet, row_idx, data) VALUES (?1, ?2, ?3)",
            )?;
            for (idx, row) in rows.iter().enumerate() {
                let data = serde_json::to_string(row)?;
                stmt.execute(params![handle.name(), idx as i64, data])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> SheetResult<()> {
        ttlog(&self.pool.conn, operation, target, message)
            .map_err(|e| SheetError::permanent(e.to_string()))
    }
}
