//! SQLite connection wrapper for the workbook file (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;
use std::time::Duration;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // Let SQLite wait a little on a locked workbook before reporting BUSY.
        conn.busy_timeout(Duration::from_millis(250))?;
        Ok(Self { conn })
    }
}
