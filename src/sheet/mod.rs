//! Table backend adapter.
//!
//! A backend stores named sheets: grids of text cells whose first row is the
//! header. The protocol is open, read everything, clear, and write from the
//! top-left cell; the record store persists a table as a full overwrite.

pub mod memory;
pub mod retry;
pub mod sqlite;

pub use memory::{FaultOp, MemoryBackend};
pub use retry::{RetryPolicy, Retrying};
pub use sqlite::SqliteBackend;

use thiserror::Error;

/// One row of text cells.
pub type Row = Vec<String>;

pub type SheetResult<T> = Result<T, SheetError>;

/// Failure reported by a backend.
///
/// `transient` marks failures worth retrying (busy or locked workbook,
/// interrupted I/O); everything else is permanent.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct SheetError {
    pub transient: bool,
    pub message: String,
}

impl SheetError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            transient: true,
            message: message.into(),
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            transient: false,
            message: message.into(),
        }
    }

    pub fn is_transient(&self) -> bool {
        self.transient
    }
}

impl From<rusqlite::Error> for SheetError {
    fn from(e: rusqlite::Error) -> Self {
        let transient = matches!(
            e.sqlite_error_code(),
            Some(rusqlite::ErrorCode::DatabaseBusy) | Some(rusqlite::ErrorCode::DatabaseLocked)
        );
        Self {
            transient,
            message: e.to_string(),
        }
    }
}

impl From<serde_json::Error> for SheetError {
    fn from(e: serde_json::Error) -> Self {
        SheetError::permanent(format!("corrupted row data: {e}"))
    }
}

impl From<std::io::Error> for SheetError {
    fn from(e: std::io::Error) -> Self {
        let transient = matches!(
            e.kind(),
            std::io::ErrorKind::Interrupted
                | std::io::ErrorKind::TimedOut
                | std::io::ErrorKind::WouldBlock
        );
        Self {
            transient,
            message: e.to_string(),
        }
    }
}

/// Handle to an opened sheet.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetHandle {
    name: String,
}

impl SheetHandle {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// The table backend protocol.
pub trait SheetBackend {
    /// Open a sheet, creating it with `header` as its first row when absent.
    fn open_table(&self, name: &str, header: &[&str]) -> SheetResult<SheetHandle>;

    /// Every row of the sheet, header first. A cleared sheet returns no rows.
    fn read_all_rows(&self, handle: &SheetHandle) -> SheetResult<Vec<Row>>;

    /// Remove every row, header included.
    fn clear(&self, handle: &SheetHandle) -> SheetResult<()>;

    /// Write `rows` starting at the top-left cell.
    fn write_rows(&self, handle: &SheetHandle, rows: &[Row]) -> SheetResult<()>;

    /// Record an audit line. Backends without a log ignore it.
    fn audit(&self, _operation: &str, _target: &str, _message: &str) -> SheetResult<()> {
        Ok(())
    }
}
