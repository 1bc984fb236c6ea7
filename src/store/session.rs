use super::schema::TableKind;
use super::table::Table;
use crate::errors::{AppError, AppResult};
use crate::sheet::{SheetBackend, SheetError, SheetHandle};
use crate::ui::messages::warning;
use std::collections::{HashMap, HashSet};

/// Per-session context: one backend plus one cached copy of every table the
/// session has touched.
///
/// The first successful `load` of a table is memoized until `refresh`. A failed
/// `save` leaves the attempted table in the cache but marks it unconfirmed, and
/// the next `load` goes back to the backend.
pub struct Session<B: SheetBackend> {
    backend: B,
    handles: HashMap<TableKind, SheetHandle>,
    cache: HashMap<TableKind, Table>,
    unconfirmed: HashSet<TableKind>,
}

fn unavailable(kind: TableKind, e: SheetError) -> AppError {
    AppError::BackendUnavailable {
        table: kind.sheet_name().to_string(),
        message: e.message,
    }
}

impl<B: SheetBackend> Session<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            handles: HashMap::new(),
            cache: HashMap::new(),
            unconfirmed: HashSet::new(),
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    fn handle(&mut self, kind: TableKind) -> AppResult<SheetHandle> {
        if let Some(h) = self.handles.get(&kind) {
            return Ok(h.clone());
        }

        let handle = self
            .backend
            .open_table(kind.sheet_name(), kind.header())
            .map_err(|e| unavailable(kind, e))?;
        self.handles.insert(kind, handle.clone());
        Ok(handle)
    }

    fn fetch(&mut self, kind: TableKind) -> AppResult<Table> {
        let handle = self.handle(kind)?;
        let rows = self
            .backend
            .read_all_rows(&handle)
            .map_err(|e| unavailable(kind, e))?;
        Table::from_sheet_rows(kind, rows)
    }

    /// Cached table, fetched on first use or after an unconfirmed save.
    pub fn load(&mut self, kind: TableKind) -> AppResult<&Table> {
        if !self.cache.contains_key(&kind) || self.unconfirmed.contains(&kind) {
            let table = self.fetch(kind)?;
            self.cache.insert(kind, table);
            self.unconfirmed.remove(&kind);
        }

        self.cache
            .get(&kind)
            .ok_or_else(|| AppError::Other(format!("cache miss for {}", kind.sheet_name())))
    }

    /// Owned copy of a table, ready to be modified and saved.
    pub fn load_owned(&mut self, kind: TableKind) -> AppResult<Table> {
        self.load(kind).cloned()
    }

    /// Drop the cached copy and reload. On failure the old copy stays.
    pub fn refresh(&mut self, kind: TableKind) -> AppResult<&Table> {
        let table = self.fetch(kind)?;
        self.cache.insert(kind, table);
        self.unconfirmed.remove(&kind);
        self.load(kind)
    }

    /// Full overwrite of the remote table: clear, then header + rows.
    pub fn save(&mut self, table: Table) -> AppResult<()> {
        let kind = table.kind();
        let handle = self.handle(kind)?;
        let rows = table.to_sheet_rows();

        let written = self
            .backend
            .clear(&handle)
            .and_then(|_| self.backend.write_rows(&handle, &rows));

        let len = table.len();
        self.cache.insert(kind, table);

        match written {
            Ok(()) => {
                self.unconfirmed.remove(&kind);
                self.audit("save", kind.sheet_name(), &format!("{} rows", len));
                Ok(())
            }
            Err(e) => {
                self.unconfirmed.insert(kind);
                Err(unavailable(kind, e))
            }
        }
    }

    /// Save two tables that must change together. No compensating write is
    /// attempted when the second save fails.
    pub fn save_dependent(&mut self, primary: Table, dependent: Table) -> AppResult<()> {
        let committed = primary.kind().sheet_name().to_string();
        let failed = dependent.kind().sheet_name().to_string();

        self.save(primary)?;

        self.save(dependent).map_err(|e| AppError::PartialUpdate {
            committed,
            failed,
            source: Box::new(e),
        })
    }

    /// Audit line through the backend; failures only warn.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = self.backend.audit(operation, target, message) {
            warning(format!("Could not write audit entry '{}': {}", operation, e));
        }
    }

    pub fn is_cached(&self, kind: TableKind) -> bool {
        self.cache.contains_key(&kind)
    }

    pub fn is_unconfirmed(&self, kind: TableKind) -> bool {
        self.unconfirmed.contains(&kind)
    }
}
