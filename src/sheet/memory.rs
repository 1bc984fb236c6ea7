//! In-memory sheet backend.
//!
//! Clones share the same sheets, so several sessions built from clones of one
//! backend behave like several clients of one remote workbook.

use super::{Row, SheetBackend, SheetError, SheetHandle, SheetResult};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Which calls an injected fault applies to. `Write` covers both `clear` and
/// `write_rows`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaultOp {
    Read,
    Write,
}

#[derive(Debug, Clone)]
struct Fault {
    sheet: String,
    op: FaultOp,
    remaining: u32,
    transient: bool,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    sheets: Rc<RefCell<BTreeMap<String, Vec<Row>>>>,
    audit: Rc<RefCell<Vec<AuditEntry>>>,
    faults: Rc<RefCell<Vec<Fault>>>,
    reads: Rc<RefCell<BTreeMap<String, usize>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a sheet with raw rows (header first).
    pub fn with_sheet(self, name: &str, rows: Vec<Row>) -> Self {
        self.sheets.borrow_mut().insert(name.to_string(), rows);
        self
    }

    /// Raw rows currently stored for a sheet.
    pub fn rows(&self, name: &str) -> Option<Vec<Row>> {
        self.sheets.borrow().get(name).cloned()
    }

    pub fn audit_entries(&self) -> Vec<AuditEntry> {
        self.audit.borrow().clone()
    }

    /// Make the next `times` calls of kind `op` on `sheet` fail.
    pub fn inject_fault(&self, sheet: &str, op: FaultOp, times: u32, transient: bool) {
        self.faults.borrow_mut().push(Fault {
            sheet: sheet.to_string(),
            op,
            remaining: times,
            transient,
        });
    }

    /// Number of `read_all_rows` calls served for a sheet.
    pub fn read_count(&self, name: &str) -> usize {
        self.reads.borrow().get(name).copied().unwrap_or(0)
    }

    fn check_fault(&self, sheet: &str, op: FaultOp) -> SheetResult<()> {
        let mut faults = self.faults.borrow_mut();
        let hit = faults
            .iter_mut()
            .find(|f| f.sheet == sheet && f.op == op && f.remaining > 0);

        match hit {
            Some(fault) => {
                fault.remaining -= 1;
                let message = format!("injected {:?} failure on {}", op, sheet);
                if fault.transient {
                    Err(SheetError::transient(message))
                } else {
                    Err(SheetError::permanent(message))
                }
            }
            None => Ok(()),
        }
    }
}

impl SheetBackend for MemoryBackend {
    fn open_table(&self, name: &str, header: &[&str]) -> SheetResult<SheetHandle> {
        self.sheets
            .borrow_mut()
            .entry(name.to_string())
            .or_insert_with(|| {
                if header.is_empty() {
                    Vec::new()
                } else {
                    vec![header.iter().map(|h| h.to_string()).collect()]
                }
            });
        Ok(SheetHandle::new(name))
    }

    fn read_all_rows(&self, handle: &SheetHandle) -> SheetResult<Vec<Row>> {
        *self
            .reads
            .borrow_mut()
            .entry(handle.name().to_string())
            .or_insert(0) += 1;
        self.check_fault(handle.name(), FaultOp::Read)?;

        self.sheets
            .borrow()
            .get(handle.name())
            .cloned()
            .ok_or_else(|| SheetError::permanent(format!("worksheet not found: {}", handle.name())))
    }

    fn clear(&self, handle: &SheetHandle) -> SheetResult<()> {
        self.check_fault(handle.name(), FaultOp::Write)?;
        let mut sheets = self.sheets.borrow_mut();
        let rows = sheets
            .get_mut(handle.name())
            .ok_or_else(|| SheetError::permanent(format!("worksheet not found: {}", handle.name())))?;
        rows.clear();
        Ok(())
    }

    fn write_rows(&self, handle: &SheetHandle, rows: &[Row]) -> SheetResult<()> {
        self.check_fault(handle.name(), FaultOp::Write)?;
        let mut sheets = self.sheets.borrow_mut();
        let existing = sheets
            .get_mut(handle.name())
            .ok_or_else(|| SheetError::permanent(format!("worksheet not found: {}", handle.name())))?;

        for (idx, row) in rows.iter().enumerate() {
            if idx < existing.len() {
                existing[idx] = row.clone();
            } else {
                existing.push(row.clone());
            }
        }
        Ok(())
    }

    fn audit(&self, operation: &str, target: &str, message: &str) -> SheetResult<()> {
        self.audit.borrow_mut().push(AuditEntry {
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
