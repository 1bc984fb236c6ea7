//! Bulk import of sheets from CSV files.

use crate::errors::{AppError, AppResult};
use crate::sheet::{Row, SheetBackend};
use crate::store::{Session, Table, TableKind};
use crate::ui::messages::{info, success};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static NUMERIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?$").expect("valid numeric regex")
});

/// Phone cells exported from a spreadsheet often arrive as floats
/// (`9876543210.0`, `9.87654321e+09`). Turn those back into plain digits;
/// anything else is only trimmed.
pub fn normalize_phone(raw: &str) -> String {
    let s = raw.trim();
    if s.is_empty() || s.eq_ignore_ascii_case("nan") {
        return String::new();
    }
    if s.chars().all(|c| c.is_ascii_digit()) {
        return s.to_string();
    }

    if NUMERIC_RE.is_match(s)
        && let Ok(v) = s.parse::<f64>()
        && v.fract() == 0.0
        && v < 1e15
    {
        return format!("{}", v as u64);
    }

    s.to_string()
}

/// All rows of a CSV file (header first) as text cells.
pub fn read_csv_rows(path: &Path) -> AppResult<Vec<Row>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(record.iter().map(|c| c.to_string()).collect());
    }
    Ok(rows)
}

/// Parse rows into a table of `kind`, normalizing the phone column.
pub fn prepare_table(kind: TableKind, rows: Vec<Row>) -> AppResult<Table> {
    let table = Table::from_sheet_rows(kind, rows)?;

    let phone_idx = match table.header().iter().position(|h| h == "phone") {
        Some(idx) => idx,
        None => return Ok(table),
    };

    let mut rows = table.to_sheet_rows();
    for row in rows.iter_mut().skip(1) {
        if let Some(cell) = row.get_mut(phone_idx) {
            *cell = normalize_phone(cell);
        }
    }
    Table::from_sheet_rows(kind, rows)
}

pub struct ImportLogic;

impl ImportLogic {
    /// Import `<sheet>.csv` for every known sheet found in `dir`. Each table
    /// is written with a full overwrite. Returns the imported tables with
    /// their record counts.
    pub fn import_dir<B: SheetBackend>(
        session: &mut Session<B>,
        dir: &Path,
    ) -> AppResult<Vec<(TableKind, usize)>> {
        if !dir.is_dir() {
            return Err(AppError::Import(format!(
                "not a directory: {}",
                dir.display()
            )));
        }

        // Parse everything first so a bad file aborts before any write.
        let mut prepared = Vec::new();
        for kind in TableKind::ALL {
            let path = dir.join(format!("{}.csv", kind.sheet_name()));
            if !path.exists() {
                continue;
            }

            info(format!("Reading {} ...", path.display()));
            let rows = read_csv_rows(&path)?;
            let table = prepare_table(kind, rows).map_err(|e| {
                AppError::Import(format!("{}: {}", path.display(), e))
            })?;
            prepared.push(table);
        }

        if prepared.is_empty() {
            return Err(AppError::Import(format!(
                "no sheet CSV files found in {}",
                dir.display()
            )));
        }

        let mut imported = Vec::new();
        for table in prepared {
            let kind = table.kind();
            let len = table.len();
            session.save(table)?;
            success(format!("Imported {} rows into '{}'", len, kind.sheet_name()));
            imported.push((kind, len));
        }

        session.audit(
            "import",
            &dir.to_string_lossy(),
            &format!("{} tables imported", imported.len()),
        );
        Ok(imported)
    }
}
