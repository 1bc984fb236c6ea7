//! Sequential identifier allocation.

use crate::errors::{AppError, AppResult};
use crate::store::Table;

/// Next identifier for `table`: the highest numeric suffix found in
/// `id_column` plus one, zero-padded to `width`. An empty table starts at 1.
///
/// Every existing id must be `prefix` followed by digits only; anything else
/// is a `MalformedIdentifier` and blocks allocation for that table.
pub fn next_id(table: &Table, id_column: &str, prefix: &str, width: usize) -> AppResult<String> {
    let idx = table.column(id_column)?;

    let mut max: u64 = 0;
    let mut max_id = "";
    for row in table.rows() {
        let id = row.get(idx).map(|s| s.trim()).unwrap_or("");

        let malformed = || AppError::MalformedIdentifier {
            table: table.kind().sheet_name().to_string(),
            id: id.to_string(),
            prefix: prefix.to_string(),
        };

        let suffix = id.strip_prefix(prefix).ok_or_else(malformed)?;
        if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_digit()) {
            return Err(malformed());
        }

        let n: u64 = suffix.parse().map_err(|_| malformed())?;
        if n >= max {
            max = n;
            max_id = id;
        }
    }

    // the sequence is exhausted: treat the highest id as corrupted
    let next = max.checked_add(1).ok_or_else(|| AppError::MalformedIdentifier {
        table: table.kind().sheet_name().to_string(),
        id: max_id.to_string(),
        prefix: prefix.to_string(),
    })?;

    Ok(format!("{}{:0width$}", prefix, next, width = width))
}

/// Next identifier using the table's own id column and convention.
pub fn next_id_for(table: &Table) -> AppResult<String> {
    let kind = table.kind();
    let fmt = kind.id_format();
    next_id(table, kind.id_column(), fmt.prefix, fmt.width)
}
