// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::store::Table;
use crate::ui::messages::info;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One JSON object per record, keys in header order.
pub(crate) fn table_to_json(table: &Table) -> Value {
    let records = table
        .rows()
        .iter()
        .map(|row| {
            let mut obj = Map::new();
            for (i, h) in table.header().iter().enumerate() {
                let cell = row.get(i).cloned().unwrap_or_default();
                // unnamed overflow columns get their 1-based position
                let key = if h.is_empty() {
                    format!("column_{}", i + 1)
                } else {
                    h.clone()
                };
                obj.insert(key, Value::String(cell));
            }
            Value::Object(obj)
        })
        .collect();

    Value::Array(records)
}

/// Export JSON pretty-printed.
pub(crate) fn export_json(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(&table_to_json(table))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV, header row first.
pub(crate) fn export_csv(table: &Table, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(table.header())?;
    for row in table.rows() {
        wtr.write_record(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
