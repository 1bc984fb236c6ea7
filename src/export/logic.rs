// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::store::Table;
use crate::ui::messages::warning;
use crate::utils::path::ensure_writable;
use std::path::Path;

/// High level export of one table.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `table` to `file` in the requested format. The header order of
    /// the sheet is kept in every format.
    pub fn export(table: &Table, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force, "Export")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        if table.is_empty() {
            warning(format!(
                "Table '{}' has no records; exporting the header only.",
                table.kind().sheet_name()
            ));
        }

        match format {
            ExportFormat::Csv => export_csv(table, path)?,
            ExportFormat::Json => export_json(table, path)?,
            ExportFormat::Xlsx => export_xlsx(table, path)?,
        }

        Ok(())
    }
}
