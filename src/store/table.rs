//! In-memory snapshot of one sheet plus typed access to its rows.

use super::cell;
use super::schema::TableKind;
use crate::errors::{AppError, AppResult};
use crate::sheet::Row;
use chrono::NaiveDate;
use std::str::FromStr;

/// Rows of one logical table. Cells stay text; columns are resolved by header
/// name, so extra or reordered columns in the sheet are tolerated.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    kind: TableKind,
    header: Vec<String>,
    rows: Vec<Row>,
}

/// Typed decoding of one row.
pub trait FromRecord: Sized {
    fn from_record(rec: &Record<'_>) -> AppResult<Self>;
}

/// Encoding of an entity into named cells.
pub trait ToRecord {
    fn id(&self) -> &str;
    fn to_fields(&self) -> Vec<(&'static str, String)>;
}

impl Table {
    pub fn empty(kind: TableKind) -> Self {
        Self {
            kind,
            header: kind.header().iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Build a table from raw sheet rows (header first).
    ///
    /// An empty sheet yields the default header and no records. Blank rows are
    /// dropped and short rows are padded to the header width. Cells beyond the
    /// last header column are kept under unnamed header cells.
    pub fn from_sheet_rows(kind: TableKind, raw: Vec<Row>) -> AppResult<Self> {
        let mut iter = raw.into_iter();

        let mut header: Vec<String> = match iter.next() {
            Some(h) if h.iter().any(|c| !c.trim().is_empty()) => h
                .iter()
                .map(|c| c.trim_start_matches('\u{feff}').trim().to_string())
                .collect(),
            _ => return Ok(Self::empty(kind)),
        };

        for required in kind.header() {
            if !header.iter().any(|h| h == required) {
                return Err(AppError::SchemaMismatch {
                    table: kind.sheet_name().to_string(),
                    column: required.to_string(),
                });
            }
        }

        let mut rows: Vec<Row> = iter
            .filter(|r| r.iter().any(|c| !c.trim().is_empty()))
            .collect();

        let width = rows
            .iter()
            .map(|r| r.iter().rposition(|c| !c.trim().is_empty()).map_or(0, |i| i + 1))
            .fold(header.len(), usize::max);
        header.resize(width, String::new());
        for r in &mut rows {
            r.resize(width, String::new());
        }

        Ok(Self { kind, header, rows })
    }

    /// Header followed by every record, ready for a full overwrite.
    pub fn to_sheet_rows(&self) -> Vec<Row> {
        let mut out = Vec::with_capacity(self.rows.len() + 1);
        out.push(self.header.clone());
        out.extend(self.rows.iter().cloned());
        out
    }

    pub fn kind(&self) -> TableKind {
        self.kind
    }

    pub fn header(&self) -> &[String] {
        &self.header
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> AppResult<usize> {
        self.header
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| AppError::SchemaMismatch {
                table: self.kind.sheet_name().to_string(),
                column: name.to_string(),
            })
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |row| Record { table: self, row })
    }

    fn position(&self, id: &str) -> Option<usize> {
        let idx = self.column(self.kind.id_column()).ok()?;
        self.rows
            .iter()
            .position(|r| r.get(idx).map(|s| s.trim()) == Some(id.trim()))
    }

    pub fn find(&self, id: &str) -> Option<Record<'_>> {
        self.position(id).map(|i| Record {
            table: self,
            row: &self.rows[i],
        })
    }

    pub fn get<T: FromRecord>(&self, id: &str) -> AppResult<T> {
        let rec = self.find(id).ok_or_else(|| AppError::NotFound {
            kind: self.kind.entity(),
            id: id.to_string(),
        })?;
        T::from_record(&rec)
    }

    pub fn decode_all<T: FromRecord>(&self) -> AppResult<Vec<T>> {
        self.records().map(|r| T::from_record(&r)).collect()
    }

    fn encode(&self, fields: &[(&'static str, String)], base: Option<&Row>) -> Row {
        let mut row = base
            .cloned()
            .unwrap_or_else(|| vec![String::new(); self.header.len()]);
        row.resize(self.header.len(), String::new());

        for (name, value) in fields {
            if let Some(idx) = self.header.iter().position(|h| h == name) {
                row[idx] = value.clone();
            }
        }
        row
    }

    /// Append a new record at the end of the table.
    pub fn append<T: ToRecord>(&mut self, item: &T) {
        let row = self.encode(&item.to_fields(), None);
        self.rows.push(row);
    }

    /// Overwrite the record with the same id. Columns the entity does not know
    /// about keep their current value.
    pub fn replace<T: ToRecord>(&mut self, item: &T) -> AppResult<()> {
        let pos = self.position(item.id()).ok_or_else(|| AppError::NotFound {
            kind: self.kind.entity(),
            id: item.id().to_string(),
        })?;
        let row = self.encode(&item.to_fields(), Some(&self.rows[pos]));
        self.rows[pos] = row;
        Ok(())
    }
}

/// One row viewed through its table's header.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    table: &'a Table,
    row: &'a Row,
}

impl<'a> Record<'a> {
    fn invalid(&self, column: &str, value: &str) -> AppError {
        AppError::InvalidField {
            table: self.table.kind.sheet_name().to_string(),
            column: column.to_string(),
            value: value.to_string(),
        }
    }

    /// Trimmed text of a column.
    pub fn text(&self, column: &str) -> AppResult<String> {
        let idx = self.table.column(column)?;
        Ok(self
            .row
            .get(idx)
            .map(|s| s.trim().to_string())
            .unwrap_or_default())
    }

    pub fn int(&self, column: &str) -> AppResult<i64> {
        let raw = self.text(column)?;
        cell::parse_int(&raw).ok_or_else(|| self.invalid(column, &raw))
    }

    pub fn decimal(&self, column: &str) -> AppResult<f64> {
        let raw = self.text(column)?;
        cell::parse_decimal(&raw).ok_or_else(|| self.invalid(column, &raw))
    }

    pub fn date(&self, column: &str) -> AppResult<NaiveDate> {
        let raw = self.text(column)?;
        cell::parse_date(&raw).ok_or_else(|| self.invalid(column, &raw))
    }

    pub fn opt_date(&self, column: &str) -> AppResult<Option<NaiveDate>> {
        let raw = self.text(column)?;
        cell::parse_opt_date(&raw).ok_or_else(|| self.invalid(column, &raw))
    }

    pub fn flag(&self, column: &str) -> AppResult<bool> {
        let raw = self.text(column)?;
        cell::parse_flag(&raw).ok_or_else(|| self.invalid(column, &raw))
    }

    /// Parse a column through the type's `FromStr`.
    pub fn parse<T: FromStr>(&self, column: &str) -> AppResult<T> {
        let raw = self.text(column)?;
        raw.parse::<T>().map_err(|_| self.invalid(column, &raw))
    }
}
