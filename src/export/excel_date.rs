// src/export/excel_date.rs

use crate::store::cell::parse_date;
use chrono::NaiveDate;

/// Excel serial number of a `YYYY-MM-DD` cell, if the cell is a date.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let d = parse_date(s)?;
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    Some(("yyyy-mm-dd", (d - epoch).num_days() as f64))
}
