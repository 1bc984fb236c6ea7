//! Text cell conversions shared by every table.
//!
//! Cells always travel as text; typing happens here and nowhere else.

use chrono::NaiveDate;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Integer cell. Blank reads as zero; integral decimals such as `550.0`
/// (what spreadsheet exports produce for numeric columns) are accepted.
pub fn parse_int(raw: &str) -> Option<i64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0);
    }

    if let Ok(v) = s.parse::<i64>() {
        return Some(v);
    }

    let v = s.parse::<f64>().ok()?;
    if v.is_finite() && v.fract() == 0.0 && v.abs() < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Decimal cell. Blank reads as zero.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Optional date cell: blank means "not set".
pub fn parse_opt_date(raw: &str) -> Option<Option<NaiveDate>> {
    if raw.trim().is_empty() {
        Some(None)
    } else {
        parse_date(raw).map(Some)
    }
}

/// Y/N flag cell. Blank reads as N.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_uppercase().as_str() {
        "Y" | "YES" | "TRUE" | "1" => Some(true),
        "" | "N" | "NO" | "FALSE" | "0" => Some(false),
        _ => None,
    }
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_opt_date(date: &Option<NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_default()
}

pub fn format_flag(value: bool) -> String {
    if value { "Y" } else { "N" }.to_string()
}

/// `12.5` → "12.5", `12.0` → "12".
pub fn format_decimal(value: f64) -> String {
    format!("{}", value)
}
