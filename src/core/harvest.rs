//! Chekkulu (harvested bale lots) and cold storage inventory.

use crate::core::ids::next_id_for;
use crate::core::rules::mark_cold_storage_removed;
use crate::errors::{AppError, AppResult};
use crate::models::chekkulu::Chekkulu;
use crate::models::cold_storage::ColdStorageItem;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};
use crate::utils::date::DateRange;
use chrono::NaiveDate;
use std::collections::HashMap;

fn non_negative(what: &str, value: f64) -> AppResult<f64> {
    if value < 0.0 {
        return Err(AppError::InvalidValue(format!(
            "{} must not be negative (got {})",
            what, value
        )));
    }
    Ok(value)
}

// ------------------------------------------------
// Chekkulu
// ------------------------------------------------

#[derive(Debug, Clone)]
pub struct NewChekkulu {
    pub date: NaiveDate,
    pub rate: f64,
    pub weight: f64,
    pub tbgr_number: String,
    pub kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChekkuluFilter {
    pub period: Option<DateRange>,
    pub tbgr_number: Option<String>,
    pub kind: Option<String>,
}

impl ChekkuluFilter {
    pub fn matches(&self, c: &Chekkulu) -> bool {
        self.period.is_none_or(|r| r.contains(c.date))
            && self
                .tbgr_number
                .as_ref()
                .is_none_or(|t| c.tbgr_number == t.trim())
            && self.kind.as_ref().is_none_or(|k| c.kind == k.trim())
    }
}

pub struct ChekkuluLogic;

impl ChekkuluLogic {
    pub fn add<B: SheetBackend>(session: &mut Session<B>, new: NewChekkulu) -> AppResult<Chekkulu> {
        let mut table = session.load_owned(TableKind::Chekkulu)?;

        let record = Chekkulu {
            id: next_id_for(&table)?,
            date: new.date,
            rate: non_negative("rate", new.rate)?,
            weight: non_negative("weight", new.weight)?,
            tbgr_number: new.tbgr_number.trim().to_string(),
            kind: new.kind.trim().to_string(),
        };

        table.append(&record);
        session.save(table)?;
        Ok(record)
    }

    pub fn list<B: SheetBackend>(
        session: &mut Session<B>,
        filter: &ChekkuluFilter,
    ) -> AppResult<Vec<Chekkulu>> {
        let all: Vec<Chekkulu> = session.load(TableKind::Chekkulu)?.decode_all()?;
        Ok(all.into_iter().filter(|c| filter.matches(c)).collect())
    }
}

// ------------------------------------------------
// Cold storage
// ------------------------------------------------

#[derive(Debug, Clone)]
pub struct NewColdStorageItem {
    pub date_stored: NaiveDate,
    pub count: i64,
    pub weight: f64,
    pub serial_number: String,
    pub kind: String,
}

#[derive(Debug, Clone, Default)]
pub struct ColdStorageFilter {
    pub stored: Option<DateRange>,
    /// Items never removed do not match a removal range.
    pub removed: Option<DateRange>,
    pub serial_number: Option<String>,
    pub kind: Option<String>,
    pub active_only: bool,
}

impl ColdStorageFilter {
    pub fn matches(&self, item: &ColdStorageItem) -> bool {
        if self.active_only && !item.is_active() {
            return false;
        }
        if let Some(range) = &self.removed {
            match item.date_removed {
                Some(d) if range.contains(d) => {}
                _ => return false,
            }
        }

        self.stored.is_none_or(|r| r.contains(item.date_stored))
            && self
                .serial_number
                .as_ref()
                .is_none_or(|s| item.serial_number == s.trim())
            && self.kind.as_ref().is_none_or(|k| item.kind == k.trim())
    }
}

/// How many items share each serial number.
pub fn serial_counts(items: &[ColdStorageItem]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for item in items.iter().filter(|i| !i.serial_number.is_empty()) {
        *counts.entry(item.serial_number.clone()).or_insert(0) += 1;
    }
    counts
}

/// `serial / n`, or empty when the item has no serial number.
pub fn serial_label(item: &ColdStorageItem, counts: &HashMap<String, usize>) -> String {
    if item.serial_number.is_empty() {
        return String::new();
    }
    let n = counts.get(&item.serial_number).copied().unwrap_or(1);
    format!("{} / {}", item.serial_number, n)
}

pub struct ColdStorageLogic;

impl ColdStorageLogic {
    pub fn add<B: SheetBackend>(
        session: &mut Session<B>,
        new: NewColdStorageItem,
    ) -> AppResult<ColdStorageItem> {
        if new.count < 0 {
            return Err(AppError::InvalidValue(format!(
                "count must not be negative (got {})",
                new.count
            )));
        }

        let mut table = session.load_owned(TableKind::ColdStorage)?;

        let item = ColdStorageItem {
            id: next_id_for(&table)?,
            date_stored: new.date_stored,
            count: new.count,
            weight: non_negative("weight", new.weight)?,
            serial_number: new.serial_number.trim().to_string(),
            kind: new.kind.trim().to_string(),
            date_removed: None,
        };

        table.append(&item);
        session.save(table)?;
        Ok(item)
    }

    pub fn remove<B: SheetBackend>(
        session: &mut Session<B>,
        id: &str,
        removal_date: NaiveDate,
    ) -> AppResult<ColdStorageItem> {
        let mut table = session.load_owned(TableKind::ColdStorage)?;
        let item: ColdStorageItem = table.get(id)?;

        let updated = mark_cold_storage_removed(&item, removal_date)?;

        table.replace(&updated)?;
        session.save(table)?;
        Ok(updated)
    }

    /// Matching items plus the serial counts over the whole table.
    pub fn list<B: SheetBackend>(
        session: &mut Session<B>,
        filter: &ColdStorageFilter,
    ) -> AppResult<(Vec<ColdStorageItem>, HashMap<String, usize>)> {
        let all: Vec<ColdStorageItem> = session.load(TableKind::ColdStorage)?.decode_all()?;
        let counts = serial_counts(&all);
        let items = all.into_iter().filter(|i| filter.matches(i)).collect();
        Ok((items, counts))
    }
}
