use crate::errors::AppResult;
use crate::store::cell::{format_date, format_decimal, format_opt_date};
use crate::store::{FromRecord, Record, ToRecord};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColdStorageItem {
    pub id: String,
    pub date_stored: NaiveDate,
    pub count: i64,
    pub weight: f64,
    pub serial_number: String,
    pub kind: String,                   // ⇔ cold_storage.type
    pub date_removed: Option<NaiveDate>, // empty ⇒ still in storage
}

impl ColdStorageItem {
    pub fn is_active(&self) -> bool {
        self.date_removed.is_none()
    }
}

impl FromRecord for ColdStorageItem {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("cold_storage_id")?,
            date_stored: rec.date("date_stored")?,
            count: rec.int("count")?,
            weight: rec.decimal("weight")?,
            serial_number: rec.text("serial_number")?,
            kind: rec.text("type")?,
            date_removed: rec.opt_date("date_removed")?,
        })
    }
}

impl ToRecord for ColdStorageItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("cold_storage_id", self.id.clone()),
            ("date_stored", format_date(&self.date_stored)),
            ("count", self.count.to_string()),
            ("weight", format_decimal(self.weight)),
            ("serial_number", self.serial_number.clone()),
            ("type", self.kind.clone()),
            ("date_removed", format_opt_date(&self.date_removed)),
        ]
    }
}
