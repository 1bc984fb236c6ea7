use crate::errors::AppResult;
use crate::store::cell::{format_date, format_decimal};
use crate::store::{FromRecord, Record, ToRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// One harvested bale lot sold or weighed at the auction floor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chekkulu {
    pub id: String,
    pub date: NaiveDate,
    pub rate: f64,
    pub weight: f64,
    pub tbgr_number: String,
    pub kind: String, // ⇔ chekkulu.type
}

impl FromRecord for Chekkulu {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("chekkulu_id")?,
            date: rec.date("date")?,
            rate: rec.decimal("rate")?,
            weight: rec.decimal("weight")?,
            tbgr_number: rec.text("tbgr_number")?,
            kind: rec.text("type")?,
        })
    }
}

impl ToRecord for Chekkulu {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("chekkulu_id", self.id.clone()),
            ("date", format_date(&self.date)),
            ("rate", format_decimal(self.rate)),
            ("weight", format_decimal(self.weight)),
            ("tbgr_number", self.tbgr_number.clone()),
            ("type", self.kind.clone()),
        ]
    }
}
