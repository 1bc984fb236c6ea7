use crate::errors::AppResult;
use crate::store::cell::format_flag;
use crate::store::{FromRecord, Record, ToRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Worker {
    pub id: String,
    pub name: String,
    pub phone: String,
    pub default_daily_wage: i64,
    pub active: bool,
    pub notes: String,
}

impl FromRecord for Worker {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("worker_id")?,
            name: rec.text("name_te")?,
            phone: rec.text("phone")?,
            default_daily_wage: rec.int("default_daily_wage")?,
            active: rec.flag("active")?,
            notes: rec.text("notes")?,
        })
    }
}

impl ToRecord for Worker {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("worker_id", self.id.clone()),
            ("name_te", self.name.clone()),
            ("phone", self.phone.clone()),
            ("default_daily_wage", self.default_daily_wage.to_string()),
            ("active", format_flag(self.active)),
            ("notes", self.notes.clone()),
        ]
    }
}
