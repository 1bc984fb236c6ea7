use super::snapshot::Snapshot;
use super::tool_status::ToolStatus;
use crate::errors::AppResult;
use crate::store::cell::format_opt_date;
use crate::store::{FromRecord, Record, ToRecord};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tool {
    pub id: String,
    pub name: String,
    pub tool_type: String,
    pub quantity: i64,
    pub status: ToolStatus,
    pub current_place: Snapshot,
    pub last_updated: Option<NaiveDate>,
    pub notes: String,
}

impl Tool {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.id, &self.name)
    }
}

impl FromRecord for Tool {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("tool_id")?,
            name: rec.text("name_te")?,
            tool_type: rec.text("tool_type")?,
            quantity: rec.int("quantity")?,
            status: rec.parse("status_te")?,
            current_place: Snapshot::new(
                rec.text("current_place_id")?,
                rec.text("current_place_te")?,
            ),
            last_updated: rec.opt_date("last_updated")?,
            notes: rec.text("notes")?,
        })
    }
}

impl ToRecord for Tool {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("tool_id", self.id.clone()),
            ("name_te", self.name.clone()),
            ("tool_type", self.tool_type.clone()),
            ("quantity", self.quantity.to_string()),
            ("status_te", self.status.code().to_string()),
            ("current_place_id", self.current_place.id.clone()),
            ("current_place_te", self.current_place.name.clone()),
            ("last_updated", format_opt_date(&self.last_updated)),
            ("notes", self.notes.clone()),
        ]
    }
}
