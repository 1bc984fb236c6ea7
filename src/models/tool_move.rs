use super::snapshot::Snapshot;
use crate::errors::AppResult;
use crate::store::cell::format_date;
use crate::store::{FromRecord, Record, ToRecord};
use chrono::NaiveDate;
use serde::Serialize;

/// Append-only record of a tool changing place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolMove {
    pub id: String,
    pub date: NaiveDate,
    pub tool: Snapshot,
    pub from_place: Snapshot,
    pub to_place: Snapshot,
    pub moved_by: String,
    pub notes: String,
}

impl FromRecord for ToolMove {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("tool_move_id")?,
            date: rec.date("date")?,
            tool: Snapshot::new(rec.text("tool_id")?, rec.text("tool_name_te")?),
            from_place: Snapshot::new(rec.text("from_place_id")?, rec.text("from_place_te")?),
            to_place: Snapshot::new(rec.text("to_place_id")?, rec.text("to_place_te")?),
            moved_by: rec.text("moved_by")?,
            notes: rec.text("notes")?,
        })
    }
}

impl ToRecord for ToolMove {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("tool_move_id", self.id.clone()),
            ("date", format_date(&self.date)),
            ("tool_id", self.tool.id.clone()),
            ("tool_name_te", self.tool.name.clone()),
            ("from_place_id", self.from_place.id.clone()),
            ("from_place_te", self.from_place.name.clone()),
            ("to_place_id", self.to_place.id.clone()),
            ("to_place_te", self.to_place.name.clone()),
            ("moved_by", self.moved_by.clone()),
            ("notes", self.notes.clone()),
        ]
    }
}
