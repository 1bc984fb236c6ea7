use crate::errors::AppResult;
use crate::store::{FromRecord, Record, ToRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkType {
    pub id: String,
    pub name: String,
}

impl FromRecord for WorkType {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("work_type_id")?,
            name: rec.text("name_te")?,
        })
    }
}

impl ToRecord for WorkType {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("work_type_id", self.id.clone()),
            ("name_te", self.name.clone()),
        ]
    }
}
