use crate::errors::AppResult;
use crate::models::snapshot::Snapshot;
use crate::store::{FromRecord, Record, ToRecord};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoragePlace {
    pub id: String,
    pub name: String,
}

impl StoragePlace {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.id, &self.name)
    }
}

impl FromRecord for StoragePlace {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("place_id")?,
            name: rec.text("name_te")?,
        })
    }
}

impl ToRecord for StoragePlace {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![("place_id", self.id.clone()), ("name_te", self.name.clone())]
    }
}
