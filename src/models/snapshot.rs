use serde::Serialize;

/// Reference to another record together with the name it had when the
/// reference was written. The name is never re-synced afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub id: String,
    pub name: String,
}

impl Snapshot {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
