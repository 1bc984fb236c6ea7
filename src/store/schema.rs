//! The logical tables, their sheet names, default headers and id conventions.

use clap::ValueEnum;

/// Identifier convention of a table: a fixed prefix and a zero-padded number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdFormat {
    pub prefix: &'static str,
    pub width: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
pub enum TableKind {
    Workers,
    WorkTypes,
    WorkLogs,
    Tools,
    ToolMoves,
    StoragePlaces,
    Chekkulu,
    ColdStorage,
}

const WORKERS: &[&str] = &[
    "worker_id",
    "name_te",
    "phone",
    "default_daily_wage",
    "active",
    "notes",
];

const WORK_TYPES: &[&str] = &["work_type_id", "name_te"];

const WORK_LOGS: &[&str] = &[
    "work_log_id",
    "date",
    "worker_id",
    "worker_name_te",
    "work_type_id",
    "work_type_te",
    "day_unit",
    "rate_daily",
    "amount_due",
    "pay_status",
    "amount_paid",
    "pay_method",
    "notes",
];

const TOOLS: &[&str] = &[
    "tool_id",
    "name_te",
    "tool_type",
    "quantity",
    "status_te",
    "current_place_id",
    "current_place_te",
    "last_updated",
    "notes",
];

const TOOL_MOVES: &[&str] = &[
    "tool_move_id",
    "date",
    "tool_id",
    "tool_name_te",
    "from_place_id",
    "from_place_te",
    "to_place_id",
    "to_place_te",
    "moved_by",
    "notes",
];

const STORAGE_PLACES: &[&str] = &["place_id", "name_te"];

const CHEKKULU: &[&str] = &["chekkulu_id", "date", "rate", "weight", "tbgr_number", "type"];

const COLD_STORAGE: &[&str] = &[
    "cold_storage_id",
    "date_stored",
    "count",
    "weight",
    "serial_number",
    "type",
    "date_removed",
];

impl TableKind {
    pub const ALL: [TableKind; 8] = [
        TableKind::Workers,
        TableKind::WorkTypes,
        TableKind::WorkLogs,
        TableKind::Tools,
        TableKind::ToolMoves,
        TableKind::StoragePlaces,
        TableKind::Chekkulu,
        TableKind::ColdStorage,
    ];

    /// Name of the sheet in the backend.
    pub fn sheet_name(&self) -> &'static str {
        match self {
            TableKind::Workers => "workers",
            TableKind::WorkTypes => "work_types",
            TableKind::WorkLogs => "work_logs",
            TableKind::Tools => "tools",
            TableKind::ToolMoves => "tool_moves",
            TableKind::StoragePlaces => "storage_places",
            TableKind::Chekkulu => "chekkulu",
            TableKind::ColdStorage => "cold_storage",
        }
    }

    /// Singular entity name used in messages.
    pub fn entity(&self) -> &'static str {
        match self {
            TableKind::Workers => "Worker",
            TableKind::WorkTypes => "Work type",
            TableKind::WorkLogs => "Work log",
            TableKind::Tools => "Tool",
            TableKind::ToolMoves => "Tool move",
            TableKind::StoragePlaces => "Storage place",
            TableKind::Chekkulu => "Chekkulu record",
            TableKind::ColdStorage => "Cold storage item",
        }
    }

    /// Header written when the sheet is created; also the set of required columns.
    pub fn header(&self) -> &'static [&'static str] {
        match self {
            TableKind::Workers => WORKERS,
            TableKind::WorkTypes => WORK_TYPES,
            TableKind::WorkLogs => WORK_LOGS,
            TableKind::Tools => TOOLS,
            TableKind::ToolMoves => TOOL_MOVES,
            TableKind::StoragePlaces => STORAGE_PLACES,
            TableKind::Chekkulu => CHEKKULU,
            TableKind::ColdStorage => COLD_STORAGE,
        }
    }

    /// First header column holds the record id.
    pub fn id_column(&self) -> &'static str {
        self.header()[0]
    }

    pub fn id_format(&self) -> IdFormat {
        let (prefix, width) = match self {
            TableKind::Workers => ("W", 3),
            TableKind::WorkTypes => ("WT", 3),
            TableKind::WorkLogs => ("WL", 6),
            TableKind::Tools => ("T", 3),
            TableKind::ToolMoves => ("TM", 6),
            TableKind::StoragePlaces => ("P", 3),
            TableKind::Chekkulu => ("CK", 6),
            TableKind::ColdStorage => ("CS", 6),
        };
        IdFormat { prefix, width }
    }
}
