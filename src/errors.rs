//! Unified application error type.
//! Every layer (sheet backends, record store, rules, cli) returns AppError so
//! validation failures, backend failures and partial updates stay distinguishable
//! all the way up to the command line.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Workbook / backend
    // ---------------------------
    #[error("Workbook error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Workbook migration error: {0}")]
    Migration(String),

    #[error("Backend unavailable for table '{table}': {message}")]
    BackendUnavailable { table: String, message: String },

    #[error("Table '{table}' is missing required column '{column}'")]
    SchemaMismatch { table: String, column: String },

    // ---------------------------
    // Identifiers
    // ---------------------------
    #[error(
        "Malformed identifier '{id}' in table '{table}': expected '{prefix}' followed by digits"
    )]
    MalformedIdentifier {
        table: String,
        id: String,
        prefix: String,
    },

    // ---------------------------
    // Validation (no state change)
    // ---------------------------
    #[error("Tool {tool_id} is already at '{place}'; choose a different place")]
    NoOpMove { tool_id: String, place: String },

    #[error("Cold storage item {id} was already removed on {date_removed}")]
    AlreadyRemoved { id: String, date_removed: String },

    #[error("Payment of ₹{amount} for {work_log_id} exceeds the remaining balance of ₹{remaining}")]
    OverpaymentRejected {
        work_log_id: String,
        amount: i64,
        remaining: i64,
    },

    #[error("Amount must be greater than zero (got {0})")]
    InvalidAmount(i64),

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Worker {0} is not active")]
    InactiveWorker(String),

    // ---------------------------
    // Multi-table updates
    // ---------------------------
    #[error(
        "Partial update: '{committed}' was saved but '{failed}' was not ({source}). Manual reconciliation required"
    )]
    PartialUpdate {
        committed: String,
        failed: String,
        source: Box<AppError>,
    },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid value '{value}' in {table}.{column}")]
    InvalidField {
        table: String,
        column: String,
        value: String,
    },

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    // ---------------------------
    // Authentication
    // ---------------------------
    #[error("Authentication failed: wrong or missing password")]
    AuthenticationFailed,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
