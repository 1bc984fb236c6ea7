pub mod backup;
pub mod catalog;
pub mod chekkulu;
pub mod cold;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod export;
pub mod import;
pub mod init;
pub mod log;
pub mod tool;
pub mod work;
pub mod worker;

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::sheet::{Retrying, SqliteBackend};
use crate::store::Session;
use crate::utils::date::DateRange;

/// Session over the configured workbook, with the configured retry policy.
pub(crate) type WorkbookSession = Session<Retrying<SqliteBackend>>;

pub(crate) fn open_session(cfg: &Config) -> AppResult<WorkbookSession> {
    let backend = SqliteBackend::open(&cfg.workbook)?;
    Ok(Session::new(Retrying::new(backend, cfg.retry)))
}

/// Parse a code argument through `from_code`, naming the accepted values on error.
pub(crate) fn parse_code<T>(
    value: &str,
    from_code: impl Fn(&str) -> Option<T>,
    accepted: &str,
) -> AppResult<T> {
    from_code(value).ok_or_else(|| {
        AppError::InvalidValue(format!("'{}' (accepted: {})", value, accepted))
    })
}

pub(crate) fn parse_period(p: &Option<String>) -> AppResult<Option<DateRange>> {
    p.as_deref().map(DateRange::parse).transpose()
}
