use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;
use crate::sheet::SqliteBackend;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let backend = SqliteBackend::open(&cfg.workbook)?;
        LogLogic::print_log(backend.conn())?;
    }

    Ok(())
}
