use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        table,
        format,
        file,
        force,
    } = cmd
    {
        let mut session = open_session(cfg)?;
        let data = session.load(*table)?;
        ExportLogic::export(data, *format, file, *force)?;
    }

    Ok(())
}
