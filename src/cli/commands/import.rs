use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { dir } = cmd {
        let mut session = open_session(cfg)?;
        let imported = ImportLogic::import_dir(&mut session, Path::new(dir))?;

        let total: usize = imported.iter().map(|(_, n)| n).sum();
        success(format!(
            "Import completed: {} tables, {} rows",
            imported.len(),
            total
        ));
    }

    Ok(())
}
