use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::{AppError, AppResult};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            if path.exists() {
                ConfigLogic::print(&path)?;
            } else {
                let yaml =
                    serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
        }

        // ---- CHECK / MIGRATE ----
        if (*check || *migrate) && !path.exists() {
            return Err(AppError::Config(format!(
                "configuration file not found: {} (run `farmledger init`)",
                path.display()
            )));
        }
        if *check {
            ConfigLogic::check(&path)?;
        }
        if *migrate {
            ConfigLogic::migrate(&path)?;
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }
    }

    Ok(())
}
