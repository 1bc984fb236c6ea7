//! farmledger library root.
//! Exposes the CLI parser, the high-level run() function and the internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod sheet;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use core::auth::AuthGate;
use errors::AppResult;

/// Environment variable read when `--password` is not given
pub const PASSWORD_ENV: &str = "FARMLEDGER_PASSWORD";

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Worker { .. } => cli::commands::worker::handle(&cli.command, cfg),
        Commands::WorkType { .. } | Commands::Place { .. } => {
            cli::commands::catalog::handle(&cli.command, cfg)
        }
        Commands::Work { .. } => cli::commands::work::handle(&cli.command, cfg),
        Commands::Tool { .. } => cli::commands::tool::handle(&cli.command, cfg),
        Commands::Chekkulu { .. } => cli::commands::chekkulu::handle(&cli.command, cfg),
        Commands::Cold { .. } => cli::commands::cold::handle(&cli.command, cfg),
        Commands::Dashboard { .. } => cli::commands::dashboard::handle(&cli.command, cfg),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// `init` and `config` stay reachable without the password, so a forgotten
/// password can still be changed in the config file.
fn requires_auth(cmd: &Commands) -> bool {
    !matches!(cmd, Commands::Init | Commands::Config { .. })
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ apply the workbook override from the command line
    if let Some(custom) = &cli.workbook {
        cfg.workbook = Config::resolve_workbook(custom)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ auth gate
    if requires_auth(&cli.command) {
        let supplied = cli
            .password
            .clone()
            .or_else(|| std::env::var(PASSWORD_ENV).ok());
        AuthGate::new(&cfg).check(supplied.as_deref())?;
    }

    // 5️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg)
}
