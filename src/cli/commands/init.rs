use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::log;
use crate::errors::AppResult;
use crate::sheet::{SheetBackend, SqliteBackend};
use crate::store::TableKind;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - the workbook file and its migrations
///  - every sheet with its default header
pub fn handle(cli: &Cli) -> AppResult<()> {
    //
    // 1️⃣ CONFIGURATION
    //
    let cfg = Config::init_all(cli.workbook.clone(), cli.test)?;

    println!("⚙️  Initializing farmledger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Workbook   : {}", &cfg.workbook);

    //
    // 2️⃣ WORKBOOK (tables + migrations)
    //
    let backend = SqliteBackend::open(&cfg.workbook)?;

    //
    // 3️⃣ SHEETS
    //
    for kind in TableKind::ALL {
        backend
            .open_table(kind.sheet_name(), kind.header())
            .map_err(|e| crate::errors::AppError::BackendUnavailable {
                table: kind.sheet_name().to_string(),
                message: e.message,
            })?;
    }

    success(format!("Workbook initialized at {}", &cfg.workbook));

    //
    // 4️⃣ INTERNAL LOG (non blocking)
    //
    if let Err(e) = log::ttlog(
        backend.conn(),
        "init",
        "Workbook initialized",
        &format!("Workbook initialized at {}", &cfg.workbook),
    ) {
        warning(format!("Failed to write internal log: {}", e));
    }

    println!("🎉 farmledger initialization completed!");
    Ok(())
}
