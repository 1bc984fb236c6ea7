use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_workbook;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::AppResult;
use crate::sheet::{SheetBackend, SheetHandle, SqliteBackend};
use crate::store::{Table, TableKind};
use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};

/// Decode every sheet of the workbook and report the ones that fail.
fn check_sheets(cfg: &Config) -> AppResult<usize> {
    let backend = SqliteBackend::open(&cfg.workbook)?;
    let mut problems = 0;

    for kind in TableKind::ALL {
        let result = backend
            .read_all_rows(&SheetHandle::new(kind.sheet_name()))
            .map_err(|e| e.to_string())
            .and_then(|rows| Table::from_sheet_rows(kind, rows).map_err(|e| e.to_string()));

        match result {
            Ok(table) => println!("    {:<16} {} rows", kind.sheet_name(), table.len()),
            Err(e) => {
                problems += 1;
                println!("    {:<16} {}{}{}", kind.sheet_name(), RED, e, RESET);
            }
        }
    }

    Ok(problems)
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.workbook)?;

        // ---- MIGRATE ----
        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            if pending.is_empty() {
                println!("{}✔ Workbook schema is up to date.{}\n", GREEN, RESET);
            } else {
                println!("{}▶ Running migrations…{}", CYAN, RESET);
                for version in &pending {
                    println!("    {}", version);
                }
                let applied = run_pending_migrations(&pool.conn)?;
                println!("{}✔ {} migration(s) applied.{}\n", GREEN, applied, RESET);
            }
        }

        // ---- INFO ----
        if *info {
            // a fresh file has no sheets table yet
            init_workbook(&pool.conn)?;
            stats::print_workbook_info(&mut pool, &cfg.workbook)?;
        }

        // ---- CHECK ----
        if *check {
            println!("{}▶ Checking workbook file…{}", CYAN, RESET);
            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity != "ok" {
                println!("{}✘ SQLite integrity check failed:{} {}\n", RED, RESET, integrity);
                return Ok(());
            }

            println!("{}▶ Checking sheets…{}", CYAN, RESET);
            match check_sheets(cfg)? {
                0 => println!("{}✔ Workbook is consistent.{}\n", GREEN, RESET),
                n => println!("{}⚠ {} sheet(s) cannot be read.{}\n", YELLOW, n, RESET),
            }
        }

        // ---- VACUUM ----
        if *vacuum {
            println!("{}▶ Compacting workbook…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }
    }

    Ok(())
}
