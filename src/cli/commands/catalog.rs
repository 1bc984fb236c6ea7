use crate::cli::commands::open_session;
use crate::cli::parser::{CatalogAction, Commands};
use crate::config::Config;
use crate::core::catalog::CatalogLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::table::{Column, TextTable};

fn print_entries(entries: Vec<(String, String)>, empty: &str) {
    if entries.is_empty() {
        info(empty);
        return;
    }

    let mut table = TextTable::new(vec![Column::left("ID"), Column::left("Name")]);
    for (id, name) in entries {
        table.add_row(vec![id, name]);
    }
    table.print();
}

/// `work-type` and `place` share the same add/list shape.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::WorkType { action } => {
            let mut session = open_session(cfg)?;
            match action {
                CatalogAction::Add { name } => {
                    let wt = CatalogLogic::add_work_type(&mut session, name)?;
                    success(format!("Work type {} added: {}", wt.id, wt.name));
                }
                CatalogAction::List => {
                    let entries = CatalogLogic::work_types(&mut session)?
                        .into_iter()
                        .map(|w| (w.id, w.name))
                        .collect();
                    print_entries(entries, "No work types found.");
                }
            }
        }

        Commands::Place { action } => {
            let mut session = open_session(cfg)?;
            match action {
                CatalogAction::Add { name } => {
                    let place = CatalogLogic::add_place(&mut session, name)?;
                    success(format!("Storage place {} added: {}", place.id, place.name));
                }
                CatalogAction::List => {
                    let entries = CatalogLogic::places(&mut session)?
                        .into_iter()
                        .map(|p| (p.id, p.name))
                        .collect();
                    print_entries(entries, "No storage places found.");
                }
            }
        }

        _ => {}
    }

    Ok(())
}
