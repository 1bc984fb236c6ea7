use crate::cli::commands::open_session;
use crate::cli::parser::{Commands, WorkerAction};
use crate::config::Config;
use crate::core::workers::{NewWorker, WorkerEdit, WorkerLogic};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, GREY, paint};
use crate::utils::formatting::{or_dash, rupees};
use crate::utils::table::{Column, TextTable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            WorkerAction::Add {
                name,
                phone,
                wage,
                notes,
            } => {
                let worker = WorkerLogic::add(
                    &mut session,
                    NewWorker {
                        name: name.clone(),
                        phone: phone.clone(),
                        default_daily_wage: *wage,
                        notes: notes.clone(),
                    },
                    cfg.default_daily_wage,
                )?;
                success(format!(
                    "Worker {} added: {} ({}/day)",
                    worker.id,
                    worker.name,
                    rupees(worker.default_daily_wage)
                ));
            }

            WorkerAction::Edit {
                id,
                name,
                phone,
                wage,
                active,
                inactive,
                notes,
            } => {
                let active_flag = match (active, inactive) {
                    (true, _) => Some(true),
                    (_, true) => Some(false),
                    _ => None,
                };

                let worker = WorkerLogic::edit(
                    &mut session,
                    id,
                    WorkerEdit {
                        name: name.clone(),
                        phone: phone.clone(),
                        default_daily_wage: *wage,
                        active: active_flag,
                        notes: notes.clone(),
                    },
                )?;
                success(format!("Worker {} updated.", worker.id));
            }

            WorkerAction::List { all } => {
                let workers = WorkerLogic::list(&mut session, *all)?;
                if workers.is_empty() {
                    info("No workers found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Name"),
                    Column::left("Phone"),
                    Column::right("Wage"),
                    Column::left("Active"),
                    Column::left("Notes"),
                ]);
                for w in &workers {
                    table.add_row(vec![
                        w.id.clone(),
                        w.name.clone(),
                        or_dash(&w.phone).to_string(),
                        rupees(w.default_daily_wage),
                        if w.active {
                            paint("yes", GREEN)
                        } else {
                            paint("no", GREY)
                        },
                        or_dash(&w.notes).to_string(),
                    ]);
                }
                table.print();
            }
        }
    }

    Ok(())
}
