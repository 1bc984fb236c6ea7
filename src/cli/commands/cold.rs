use crate::cli::commands::{open_session, parse_period};
use crate::cli::parser::{ColdAction, Commands};
use crate::config::Config;
use crate::core::harvest::{ColdStorageFilter, ColdStorageLogic, NewColdStorageItem, serial_label};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREEN, paint};
use crate::utils::date::date_or_today;
use crate::utils::formatting::{or_dash, quantity};
use crate::utils::table::{Column, TextTable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cold { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            ColdAction::Add {
                date,
                count,
                weight,
                serial,
                kind,
            } => {
                let item = ColdStorageLogic::add(
                    &mut session,
                    NewColdStorageItem {
                        date_stored: date_or_today(date.as_deref())?,
                        count: *count,
                        weight: *weight,
                        serial_number: serial.clone(),
                        kind: kind.clone(),
                    },
                )?;
                success(format!("Cold storage item {} added.", item.id));
            }

            ColdAction::Remove { id, date } => {
                let item =
                    ColdStorageLogic::remove(&mut session, id, date_or_today(date.as_deref())?)?;
                success(format!(
                    "Cold storage item {} marked as removed on {}.",
                    item.id,
                    item.date_removed.map(|d| d.to_string()).unwrap_or_default()
                ));
            }

            ColdAction::List {
                stored,
                removed,
                serial,
                kind,
                active,
            } => {
                let filter = ColdStorageFilter {
                    stored: parse_period(stored)?,
                    removed: parse_period(removed)?,
                    serial_number: serial.clone(),
                    kind: kind.clone(),
                    active_only: *active,
                };

                let (items, counts) = ColdStorageLogic::list(&mut session, &filter)?;
                if items.is_empty() {
                    info("No cold storage items found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Stored"),
                    Column::right("Count"),
                    Column::right("Weight"),
                    Column::left("Serial"),
                    Column::left("Type"),
                    Column::left("Removed"),
                ]);
                for i in &items {
                    table.add_row(vec![
                        i.id.clone(),
                        i.date_stored.to_string(),
                        i.count.to_string(),
                        quantity(i.weight),
                        or_dash(&serial_label(i, &counts)).to_string(),
                        or_dash(&i.kind).to_string(),
                        match i.date_removed {
                            Some(d) => d.to_string(),
                            None => paint("in storage", GREEN),
                        },
                    ]);
                }
                table.print();
            }
        }
    }

    Ok(())
}
