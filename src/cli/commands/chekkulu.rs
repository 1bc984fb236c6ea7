use crate::cli::commands::{open_session, parse_period};
use crate::cli::parser::{ChekkuluAction, Commands};
use crate::config::Config;
use crate::core::harvest::{ChekkuluFilter, ChekkuluLogic, NewChekkulu};
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date::date_or_today;
use crate::utils::formatting::{or_dash, quantity};
use crate::utils::table::{Column, TextTable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Chekkulu { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            ChekkuluAction::Add {
                date,
                rate,
                weight,
                tbgr,
                kind,
            } => {
                let rec = ChekkuluLogic::add(
                    &mut session,
                    NewChekkulu {
                        date: date_or_today(date.as_deref())?,
                        rate: *rate,
                        weight: *weight,
                        tbgr_number: tbgr.clone(),
                        kind: kind.clone(),
                    },
                )?;
                success(format!("Chekkulu {} added.", rec.id));
            }

            ChekkuluAction::List { period, tbgr, kind } => {
                let filter = ChekkuluFilter {
                    period: parse_period(period)?,
                    tbgr_number: tbgr.clone(),
                    kind: kind.clone(),
                };

                let records = ChekkuluLogic::list(&mut session, &filter)?;
                if records.is_empty() {
                    info("No chekkulu records found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Date"),
                    Column::right("Rate"),
                    Column::right("Weight"),
                    Column::left("TBGR"),
                    Column::left("Type"),
                ]);
                for c in &records {
                    table.add_row(vec![
                        c.id.clone(),
                        c.date.to_string(),
                        quantity(c.rate),
                        quantity(c.weight),
                        or_dash(&c.tbgr_number).to_string(),
                        or_dash(&c.kind).to_string(),
                    ]);
                }
                table.print();

                let weight: f64 = records.iter().map(|c| c.weight).sum();
                println!("\n{} records, total weight {}", records.len(), quantity(weight));
            }
        }
    }

    Ok(())
}
