use crate::cli::commands::{open_session, parse_code, parse_period};
use crate::cli::parser::{Commands, WorkAction};
use crate::config::Config;
use crate::core::work_logs::{NewWorkLog, WorkLogFilter, WorkLogLogic};
use crate::errors::AppResult;
use crate::models::day_unit::DayUnit;
use crate::models::pay_method::PayMethod;
use crate::models::pay_status::PayStatus;
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_pay_status, paint};
use crate::utils::date::date_or_today;
use crate::utils::formatting::{bold, rupees};
use crate::utils::table::{Column, TextTable};

fn parse_method(s: &str) -> AppResult<PayMethod> {
    parse_code(s, PayMethod::from_code, "cash, UPI")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Work { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            WorkAction::Add {
                worker,
                work_type,
                date,
                unit,
                rate,
                paid,
                method,
                notes,
            } => {
                let log = WorkLogLogic::add(
                    &mut session,
                    NewWorkLog {
                        date: date_or_today(date.as_deref())?,
                        worker_id: worker.clone(),
                        work_type_id: work_type.clone(),
                        day_unit: parse_code(unit, DayUnit::from_code, "FULL, HALF")?,
                        daily_rate: *rate,
                        amount_paid: *paid,
                        pay_method: parse_method(method)?,
                        notes: notes.clone(),
                    },
                )?;
                success(format!(
                    "Work log {} added: {} on {}, due {} ({})",
                    log.id,
                    log.worker.name,
                    log.date,
                    rupees(log.amount_due),
                    log.pay_status.code()
                ));
            }

            WorkAction::Pay { id, amount, method } => {
                let log = WorkLogLogic::pay(&mut session, id, *amount, parse_method(method)?)?;
                success(format!(
                    "Payment recorded for {}: paid {} of {} ({})",
                    log.id,
                    rupees(log.amount_paid),
                    rupees(log.amount_due),
                    log.pay_status.code()
                ));
            }

            WorkAction::List {
                period,
                worker,
                status,
            } => {
                let filter = WorkLogFilter {
                    period: parse_period(period)?,
                    worker: worker.clone(),
                    status: status
                        .as_deref()
                        .map(|s| parse_code(s, PayStatus::from_code, "UNPAID, PARTIAL, PAID"))
                        .transpose()?,
                };

                let logs = WorkLogLogic::list(&mut session, &filter)?;
                if logs.is_empty() {
                    info("No work logs found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Date"),
                    Column::left("Worker"),
                    Column::left("Work"),
                    Column::left("Unit"),
                    Column::right("Due"),
                    Column::right("Paid"),
                    Column::left("Status"),
                    Column::left("Method"),
                ]);

                for l in &logs {
                    table.add_row(vec![
                        l.id.clone(),
                        l.date.to_string(),
                        l.worker.name.clone(),
                        l.work_type.name.clone(),
                        l.day_unit.label().to_string(),
                        rupees(l.amount_due),
                        rupees(l.amount_paid),
                        paint(l.pay_status.code(), color_for_pay_status(l.pay_status)),
                        l.pay_method.label().to_string(),
                    ]);
                }
                table.print();

                let due: i64 = logs.iter().map(|l| l.amount_due).sum();
                let paid: i64 = logs.iter().map(|l| l.amount_paid).sum();
                println!(
                    "\n{} due {} | paid {} | outstanding {}",
                    bold("Total:"),
                    rupees(due),
                    rupees(paid),
                    rupees(logs.iter().map(|l| l.remaining()).sum())
                );
            }
        }
    }

    Ok(())
}
