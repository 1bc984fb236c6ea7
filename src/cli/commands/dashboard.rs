use crate::cli::commands::open_session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::Dashboard;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RED, RESET, YELLOW, color_for_tool_status, paint};
use crate::utils::formatting::rupees;
use crate::utils::table::{Column, TextTable};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { json } = cmd {
        let mut session = open_session(cfg)?;
        let dash = Dashboard::load(&mut session)?;

        if *json {
            println!("{}", serde_json::to_string_pretty(&dash)?);
            return Ok(());
        }

        header("Dashboard");

        println!("{}• Active workers:{} {}", CYAN, RESET, dash.active_workers);
        println!("{}• Tools:{} {}", CYAN, RESET, dash.total_tools);
        println!(
            "{}• Tools needing attention:{} {}{}{}",
            CYAN, RESET, YELLOW, dash.tools_needing_attention, RESET
        );
        println!(
            "{}• Outstanding wages:{} {}{}{}",
            CYAN,
            RESET,
            RED,
            rupees(dash.outstanding_total),
            RESET
        );

        if !dash.outstanding_logs.is_empty() {
            println!("\nOutstanding work logs:");
            let mut table = TextTable::new(vec![
                Column::left("ID"),
                Column::left("Date"),
                Column::left("Worker"),
                Column::right("Due"),
                Column::right("Paid"),
                Column::right("Remaining"),
            ]);
            for l in &dash.outstanding_logs {
                table.add_row(vec![
                    l.id.clone(),
                    l.date.to_string(),
                    l.worker.name.clone(),
                    rupees(l.amount_due),
                    rupees(l.amount_paid),
                    rupees(l.remaining()),
                ]);
            }
            table.print();
        }

        if !dash.attention_tools.is_empty() {
            println!("\nTools needing attention:");
            let mut table = TextTable::new(vec![
                Column::left("ID"),
                Column::left("Name"),
                Column::left("Status"),
                Column::left("Place"),
            ]);
            for t in &dash.attention_tools {
                table.add_row(vec![
                    t.id.clone(),
                    t.name.clone(),
                    paint(t.status.label(), color_for_tool_status(t.status)),
                    t.current_place.name.clone(),
                ]);
            }
            table.print();
        }
    }

    Ok(())
}
