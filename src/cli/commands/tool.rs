use crate::cli::commands::{open_session, parse_code};
use crate::cli::parser::{Commands, ToolAction};
use crate::config::Config;
use crate::core::tools::{MoveTool, NewTool, ToolFilter, ToolLogic};
use crate::errors::AppResult;
use crate::models::tool_status::ToolStatus;
use crate::ui::messages::{info, success};
use crate::utils::colors::{color_for_tool_status, paint};
use crate::utils::date::date_or_today;
use crate::utils::formatting::or_dash;
use crate::utils::table::{Column, TextTable};

fn parse_status(s: &str) -> AppResult<ToolStatus> {
    parse_code(s, ToolStatus::from_code, "OK, NEEDS_REPAIR, BROKEN")
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Tool { action } = cmd {
        let mut session = open_session(cfg)?;

        match action {
            ToolAction::Add {
                name,
                tool_type,
                quantity,
                status,
                place,
                date,
                notes,
            } => {
                let tool = ToolLogic::add(
                    &mut session,
                    NewTool {
                        name: name.clone(),
                        tool_type: tool_type.clone(),
                        quantity: *quantity,
                        status: parse_status(status)?,
                        place_id: place.clone(),
                        date: date_or_today(date.as_deref())?,
                        notes: notes.clone(),
                    },
                )?;
                success(format!(
                    "Tool {} added: {} at {}",
                    tool.id, tool.name, tool.current_place.name
                ));
            }

            ToolAction::Status { id, status, date } => {
                let tool = ToolLogic::set_status(
                    &mut session,
                    id,
                    parse_status(status)?,
                    date_or_today(date.as_deref())?,
                )?;
                success(format!("Tool {} is now {}", tool.id, tool.status.code()));
            }

            ToolAction::Move {
                id,
                to,
                date,
                moved_by,
                notes,
            } => {
                let plan = ToolLogic::move_tool(
                    &mut session,
                    MoveTool {
                        tool_id: id.clone(),
                        to_place_id: to.clone(),
                        date: date_or_today(date.as_deref())?,
                        moved_by: moved_by.clone(),
                        notes: notes.clone(),
                    },
                )?;
                success(format!(
                    "Tool {} moved: {} → {} ({})",
                    plan.tool.id,
                    plan.movement.from_place.name,
                    plan.movement.to_place.name,
                    plan.movement.id
                ));
            }

            ToolAction::List {
                tool_type,
                status,
                place,
            } => {
                let filter = ToolFilter {
                    tool_type: tool_type.clone(),
                    status: status.as_deref().map(parse_status).transpose()?,
                    place_id: place.clone(),
                };

                let tools = ToolLogic::list(&mut session, &filter)?;
                if tools.is_empty() {
                    info("No tools found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Name"),
                    Column::left("Type"),
                    Column::right("Qty"),
                    Column::left("Status"),
                    Column::left("Place"),
                    Column::left("Updated"),
                ]);
                for t in &tools {
                    table.add_row(vec![
                        t.id.clone(),
                        t.name.clone(),
                        or_dash(&t.tool_type).to_string(),
                        t.quantity.to_string(),
                        paint(t.status.label(), color_for_tool_status(t.status)),
                        or_dash(&t.current_place.name).to_string(),
                        t.last_updated
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".into()),
                    ]);
                }
                table.print();
            }

            ToolAction::History { id } => {
                let moves = ToolLogic::history(&mut session, id.as_deref())?;
                if moves.is_empty() {
                    info("No tool movements found.");
                    return Ok(());
                }

                let mut table = TextTable::new(vec![
                    Column::left("ID"),
                    Column::left("Date"),
                    Column::left("Tool"),
                    Column::left("From"),
                    Column::left("To"),
                    Column::left("By"),
                    Column::left("Notes"),
                ]);
                for m in &moves {
                    table.add_row(vec![
                        m.id.clone(),
                        m.date.to_string(),
                        m.tool.name.clone(),
                        or_dash(&m.from_place.name).to_string(),
                        m.to_place.name.clone(),
                        or_dash(&m.moved_by).to_string(),
                        or_dash(&m.notes).to_string(),
                    ]);
                }
                table.print();
            }
        }
    }

    Ok(())
}
