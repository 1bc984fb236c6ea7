use crate::core::ids::next_id_for;
use crate::core::rules::{MovePlan, MoveRequest, change_tool_status, validate_move};
use crate::errors::{AppError, AppResult};
use crate::models::storage_place::StoragePlace;
use crate::models::tool::Tool;
use crate::models::tool_move::ToolMove;
use crate::models::tool_status::ToolStatus;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NewTool {
    pub name: String,
    pub tool_type: String,
    pub quantity: i64,
    pub status: ToolStatus,
    pub place_id: String,
    pub date: NaiveDate,
    pub notes: String,
}

#[derive(Debug, Clone)]
pub struct MoveTool {
    pub tool_id: String,
    pub to_place_id: String,
    pub date: NaiveDate,
    pub moved_by: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default)]
pub struct ToolFilter {
    pub tool_type: Option<String>,
    pub status: Option<ToolStatus>,
    pub place_id: Option<String>,
}

impl ToolFilter {
    pub fn matches(&self, tool: &Tool) -> bool {
        self.tool_type
            .as_ref()
            .is_none_or(|t| tool.tool_type.eq_ignore_ascii_case(t.trim()))
            && self.status.is_none_or(|s| tool.status == s)
            && self
                .place_id
                .as_ref()
                .is_none_or(|p| tool.current_place.id == p.trim())
    }
}

pub struct ToolLogic;

impl ToolLogic {
    pub fn add<B: SheetBackend>(session: &mut Session<B>, new: NewTool) -> AppResult<Tool> {
        let name = new.name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidValue("name must not be empty".into()));
        }
        if new.quantity < 0 {
            return Err(AppError::InvalidValue(format!(
                "quantity must not be negative (got {})",
                new.quantity
            )));
        }

        let place: StoragePlace = session.load(TableKind::StoragePlaces)?.get(&new.place_id)?;

        let mut tools = session.load_owned(TableKind::Tools)?;
        let tool = Tool {
            id: next_id_for(&tools)?,
            name: name.to_string(),
            tool_type: new.tool_type.trim().to_string(),
            quantity: new.quantity,
            status: new.status,
            current_place: place.snapshot(),
            last_updated: Some(new.date),
            notes: new.notes.trim().to_string(),
        };

        tools.append(&tool);
        session.save(tools)?;
        Ok(tool)
    }

    pub fn set_status<B: SheetBackend>(
        session: &mut Session<B>,
        tool_id: &str,
        status: ToolStatus,
        date: NaiveDate,
    ) -> AppResult<Tool> {
        let mut tools = session.load_owned(TableKind::Tools)?;
        let tool: Tool = tools.get(tool_id)?;

        let updated = change_tool_status(&tool, status, date);
        tools.replace(&updated)?;
        session.save(tools)?;
        Ok(updated)
    }

    /// Move a tool to another place.
    ///
    /// The move record is saved first, then the tool. If the tool save fails
    /// the caller gets `PartialUpdate` and the move record stays written.
    pub fn move_tool<B: SheetBackend>(
        session: &mut Session<B>,
        request: MoveTool,
    ) -> AppResult<MovePlan> {
        let mut tools = session.load_owned(TableKind::Tools)?;
        let tool: Tool = tools.get(&request.tool_id)?;

        let place: StoragePlace = session
            .load(TableKind::StoragePlaces)?
            .get(&request.to_place_id)?;

        let mut moves = session.load_owned(TableKind::ToolMoves)?;

        let plan = validate_move(
            &tool,
            MoveRequest {
                id: next_id_for(&moves)?,
                date: request.date,
                to_place: place.snapshot(),
                moved_by: request.moved_by.trim().to_string(),
                notes: request.notes.trim().to_string(),
            },
        )?;

        moves.append(&plan.movement);
        tools.replace(&plan.tool)?;

        session.save_dependent(moves, tools)?;
        Ok(plan)
    }

    pub fn list<B: SheetBackend>(
        session: &mut Session<B>,
        filter: &ToolFilter,
    ) -> AppResult<Vec<Tool>> {
        let tools: Vec<Tool> = session.load(TableKind::Tools)?.decode_all()?;
        Ok(tools.into_iter().filter(|t| filter.matches(t)).collect())
    }

    /// Moves of one tool (or of every tool), newest first.
    pub fn history<B: SheetBackend>(
        session: &mut Session<B>,
        tool_id: Option<&str>,
    ) -> AppResult<Vec<ToolMove>> {
        let moves: Vec<ToolMove> = session.load(TableKind::ToolMoves)?.decode_all()?;

        let mut out: Vec<ToolMove> = moves
            .into_iter()
            .filter(|m| tool_id.is_none_or(|id| m.tool.id == id.trim()))
            .collect();
        out.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| b.id.cmp(&a.id)));
        Ok(out)
    }
}
