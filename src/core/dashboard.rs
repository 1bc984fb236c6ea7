use crate::errors::AppResult;
use crate::models::tool::Tool;
use crate::models::work_log::WorkLog;
use crate::models::worker::Worker;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};
use serde::Serialize;

/// Overview of the farm: who works here, what needs fixing, what is owed.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub active_workers: usize,
    pub total_tools: usize,
    pub tools_needing_attention: usize,
    pub outstanding_total: i64,
    pub outstanding_logs: Vec<WorkLog>,
    pub attention_tools: Vec<Tool>,
}

impl Dashboard {
    pub fn compute(workers: &[Worker], tools: &[Tool], logs: &[WorkLog]) -> Self {
        let outstanding_logs: Vec<WorkLog> =
            logs.iter().filter(|l| l.is_outstanding()).cloned().collect();

        let attention_tools: Vec<Tool> = tools
            .iter()
            .filter(|t| t.status.needs_attention())
            .cloned()
            .collect();

        Self {
            active_workers: workers.iter().filter(|w| w.active).count(),
            total_tools: tools.len(),
            tools_needing_attention: attention_tools.len(),
            outstanding_total: outstanding_logs.iter().map(|l| l.remaining()).sum(),
            outstanding_logs,
            attention_tools,
        }
    }

    pub fn load<B: SheetBackend>(session: &mut Session<B>) -> AppResult<Self> {
        let workers: Vec<Worker> = session.load(TableKind::Workers)?.decode_all()?;
        let tools: Vec<Tool> = session.load(TableKind::Tools)?.decode_all()?;
        let logs: Vec<WorkLog> = session.load(TableKind::WorkLogs)?.decode_all()?;
        Ok(Self::compute(&workers, &tools, &logs))
    }
}
