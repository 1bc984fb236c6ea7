use crate::core::ids::next_id_for;
use crate::core::rules::{WorkLogDraft, apply_payment, build_work_log};
use crate::errors::{AppError, AppResult};
use crate::models::day_unit::DayUnit;
use crate::models::pay_method::PayMethod;
use crate::models::pay_status::PayStatus;
use crate::models::snapshot::Snapshot;
use crate::models::work_log::WorkLog;
use crate::models::work_type::WorkType;
use crate::models::worker::Worker;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};
use crate::utils::date::DateRange;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct NewWorkLog {
    pub date: NaiveDate,
    pub worker_id: String,
    pub work_type_id: String,
    pub day_unit: DayUnit,
    /// Daily rate; the worker's default wage when absent.
    pub daily_rate: Option<i64>,
    pub amount_paid: i64,
    pub pay_method: PayMethod,
    pub notes: String,
}

/// List filters. Every set field must match.
#[derive(Debug, Clone, Default)]
pub struct WorkLogFilter {
    pub period: Option<DateRange>,
    /// Worker id, or part of the worker name (case insensitive).
    pub worker: Option<String>,
    pub status: Option<PayStatus>,
}

impl WorkLogFilter {
    pub fn matches(&self, log: &WorkLog) -> bool {
        if let Some(range) = &self.period
            && !range.contains(log.date)
        {
            return false;
        }

        if let Some(w) = &self.worker {
            let needle = w.trim().to_lowercase();
            let by_id = log.worker.id.eq_ignore_ascii_case(w.trim());
            let by_name = log.worker.name.to_lowercase().contains(&needle);
            if !by_id && !by_name {
                return false;
            }
        }

        if let Some(status) = self.status
            && log.pay_status != status
        {
            return false;
        }

        true
    }
}

pub struct WorkLogLogic;

impl WorkLogLogic {
    pub fn add<B: SheetBackend>(session: &mut Session<B>, new: NewWorkLog) -> AppResult<WorkLog> {
        // ------------------------------------------------
        // 1️⃣ Resolve references (snapshots taken now)
        // ------------------------------------------------
        let worker: Worker = session.load(TableKind::Workers)?.get(&new.worker_id)?;
        if !worker.active {
            return Err(AppError::InactiveWorker(worker.id));
        }

        let work_type: WorkType = session.load(TableKind::WorkTypes)?.get(&new.work_type_id)?;

        // ------------------------------------------------
        // 2️⃣ Build the record
        // ------------------------------------------------
        let mut logs = session.load_owned(TableKind::WorkLogs)?;
        let id = next_id_for(&logs)?;

        let log = build_work_log(
            id,
            WorkLogDraft {
                date: new.date,
                worker: Snapshot::new(&worker.id, &worker.name),
                work_type: Snapshot::new(&work_type.id, &work_type.name),
                day_unit: new.day_unit,
                daily_rate: new.daily_rate.unwrap_or(worker.default_daily_wage),
                amount_paid: new.amount_paid,
                pay_method: new.pay_method,
                notes: new.notes.trim().to_string(),
            },
        )?;

        // ------------------------------------------------
        // 3️⃣ Persist
        // ------------------------------------------------
        logs.append(&log);
        session.save(logs)?;
        Ok(log)
    }

    pub fn pay<B: SheetBackend>(
        session: &mut Session<B>,
        work_log_id: &str,
        amount: i64,
        method: PayMethod,
    ) -> AppResult<WorkLog> {
        let mut logs = session.load_owned(TableKind::WorkLogs)?;
        let log: WorkLog = logs.get(work_log_id)?;

        let updated = apply_payment(&log, amount, method)?;

        logs.replace(&updated)?;
        session.save(logs)?;
        Ok(updated)
    }

    /// Matching logs, oldest first.
    pub fn list<B: SheetBackend>(
        session: &mut Session<B>,
        filter: &WorkLogFilter,
    ) -> AppResult<Vec<WorkLog>> {
        let logs: Vec<WorkLog> = session.load(TableKind::WorkLogs)?.decode_all()?;
        let mut out: Vec<WorkLog> = logs.into_iter().filter(|l| filter.matches(l)).collect();
        out.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
        Ok(out)
    }
}
