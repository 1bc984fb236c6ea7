use crate::core::ids::next_id_for;
use crate::errors::{AppError, AppResult};
use crate::models::worker::Worker;
use crate::sheet::SheetBackend;
use crate::store::{Session, TableKind};

/// Values for a new worker. A missing wage falls back to the configured
/// default daily wage.
#[derive(Debug, Clone, Default)]
pub struct NewWorker {
    pub name: String,
    pub phone: String,
    pub default_daily_wage: Option<i64>,
    pub notes: String,
}

/// Fields to change on an existing worker; `None` keeps the current value.
#[derive(Debug, Clone, Default)]
pub struct WorkerEdit {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub default_daily_wage: Option<i64>,
    pub active: Option<bool>,
    pub notes: Option<String>,
}

impl WorkerEdit {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.default_daily_wage.is_none()
            && self.active.is_none()
            && self.notes.is_none()
    }
}

fn required_name(name: &str) -> AppResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::InvalidValue("name must not be empty".into()));
    }
    Ok(name.to_string())
}

fn checked_wage(wage: i64) -> AppResult<i64> {
    if wage < 0 {
        return Err(AppError::InvalidAmount(wage));
    }
    Ok(wage)
}

pub struct WorkerLogic;

impl WorkerLogic {
    pub fn add<B: SheetBackend>(
        session: &mut Session<B>,
        new: NewWorker,
        fallback_wage: i64,
    ) -> AppResult<Worker> {
        let name = required_name(&new.name)?;
        let wage = checked_wage(new.default_daily_wage.unwrap_or(fallback_wage))?;

        let mut table = session.load_owned(TableKind::Workers)?;
        let worker = Worker {
            id: next_id_for(&table)?,
            name,
            phone: new.phone.trim().to_string(),
            default_daily_wage: wage,
            active: true,
            notes: new.notes.trim().to_string(),
        };

        table.append(&worker);
        session.save(table)?;
        Ok(worker)
    }

    pub fn edit<B: SheetBackend>(
        session: &mut Session<B>,
        id: &str,
        edit: WorkerEdit,
    ) -> AppResult<Worker> {
        if edit.is_empty() {
            return Err(AppError::InvalidValue("nothing to change".into()));
        }

        let mut table = session.load_owned(TableKind::Workers)?;
        let mut worker: Worker = table.get(id)?;

        if let Some(name) = &edit.name {
            worker.name = required_name(name)?;
        }
        if let Some(phone) = edit.phone {
            worker.phone = phone.trim().to_string();
        }
        if let Some(wage) = edit.default_daily_wage {
            worker.default_daily_wage = checked_wage(wage)?;
        }
        if let Some(active) = edit.active {
            worker.active = active;
        }
        if let Some(notes) = edit.notes {
            worker.notes = notes.trim().to_string();
        }

        table.replace(&worker)?;
        session.save(table)?;
        Ok(worker)
    }

    pub fn list<B: SheetBackend>(
        session: &mut Session<B>,
        include_inactive: bool,
    ) -> AppResult<Vec<Worker>> {
        let workers: Vec<Worker> = session.load(TableKind::Workers)?.decode_all()?;
        Ok(workers
            .into_iter()
            .filter(|w| include_inactive || w.active)
            .collect())
    }
}
