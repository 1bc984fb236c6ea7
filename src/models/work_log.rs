use super::day_unit::DayUnit;
use super::pay_method::PayMethod;
use super::pay_status::PayStatus;
use super::snapshot::Snapshot;
use crate::errors::AppResult;
use crate::store::cell::format_date;
use crate::store::{FromRecord, Record, ToRecord};
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkLog {
    pub id: String,
    pub date: NaiveDate,        // ⇔ work_logs.date
    pub worker: Snapshot,       // ⇔ worker_id + worker_name_te
    pub work_type: Snapshot,    // ⇔ work_type_id + work_type_te
    pub day_unit: DayUnit,      // ⇔ day_unit ('FULL' | 'HALF')
    pub daily_rate: i64,        // ⇔ rate_daily
    pub amount_due: i64,        // ⇔ amount_due
    pub pay_status: PayStatus,  // ⇔ pay_status
    pub amount_paid: i64,       // ⇔ amount_paid
    pub pay_method: PayMethod,  // ⇔ pay_method ('' | 'cash' | 'UPI')
    pub notes: String,
}

impl WorkLog {
    pub fn remaining(&self) -> i64 {
        (self.amount_due - self.amount_paid).max(0)
    }

    pub fn is_outstanding(&self) -> bool {
        self.pay_status.is_outstanding()
    }
}

impl FromRecord for WorkLog {
    fn from_record(rec: &Record<'_>) -> AppResult<Self> {
        Ok(Self {
            id: rec.text("work_log_id")?,
            date: rec.date("date")?,
            worker: Snapshot::new(rec.text("worker_id")?, rec.text("worker_name_te")?),
            work_type: Snapshot::new(rec.text("work_type_id")?, rec.text("work_type_te")?),
            day_unit: rec.parse("day_unit")?,
            daily_rate: rec.int("rate_daily")?,
            amount_due: rec.int("amount_due")?,
            pay_status: rec.parse("pay_status")?,
            amount_paid: rec.int("amount_paid")?,
            pay_method: rec.parse("pay_method")?,
            notes: rec.text("notes")?,
        })
    }
}

impl ToRecord for WorkLog {
    fn id(&self) -> &str {
        &self.id
    }

    fn to_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("work_log_id", self.id.clone()),
            ("date", format_date(&self.date)),
            ("worker_id", self.worker.id.clone()),
            ("worker_name_te", self.worker.name.clone()),
            ("work_type_id", self.work_type.id.clone()),
            ("work_type_te", self.work_type.name.clone()),
            ("day_unit", self.day_unit.code().to_string()),
            ("rate_daily", self.daily_rate.to_string()),
            ("amount_due", self.amount_due.to_string()),
            ("pay_status", self.pay_status.code().to_string()),
            ("amount_paid", self.amount_paid.to_string()),
            ("pay_method", self.pay_method.code().to_string()),
            ("notes", self.notes.clone()),
        ]
    }
}
