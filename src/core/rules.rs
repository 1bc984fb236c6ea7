//! Domain rules: pure functions computing new or changed records.
//!
//! Nothing here touches a backend. Every function takes its inputs by
//! reference and returns a new value, so a rejected operation leaves the
//! caller's records exactly as they were.

use crate::errors::{AppError, AppResult};
use crate::models::cold_storage::ColdStorageItem;
use crate::models::day_unit::DayUnit;
use crate::models::pay_method::PayMethod;
use crate::models::pay_status::PayStatus;
use crate::models::snapshot::Snapshot;
use crate::models::tool::Tool;
use crate::models::tool_move::ToolMove;
use crate::models::tool_status::ToolStatus;
use crate::models::work_log::WorkLog;
use crate::store::cell::format_date;
use chrono::NaiveDate;

// ------------------------------------------------
// Work logs
// ------------------------------------------------

/// UNPAID when nothing is paid, PAID once `amount_paid` reaches `amount_due`,
/// PARTIAL in between.
pub fn derive_pay_status(amount_due: i64, amount_paid: i64) -> PayStatus {
    if amount_paid <= 0 {
        PayStatus::Unpaid
    } else if amount_paid >= amount_due {
        PayStatus::Paid
    } else {
        PayStatus::Partial
    }
}

/// Full day pays the daily rate, half day pays half of it rounded down.
pub fn compute_amount_due(daily_rate: i64, day_unit: DayUnit) -> i64 {
    match day_unit {
        DayUnit::Full => daily_rate,
        DayUnit::Half => daily_rate.div_euclid(2),
    }
}

/// User-entered values for a new work log.
#[derive(Debug, Clone)]
pub struct WorkLogDraft {
    pub date: NaiveDate,
    pub worker: Snapshot,
    pub work_type: Snapshot,
    pub day_unit: DayUnit,
    pub daily_rate: i64,
    pub amount_paid: i64,
    pub pay_method: PayMethod,
    pub notes: String,
}

pub fn build_work_log(id: String, draft: WorkLogDraft) -> AppResult<WorkLog> {
    if draft.daily_rate < 0 {
        return Err(AppError::InvalidAmount(draft.daily_rate));
    }
    if draft.amount_paid < 0 {
        return Err(AppError::InvalidAmount(draft.amount_paid));
    }

    let amount_due = compute_amount_due(draft.daily_rate, draft.day_unit);
    if draft.amount_paid > amount_due {
        return Err(AppError::OverpaymentRejected {
            work_log_id: id,
            amount: draft.amount_paid,
            remaining: amount_due,
        });
    }

    let pay_method = if draft.amount_paid == 0 {
        PayMethod::None
    } else {
        draft.pay_method
    };

    Ok(WorkLog {
        id,
        date: draft.date,
        worker: draft.worker,
        work_type: draft.work_type,
        day_unit: draft.day_unit,
        daily_rate: draft.daily_rate,
        amount_due,
        pay_status: derive_pay_status(amount_due, draft.amount_paid),
        amount_paid: draft.amount_paid,
        pay_method,
        notes: draft.notes,
    })
}

/// Record a payment against a work log.
///
/// The amount must be positive and no larger than what is still owed; a PAID
/// log therefore rejects every further payment.
pub fn apply_payment(log: &WorkLog, amount: i64, method: PayMethod) -> AppResult<WorkLog> {
    if amount <= 0 {
        return Err(AppError::InvalidAmount(amount));
    }

    let remaining = log.amount_due - log.amount_paid;
    if amount > remaining {
        return Err(AppError::OverpaymentRejected {
            work_log_id: log.id.clone(),
            amount,
            remaining: remaining.max(0),
        });
    }

    let mut updated = log.clone();
    updated.amount_paid += amount;
    updated.pay_status = derive_pay_status(updated.amount_due, updated.amount_paid);
    updated.pay_method = method;
    Ok(updated)
}

// ------------------------------------------------
// Tools
// ------------------------------------------------

#[derive(Debug, Clone)]
pub struct MoveRequest {
    pub id: String,
    pub date: NaiveDate,
    pub to_place: Snapshot,
    pub moved_by: String,
    pub notes: String,
}

/// Both halves of an accepted move. They must be persisted together.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePlan {
    pub movement: ToolMove,
    pub tool: Tool,
}

pub fn validate_move(tool: &Tool, request: MoveRequest) -> AppResult<MovePlan> {
    if request.to_place.id == tool.current_place.id {
        return Err(AppError::NoOpMove {
            tool_id: tool.id.clone(),
            place: tool.current_place.name.clone(),
        });
    }

    let movement = ToolMove {
        id: request.id,
        date: request.date,
        tool: tool.snapshot(),
        from_place: tool.current_place.clone(),
        to_place: request.to_place.clone(),
        moved_by: request.moved_by,
        notes: request.notes,
    };

    let mut updated = tool.clone();
    updated.current_place = request.to_place;
    updated.last_updated = Some(request.date);

    Ok(MovePlan {
        movement,
        tool: updated,
    })
}

pub fn change_tool_status(tool: &Tool, status: ToolStatus, date: NaiveDate) -> Tool {
    let mut updated = tool.clone();
    updated.status = status;
    updated.last_updated = Some(date);
    updated
}

// ------------------------------------------------
// Cold storage
// ------------------------------------------------

pub fn mark_cold_storage_removed(
    item: &ColdStorageItem,
    removal_date: NaiveDate,
) -> AppResult<ColdStorageItem> {
    if let Some(removed) = item.date_removed {
        return Err(AppError::AlreadyRemoved {
            id: item.id.clone(),
            date_removed: format_date(&removed),
        });
    }

    let mut updated = item.clone();
    updated.date_removed = Some(removal_date);
    Ok(updated)
}
