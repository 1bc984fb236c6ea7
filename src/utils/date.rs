use crate::errors::{AppError, AppResult};
use crate::store::cell::{DATE_FORMAT, parse_date};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// `--date` argument: explicit `YYYY-MM-DD`, or today when absent.
pub fn date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(v) => parse_date(v).ok_or_else(|| AppError::InvalidDate(v.to_string())),
        None => Ok(today()),
    }
}

/// Inclusive date interval used by list filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, d: NaiveDate) -> bool {
        self.start <= d && d <= self.end
    }

    /// Parse a period: `YYYY`, `YYYY-MM`, `YYYY-MM-DD`, or `A:B` where both
    /// sides are periods (the range spans from the start of A to the end of B).
    pub fn parse(p: &str) -> AppResult<Self> {
        let p = p.trim();

        if let Some((a, b)) = p.split_once(':') {
            let start = period_bounds(a)?.0;
            let end = period_bounds(b)?.1;
            if start > end {
                return Err(AppError::InvalidDate(format!(
                    "{}: start is after end",
                    p
                )));
            }
            return Ok(Self { start, end });
        }

        let (start, end) = period_bounds(p)?;
        Ok(Self { start, end })
    }
}

fn period_bounds(p: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let p = p.trim();
    let invalid = || AppError::InvalidDate(format!("Invalid period: {}", p));

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), DATE_FORMAT) {
        let last = last_day_of_month(first.year(), first.month()).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1).ok_or_else(invalid)?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31).ok_or_else(invalid)?;
        return Ok((first, last));
    }

    Err(invalid())
}

fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (y, m) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}
