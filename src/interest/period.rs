use chrono::{Datelike, Months, NaiveDate};
use log::debug;

use crate::errors::{CalculatorError, Result};

/// days in every month for day-fraction proration
pub const DAYS_PER_MONTH: u32 = 30;

/// whole months plus leftover days between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedPeriod {
    pub full_months: u32,
    pub remaining_days: u32,
}

impl ElapsedPeriod {
    /// split `start..end` into calendar months and 30-day-month leftover days.
    ///
    /// The anchor is `start` moved forward by whole months, keeping its
    /// day-of-month (clamped to the end of shorter months). A leftover of 30
    /// days or more counts as one more month. `start == end` yields zero.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(CalculatorError::InvalidRange { start, end });
        }

        let mut months = month_difference(start, end);
        let mut anchor = add_months(start, months)?;
        if anchor > end {
            months -= 1;
            anchor = add_months(start, months)?;
        }

        let mut days = (end - anchor).num_days() as u32;
        if days >= DAYS_PER_MONTH {
            months += 1;
            days -= DAYS_PER_MONTH;
        }

        let period = ElapsedPeriod {
            full_months: months,
            remaining_days: days,
        };
        debug!(
            "elapsed {} -> {}: {} months, {} days",
            start, end, period.full_months, period.remaining_days
        );
        Ok(period)
    }
}

/// whole years between dates, and the date reached after them
pub fn full_years_between(start: NaiveDate, end: NaiveDate) -> Result<(u32, NaiveDate)> {
    if end < start {
        return Err(CalculatorError::InvalidRange { start, end });
    }

    let mut years = (end.year() - start.year()) as u32;
    let mut anchor = add_years(start, years)?;
    if anchor > end {
        years -= 1;
        anchor = add_years(start, years)?;
    }
    Ok((years, anchor))
}

/// calendar month difference ignoring day-of-month
fn month_difference(start: NaiveDate, end: NaiveDate) -> u32 {
    let months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    months.max(0) as u32
}

/// advance by whole months, clamping the day to the target month's length
pub fn add_months(date: NaiveDate, months: u32) -> Result<NaiveDate> {
    date.checked_add_months(Months::new(months))
        .ok_or_else(|| CalculatorError::CalculationError {
            message: format!("{} plus {} months is out of range", date, months),
        })
}

/// advance by whole years (29 feb lands on 28 feb in common years)
pub fn add_years(date: NaiveDate, years: u32) -> Result<NaiveDate> {
    let months = years.checked_mul(12).ok_or_else(|| CalculatorError::CalculationError {
        message: format!("{} years is out of range", years),
    })?;
    add_months(date, months)
}
