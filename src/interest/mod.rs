pub mod compound;
pub mod period;
pub mod simple;

use chrono::NaiveDate;
use log::{debug, warn};

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::types::{CalculationInput, CalculationResult, InterestMode};

pub use compound::YearlyCompoundingEngine;
pub use period::{ElapsedPeriod, DAYS_PER_MONTH};
pub use simple::{PeriodAccrual, SimpleInterestEngine};

/// trait for interest calculations over a validated date range
pub trait InterestEngine {
    fn mode(&self) -> InterestMode;

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult>;
}

/// engine implementing `mode`
pub fn engine_for(mode: InterestMode) -> Box<dyn InterestEngine> {
    match mode {
        InterestMode::Simple => Box::new(SimpleInterestEngine::new()),
        InterestMode::CompoundingByYear => Box::new(YearlyCompoundingEngine::new()),
    }
}

/// total interest from the two rounded components, and the amount due
pub(crate) fn settle(
    interest_full_periods: Money,
    interest_remaining_days: Money,
    principal: Money,
) -> Result<(Money, Money)> {
    let total_interest = interest_full_periods
        .checked_add(interest_remaining_days)
        .ok_or_else(|| CalculatorError::overflow("total interest"))?
        .to_cents();
    let amount_due = principal
        .checked_add(total_interest)
        .ok_or_else(|| CalculatorError::overflow("amount due"))?;
    Ok((total_interest, amount_due))
}

/// run the calculation described by `input`
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult> {
    let result = engine_for(input.mode).calculate(input);
    match &result {
        Ok(r) => debug!(
            "{} interest {} -> {} on {} at {}: {}y {}m {}d, total {}",
            input.mode,
            input.start_date,
            input.end_date,
            input.principal,
            input.monthly_rate,
            r.full_years,
            r.full_months,
            r.remaining_days,
            r.total_interest
        ),
        Err(e) => warn!("rejected calculation: {}", e),
    }
    result
}

/// compute interest between two dates at a monthly rate
pub fn compute(
    start_date: NaiveDate,
    end_date: NaiveDate,
    principal: Money,
    monthly_rate: Rate,
    mode: InterestMode,
) -> Result<CalculationResult> {
    calculate(&CalculationInput::new(
        start_date,
        end_date,
        principal,
        monthly_rate,
        mode,
    ))
}
