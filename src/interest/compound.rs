use log::trace;
use rust_decimal_macros::dec;

use crate::decimal::Money;
use crate::errors::{CalculatorError, Result};
use crate::interest::period::full_years_between;
use crate::interest::simple::SimpleInterestEngine;
use crate::interest::{settle, InterestEngine};
use crate::types::{CalculationInput, CalculationResult, InterestMode, YearlyAccrual};

/// engine compounding once per whole year, then accruing the remainder
/// simply against the compounded principal
#[derive(Debug, Clone, Copy, Default)]
pub struct YearlyCompoundingEngine {
    remainder: SimpleInterestEngine,
}

impl YearlyCompoundingEngine {
    pub fn new() -> Self {
        Self {
            remainder: SimpleInterestEngine::new(),
        }
    }
}

impl InterestEngine for YearlyCompoundingEngine {
    fn mode(&self) -> InterestMode {
        InterestMode::CompoundingByYear
    }

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult> {
        input.validate()?;

        let (full_years, anchor) = full_years_between(input.start_date, input.end_date)?;

        let mut principal = input.principal;
        let mut yearly_total = Money::ZERO;
        let mut yearly_accruals = Vec::new();
        for year_index in 0..full_years {
            let interest = principal
                .checked_simple_interest(input.monthly_rate, dec!(12))
                .ok_or_else(|| CalculatorError::overflow("yearly interest"))?;
            let closing_principal = principal
                .checked_add(interest)
                .ok_or_else(|| CalculatorError::overflow("compounded principal"))?;
            yearly_total = yearly_total
                .checked_add(interest)
                .ok_or_else(|| CalculatorError::overflow("yearly interest"))?;
            trace!("year {}: {} on {}", year_index, interest, principal);

            yearly_accruals.push(YearlyAccrual {
                year_index,
                opening_principal: principal,
                interest,
                closing_principal,
            });
            principal = closing_principal;
        }

        let rest = self
            .remainder
            .accrue(principal, input.monthly_rate, anchor, input.end_date)?;

        let interest_full_periods = yearly_total
            .checked_add(rest.months_interest)
            .ok_or_else(|| CalculatorError::overflow("full period interest"))?
            .to_cents();
        let interest_remaining_days = rest.days_interest;
        let (total_interest, amount_due) =
            settle(interest_full_periods, interest_remaining_days, input.principal)?;

        Ok(CalculationResult {
            mode: self.mode(),
            full_years,
            full_months: rest.period.full_months,
            remaining_days: rest.period.remaining_days,
            interest_full_periods,
            interest_remaining_days,
            total_interest,
            principal: input.principal,
            principal_base: rest.principal_base,
            amount_due,
            yearly_accruals,
        })
    }
}
