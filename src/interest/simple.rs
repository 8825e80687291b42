use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest::period::{ElapsedPeriod, DAYS_PER_MONTH};
use crate::interest::{settle, InterestEngine};
use crate::types::{CalculationInput, CalculationResult, InterestMode};

/// interest accrued over a months-and-days span at one principal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeriodAccrual {
    pub period: ElapsedPeriod,
    pub principal_base: Money,
    /// whole months, unrounded
    pub months_interest: Money,
    /// leftover days on a 30-day month, in cents
    pub days_interest: Money,
}

/// engine charging every month against the original principal
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleInterestEngine;

impl SimpleInterestEngine {
    pub fn new() -> Self {
        Self
    }

    /// accrue interest for `start..end`; an empty span accrues nothing
    pub fn accrue(
        &self,
        principal: Money,
        monthly_rate: Rate,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PeriodAccrual> {
        let period = ElapsedPeriod::between(start, end)?;

        let months_interest = principal
            .checked_simple_interest(monthly_rate, Decimal::from(period.full_months))
            .ok_or_else(|| CalculatorError::overflow("monthly interest"))?;
        let days_interest = principal
            .checked_prorated_interest(monthly_rate, period.remaining_days, DAYS_PER_MONTH)
            .ok_or_else(|| CalculatorError::overflow("remaining days interest"))?;

        Ok(PeriodAccrual {
            period,
            principal_base: principal,
            months_interest,
            days_interest,
        })
    }
}

impl InterestEngine for SimpleInterestEngine {
    fn mode(&self) -> InterestMode {
        InterestMode::Simple
    }

    fn calculate(&self, input: &CalculationInput) -> Result<CalculationResult> {
        input.validate()?;

        let accrual = self.accrue(
            input.principal,
            input.monthly_rate,
            input.start_date,
            input.end_date,
        )?;
        let interest_full_periods = accrual.months_interest.to_cents();
        let interest_remaining_days = accrual.days_interest;
        let (total_interest, amount_due) =
            settle(interest_full_periods, interest_remaining_days, input.principal)?;

        Ok(CalculationResult {
            mode: self.mode(),
            full_years: 0,
            full_months: accrual.period.full_months,
            remaining_days: accrual.period.remaining_days,
            interest_full_periods,
            interest_remaining_days,
            total_interest,
            principal: input.principal,
            principal_base: accrual.principal_base,
            amount_due,
            yearly_accruals: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn simple(
        start: NaiveDate,
        end: NaiveDate,
        principal: i64,
        rate: Decimal,
    ) -> CalculationResult {
        let input = CalculationInput::new(
            start,
            end,
            Money::from_major(principal),
            Rate::from_percent(rate),
            InterestMode::Simple,
        );
        SimpleInterestEngine::new().calculate(&input).unwrap()
    }

    #[test]
    fn test_full_year_rolls_into_twelfth_month() {
        let result = simple(date(2024, 1, 1), date(2024, 12, 31), 20_000, dec!(1.75));

        assert_eq!(result.full_years, 0);
        assert_eq!(result.full_months, 12);
        assert_eq!(result.remaining_days, 0);
        assert_eq!(result.interest_full_periods.to_cents_string(), "4200.00");
        assert_eq!(result.interest_remaining_days, Money::ZERO);
        assert_eq!(result.total_interest.to_cents_string(), "4200.00");
        assert_eq!(result.amount_due.to_cents_string(), "24200.00");
    }

    #[test]
    fn test_partial_month_prorated_on_thirty_days() {
        let result = simple(date(2024, 1, 1), date(2024, 6, 15), 10_000, dec!(2.0));

        assert_eq!(result.full_months, 5);
        assert_eq!(result.remaining_days, 14);
        assert_eq!(result.interest_full_periods.to_cents_string(), "1000.00");
        assert_eq!(result.interest_remaining_days.to_cents_string(), "93.33");
        assert_eq!(result.total_interest.to_cents_string(), "1093.33");
    }

    #[test]
    fn test_single_day() {
        let result = simple(date(2024, 3, 10), date(2024, 3, 11), 30_000, dec!(1));

        assert_eq!(result.full_months, 0);
        assert_eq!(result.remaining_days, 1);
        assert_eq!(result.total_interest.to_cents_string(), "10.00");
    }

    #[test]
    fn test_multi_year_is_not_split_into_years() {
        let result = simple(date(2022, 1, 1), date(2024, 1, 1), 10_000, dec!(1));

        assert_eq!(result.full_years, 0);
        assert_eq!(result.full_months, 24);
        assert_eq!(result.total_interest.to_cents_string(), "2400.00");
        assert!(result.yearly_accruals.is_empty());
        assert_eq!(result.principal_base, result.principal);
    }

    #[test]
    fn test_zero_rate() {
        let result = simple(date(2020, 1, 1), date(2024, 6, 17), 50_000, dec!(0));
        assert!(result.total_interest.is_zero());
    }

    #[test]
    fn test_empty_span_accrues_nothing() {
        let engine = SimpleInterestEngine::new();
        let rate = Rate::from_percent(dec!(5));
        let accrual = engine
            .accrue(Money::from_major(100), rate, date(2024, 1, 1), date(2024, 1, 1))
            .unwrap();
        assert!(accrual.months_interest.is_zero());
        assert!(accrual.days_interest.is_zero());
    }

    #[test]
    fn test_overflowing_principal_is_an_error() {
        let input = CalculationInput::new(
            date(2024, 1, 1),
            date(2024, 3, 1),
            Money::from_decimal(Decimal::MAX),
            Rate::from_percent(dec!(100)),
            InterestMode::Simple,
        );
        let err = SimpleInterestEngine::new().calculate(&input).unwrap_err();
        assert!(matches!(err, CalculatorError::CalculationError { .. }));
    }
}
