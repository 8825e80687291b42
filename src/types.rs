use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};

/// how whole periods accrue interest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum InterestMode {
    /// every month charged against the original principal
    #[default]
    Simple,
    /// whole years charged first, each year's interest added to principal
    CompoundingByYear,
}

impl fmt::Display for InterestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterestMode::Simple => write!(f, "simple"),
            InterestMode::CompoundingByYear => write!(f, "compounding-by-year"),
        }
    }
}

/// validated calculation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationInput {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub principal: Money,
    pub monthly_rate: Rate,
    #[serde(default)]
    pub mode: InterestMode,
}

impl CalculationInput {
    pub fn new(
        start_date: NaiveDate,
        end_date: NaiveDate,
        principal: Money,
        monthly_rate: Rate,
        mode: InterestMode,
    ) -> Self {
        Self {
            start_date,
            end_date,
            principal,
            monthly_rate,
            mode,
        }
    }

    /// check the range and sign invariants
    pub fn validate(&self) -> Result<()> {
        if self.start_date >= self.end_date {
            return Err(CalculatorError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        if self.principal.is_negative() {
            return Err(CalculatorError::invalid_input(
                "principal",
                format!("{} must not be negative", self.principal),
            ));
        }
        if self.monthly_rate.is_negative() {
            return Err(CalculatorError::invalid_input(
                "monthly rate",
                format!("{} must not be negative", self.monthly_rate),
            ));
        }
        Ok(())
    }

    pub fn monthly_rate_percent(&self) -> rust_decimal::Decimal {
        self.monthly_rate.as_percentage()
    }
}

/// one compounded year
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearlyAccrual {
    /// 0-based year number counted from the start date
    pub year_index: u32,
    pub opening_principal: Money,
    pub interest: Money,
    /// opening principal with this year's interest capitalised
    pub closing_principal: Money,
}

/// breakdown of elapsed time and accrued interest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub mode: InterestMode,
    pub full_years: u32,
    pub full_months: u32,
    pub remaining_days: u32,
    pub interest_full_periods: Money,
    pub interest_remaining_days: Money,
    pub total_interest: Money,
    /// original principal
    pub principal: Money,
    /// principal the remaining months and days were charged against
    pub principal_base: Money,
    /// original principal plus total interest
    pub amount_due: Money,
    pub yearly_accruals: Vec<YearlyAccrual>,
}

impl CalculationResult {
    /// elapsed time under the 30-day month convention, years excluded
    pub fn thirty_day_count(&self) -> u32 {
        self.full_months * 30 + self.remaining_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn input(
        start: NaiveDate,
        end: NaiveDate,
        principal: i64,
        rate: rust_decimal::Decimal,
    ) -> CalculationInput {
        CalculationInput::new(
            start,
            end,
            Money::from_major(principal),
            Rate::from_percent(rate),
            InterestMode::Simple,
        )
    }

    #[test]
    fn test_validate_accepts_forward_range() {
        let i = input(date(2024, 1, 1), date(2024, 1, 2), 100, dec!(1));
        assert!(i.validate().is_ok());
        assert_eq!(i.monthly_rate_percent(), dec!(1));
    }

    #[test]
    fn test_validate_rejects_empty_and_reversed_range() {
        let same = input(date(2024, 1, 1), date(2024, 1, 1), 100, dec!(1));
        assert!(matches!(same.validate(), Err(CalculatorError::InvalidRange { .. })));

        let reversed = input(date(2024, 3, 1), date(2024, 1, 1), 100, dec!(1));
        assert!(matches!(reversed.validate(), Err(CalculatorError::InvalidRange { .. })));
    }

    #[test]
    fn test_validate_rejects_negative_values() {
        let i = input(date(2024, 1, 1), date(2024, 2, 1), -5, dec!(1));
        match i.validate() {
            Err(CalculatorError::InvalidInput { field, .. }) => assert_eq!(field, "principal"),
            other => panic!("unexpected {:?}", other),
        }

        let i = input(date(2024, 1, 1), date(2024, 2, 1), 5, dec!(-1));
        match i.validate() {
            Err(CalculatorError::InvalidInput { field, .. }) => assert_eq!(field, "monthly rate"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_mode_serde_names() {
        let json = serde_json::to_string(&InterestMode::CompoundingByYear).unwrap();
        assert_eq!(json, "\"compounding-by-year\"");
        assert_eq!(InterestMode::Simple.to_string(), "simple");
    }
}
