//! serializable summary of a calculation for a presentation layer
use serde::{Deserialize, Serialize};

use crate::types::{CalculationResult, InterestMode};

/// result view with amounts rendered to two decimals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationView {
    pub mode: InterestMode,
    pub period: PeriodView,
    pub interest: InterestView,
    pub yearly: Vec<YearView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodView {
    pub full_years: u32,
    pub full_months: u32,
    pub remaining_days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestView {
    pub principal: String,
    pub full_periods: String,
    pub remaining_days: String,
    pub total: String,
    pub amount_due: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearView {
    pub year: u32,
    pub opening_principal: String,
    pub interest: String,
}

impl CalculationView {
    pub fn from_result(result: &CalculationResult) -> Self {
        CalculationView {
            mode: result.mode,
            period: PeriodView {
                full_years: result.full_years,
                full_months: result.full_months,
                remaining_days: result.remaining_days,
            },
            interest: InterestView {
                principal: result.principal.to_cents_string(),
                full_periods: result.interest_full_periods.to_cents_string(),
                remaining_days: result.interest_remaining_days.to_cents_string(),
                total: result.total_interest.to_cents_string(),
                amount_due: result.amount_due.to_cents_string(),
            },
            yearly: result
                .yearly_accruals
                .iter()
                .map(|y| YearView {
                    year: y.year_index + 1,
                    opening_principal: y.opening_principal.to_cents_string(),
                    interest: y.interest.to_cents_string(),
                })
                .collect(),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&CalculationResult> for CalculationView {
    fn from(result: &CalculationResult) -> Self {
        CalculationView::from_result(result)
    }
}
