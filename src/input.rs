use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::config::CalculatorConfig;
use crate::decimal::{Money, Rate};
use crate::errors::{CalculatorError, Result};
use crate::interest;
use crate::types::{CalculationInput, CalculationResult};

/// textual date layouts accepted from a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateFormat {
    /// 31/12/2024
    DayMonthYear,
    /// 2024-12-31
    Iso,
}

impl DateFormat {
    /// chrono format string
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "%d/%m/%Y",
            DateFormat::Iso => "%Y-%m-%d",
        }
    }

    /// layout as shown to users
    pub fn label(&self) -> &'static str {
        match self {
            DateFormat::DayMonthYear => "dd/mm/YYYY",
            DateFormat::Iso => "YYYY-mm-dd",
        }
    }
}

/// parse `text` with the first format that accepts it
pub fn parse_date(text: &str, formats: &[DateFormat]) -> Result<NaiveDate> {
    let trimmed = text.trim();
    formats
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(trimmed, f.pattern()).ok())
        .ok_or_else(|| CalculatorError::DateParse {
            input: text.to_string(),
            expected: formats
                .iter()
                .map(DateFormat::label)
                .collect::<Vec<_>>()
                .join(" or "),
        })
}

/// the four raw values a form collects
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub start_date: String,
    pub end_date: String,
    pub principal: String,
    pub monthly_rate_percent: String,
}

impl RawInputs {
    pub fn new(
        start_date: impl Into<String>,
        end_date: impl Into<String>,
        principal: impl Into<String>,
        monthly_rate_percent: impl Into<String>,
    ) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            principal: principal.into(),
            monthly_rate_percent: monthly_rate_percent.into(),
        }
    }

    /// parse into a calculation input using the configured formats and mode
    pub fn parse(&self, config: &CalculatorConfig) -> Result<CalculationInput> {
        config.validate()?;

        let start_date = parse_date(&self.start_date, &config.date_formats)?;
        let end_date = parse_date(&self.end_date, &config.date_formats)?;
        let principal = Money::from_str_exact(&self.principal).map_err(|e| {
            CalculatorError::invalid_input(
                "principal",
                format!("{:?} is not a number ({})", self.principal, e),
            )
        })?;
        let monthly_rate = Rate::from_percent_str(&self.monthly_rate_percent).map_err(|e| {
            CalculatorError::invalid_input(
                "monthly rate",
                format!("{:?} is not a number ({})", self.monthly_rate_percent, e),
            )
        })?;

        Ok(CalculationInput::new(
            start_date,
            end_date,
            principal,
            monthly_rate,
            config.mode,
        ))
    }
}

/// parse raw form values and run the calculation
pub fn calculate_raw(raw: &RawInputs, config: &CalculatorConfig) -> Result<CalculationResult> {
    let input = raw.parse(config).map_err(|e| {
        warn!("unreadable input: {}", e);
        e
    })?;
    interest::calculate(&input)
}
