use serde::{Deserialize, Serialize};

use crate::errors::{CalculatorError, Result};
use crate::input::{DateFormat, RawInputs};
use crate::types::InterestMode;

/// calculator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    #[serde(default)]
    pub mode: InterestMode,
    #[serde(default = "default_date_formats")]
    pub date_formats: Vec<DateFormat>,
    #[serde(default)]
    pub form_defaults: FormDefaults,
}

/// values a form shows before the user edits anything
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefaults {
    pub start_date: String,
    pub end_date: String,
    pub principal: String,
    pub monthly_rate_percent: String,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            start_date: "01/01/2024".to_string(),
            end_date: "31/12/2024".to_string(),
            principal: "20000".to_string(),
            monthly_rate_percent: "1.75".to_string(),
        }
    }
}

impl FormDefaults {
    pub fn raw_inputs(&self) -> RawInputs {
        RawInputs::new(
            self.start_date.clone(),
            self.end_date.clone(),
            self.principal.clone(),
            self.monthly_rate_percent.clone(),
        )
    }
}

fn default_date_formats() -> Vec<DateFormat> {
    vec![DateFormat::DayMonthYear]
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self::simple()
    }
}

impl CalculatorConfig {
    /// simple interest, dd/mm/YYYY dates
    pub fn simple() -> Self {
        Self {
            mode: InterestMode::Simple,
            date_formats: default_date_formats(),
            form_defaults: FormDefaults::default(),
        }
    }

    /// yearly compounding, dd/mm/YYYY dates
    pub fn compounding_by_year() -> Self {
        Self {
            mode: InterestMode::CompoundingByYear,
            ..Self::simple()
        }
    }

    /// accept ISO dates as well as dd/mm/YYYY
    pub fn with_iso_dates(mut self) -> Self {
        if !self.date_formats.contains(&DateFormat::Iso) {
            self.date_formats.push(DateFormat::Iso);
        }
        self
    }

    pub fn with_mode(mut self, mode: InterestMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.date_formats.is_empty() {
            return Err(CalculatorError::InvalidConfiguration {
                message: "at least one date format is required".to_string(),
            });
        }
        Ok(())
    }

    /// load from json, missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CalculatorConfig =
            serde_json::from_str(json).map_err(|e| CalculatorError::InvalidConfiguration {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalculatorError::InvalidConfiguration {
            message: e.to_string(),
        })
    }
}
