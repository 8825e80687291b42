use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("invalid date range: start {start} must be before end {end}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },

    #[error("invalid {field}: {message}")]
    InvalidInput {
        field: String,
        message: String,
    },

    #[error("cannot parse date {input:?}, expected {expected}")]
    DateParse {
        input: String,
        expected: String,
    },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration {
        message: String,
    },

    #[error("calculation error: {message}")]
    CalculationError {
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        CalculatorError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// amount left the representable decimal range
    pub(crate) fn overflow(what: &str) -> Self {
        CalculatorError::CalculationError {
            message: format!("{} overflowed", what),
        }
    }

    /// true for failures caused by unreadable text rather than bad values
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CalculatorError::DateParse { .. })
    }

    /// message suitable for showing next to an input form
    pub fn user_message(&self) -> String {
        match self {
            CalculatorError::InvalidRange { .. } => {
                "Start Date must be before End Date.".to_string()
            }
            CalculatorError::DateParse { expected, .. } => {
                format!("Please enter dates in the correct format: {}.", expected)
            }
            CalculatorError::InvalidInput { field, message } => {
                format!("Please check the {}: {}.", field, message)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalculatorError>;
