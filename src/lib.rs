pub mod config;
pub mod decimal;
pub mod errors;
pub mod input;
pub mod interest;
pub mod types;
pub mod view;

// re-export key types
pub use config::{CalculatorConfig, FormDefaults};
pub use decimal::{Money, Rate};
pub use errors::{CalculatorError, Result};
pub use input::{calculate_raw, parse_date, DateFormat, RawInputs};
pub use interest::{
    calculate, compute, engine_for, ElapsedPeriod, InterestEngine, SimpleInterestEngine,
    YearlyCompoundingEngine,
};
pub use types::{CalculationInput, CalculationResult, InterestMode, YearlyAccrual};
pub use view::CalculationView;

// re-export external dependencies that users will need
pub use chrono;
pub use rust_decimal::Decimal;
