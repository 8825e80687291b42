/// json view - configuration in, serialized result out
use date_interest_rs::{calculate_raw, CalculationView, CalculatorConfig, RawInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = CalculatorConfig::from_json(
        r#"{
            "mode": "compounding-by-year",
            "date_formats": ["day-month-year", "iso"]
        }"#,
    )?;

    let raw = RawInputs::new("2022-01-01", "16/03/2023", "10000", "1");
    let result = calculate_raw(&raw, &config)?;

    println!("{}", CalculationView::from_result(&result).to_json_pretty()?);

    Ok(())
}
