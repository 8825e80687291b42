/// yearly compounding - whole years capitalise before the remainder accrues
use date_interest_rs::{calculate_raw, CalculatorConfig, InterestMode, RawInputs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let raw = RawInputs::new("10/03/2021", "25/08/2024", "50000", "1.5");

    for mode in [InterestMode::Simple, InterestMode::CompoundingByYear] {
        let config = CalculatorConfig::default().with_mode(mode);
        let result = calculate_raw(&raw, &config)?;

        println!("=== {} ===", mode);
        for year in &result.yearly_accruals {
            println!(
                "year {}: {} on {}",
                year.year_index + 1,
                year.interest.to_cents_string(),
                year.opening_principal.to_cents_string()
            );
        }
        println!(
            "remainder: {} months {} days on {}",
            result.full_months,
            result.remaining_days,
            result.principal_base.to_cents_string()
        );
        println!("total interest: {}", result.total_interest.to_cents_string());
        println!("amount due: {}\n", result.amount_due.to_cents_string());
    }

    Ok(())
}
