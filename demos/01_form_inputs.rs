/// form inputs - raw text in, user-facing messages out
use date_interest_rs::{calculate_raw, CalculatorConfig, RawInputs};

fn main() {
    env_logger::init();

    println!("=== form inputs example ===\n");

    let config = CalculatorConfig::default();
    let submissions = [
        config.form_defaults.raw_inputs(),
        RawInputs::new("01/01/2024", "15/06/2024", "10000", "2"),
        RawInputs::new("15/06/2024", "01/01/2024", "10000", "2"),
        RawInputs::new("2024-01-01", "15/06/2024", "10000", "2"),
        RawInputs::new("01/01/2024", "15/06/2024", "-10000", "2"),
    ];

    for raw in &submissions {
        println!(
            "{} -> {}, {} at {}%",
            raw.start_date, raw.end_date, raw.principal, raw.monthly_rate_percent
        );
        match calculate_raw(raw, &config) {
            Ok(result) => {
                println!("  number of months: {}", result.full_months);
                println!(
                    "  interest for full months: {}",
                    result.interest_full_periods.to_cents_string()
                );
                println!("  remaining days: {}", result.remaining_days);
                println!(
                    "  remaining days interest: {}",
                    result.interest_remaining_days.to_cents_string()
                );
                println!("  total interest: {}", result.total_interest.to_cents_string());
            }
            Err(e) => println!("  error: {}", e.user_message()),
        }
        println!();
    }
}
