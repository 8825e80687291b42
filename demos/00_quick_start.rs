/// quick start - minimal example to get started
use date_interest_rs::chrono::NaiveDate;
use date_interest_rs::{compute, InterestMode, Money, Rate};
use rust_decimal_macros::dec;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // 20,000 lent for 2024 at 1.75% a month
    let result = compute(
        NaiveDate::from_ymd_opt(2024, 1, 1).ok_or("bad start date")?,
        NaiveDate::from_ymd_opt(2024, 12, 31).ok_or("bad end date")?,
        Money::from_major(20_000),
        Rate::from_percent(dec!(1.75)),
        InterestMode::Simple,
    )?;

    println!("months: {}", result.full_months);
    println!("days: {}", result.remaining_days);
    println!("interest: {}", result.total_interest.to_cents_string());

    Ok(())
}
