use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// internal precision for intermediate money values
const MONEY_DP: u32 = 8;

/// precision of every reported amount
pub const CENTS_DP: u32 = 2;

/// Money type, 8 decimal places internally, reported in cents.
///
/// Arithmetic is checked: every operation that can leave `Decimal`'s range
/// returns `None` instead of panicking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(d.round_dp(MONEY_DP))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Money(Decimal::from_str(s.trim())?.round_dp(MONEY_DP)))
    }

    /// create from integer amount (rupees, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half-up (midpoint away from zero) to `dp` places
    pub fn round_dp(&self, dp: u32) -> Self {
        Money(self.0.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero))
    }

    /// round half-up to whole cents
    pub fn to_cents(&self) -> Self {
        self.round_dp(CENTS_DP)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// strictly below zero; negative zero is not negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).map(Money::from_decimal)
    }

    /// interest for `periods` periods at `rate` per period, no compounding
    pub fn checked_simple_interest(&self, rate: Rate, periods: Decimal) -> Option<Money> {
        let interest = self.0.checked_mul(rate.as_decimal())?.checked_mul(periods)?;
        Some(Money::from_decimal(interest))
    }

    /// interest for `days` out of a `days_in_period` period, rounded once to cents
    pub fn checked_prorated_interest(
        &self,
        rate: Rate,
        days: u32,
        days_in_period: u32,
    ) -> Option<Money> {
        let interest = self
            .0
            .checked_mul(rate.as_decimal())?
            .checked_mul(Decimal::from(days))?
            .checked_div(Decimal::from(days_in_period))?;
        Some(Money(interest).to_cents())
    }

    /// format with exactly two decimals
    pub fn to_cents_string(&self) -> String {
        format!("{:.2}", self.to_cents().0)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// rate type, stored as a fraction per period (0.0175 for 1.75%)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal fraction (e.g., 0.0175 for 1.75%)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(d)
    }

    /// create from a percentage (e.g., 1.75 for 1.75%)
    pub fn from_percent(p: Decimal) -> Self {
        Rate(p / Decimal::ONE_HUNDRED)
    }

    /// parse a percentage such as "1.75"
    pub fn from_percent_str(s: &str) -> Result<Self, rust_decimal::Error> {
        Ok(Rate::from_percent(Decimal::from_str(s.trim())?))
    }

    /// get as decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// get as percentage, saturating at `Decimal::MAX`
    pub fn as_percentage(&self) -> Decimal {
        self.0.saturating_mul(Decimal::ONE_HUNDRED)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.as_percentage().normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_precision() {
        let m = Money::from_str_exact("100.123456789").unwrap();
        assert_eq!(m.to_string(), "100.12345679"); // rounded to 8 places
    }

    #[test]
    fn test_half_up_rounding() {
        // banker's rounding would give 0.12 here
        let m = Money::from_decimal(dec!(0.125));
        assert_eq!(m.to_cents(), Money::from_decimal(dec!(0.13)));

        let m = Money::from_decimal(dec!(93.333333));
        assert_eq!(m.to_cents_string(), "93.33");
    }

    #[test]
    fn test_cents_string_pads() {
        assert_eq!(Money::from_major(4200).to_cents_string(), "4200.00");
        assert_eq!(Money::from_decimal(dec!(0.5)).to_cents_string(), "0.50");
    }

    #[test]
    fn test_rate_from_percent() {
        let rate = Rate::from_percent(dec!(1.75));
        assert_eq!(rate.as_decimal(), dec!(0.0175));
        assert_eq!(rate.to_string(), "1.75%");

        let parsed = Rate::from_percent_str(" 2 ").unwrap();
        assert_eq!(parsed, Rate::from_decimal(dec!(0.02)));
    }

    #[test]
    fn test_simple_interest() {
        let principal = Money::from_major(20_000);
        let rate = Rate::from_percent(dec!(1.75));

        let interest = principal.checked_simple_interest(rate, dec!(12)).unwrap();
        assert_eq!(interest.to_cents_string(), "4200.00");
    }

    #[test]
    fn test_prorated_interest_rounds_once() {
        let principal = Money::from_major(10_000);
        let rate = Rate::from_percent(dec!(2));

        let interest = principal.checked_prorated_interest(rate, 14, 30).unwrap();
        assert_eq!(interest, Money::from_decimal(dec!(93.33)));

        // 0.0049999999995 would round up to 0.01 if it were cut to 8 places first
        let rate = Rate::from_decimal(dec!(0.0149999999985));
        let interest = Money::from_major(1).checked_prorated_interest(rate, 1, 3).unwrap();
        assert!(interest.is_zero());
    }

    #[test]
    fn test_overflow_is_none() {
        let huge = Money::from_decimal(Decimal::MAX);

        assert!(huge.checked_add(Money::from_major(1)).is_none());
        assert!(huge.checked_simple_interest(Rate::from_percent(dec!(100)), dec!(2)).is_none());
        assert!(huge.checked_prorated_interest(Rate::from_percent(dec!(200)), 29, 30).is_none());
        assert_eq!(
            huge.checked_simple_interest(Rate::ZERO, dec!(12)),
            Some(Money::ZERO)
        );
    }

    #[test]
    fn test_percentage_saturates() {
        let rate = Rate::from_decimal(Decimal::MAX);
        assert_eq!(rate.as_percentage(), Decimal::MAX);
    }

    #[test]
    fn test_negative_detection() {
        assert!(Money::from_major(-1).is_negative());
        assert!(!Money::ZERO.is_negative());
        assert!(Rate::from_percent(dec!(-0.5)).is_negative());
    }
}
