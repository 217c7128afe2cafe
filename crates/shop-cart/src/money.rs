//! Money type for representing monetary values.
//!
//! Amounts are integers in the currency's smallest display unit, so totals
//! never pick up floating-point drift.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    MMK,
    USD,
    EUR,
    GBP,
    JPY,
    THB,
    CAD,
    AUD,
    INR,
    CNY,
}

impl Currency {
    /// Get the currency code (e.g., "MMK").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::MMK => "MMK",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::THB => "THB",
            Currency::CAD => "CAD",
            Currency::AUD => "AUD",
            Currency::INR => "INR",
            Currency::CNY => "CNY",
        }
    }

    /// Get the number of decimal places for this currency.
    ///
    /// Kyat prices are quoted in whole kyat.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::MMK | Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest unit of the currency.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from minor units.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Try to add another Money value.
    ///
    /// Returns `None` if currencies don't match or the sum overflows.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Multiply by a quantity, returning `None` on overflow.
    pub fn try_multiply(&self, factor: i64) -> Option<Money> {
        self.amount
            .checked_mul(factor)
            .map(|amount| Money::new(amount, self.currency))
    }

    /// Sum an iterator of Money values, returning `None` on overflow or
    /// currency mismatch.
    pub fn try_sum<'a>(
        mut iter: impl Iterator<Item = &'a Money>,
        currency: Currency,
    ) -> Option<Money> {
        iter.try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Format the amount with thousands separators (e.g., "12,000").
    pub fn display_amount(&self) -> String {
        let places = self.currency.decimal_places();
        let divisor = 10_u64.pow(places);
        let abs = self.amount.unsigned_abs();
        let sign = if self.amount < 0 { "-" } else { "" };
        let whole = group_thousands(abs / divisor);

        if places == 0 {
            format!("{sign}{whole}")
        } else {
            format!(
                "{sign}{whole}.{:0width$}",
                abs % divisor,
                width = places as usize
            )
        }
    }

    /// Format as a display string (e.g., "12,000 MMK").
    pub fn display(&self) -> String {
        format!("{} {}", self.display_amount(), self.currency.code())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_display_whole_units() {
        assert_eq!(Money::new(12000, Currency::MMK).display(), "12,000 MMK");
        assert_eq!(Money::new(250, Currency::MMK).display(), "250 MMK");
        assert_eq!(Money::new(1234567, Currency::JPY).display(), "1,234,567 JPY");
        assert_eq!(Money::zero(Currency::MMK).display(), "0 MMK");
    }

    #[test]
    fn test_money_display_decimal_units() {
        assert_eq!(Money::new(2999, Currency::USD).display(), "29.99 USD");
        assert_eq!(Money::new(5, Currency::USD).display(), "0.05 USD");
        assert_eq!(Money::new(123456789, Currency::EUR).display(), "1,234,567.89 EUR");
        assert_eq!(Money::new(-1050, Currency::USD).display_amount(), "-10.50");
    }

    #[test]
    fn test_money_try_add() {
        let a = Money::new(1000, Currency::MMK);
        let b = Money::new(500, Currency::MMK);
        assert_eq!(a.try_add(&b), Some(Money::new(1500, Currency::MMK)));

        let usd = Money::new(500, Currency::USD);
        assert_eq!(a.try_add(&usd), None);
    }

    #[test]
    fn test_money_try_multiply_overflow() {
        let m = Money::new(i64::MAX, Currency::MMK);
        assert_eq!(m.try_multiply(2), None);
        assert_eq!(
            Money::new(100, Currency::MMK).try_multiply(3),
            Some(Money::new(300, Currency::MMK))
        );
    }

    #[test]
    fn test_money_try_sum() {
        let values = [
            Money::new(200, Currency::MMK),
            Money::new(50, Currency::MMK),
        ];
        assert_eq!(
            Money::try_sum(values.iter(), Currency::MMK),
            Some(Money::new(250, Currency::MMK))
        );
        assert_eq!(
            Money::try_sum(std::iter::empty(), Currency::USD),
            Some(Money::zero(Currency::USD))
        );
    }
}
