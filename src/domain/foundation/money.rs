//! Money value object for monetary amounts.
//!
//! All amounts are stored as integer euro cents, never floats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A monetary amount in euro cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Zero euros.
    pub const ZERO: Money = Money(0);

    /// Creates an amount from euro cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole euros.
    pub fn from_euros(euros: i64) -> Self {
        Self(euros.saturating_mul(100))
    }

    /// Returns the amount in cents.
    pub fn as_cents(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies the amount by a whole number of units, e.g. billable hours.
    pub fn times(&self, units: i64) -> Self {
        Self(self.0.saturating_mul(units))
    }

    /// Clamps negative amounts to zero.
    pub fn clamp_non_negative(&self) -> Self {
        Self(self.0.max(0))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, |acc, amount| acc + amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.abs();
        let euros = abs / 100;
        let cents = abs % 100;
        if cents == 0 {
            write!(f, "{}€{}", sign, euros)
        } else {
            write!(f, "{}€{}.{:02}", sign, euros, cents)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_euros_converts_to_cents() {
        assert_eq!(Money::from_euros(10).as_cents(), 1000);
        assert_eq!(Money::from_cents(550).as_cents(), 550);
    }

    #[test]
    fn zero_is_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::from_euros(1).is_zero());
        assert_eq!(Money::default(), Money::ZERO);
    }

    #[test]
    fn times_scales_by_units() {
        assert_eq!(Money::from_euros(5).times(3), Money::from_euros(15));
        assert_eq!(Money::from_euros(5).times(0), Money::ZERO);
        assert_eq!(Money::from_euros(5).times(-1), Money::from_euros(-5));
    }

    #[test]
    fn clamp_non_negative_floors_at_zero() {
        assert_eq!(Money::from_cents(-250).clamp_non_negative(), Money::ZERO);
        assert_eq!(
            Money::from_cents(250).clamp_non_negative(),
            Money::from_cents(250)
        );
    }

    #[test]
    fn adds_and_sums() {
        let total: Money = vec![Money::from_euros(10), Money::from_euros(5)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_euros(15));
        assert_eq!(Money::ZERO + Money::from_cents(1), Money::from_cents(1));
    }

    #[test]
    fn displays_whole_euros_without_cents() {
        assert_eq!(Money::from_euros(15).to_string(), "€15");
        assert_eq!(Money::ZERO.to_string(), "€0");
    }

    #[test]
    fn displays_fractional_euros_with_two_digits() {
        assert_eq!(Money::from_cents(1550).to_string(), "€15.50");
        assert_eq!(Money::from_cents(5).to_string(), "€0.05");
    }

    #[test]
    fn displays_negative_amounts_with_leading_sign() {
        assert_eq!(Money::from_cents(-1550).to_string(), "-€15.50");
    }

    #[test]
    fn amounts_are_ordered() {
        assert!(Money::from_euros(5) < Money::from_euros(10));
        assert!(Money::from_cents(-1) < Money::ZERO);
    }

    #[test]
    fn serializes_as_bare_cents() {
        let json = serde_json::to_string(&Money::from_euros(10)).unwrap();
        assert_eq!(json, "1000");

        let back: Money = serde_json::from_str("1000").unwrap();
        assert_eq!(back, Money::from_euros(10));
    }
}
