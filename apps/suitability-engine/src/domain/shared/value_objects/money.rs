//! Money value object for currency amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

use crate::domain::shared::DomainError;

/// A monetary amount in the account currency.
///
/// Represented as a Decimal for precise financial calculations.
/// Always uses 2 decimal places for display (but internal precision is higher).
/// The currency symbol is a presentation concern and is not part of the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a new Money value from a Decimal.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Get the inner Decimal value.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Returns true if this amount is positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Returns true if this amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Decimal::ZERO
    }

    /// Validate this amount can be invested (strictly positive).
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for zero or negative amounts.
    pub fn validate_positive(&self) -> Result<(), DomainError> {
        if !self.is_positive() {
            return Err(DomainError::InvalidValue {
                field: "amount".to_string(),
                message: format!("must be greater than zero, got {}", self.0),
            });
        }
        Ok(())
    }

    /// Round to 2 decimal places.
    #[must_use]
    pub fn round(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Format with a currency symbol, e.g. `R$ 1500.00`.
    #[must_use]
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{symbol} {:.2}", self.round().0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.round().0)
    }
}

impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Mul<Decimal> for Money {
    type Output = Decimal;

    fn mul(self, rhs: Decimal) -> Self::Output {
        self.0 * rhs
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn money_display_two_decimals() {
        let m = Money::new(dec!(150.5));
        assert_eq!(format!("{m}"), "150.50");
    }

    #[test]
    fn money_format_with_symbol() {
        let m = Money::new(dec!(65000));
        assert_eq!(m.format_with_symbol("R$"), "R$ 65000.00");
    }

    #[test]
    fn money_sum_and_add() {
        let total: Money = [dec!(10.25), dec!(4.75)].into_iter().map(Money::new).sum();
        assert_eq!(total, Money::new(dec!(15)));
        assert_eq!(total + Money::new(dec!(5)), Money::new(dec!(20)));
    }

    #[test]
    fn money_sum_of_nothing_is_zero() {
        let total: Money = std::iter::empty().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn money_predicates_and_ordering() {
        assert!(Money::new(dec!(0.01)).is_positive());
        assert!(!Money::ZERO.is_positive());
        assert!(Money::new(dec!(1)) < Money::new(dec!(2)));
        assert_eq!(Money::new(dec!(1.005)).round(), Money::new(dec!(1.00)));
    }

    #[test]
    fn money_validate_positive() {
        assert!(Money::new(dec!(0.01)).validate_positive().is_ok());
        assert!(Money::ZERO.validate_positive().is_err());
        assert!(Money::new(dec!(-10)).validate_positive().is_err());
    }

    #[test]
    fn money_times_decimal_yields_decimal() {
        assert_eq!(Money::new(dec!(50000)) * dec!(1.2), dec!(60000));
    }

    #[test]
    fn money_serde_transparent() {
        let m = Money::new(dec!(100.50));
        let json = serde_json::to_string(&m).unwrap();
        let parsed: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, m);
    }
}
