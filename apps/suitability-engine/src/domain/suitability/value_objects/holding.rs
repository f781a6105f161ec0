//! A single position in a portfolio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::validate_positive_score;
use crate::domain::shared::{DomainError, Money};

/// One position in a portfolio: asset name, risk score and amount invested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holding {
    /// Asset name.
    pub name: String,
    /// Risk score of the asset, expected in (0, 5].
    pub risk_score: Decimal,
    /// Amount invested in the asset.
    pub amount_invested: Money,
}

impl Holding {
    /// Create a new holding.
    #[must_use]
    pub fn new(name: impl Into<String>, risk_score: Decimal, amount_invested: Money) -> Self {
        Self {
            name: name.into(),
            risk_score,
            amount_invested,
        }
    }

    /// Check the holding can take part in a weighted average: named, with a
    /// positive score and a positive amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "name".to_string(),
                message: "is required".to_string(),
            });
        }
        validate_positive_score("risk_score", self.risk_score)?;
        self.amount_invested
            .validate_positive()
            .map_err(|e| match e {
                DomainError::InvalidValue { message, .. } => DomainError::InvalidValue {
                    field: "amount_invested".to_string(),
                    message,
                },
            })
    }

    /// Risk-weighted amount (`risk_score × amount_invested`).
    #[must_use]
    pub fn weighted_risk(&self) -> Decimal {
        self.amount_invested * self.risk_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn weighted_risk_multiplies_score_by_amount() {
        let h = Holding::new("CDB XPTO", dec!(1.2), Money::new(dec!(50000)));
        assert_eq!(h.weighted_risk(), dec!(60000));
    }

    #[test]
    fn validate_rejects_blank_name_and_non_positive_values() {
        let ok = Holding::new("CDB", dec!(1.2), Money::new(dec!(100)));
        assert!(ok.validate().is_ok());

        let blank = Holding::new("  ", dec!(1.2), Money::new(dec!(100)));
        assert!(matches!(
            blank.validate(),
            Err(DomainError::InvalidValue { field, .. }) if field == "name"
        ));

        let zero_score = Holding::new("CDB", dec!(0), Money::new(dec!(100)));
        assert!(matches!(
            zero_score.validate(),
            Err(DomainError::InvalidValue { field, .. }) if field == "risk_score"
        ));

        let zero_amount = Holding::new("CDB", dec!(1.2), Money::ZERO);
        assert!(matches!(
            zero_amount.validate(),
            Err(DomainError::InvalidValue { field, .. }) if field == "amount_invested"
        ));
    }

    #[test]
    fn holding_serde_shape() {
        let h = Holding::new("Stock ABC", dec!(4.0), Money::new(dec!(10000)));
        let json = serde_json::to_value(&h).unwrap();
        assert_eq!(json["name"], "Stock ABC");
        assert!(json.get("risk_score").is_some());
        assert!(json.get("amount_invested").is_some());
    }
}
