//! A prospective purchase that is not yet part of the portfolio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Holding, validate_risk_score};
use crate::domain::shared::{DomainError, Money};

/// A single proposed purchase to be checked for suitability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposedOrder {
    /// Asset to be bought.
    pub asset_name: String,
    /// Risk score of the asset, expected in (0, 5].
    pub risk_score: Decimal,
    /// Amount to be invested.
    pub order_amount: Money,
}

impl ProposedOrder {
    /// Create a new proposed order.
    #[must_use]
    pub fn new(asset_name: impl Into<String>, risk_score: Decimal, order_amount: Money) -> Self {
        Self {
            asset_name: asset_name.into(),
            risk_score,
            order_amount,
        }
    }

    /// Check the order is named, scored within the scale and for a positive amount.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.asset_name.trim().is_empty() {
            return Err(DomainError::InvalidValue {
                field: "asset_name".to_string(),
                message: "is required".to_string(),
            });
        }
        validate_risk_score("risk_score", self.risk_score)?;
        if !self.order_amount.is_positive() {
            return Err(DomainError::InvalidValue {
                field: "order_amount".to_string(),
                message: format!("must be greater than zero, got {}", self.order_amount),
            });
        }
        Ok(())
    }

    /// The holding this order would become once executed.
    #[must_use]
    pub fn as_holding(&self) -> Holding {
        Holding::new(self.asset_name.clone(), self.risk_score, self.order_amount)
    }
}
