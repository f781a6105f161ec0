//! Suitability validation outcome.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::Money;

/// Outcome class of a suitability validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationStatus {
    /// Projected risk stays within the profile's maximum score.
    Approved,
    /// Projected risk is above the maximum but within the alert tolerance band.
    Alert,
    /// Projected risk exceeds the alert threshold.
    Rejected,
}

impl ValidationStatus {
    /// Whether this outcome needs a signed client acknowledgement term.
    #[must_use]
    pub const fn requires_acknowledgement(self) -> bool {
        matches!(self, Self::Alert)
    }

    /// Stable lowercase label (used for metrics).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Alert => "alert",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Approved => write!(f, "Approved"),
            Self::Alert => write!(f, "Alert"),
            Self::Rejected => write!(f, "Rejected"),
        }
    }
}

/// Before/after breakdown of a validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationDetail {
    /// Total invested in the current portfolio.
    pub current_portfolio_total: Money,
    /// Weighted-average risk of the current portfolio.
    pub current_portfolio_risk: Decimal,
    /// Total invested after the proposed order.
    pub projected_portfolio_total: Money,
    /// Weighted-average risk after the proposed order.
    pub projected_portfolio_risk: Decimal,
    /// Relative change of risk in percent (0 when the current risk is 0).
    pub risk_increase_percent: Decimal,
}

/// Full result of a suitability validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Outcome class.
    pub status: ValidationStatus,
    /// Risk of the portfolio before the order.
    pub current_risk: Decimal,
    /// Risk of the portfolio after the order.
    pub projected_risk: Decimal,
    /// Profile ceiling the projection was compared against.
    pub max_permitted_score: Decimal,
    /// Upper bound of the alert band.
    pub alert_threshold: Decimal,
    /// Status-specific explanation.
    pub message: String,
    /// Before/after breakdown.
    pub detail: ValidationDetail,
    /// True iff `status` is [`ValidationStatus::Alert`].
    pub requires_acknowledgement: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_alert_requires_acknowledgement() {
        assert!(!ValidationStatus::Approved.requires_acknowledgement());
        assert!(ValidationStatus::Alert.requires_acknowledgement());
        assert!(!ValidationStatus::Rejected.requires_acknowledgement());
    }

    #[test]
    fn status_labels() {
        assert_eq!(ValidationStatus::Rejected.as_str(), "rejected");
        assert_eq!(ValidationStatus::Alert.to_string(), "Alert");
    }

    #[test]
    fn status_serde() {
        let json = serde_json::to_string(&ValidationStatus::Approved).unwrap();
        assert_eq!(json, r#""Approved""#);
    }
}
