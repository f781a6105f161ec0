//! Client investor profile and its accepted risk ceiling.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::validate_risk_score;
use crate::domain::shared::DomainError;

/// Investor profile class assigned by the suitability questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProfileClass {
    /// Capital preservation first.
    Conservative,
    /// Balanced risk and return.
    Moderate,
    /// Accepts high volatility.
    Aggressive,
}

impl ProfileClass {
    /// Default maximum risk score for the class, used when a client record
    /// does not state one explicitly.
    #[must_use]
    pub fn default_max_risk_score(self) -> Decimal {
        match self {
            Self::Conservative => dec!(2.0),
            Self::Moderate => dec!(3.0),
            Self::Aggressive => dec!(5.0),
        }
    }
}

impl fmt::Display for ProfileClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Conservative => write!(f, "Conservative"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Aggressive => write!(f, "Aggressive"),
        }
    }
}

/// Client risk profile as consumed by the suitability engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskProfile {
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
    /// Investor profile class.
    pub profile_class: ProfileClass,
    /// Regulator-accepted risk ceiling, expected in (0, 5].
    pub max_risk_score: Decimal,
}

impl RiskProfile {
    /// Create a new risk profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        profile_class: ProfileClass,
        max_risk_score: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            profile_class,
            max_risk_score,
        }
    }

    /// Check the ceiling lies on the risk scale.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` when `max_risk_score` is out of range.
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_risk_score("max_risk_score", self.max_risk_score)
    }
}
