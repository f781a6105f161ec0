//! Passive drift assessment of a portfolio without any new order.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How far a drifted portfolio is outside its band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DriftSeverity {
    /// In band, or at most 5% above the maximum score.
    Low,
    /// More than 5% above the maximum score, within the alert threshold.
    Medium,
    /// Above the alert threshold.
    High,
    /// More than 20% above the alert threshold.
    Critical,
}

impl DriftSeverity {
    /// Stable lowercase label (used for metrics).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl fmt::Display for DriftSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
            Self::Critical => write!(f, "Critical"),
        }
    }
}

/// Result of a passive drift check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriftReport {
    /// True when the current risk is above the maximum score.
    pub is_out_of_band: bool,
    /// Weighted-average risk of the portfolio.
    pub current_risk: Decimal,
    /// Profile ceiling.
    pub max_permitted_score: Decimal,
    /// Excess over the ceiling in percent (0 when in band).
    pub excess_percent: Decimal,
    /// Severity ladder classification.
    pub severity: DriftSeverity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severities_are_ordered() {
        assert!(DriftSeverity::Low < DriftSeverity::Medium);
        assert!(DriftSeverity::Medium < DriftSeverity::High);
        assert!(DriftSeverity::High < DriftSeverity::Critical);
    }

    #[test]
    fn severity_labels() {
        assert_eq!(DriftSeverity::Critical.as_str(), "critical");
        assert_eq!(DriftSeverity::Medium.to_string(), "Medium");
    }
}
