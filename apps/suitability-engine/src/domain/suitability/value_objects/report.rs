//! Suitability report envelope.

use serde::{Deserialize, Serialize};

use super::{RiskProfile, ValidationResult};
use crate::domain::shared::{ReportId, Timestamp};

/// A validation result stamped with an identifier and time, as handed to
/// clients, the audit sink and the report renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuitabilityReport {
    /// Report identifier.
    pub id: ReportId,
    /// When the validation ran.
    pub timestamp: Timestamp,
    /// Profile the order was validated against.
    pub profile: RiskProfile,
    /// Engine output.
    pub validation: ValidationResult,
}

impl SuitabilityReport {
    /// Stamp a validation result with a fresh identifier and the current time.
    #[must_use]
    pub fn issue(profile: RiskProfile, validation: ValidationResult) -> Self {
        Self {
            id: ReportId::generate(),
            timestamp: Timestamp::now(),
            profile,
            validation,
        }
    }

    /// Protocol number printed on documents (upper-cased id).
    #[must_use]
    pub fn protocol(&self) -> String {
        self.id.as_str().to_uppercase()
    }
}
