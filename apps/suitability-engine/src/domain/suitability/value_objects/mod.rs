//! Suitability value objects.

mod acknowledgement;
mod drift_report;
mod holding;
mod proposed_order;
mod report;
mod risk_profile;
mod risk_score;
mod validation_result;

pub use acknowledgement::{AcknowledgementRecord, AuditInfo, ClientContact};
pub use drift_report::{DriftReport, DriftSeverity};
pub use holding::Holding;
pub use proposed_order::ProposedOrder;
pub use report::SuitabilityReport;
pub use risk_profile::{ProfileClass, RiskProfile};
pub use risk_score::{MAX_RISK_SCORE, validate_positive_score, validate_risk_score};
pub use validation_result::{ValidationDetail, ValidationResult, ValidationStatus};
