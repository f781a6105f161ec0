//! Suitability Bounded Context
//!
//! Checks whether a proposed order keeps a client's portfolio inside the
//! risk envelope accepted for the client's investor profile.
//!
//! # Key Concepts
//!
//! - **Portfolio Risk**: Weighted average of holding risk scores by amount invested
//! - **Projected Risk**: Portfolio risk after adding the proposed order
//! - **Alert Threshold**: 110% of the profile's maximum risk score
//! - **Passive Drift**: Portfolio leaving its band through market movement alone

pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::SuitabilityError;
pub use services::engine;
pub use value_objects::{
    AcknowledgementRecord, AuditInfo, ClientContact, DriftReport, DriftSeverity, Holding,
    ProfileClass, ProposedOrder, RiskProfile, SuitabilityReport, ValidationDetail,
    ValidationResult, ValidationStatus,
};
