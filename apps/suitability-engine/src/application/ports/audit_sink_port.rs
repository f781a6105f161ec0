//! Audit Sink Port (Driven Port)
//!
//! Compliance audit trail. Persistence of the trail is the sink's concern;
//! the application only hands records over.

use async_trait::async_trait;

use crate::domain::suitability::{AcknowledgementRecord, SuitabilityReport};

/// Audit sink error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AuditError {
    /// Sink is not reachable.
    #[error("Audit sink unavailable: {message}")]
    Unavailable { message: String },

    /// Sink refused the record.
    #[error("Audit record rejected: {message}")]
    Rejected { message: String },
}

/// Port for recording compliance events.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuditSinkPort: Send + Sync {
    /// Record a completed suitability validation.
    async fn record_validation(&self, report: &SuitabilityReport) -> Result<(), AuditError>;

    /// Record a client acknowledgement term.
    async fn record_acknowledgement(
        &self,
        record: &AcknowledgementRecord,
    ) -> Result<(), AuditError>;
}

/// Audit sink that drops every record.
#[derive(Debug, Clone, Default)]
pub struct NoOpAuditSink;

#[async_trait]
impl AuditSinkPort for NoOpAuditSink {
    async fn record_validation(&self, _report: &SuitabilityReport) -> Result<(), AuditError> {
        Ok(())
    }

    async fn record_acknowledgement(
        &self,
        _record: &AcknowledgementRecord,
    ) -> Result<(), AuditError> {
        Ok(())
    }
}
