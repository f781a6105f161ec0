//! Process-local audit trail.
//!
//! Every record is also emitted on the `audit` tracing target, so a log
//! shipper can persist the trail outside the process.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::application::ports::{AuditError, AuditSinkPort};
use crate::domain::suitability::{AcknowledgementRecord, SuitabilityReport};

/// A stored audit event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEntry {
    /// A completed validation.
    Validation(SuitabilityReport),
    /// A recorded acknowledgement term.
    Acknowledgement(AcknowledgementRecord),
}

/// Audit sink keeping records in memory.
#[derive(Debug, Default)]
pub struct InMemoryAuditSink {
    entries: RwLock<Vec<AuditEntry>>,
}

impl InMemoryAuditSink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the trail, oldest first.
    #[must_use]
    pub fn entries(&self) -> Vec<AuditEntry> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn push(&self, entry: AuditEntry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }
}

#[async_trait]
impl AuditSinkPort for InMemoryAuditSink {
    async fn record_validation(&self, report: &SuitabilityReport) -> Result<(), AuditError> {
        tracing::info!(
            target: "audit",
            event = "suitability_validation",
            report_id = %report.id,
            timestamp = %report.timestamp,
            client_email = %report.profile.email,
            profile_class = %report.profile.profile_class,
            status = %report.validation.status,
            projected_risk = %report.validation.projected_risk,
            "Suitability validation recorded"
        );
        self.push(AuditEntry::Validation(report.clone()));
        Ok(())
    }

    async fn record_acknowledgement(
        &self,
        record: &AcknowledgementRecord,
    ) -> Result<(), AuditError> {
        tracing::info!(
            target: "audit",
            event = "acknowledgement_term",
            acknowledgement_id = %record.id,
            report_id = %record.report_id,
            client_email = %record.client.email,
            source_ip = %record.source_ip,
            "Acknowledgement term recorded"
        );
        self.push(AuditEntry::Acknowledgement(record.clone()));
        Ok(())
    }
}
