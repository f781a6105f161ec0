//! Record Acknowledgement Use Case

use std::sync::Arc;

use crate::application::dto::{AcknowledgementRequestDto, RequestOrigin};
use crate::application::ports::{AuditError, AuditSinkPort};
use crate::domain::suitability::{AcknowledgementRecord, SuitabilityError};
use crate::observability::record_acknowledgement;

/// Errors recording an acknowledgement term.
#[derive(Debug, Clone, thiserror::Error)]
pub enum AcknowledgementError {
    /// Submission is incomplete or not accepted.
    #[error(transparent)]
    Invalid(#[from] SuitabilityError),

    /// The audit trail could not store the record.
    #[error(transparent)]
    Audit(#[from] AuditError),
}

/// Use case for recording a client's acceptance of an acknowledgement term.
pub struct RecordAcknowledgementUseCase<A>
where
    A: AuditSinkPort,
{
    audit: Arc<A>,
}

impl<A> RecordAcknowledgementUseCase<A>
where
    A: AuditSinkPort,
{
    /// Create a new RecordAcknowledgementUseCase.
    pub const fn new(audit: Arc<A>) -> Self {
        Self { audit }
    }

    /// Execute the use case.
    ///
    /// Unlike validation audits, the acknowledgement only exists once the
    /// sink has stored it, so a sink failure fails the request.
    ///
    /// # Errors
    ///
    /// Returns `AcknowledgementError::Invalid` for a bad submission and
    /// `AcknowledgementError::Audit` when the sink fails.
    pub async fn execute(
        &self,
        request: AcknowledgementRequestDto,
        origin: RequestOrigin,
    ) -> Result<AcknowledgementRecord, AcknowledgementError> {
        let submission = request.into_submission()?;

        let record = AcknowledgementRecord::accept(
            submission.report_id,
            submission.client,
            submission.justification,
            origin.source_ip,
            origin.user_agent,
        );

        self.audit.record_acknowledgement(&record).await?;
        record_acknowledgement();

        tracing::info!(
            acknowledgement_id = %record.id,
            report_id = %record.report_id,
            source_ip = %record.source_ip,
            "Client acknowledgement recorded"
        );

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockAuditSinkPort;

    fn request() -> AcknowledgementRequestDto {
        AcknowledgementRequestDto {
            report_id: Some("abc123".to_string()),
            client_name: Some("Maria Santos".to_string()),
            client_email: Some("maria@example.com".to_string()),
            accepted: Some(true),
            justification: None,
        }
    }

    fn origin() -> RequestOrigin {
        RequestOrigin {
            source_ip: "203.0.113.7".to_string(),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }

    #[tokio::test]
    async fn acknowledgement_is_sent_to_audit_sink() {
        let mut audit = MockAuditSinkPort::new();
        audit
            .expect_record_acknowledgement()
            .withf(|record| {
                record.report_id.as_str() == "abc123"
                    && record.source_ip == "203.0.113.7"
                    && record.audit.regulation == "CVM_30"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = RecordAcknowledgementUseCase::new(Arc::new(audit));
        let record = use_case.execute(request(), origin()).await.unwrap();

        assert!(record.accepted);
        assert_eq!(record.user_agent, "Mozilla/5.0");
        assert!(record.protocol().starts_with("AT-"));
    }

    #[tokio::test]
    async fn sink_failure_fails_acknowledgement() {
        let mut audit = MockAuditSinkPort::new();
        audit.expect_record_acknowledgement().returning(|_| {
            Err(AuditError::Rejected {
                message: "duplicate".to_string(),
            })
        });

        let use_case = RecordAcknowledgementUseCase::new(Arc::new(audit));
        let err = use_case.execute(request(), origin()).await.unwrap_err();
        assert!(matches!(err, AcknowledgementError::Audit(_)));
    }

    #[tokio::test]
    async fn unaccepted_term_is_not_recorded() {
        let mut audit = MockAuditSinkPort::new();
        audit.expect_record_acknowledgement().never();

        let mut dto = request();
        dto.accepted = Some(false);

        let use_case = RecordAcknowledgementUseCase::new(Arc::new(audit));
        let err = use_case.execute(dto, origin()).await.unwrap_err();
        assert!(matches!(err, AcknowledgementError::Invalid(_)));
    }
}
