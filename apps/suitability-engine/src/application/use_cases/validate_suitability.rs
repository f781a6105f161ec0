//! Validate Suitability Use Case

use std::sync::Arc;
use std::time::Instant;

use crate::application::dto::ValidateSuitabilityRequestDto;
use crate::application::ports::AuditSinkPort;
use crate::domain::suitability::{SuitabilityError, SuitabilityReport, engine};
use crate::observability::record_validation;

/// Use case for validating a proposed order against a client's profile.
pub struct ValidateSuitabilityUseCase<A>
where
    A: AuditSinkPort,
{
    audit: Arc<A>,
}

impl<A> ValidateSuitabilityUseCase<A>
where
    A: AuditSinkPort,
{
    /// Create a new ValidateSuitabilityUseCase.
    pub const fn new(audit: Arc<A>) -> Self {
        Self { audit }
    }

    /// Execute the use case.
    ///
    /// The audit sink is best effort: a failure to record is logged and the
    /// report is still returned.
    ///
    /// # Errors
    ///
    /// Returns `SuitabilityError` if the request is incomplete or out of range.
    pub async fn execute(
        &self,
        request: ValidateSuitabilityRequestDto,
    ) -> Result<SuitabilityReport, SuitabilityError> {
        // 1. Boundary validation
        let input = request.into_domain()?;

        // 2. Engine
        let started = Instant::now();
        let validation =
            engine::validate_suitability(&input.profile, &input.portfolio, &input.order);
        record_validation(validation.status.as_str(), started.elapsed().as_secs_f64());

        // 3. Envelope
        let report = SuitabilityReport::issue(input.profile, validation);

        tracing::info!(
            report_id = %report.id,
            status = %report.validation.status,
            current_risk = %report.validation.current_risk.round_dp(4),
            projected_risk = %report.validation.projected_risk.round_dp(4),
            max_permitted_score = %report.validation.max_permitted_score,
            holdings = input.portfolio.len(),
            "Suitability validation completed"
        );

        // 4. Audit
        if let Err(e) = self.audit.record_validation(&report).await {
            tracing::warn!(report_id = %report.id, error = %e, "Failed to record validation audit");
        }

        Ok(report)
    }
}
