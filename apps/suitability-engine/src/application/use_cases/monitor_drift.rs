//! Monitor Drift Use Case

use crate::application::dto::DriftRequestDto;
use crate::domain::suitability::{DriftReport, SuitabilityError, engine};
use crate::observability::record_drift_check;

/// Use case for checking a portfolio for passive drift.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonitorDriftUseCase;

impl MonitorDriftUseCase {
    /// Create a new MonitorDriftUseCase.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Execute the use case.
    ///
    /// # Errors
    ///
    /// Returns `SuitabilityError` if the portfolio or ceiling is invalid.
    pub fn execute(&self, request: DriftRequestDto) -> Result<DriftReport, SuitabilityError> {
        let (portfolio, max_risk_score) = request.into_domain()?;
        let report = engine::monitor_passive_drift(&portfolio, max_risk_score);
        observe(&report);
        Ok(report)
    }
}

/// Log and count a drift check.
pub(crate) fn observe(report: &DriftReport) {
    record_drift_check(report.severity.as_str());

    if report.is_out_of_band {
        tracing::warn!(
            current_risk = %report.current_risk.round_dp(4),
            max_permitted_score = %report.max_permitted_score,
            excess_percent = %report.excess_percent.round_dp(2),
            severity = %report.severity,
            "Portfolio drifted out of its suitability band"
        );
    } else {
        tracing::debug!(
            current_risk = %report.current_risk.round_dp(4),
            "Portfolio within suitability band"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::suitability::DriftSeverity;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn out_of_band_portfolio_is_reported() {
        let request: DriftRequestDto = serde_json::from_value(json!({
            "current_portfolio": [
                { "name": "Crypto", "risk_score": 4.5, "amount_invested": 60000 },
                { "name": "Treasury", "risk_score": 1.0, "amount_invested": 40000 }
            ],
            "max_risk_score": 2.5
        }))
        .unwrap();

        let report = MonitorDriftUseCase::new().execute(request).unwrap();
        assert!(report.is_out_of_band);
        assert_eq!(report.current_risk, dec!(3.1));
        assert_eq!(report.severity, DriftSeverity::High);
    }

    #[test]
    fn missing_ceiling_is_rejected() {
        let request: DriftRequestDto =
            serde_json::from_value(json!({ "current_portfolio": [] })).unwrap();
        let err = MonitorDriftUseCase::new().execute(request).unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidProfile { .. }));
    }
}
