//! Acknowledgement DTOs

use serde::{Deserialize, Serialize};

use crate::domain::shared::{ReportId, is_valid_email};
use crate::domain::suitability::{AcknowledgementRecord, ClientContact, SuitabilityError};

/// Request DTO for an acknowledgement term acceptance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AcknowledgementRequestDto {
    /// Report being acknowledged.
    pub report_id: Option<String>,
    /// Client name.
    pub client_name: Option<String>,
    /// Client email.
    pub client_email: Option<String>,
    /// Must be `true`.
    pub accepted: Option<bool>,
    /// Optional free-text justification.
    pub justification: Option<String>,
}

/// Validated acknowledgement submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgementSubmission {
    /// Report being acknowledged.
    pub report_id: ReportId,
    /// Client identification.
    pub client: ClientContact,
    /// Justification, if the client gave one.
    pub justification: Option<String>,
}

/// Where an acknowledgement request came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestOrigin {
    /// Source address (`"unknown"` when not available).
    pub source_ip: String,
    /// User agent (`"unknown"` when not available).
    pub user_agent: String,
}

impl Default for RequestOrigin {
    fn default() -> Self {
        Self {
            source_ip: "unknown".to_string(),
            user_agent: "unknown".to_string(),
        }
    }
}

fn invalid(field: &str, message: &str) -> SuitabilityError {
    SuitabilityError::InvalidAcknowledgement {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn non_blank(value: Option<String>, field: &str) -> Result<String, SuitabilityError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| invalid(field, "is required"))
}

impl AcknowledgementRequestDto {
    /// Validate the request.
    ///
    /// # Errors
    ///
    /// Returns `SuitabilityError::InvalidAcknowledgement` when a field is
    /// missing, the email is malformed, or `accepted` is not `true`.
    pub fn into_submission(self) -> Result<AcknowledgementSubmission, SuitabilityError> {
        let report_id = non_blank(self.report_id, "report_id")?;
        let name = non_blank(self.client_name, "client_name")?;
        let email = non_blank(self.client_email, "client_email")?;
        if !is_valid_email(&email) {
            return Err(invalid("client_email", "is not a valid email address"));
        }
        if self.accepted != Some(true) {
            return Err(invalid("accepted", "the acknowledgement term must be accepted"));
        }

        Ok(AcknowledgementSubmission {
            report_id: ReportId::new(report_id),
            client: ClientContact { name, email },
            justification: self
                .justification
                .map(|j| j.trim().to_string())
                .filter(|j| !j.is_empty()),
        })
    }
}

/// Response DTO for a recorded acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcknowledgementResponseDto {
    /// Record identifier.
    pub acknowledgement_id: String,
    /// Acceptance time (RFC 3339).
    pub timestamp: String,
    /// Confirmation token (`AT-<ID>`).
    pub protocol: String,
}

impl From<&AcknowledgementRecord> for AcknowledgementResponseDto {
    fn from(record: &AcknowledgementRecord) -> Self {
        Self {
            acknowledgement_id: record.id.to_string(),
            timestamp: record.timestamp.to_rfc3339(),
            protocol: record.protocol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> AcknowledgementRequestDto {
        AcknowledgementRequestDto {
            report_id: Some("abc123".to_string()),
            client_name: Some("Maria Santos".to_string()),
            client_email: Some("maria@example.com".to_string()),
            accepted: Some(true),
            justification: None,
        }
    }

    #[test]
    fn valid_request_converts() {
        let submission = request().into_submission().unwrap();
        assert_eq!(submission.report_id.as_str(), "abc123");
        assert_eq!(submission.client.name, "Maria Santos");
        assert!(submission.justification.is_none());
    }

    #[test]
    fn blank_justification_is_dropped() {
        let mut dto = request();
        dto.justification = Some("   ".to_string());
        assert!(dto.into_submission().unwrap().justification.is_none());
    }

    #[test]
    fn accepted_must_be_true() {
        let mut dto = request();
        dto.accepted = Some(false);
        let err = dto.into_submission().unwrap_err();
        assert_eq!(err.field(), "accepted");

        let mut dto = request();
        dto.accepted = None;
        assert_eq!(dto.into_submission().unwrap_err().field(), "accepted");
    }

    #[test]
    fn required_fields_are_checked() {
        let mut dto = request();
        dto.report_id = Some(" ".to_string());
        assert_eq!(dto.into_submission().unwrap_err().field(), "report_id");

        let mut dto = request();
        dto.client_name = None;
        assert_eq!(dto.into_submission().unwrap_err().field(), "client_name");
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut dto = request();
        dto.client_email = Some("maria@example".to_string());
        let err = dto.into_submission().unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidAcknowledgement { .. }));
        assert_eq!(err.field(), "client_email");
    }

    #[test]
    fn default_origin_is_unknown() {
        let origin = RequestOrigin::default();
        assert_eq!(origin.source_ip, "unknown");
        assert_eq!(origin.user_agent, "unknown");
    }
}
