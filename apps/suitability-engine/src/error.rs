//! API error handling for the suitability engine.
//!
//! Every failure leaving the HTTP boundary is an [`ApiError`]: a stable
//! [`ErrorCode`], a human-readable message and, for input errors, the path
//! of the offending field.
//!
//! # HTTP Status Codes
//!
//! | Code | Status | Usage |
//! |------|--------|-------|
//! | `INVALID_REQUEST` | 400 | Malformed JSON or wrong field types |
//! | `INVALID_PROFILE` | 400 | Risk profile missing or out of range |
//! | `INVALID_PORTFOLIO` | 400 | Portfolio missing or invalid holding |
//! | `INVALID_ORDER` | 400 | Proposed order missing or out of range |
//! | `INVALID_ACKNOWLEDGEMENT` | 400 | Acknowledgement term incomplete |
//! | `INVALID_CLIENT` | 400 | Client record fields invalid |
//! | `UNAUTHENTICATED` | 401 | Missing or unknown bearer token |
//! | `CLIENT_NOT_FOUND` | 404 | Client absent or owned by someone else |
//! | `INTERNAL_ERROR` | 500 | Unexpected failure (details are logged only) |

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::use_cases::AcknowledgementError;
use crate::domain::client::ClientError;
use crate::domain::suitability::SuitabilityError;
use crate::observability::record_input_rejection;

/// Message returned for every internal error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error codes for the suitability engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Input errors (400)
    /// Invalid request format or field types.
    InvalidRequest,
    /// Invalid or missing risk profile.
    InvalidProfile,
    /// Invalid or missing portfolio.
    InvalidPortfolio,
    /// Invalid or missing proposed order.
    InvalidOrder,
    /// Incomplete acknowledgement term.
    InvalidAcknowledgement,
    /// Invalid client record fields.
    InvalidClient,

    // Authentication (401)
    /// Missing or unknown credentials.
    Unauthenticated,

    // Not found (404)
    /// Client record not found.
    ClientNotFound,

    // Internal (500)
    /// Internal server error.
    InternalError,
}

impl ErrorCode {
    /// HTTP status for this error.
    #[must_use]
    pub const fn http_status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest
            | Self::InvalidProfile
            | Self::InvalidPortfolio
            | Self::InvalidOrder
            | Self::InvalidAcknowledgement
            | Self::InvalidClient => StatusCode::BAD_REQUEST,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::ClientNotFound => StatusCode::NOT_FOUND,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable reason string.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::InvalidProfile => "INVALID_PROFILE",
            Self::InvalidPortfolio => "INVALID_PORTFOLIO",
            Self::InvalidOrder => "INVALID_ORDER",
            Self::InvalidAcknowledgement => "INVALID_ACKNOWLEDGEMENT",
            Self::InvalidClient => "INVALID_CLIENT",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::ClientNotFound => "CLIENT_NOT_FOUND",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Whether the caller sent input the service refused.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest
                | Self::InvalidProfile
                | Self::InvalidPortfolio
                | Self::InvalidOrder
                | Self::InvalidAcknowledgement
                | Self::InvalidClient
        )
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.reason())
    }
}

/// An error returned by the HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct ApiError {
    code: ErrorCode,
    message: String,
    field: Option<String>,
}

impl ApiError {
    /// Create a new API error.
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Attach the path of the offending field.
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Get the error code.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the field path, if any.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Convert to the JSON error body.
    #[must_use]
    pub fn to_http_response(&self) -> HttpErrorResponse {
        HttpErrorResponse {
            success: false,
            message: self.message.clone(),
            code: self.code.reason().to_string(),
            field: self.field.clone(),
        }
    }
}

/// Convenience constructors for common errors.
impl ApiError {
    /// Invalid request format.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Missing or unknown credentials.
    #[must_use]
    pub fn unauthenticated() -> Self {
        Self::new(ErrorCode::Unauthenticated, "Authentication required")
    }

    /// Internal error. `cause` is logged, never returned to the caller.
    #[must_use]
    pub fn internal(cause: &dyn std::fmt::Display) -> Self {
        tracing::error!(error = %cause, "Internal error while handling request");
        Self::new(ErrorCode::InternalError, INTERNAL_ERROR_MESSAGE)
    }
}

impl From<SuitabilityError> for ApiError {
    fn from(err: SuitabilityError) -> Self {
        let code = match &err {
            SuitabilityError::InvalidProfile { .. } => ErrorCode::InvalidProfile,
            SuitabilityError::InvalidPortfolio { .. } => ErrorCode::InvalidPortfolio,
            SuitabilityError::InvalidOrder { .. } => ErrorCode::InvalidOrder,
            SuitabilityError::InvalidAcknowledgement { .. } => ErrorCode::InvalidAcknowledgement,
        };
        let field = err.field().to_string();
        Self::new(code, err.to_string()).with_field(field)
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidParameters { ref field, .. } => {
                let field = field.clone();
                Self::new(ErrorCode::InvalidClient, err.to_string()).with_field(field)
            }
            ClientError::NotFound { .. } => Self::new(ErrorCode::ClientNotFound, err.to_string()),
            ClientError::Storage { .. } => Self::internal(&err),
        }
    }
}

impl From<AcknowledgementError> for ApiError {
    fn from(err: AcknowledgementError) -> Self {
        match err {
            AcknowledgementError::Invalid(e) => e.into(),
            AcknowledgementError::Audit(e) => Self::internal(&e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.code.is_input_error() {
            record_input_rejection(self.code.reason());
            tracing::debug!(code = %self.code, field = ?self.field, message = %self.message, "Request rejected");
        }

        (self.code.http_status(), Json(self.to_http_response())).into_response()
    }
}

/// HTTP error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub message: String,
    /// Error code string.
    pub code: String,
    /// Offending field path (input errors only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::AuditError;

    #[test]
    fn error_code_http_mapping() {
        assert_eq!(ErrorCode::InvalidOrder.http_status(), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorCode::Unauthenticated.http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorCode::ClientNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn only_bad_requests_are_input_errors() {
        assert!(ErrorCode::InvalidRequest.is_input_error());
        assert!(ErrorCode::InvalidClient.is_input_error());
        assert!(!ErrorCode::Unauthenticated.is_input_error());
        assert!(!ErrorCode::InternalError.is_input_error());
    }

    #[test]
    fn suitability_errors_keep_section_and_field() {
        let err: ApiError = SuitabilityError::InvalidOrder {
            field: "proposed_order.order_amount".to_string(),
            message: "must be greater than zero".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InvalidOrder);
        assert_eq!(err.field(), Some("proposed_order.order_amount"));
        assert!(err.message().contains("must be greater than zero"));
    }

    #[test]
    fn client_errors_map_to_codes() {
        let err: ApiError = ClientError::NotFound {
            client_id: "c1".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::ClientNotFound);
        assert!(err.field().is_none());

        let err: ApiError = ClientError::Storage {
            message: "disk on fire".to_string(),
        }
        .into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn audit_failure_does_not_leak_detail() {
        let err: ApiError = AcknowledgementError::Audit(AuditError::Unavailable {
            message: "10.0.0.5:5432 refused".to_string(),
        })
        .into();
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert!(!err.message().contains("10.0.0.5"));
    }

    #[test]
    fn http_body_shape() {
        let body = ApiError::invalid_request("bad json").to_http_response();
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "INVALID_REQUEST");
        assert!(json.get("field").is_none());
    }

    #[test]
    fn error_display() {
        let err = ApiError::unauthenticated();
        assert_eq!(err.to_string(), "[UNAUTHENTICATED] Authentication required");
    }
}
