//! HTTP response shapes.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::application::ports::RenderedReport;

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Success envelope: `{ "success": true, "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Always `true`; failures use `HttpErrorResponse`.
    pub success: bool,
    /// Payload.
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// Wrap a payload.
    pub const fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// A rendered report sent as a file attachment.
#[derive(Debug, Clone)]
pub struct DownloadResponse(pub RenderedReport);

impl IntoResponse for DownloadResponse {
    fn into_response(self) -> Response {
        let RenderedReport {
            filename,
            content_type,
            content,
        } = self.0;
        (
            [
                (header::CONTENT_TYPE, content_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{filename}\""),
                ),
            ],
            content,
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn envelope_serializes_success_flag() {
        let json = serde_json::to_value(ApiResponse::ok(42)).unwrap();
        assert_eq!(json, serde_json::json!({ "success": true, "data": 42 }));
    }

    #[test]
    fn download_sets_attachment_headers() {
        let response = DownloadResponse(RenderedReport {
            filename: "suitability-report-abc.txt".to_string(),
            content_type: "text/plain; charset=utf-8",
            content: "body".to_string(),
        })
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=\"suitability-report-abc.txt\""
        );
    }
}
