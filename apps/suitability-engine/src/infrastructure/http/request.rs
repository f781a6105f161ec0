//! HTTP request extraction.
//!
//! Bodies are deserialized into the application DTOs; this module only
//! covers what the transport adds on top: JSON rejections, bearer
//! credentials and the caller's network origin.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;

use crate::application::dto::RequestOrigin;
use crate::application::ports::SessionPort;
use crate::domain::shared::OwnerId;
use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";
const FORWARDED_FOR: &str = "x-forwarded-for";
const REAL_IP: &str = "x-real-ip";

/// JSON body extractor whose rejection uses the API error envelope.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(reject(&rejection)),
        }
    }
}

fn reject(rejection: &JsonRejection) -> ApiError {
    ApiError::invalid_request(rejection.body_text())
}

/// Bearer token from the `Authorization` header, if present.
#[must_use]
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// Resolve the request's owner through the session port.
///
/// # Errors
///
/// Returns `UNAUTHENTICATED` when the credential is missing or unknown.
pub async fn authenticate<S>(session: &S, headers: &HeaderMap) -> Result<OwnerId, ApiError>
where
    S: SessionPort + ?Sized,
{
    let Some(token) = bearer_token(headers) else {
        return Err(ApiError::unauthenticated());
    };
    session
        .authenticate(token)
        .await
        .ok_or_else(ApiError::unauthenticated)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

/// Caller address and user agent as reported by the proxy headers.
///
/// `x-forwarded-for` wins (first hop), then `x-real-ip`.
#[must_use]
pub fn origin_from_headers(headers: &HeaderMap) -> RequestOrigin {
    let mut origin = RequestOrigin::default();

    let forwarded = header_str(headers, FORWARDED_FOR)
        .and_then(|list| list.split(',').next())
        .map(str::trim)
        .filter(|ip| !ip.is_empty());
    if let Some(ip) = forwarded.or_else(|| header_str(headers, REAL_IP)) {
        origin.source_ip = ip.to_string();
    }
    if let Some(agent) = header_str(headers, header::USER_AGENT.as_str()) {
        origin.user_agent = agent.to_string();
    }

    origin
}
