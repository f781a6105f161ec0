//! HTTP Controller (Driver Adapter)
//!
//! Axum-based REST API that delegates to application use cases.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::application::dto::{
    AcknowledgementRequestDto, AcknowledgementResponseDto, CreateClientDto, DriftRequestDto,
    RenderReportRequestDto, UpdateClientDto, ValidateSuitabilityRequestDto,
};
use crate::application::ports::{AuditSinkPort, ReportRendererPort, SessionPort};
use crate::application::use_cases::{
    ManageClientsUseCase, MonitorDriftUseCase, RecordAcknowledgementUseCase, RenderReportUseCase,
    ValidateSuitabilityUseCase,
};
use crate::domain::client::ClientRepository;
use crate::domain::shared::{ClientId, OwnerId};
use crate::error::ApiError;

use super::request::{ApiJson, authenticate, origin_from_headers};
use super::response::{ApiResponse, DownloadResponse, HealthResponse};

/// Application state shared across handlers.
pub struct AppState<A, S, C, R>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    /// Use case for validating proposed orders.
    pub validate_suitability: Arc<ValidateSuitabilityUseCase<A>>,
    /// Use case for passive drift checks.
    pub monitor_drift: MonitorDriftUseCase,
    /// Use case for recording acknowledgement terms.
    pub record_acknowledgement: Arc<RecordAcknowledgementUseCase<A>>,
    /// Use case for rendering report documents.
    pub render_report: Arc<RenderReportUseCase<R>>,
    /// Use case for client records.
    pub manage_clients: Arc<ManageClientsUseCase<C>>,
    /// Bearer token resolution for client routes.
    pub session: Arc<S>,
    /// Application version.
    pub version: String,
}

impl<A, S, C, R> Clone for AppState<A, S, C, R>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    fn clone(&self) -> Self {
        Self {
            validate_suitability: Arc::clone(&self.validate_suitability),
            monitor_drift: self.monitor_drift,
            record_acknowledgement: Arc::clone(&self.record_acknowledgement),
            render_report: Arc::clone(&self.render_report),
            manage_clients: Arc::clone(&self.manage_clients),
            session: Arc::clone(&self.session),
            version: self.version.clone(),
        }
    }
}

impl<A, S, C, R> AppState<A, S, C, R>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    async fn owner(&self, headers: &HeaderMap) -> Result<OwnerId, ApiError> {
        authenticate(self.session.as_ref(), headers).await
    }
}

/// Create the HTTP router with all endpoints.
pub fn create_router<A, S, C, R>(state: AppState<A, S, C, R>) -> Router
where
    A: AuditSinkPort + 'static,
    S: SessionPort + 'static,
    C: ClientRepository + 'static,
    R: ReportRendererPort + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/suitability/validate", post(validate_suitability))
        .route("/api/v1/suitability/drift", post(monitor_drift))
        .route("/api/v1/suitability/report", post(render_report))
        .route(
            "/api/v1/suitability/acknowledgements",
            post(record_acknowledgement),
        )
        .route("/api/v1/clients", get(list_clients).post(create_client))
        .route(
            "/api/v1/clients/{id}",
            get(get_client).put(update_client).delete(delete_client),
        )
        .route("/api/v1/clients/{id}/portfolio", get(client_portfolio))
        .route("/api/v1/clients/{id}/drift", get(client_drift))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check<A, S, C, R>(State(state): State<AppState<A, S, C, R>>) -> impl IntoResponse
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
    })
}

/// Validate a proposed order against a profile and portfolio.
async fn validate_suitability<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    ApiJson(request): ApiJson<ValidateSuitabilityRequestDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let report = state.validate_suitability.execute(request).await?;
    Ok(Json(ApiResponse::ok(report)))
}

/// Passive drift of a submitted portfolio.
async fn monitor_drift<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    ApiJson(request): ApiJson<DriftRequestDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let report = state.monitor_drift.execute(request)?;
    Ok(Json(ApiResponse::ok(report)))
}

/// Render a validation report as a text attachment.
async fn render_report<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    ApiJson(request): ApiJson<RenderReportRequestDto>,
) -> impl IntoResponse
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    DownloadResponse(state.render_report.execute(&request.report))
}

/// Record a client's acceptance of an acknowledgement term.
async fn record_acknowledgement<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<AcknowledgementRequestDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let record = state
        .record_acknowledgement
        .execute(request, origin_from_headers(&headers))
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(AcknowledgementResponseDto::from(&record))),
    ))
}

/// List the caller's clients.
async fn list_clients<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let clients = state.manage_clients.list(&owner).await?;
    Ok(Json(ApiResponse::ok(clients)))
}

/// Create a client record.
async fn create_client<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    ApiJson(request): ApiJson<CreateClientDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let client = state.manage_clients.create(&owner, request).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(client))))
}

/// Fetch one client record.
async fn get_client<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let client = state.manage_clients.get(&owner, &ClientId::new(id)).await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// Partially update a client record.
async fn update_client<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateClientDto>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let client = state
        .manage_clients
        .update(&owner, &ClientId::new(id), request)
        .await?;
    Ok(Json(ApiResponse::ok(client)))
}

/// Delete a client record.
async fn delete_client<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    state
        .manage_clients
        .delete(&owner, &ClientId::new(id))
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Main portfolio of a client.
async fn client_portfolio<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let portfolio = state
        .manage_clients
        .portfolio(&owner, &ClientId::new(id))
        .await?;
    Ok(Json(ApiResponse::ok(portfolio)))
}

/// Passive drift of a client's stored portfolio.
async fn client_drift<A, S, C, R>(
    State(state): State<AppState<A, S, C, R>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
    A: AuditSinkPort,
    S: SessionPort,
    C: ClientRepository,
    R: ReportRendererPort,
{
    let owner = state.owner(&headers).await?;
    let report = state
        .manage_clients
        .drift(&owner, &ClientId::new(id))
        .await?;
    Ok(Json(ApiResponse::ok(report)))
}
