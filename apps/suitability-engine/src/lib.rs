// Allow unwrap/expect in tests - tests should panic on unexpected errors
// Allow test-specific patterns and pedantic lints in test code
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::significant_drop_tightening,
        clippy::too_many_lines,
        clippy::needless_pass_by_value,
        clippy::default_trait_access,
        clippy::items_after_statements
    )
)]

//! Suitability Engine - Rust Core Library
//!
//! Deterministic portfolio suitability validation.
//!
//! # Architecture (Clean Architecture + DDD + Hexagonal)
//!
//! ## Layers (inside → outside)
//!
//! - **Domain**: Core business logic
//!   - `suitability`: Weighted-average risk engine, validation and drift reports
//!   - `client`: Owner-scoped client records with their main portfolio
//!   - `shared`: Money, timestamps, identifiers
//!
//! - **Application**: Use cases and orchestration
//!   - `ports`: `AuditSinkPort`, `SessionPort`, `ReportRendererPort`
//!   - `use_cases`: `ValidateSuitability`, `MonitorDrift`, `RecordAcknowledgement`,
//!     `RenderReport`, `ManageClients`
//!   - `dto`: Request shapes and their validation into domain types
//!
//! - **Infrastructure**: Adapters (implementations)
//!   - `http`: axum REST API
//!   - `persistence`: Client repository (in-memory)
//!   - `audit`: Audit trail on the `audit` tracing target
//!   - `session`: Static bearer token table
//!   - `report`: Plain-text report renderer

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::pedantic)]

// =============================================================================
// Clean Architecture Layers
// =============================================================================

/// Domain layer - Core business logic with no external dependencies.
pub mod domain;

/// Application layer - Use cases and port definitions.
pub mod application;

/// Infrastructure layer - Adapters and external integrations.
pub mod infrastructure;

// =============================================================================
// Cross-cutting
// =============================================================================

/// YAML configuration.
pub mod config;

/// API error codes and HTTP error responses.
pub mod error;

/// Prometheus metrics.
pub mod observability;

/// Tracing subscriber setup.
pub mod telemetry;

// =============================================================================
// Re-exports from Clean Architecture
// =============================================================================

// Domain re-exports
pub use domain::client::{Client, ClientError, ClientRepository};
pub use domain::shared::{ClientId, Money, OwnerId, ReportId, Timestamp};
pub use domain::suitability::{
    DriftReport, DriftSeverity, Holding, ProfileClass, ProposedOrder, RiskProfile,
    SuitabilityError, SuitabilityReport, ValidationResult, ValidationStatus, engine,
};

// Application re-exports
pub use application::ports::{AuditSinkPort, ReportRendererPort, SessionPort};
pub use application::use_cases::{
    ManageClientsUseCase, MonitorDriftUseCase, RecordAcknowledgementUseCase, RenderReportUseCase,
    ValidateSuitabilityUseCase,
};

// Infrastructure re-exports
pub use infrastructure::audit::InMemoryAuditSink;
pub use infrastructure::http::{AppState, create_router};
pub use infrastructure::persistence::InMemoryClientRepository;
pub use infrastructure::report::TextReportRenderer;
pub use infrastructure::session::StaticTokenSessionProvider;

pub use error::{ApiError, ErrorCode};
