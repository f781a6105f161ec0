//! Suitability Engine Binary
//!
//! Serves the suitability engine over HTTP.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin suitability-engine
//! ```
//!
//! # Environment Variables
//!
//! - `SUITABILITY_CONFIG`: Path of the YAML config (default: config.yaml)
//! - `RUST_LOG`: Log filter, overrides `observability.logging.level`
//!
//! The config file may reference any variable with `${VAR}` or
//! `${VAR:-default}`.

use std::net::SocketAddr;
use std::sync::Arc;

use suitability_engine::application::use_cases::{
    ManageClientsUseCase, MonitorDriftUseCase, RecordAcknowledgementUseCase, RenderReportUseCase,
    ValidateSuitabilityUseCase,
};
use suitability_engine::config::{Config, ConfigError, DEFAULT_CONFIG_PATH, load_config};
use suitability_engine::infrastructure::audit::InMemoryAuditSink;
use suitability_engine::infrastructure::http::{AppState, create_router};
use suitability_engine::infrastructure::persistence::InMemoryClientRepository;
use suitability_engine::infrastructure::report::TextReportRenderer;
use suitability_engine::infrastructure::session::StaticTokenSessionProvider;
use suitability_engine::observability::{MetricsConfig, init_metrics};
use suitability_engine::telemetry::init_tracing;
use tokio::net::TcpListener;
use tokio::signal;

/// Concrete application state served by the binary.
type ConcreteAppState = AppState<
    InMemoryAuditSink,
    StaticTokenSessionProvider,
    InMemoryClientRepository,
    TextReportRenderer,
>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let explicit_path = std::env::var("SUITABILITY_CONFIG").ok();
    let (config, defaulted) = read_config(explicit_path.as_deref())?;

    init_tracing(&config.observability.logging)?;

    tracing::info!("Starting Suitability Engine");
    if defaulted {
        tracing::warn!(
            path = DEFAULT_CONFIG_PATH,
            "Config file not found, using built-in defaults"
        );
    }
    log_config(&config);

    if config.observability.metrics.enabled {
        let addr = SocketAddr::from(([0, 0, 0, 0], config.observability.metrics.listen_port));
        init_metrics(&MetricsConfig::with_addr(addr))?;
    }

    let app = create_router(create_state(&config));

    let listener = TcpListener::bind(config.server.listen_address()).await?;
    tracing::info!(addr = %listener.local_addr()?, "HTTP server starting");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  POST /api/v1/suitability/validate");
    tracing::info!("  POST /api/v1/suitability/drift");
    tracing::info!("  POST /api/v1/suitability/report");
    tracing::info!("  POST /api/v1/suitability/acknowledgements");
    tracing::info!("  *    /api/v1/clients[/{{id}}[/portfolio|/drift]]");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Suitability engine stopped");
    Ok(())
}

/// Load the config file.
///
/// A missing default file falls back to built-in defaults; a missing file
/// named explicitly through `SUITABILITY_CONFIG` is an error. The flag in
/// the result is true when defaults were used.
fn read_config(explicit_path: Option<&str>) -> Result<(Config, bool), ConfigError> {
    match load_config(explicit_path) {
        Ok(config) => Ok((config, false)),
        Err(e) if explicit_path.is_none() && e.is_missing_file() => Ok((Config::default(), true)),
        Err(e) => Err(e),
    }
}

/// Log the loaded configuration.
fn log_config(config: &Config) {
    tracing::info!(
        http_port = config.server.http_port,
        bind_address = %config.server.bind_address,
        metrics_enabled = config.observability.metrics.enabled,
        auth_tokens = config.auth.tokens.len(),
        institution = %config.report.institution,
        "Configuration loaded"
    );
    if config.auth.tokens.is_empty() {
        tracing::warn!("No auth tokens configured; client routes will reject every request");
    }
}

/// Wire adapters and use cases into the HTTP state.
fn create_state(config: &Config) -> ConcreteAppState {
    let audit = Arc::new(InMemoryAuditSink::new());
    let clients = Arc::new(InMemoryClientRepository::new());
    let renderer = Arc::new(TextReportRenderer::new(
        config.report.currency_symbol.clone(),
        config.report.institution.clone(),
        config.report.system_version.clone(),
    ));
    let session = Arc::new(StaticTokenSessionProvider::new(
        config
            .auth
            .tokens
            .iter()
            .map(|(token, owner)| (token.clone(), owner.clone())),
    ));

    AppState {
        validate_suitability: Arc::new(ValidateSuitabilityUseCase::new(Arc::clone(&audit))),
        monitor_drift: MonitorDriftUseCase,
        record_acknowledgement: Arc::new(RecordAcknowledgementUseCase::new(audit)),
        render_report: Arc::new(RenderReportUseCase::new(renderer)),
        manage_clients: Arc::new(ManageClientsUseCase::new(clients)),
        session,
        version: env!("CARGO_PKG_VERSION").to_string(),
    }
}

/// Wait for shutdown signal (SIGTERM or SIGINT).
///
/// # Panics
///
/// Panics if signal handlers cannot be installed.
#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("signal handler installation is critical for graceful shutdown");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("SIGTERM handler installation is critical for graceful shutdown")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, initiating shutdown");
        }
    }
}
