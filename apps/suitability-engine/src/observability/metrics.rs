//! Prometheus metrics for the suitability engine.
//!
//! Recording functions are no-ops until a recorder is installed with
//! [`init_metrics`], so they are safe to call from tests and from binaries
//! that run with metrics disabled.
//!
//! # Example
//!
//! ```ignore
//! use suitability_engine::observability::{init_metrics, MetricsConfig};
//!
//! init_metrics(&MetricsConfig::default())?;
//! record_validation("approved", 0.0004);
//! ```

use metrics::{counter, histogram};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;

/// Configuration for the metrics exporter.
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Address to bind the metrics HTTP listener.
    pub listen_addr: SocketAddr,
    /// Histogram buckets for latency measurements (in seconds).
    pub latency_buckets: Vec<f64>,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 9090)),
            // Engine calls are in-memory arithmetic: 10us to 100ms
            latency_buckets: vec![
                0.000_01, 0.000_05, 0.0001, 0.0005, 0.001, 0.005, 0.01, 0.05, 0.1,
            ],
        }
    }
}

impl MetricsConfig {
    /// Create a new metrics configuration with custom address.
    #[must_use]
    pub fn with_addr(addr: SocketAddr) -> Self {
        Self {
            listen_addr: addr,
            ..Default::default()
        }
    }
}

/// Initialize the Prometheus metrics exporter.
///
/// This starts an HTTP server that exposes metrics at `/metrics`.
///
/// # Errors
///
/// Returns an error if the metrics exporter fails to start (e.g., port already in use).
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    PrometheusBuilder::new()
        .with_http_listener(config.listen_addr)
        .set_buckets(&config.latency_buckets)
        .map_err(|e| MetricsError::Configuration(e.to_string()))?
        .install()
        .map_err(|e| MetricsError::Installation(e.to_string()))?;

    tracing::info!(
        addr = %config.listen_addr,
        "Prometheus metrics exporter started"
    );

    Ok(())
}

/// Error type for metrics operations.
#[derive(Debug, thiserror::Error)]
pub enum MetricsError {
    /// Failed to configure metrics exporter.
    #[error("metrics configuration error: {0}")]
    Configuration(String),
    /// Failed to install metrics exporter.
    #[error("metrics installation error: {0}")]
    Installation(String),
}

// ============================================================================
// Suitability Metrics
// ============================================================================

/// Record a completed suitability validation.
///
/// # Arguments
///
/// * `status` - Outcome label (`approved`, `alert`, `rejected`)
/// * `duration_seconds` - Time spent in the engine
pub fn record_validation(status: &str, duration_seconds: f64) {
    counter!(
        "suitability_validations_total",
        "status" => status.to_string()
    )
    .increment(1);

    histogram!("suitability_validation_duration_seconds").record(duration_seconds);
}

/// Record a passive drift check.
///
/// # Arguments
///
/// * `severity` - Severity label (`low`, `medium`, `high`, `critical`)
pub fn record_drift_check(severity: &str) {
    counter!(
        "suitability_drift_checks_total",
        "severity" => severity.to_string()
    )
    .increment(1);
}

/// Record an accepted acknowledgement term.
pub fn record_acknowledgement() {
    counter!("suitability_acknowledgements_total").increment(1);
}

/// Record a request rejected at the input boundary.
///
/// # Arguments
///
/// * `code` - Error code (e.g., `INVALID_ORDER`)
pub fn record_input_rejection(code: &str) {
    counter!(
        "suitability_input_rejections_total",
        "code" => code.to_string()
    )
    .increment(1);
}
