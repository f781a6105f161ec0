//! Observability module for metrics.
//!
//! Prometheus export of validation, drift and acknowledgement activity.
//! Tracing setup lives in [`crate::telemetry`].

mod metrics;

pub use metrics::{
    MetricsConfig, MetricsError, init_metrics, record_acknowledgement, record_drift_check,
    record_input_rejection, record_validation,
};
