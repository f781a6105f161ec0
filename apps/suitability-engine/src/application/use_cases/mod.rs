//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.

mod manage_clients;
mod monitor_drift;
mod record_acknowledgement;
mod render_report;
mod validate_suitability;

pub use manage_clients::ManageClientsUseCase;
pub use monitor_drift::MonitorDriftUseCase;
pub use record_acknowledgement::{AcknowledgementError, RecordAcknowledgementUseCase};
pub use render_report::RenderReportUseCase;
pub use validate_suitability::ValidateSuitabilityUseCase;
