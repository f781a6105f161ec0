//! Application Ports (Driver and Driven)
//!
//! Ports define interfaces for interacting with external systems.
//! - **Driver Ports** (Primary/Inbound): How the world uses our application
//! - **Driven Ports** (Secondary/Outbound): How our application uses external systems

mod audit_sink_port;
mod report_renderer_port;
mod session_port;

#[cfg(test)]
pub use audit_sink_port::MockAuditSinkPort;
pub use audit_sink_port::{AuditError, AuditSinkPort, NoOpAuditSink};
pub use report_renderer_port::{RenderedReport, ReportRendererPort};
pub use session_port::SessionPort;
