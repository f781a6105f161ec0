//! Audit trail adapters.

mod in_memory;

pub use in_memory::{AuditEntry, InMemoryAuditSink};
