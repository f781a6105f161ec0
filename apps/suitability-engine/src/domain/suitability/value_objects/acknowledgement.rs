//! Client acknowledgement ("awareness term") record.
//!
//! Recorded when a client accepts to proceed with an order whose validation
//! ended in [`super::ValidationStatus::Alert`].

use serde::{Deserialize, Serialize};

use crate::domain::shared::{AcknowledgementId, ReportId, Timestamp};

/// Event type written to the audit trail.
pub const ACKNOWLEDGEMENT_EVENT_TYPE: &str = "CLIENT_ACKNOWLEDGEMENT";

/// Channel through which acknowledgements are captured.
pub const ACKNOWLEDGEMENT_ORIGIN: &str = "WEB_APP";

/// Regulation the acknowledgement is recorded under.
pub const ACKNOWLEDGEMENT_REGULATION: &str = "CVM_30";

/// Justification used when the client gives none.
pub const DEFAULT_JUSTIFICATION: &str =
    "Client is aware of the risk and chose to proceed with the order";

/// Client identification carried by the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientContact {
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
}

/// Compliance metadata attached to the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    /// Audit event type.
    pub event_type: String,
    /// Channel that captured the acceptance.
    pub origin: String,
    /// Regulation reference.
    pub regulation: String,
    /// Client's justification.
    pub justification: String,
}

/// Recorded acceptance of an acknowledgement term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcknowledgementRecord {
    /// Record identifier.
    pub id: AcknowledgementId,
    /// Report the client acknowledged.
    pub report_id: ReportId,
    /// Client identification.
    pub client: ClientContact,
    /// Always true for a recorded term.
    pub accepted: bool,
    /// When the term was accepted.
    pub timestamp: Timestamp,
    /// Source address of the request.
    pub source_ip: String,
    /// User agent of the request.
    pub user_agent: String,
    /// Compliance metadata.
    pub audit: AuditInfo,
}

impl AcknowledgementRecord {
    /// Record a client's acceptance of the term for `report_id`, stamped now.
    #[must_use]
    pub fn accept(
        report_id: ReportId,
        client: ClientContact,
        justification: Option<String>,
        source_ip: impl Into<String>,
        user_agent: impl Into<String>,
    ) -> Self {
        Self {
            id: AcknowledgementId::generate(),
            report_id,
            client,
            accepted: true,
            timestamp: Timestamp::now(),
            source_ip: source_ip.into(),
            user_agent: user_agent.into(),
            audit: AuditInfo {
                event_type: ACKNOWLEDGEMENT_EVENT_TYPE.to_string(),
                origin: ACKNOWLEDGEMENT_ORIGIN.to_string(),
                regulation: ACKNOWLEDGEMENT_REGULATION.to_string(),
                justification: justification
                    .unwrap_or_else(|| DEFAULT_JUSTIFICATION.to_string()),
            },
        }
    }

    /// Confirmation token handed back to the caller.
    #[must_use]
    pub fn protocol(&self) -> String {
        format!("AT-{}", self.id.as_str().to_uppercase())
    }
}
