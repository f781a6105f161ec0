//! Shared value objects.

mod email;
mod identifiers;
mod money;
mod timestamp;

pub use email::is_valid_email;
pub use identifiers::{AcknowledgementId, ClientId, OwnerId, PortfolioId, ReportId};
pub use money::Money;
pub use timestamp::Timestamp;
