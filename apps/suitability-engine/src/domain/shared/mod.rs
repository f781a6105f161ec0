//! Shared Kernel
//!
//! Value objects and errors used across bounded contexts.

pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
pub use value_objects::{
    AcknowledgementId, ClientId, Money, OwnerId, PortfolioId, ReportId, Timestamp,
    is_valid_email,
};
