//! Suitability input errors.
//!
//! The engine itself never fails. These errors are raised while turning
//! request shapes into engine inputs, before the engine is invoked.

use std::fmt;

/// Errors raised when suitability inputs do not satisfy the engine's preconditions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuitabilityError {
    /// The client risk profile is missing or malformed.
    InvalidProfile {
        /// Field path (e.g., "risk_profile.max_risk_score").
        field: String,
        /// Error message.
        message: String,
    },

    /// The current portfolio is missing or contains an invalid holding.
    InvalidPortfolio {
        /// Field path (e.g., "current_portfolio[2].amount_invested").
        field: String,
        /// Error message.
        message: String,
    },

    /// The proposed order is missing or malformed.
    InvalidOrder {
        /// Field path (e.g., "proposed_order.risk_score").
        field: String,
        /// Error message.
        message: String,
    },

    /// An acknowledgement term submission is incomplete.
    InvalidAcknowledgement {
        /// Field path (e.g., "accepted").
        field: String,
        /// Error message.
        message: String,
    },
}

impl SuitabilityError {
    /// Field path the error refers to.
    #[must_use]
    pub fn field(&self) -> &str {
        match self {
            Self::InvalidProfile { field, .. }
            | Self::InvalidPortfolio { field, .. }
            | Self::InvalidOrder { field, .. }
            | Self::InvalidAcknowledgement { field, .. } => field,
        }
    }

    /// Human-readable message without the field prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidProfile { message, .. }
            | Self::InvalidPortfolio { message, .. }
            | Self::InvalidOrder { message, .. }
            | Self::InvalidAcknowledgement { message, .. } => message,
        }
    }
}

impl fmt::Display for SuitabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidProfile { field, message } => {
                write!(f, "Invalid risk profile [{field}]: {message}")
            }
            Self::InvalidPortfolio { field, message } => {
                write!(f, "Invalid portfolio [{field}]: {message}")
            }
            Self::InvalidOrder { field, message } => {
                write!(f, "Invalid proposed order [{field}]: {message}")
            }
            Self::InvalidAcknowledgement { field, message } => {
                write!(f, "Invalid acknowledgement [{field}]: {message}")
            }
        }
    }
}

impl std::error::Error for SuitabilityError {}
