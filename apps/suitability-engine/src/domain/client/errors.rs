//! Client record errors.

use std::fmt;

use crate::domain::shared::DomainError;

/// Errors that can occur while managing client records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Invalid client parameters.
    InvalidParameters {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Client not found for the requesting owner.
    NotFound {
        /// Client ID.
        client_id: String,
    },

    /// Storage backend failure.
    Storage {
        /// Error message.
        message: String,
    },
}

impl ClientError {
    /// Prefix the field of an `InvalidParameters` error with a path segment.
    #[must_use]
    pub fn within(self, prefix: &str) -> Self {
        match self {
            Self::InvalidParameters { field, message } => Self::InvalidParameters {
                field: format!("{prefix}.{field}"),
                message,
            },
            other => other,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameters { field, message } => {
                write!(f, "Invalid client parameter '{field}': {message}")
            }
            Self::NotFound { client_id } => write!(f, "Client not found: {client_id}"),
            Self::Storage { message } => write!(f, "Client storage error: {message}"),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<DomainError> for ClientError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => {
                Self::InvalidParameters { field, message }
            }
        }
    }
}
