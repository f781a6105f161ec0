//! Session Port (Driven Port)
//!
//! Resolves an opaque bearer credential into the identity that owns client
//! records. How credentials are issued is outside this service.

use async_trait::async_trait;

use crate::domain::shared::OwnerId;

/// Port for authenticating requests.
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// Resolve a bearer token; `None` when the token is unknown.
    async fn authenticate(&self, token: &str) -> Option<OwnerId>;
}
