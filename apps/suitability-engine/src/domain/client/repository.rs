//! Client Repository Trait
//!
//! Persistence abstraction for client records. Every lookup is scoped to
//! an owner: a record owned by someone else is indistinguishable from a
//! missing one.

use async_trait::async_trait;

use super::aggregate::Client;
use super::errors::ClientError;
use crate::domain::shared::{ClientId, OwnerId};

/// Repository trait for Client persistence.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Save a client (insert or update).
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn save(&self, client: &Client) -> Result<(), ClientError>;

    /// Find a client by ID, only if owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_for_owner(
        &self,
        owner: &OwnerId,
        id: &ClientId,
    ) -> Result<Option<Client>, ClientError>;

    /// List all clients of `owner`, newest first.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Client>, ClientError>;

    /// Delete a client owned by `owner`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if absent or owned by someone else.
    async fn delete(&self, owner: &OwnerId, id: &ClientId) -> Result<(), ClientError>;
}
