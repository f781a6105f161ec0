//! In-memory client repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::client::{Client, ClientError, ClientRepository};
use crate::domain::shared::{ClientId, OwnerId};

/// In-memory implementation of `ClientRepository`.
///
/// Records live for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<String, Client>>,
}

impl InMemoryClientRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored records across all owners.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn save(&self, client: &Client) -> Result<(), ClientError> {
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        clients.insert(client.id().to_string(), client.clone());
        Ok(())
    }

    async fn find_for_owner(
        &self,
        owner: &OwnerId,
        id: &ClientId,
    ) -> Result<Option<Client>, ClientError> {
        let clients = self.clients.read().unwrap_or_else(PoisonError::into_inner);
        Ok(clients
            .get(id.as_str())
            .filter(|c| c.is_owned_by(owner))
            .cloned())
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Client>, ClientError> {
        let clients = self.clients.read().unwrap_or_else(PoisonError::into_inner);
        let mut owned: Vec<Client> = clients
            .values()
            .filter(|c| c.is_owned_by(owner))
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        Ok(owned)
    }

    async fn delete(&self, owner: &OwnerId, id: &ClientId) -> Result<(), ClientError> {
        let mut clients = self
            .clients
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        match clients.get(id.as_str()) {
            Some(client) if client.is_owned_by(owner) => {
                clients.remove(id.as_str());
                Ok(())
            }
            _ => Err(ClientError::NotFound {
                client_id: id.to_string(),
            }),
        }
    }
}
