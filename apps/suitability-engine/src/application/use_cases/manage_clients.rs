//! Manage Clients Use Case

use std::sync::Arc;

use super::monitor_drift::observe;
use crate::application::dto::{ClientDto, CreateClientDto, PortfolioDto, UpdateClientDto};
use crate::domain::client::{Client, ClientError, ClientRepository};
use crate::domain::shared::{ClientId, OwnerId};
use crate::domain::suitability::DriftReport;

/// Use case for owner-scoped client record management.
pub struct ManageClientsUseCase<C>
where
    C: ClientRepository,
{
    repo: Arc<C>,
}

impl<C> ManageClientsUseCase<C>
where
    C: ClientRepository,
{
    /// Create a new ManageClientsUseCase.
    pub const fn new(repo: Arc<C>) -> Self {
        Self { repo }
    }

    async fn load(&self, owner: &OwnerId, id: &ClientId) -> Result<Client, ClientError> {
        self.repo
            .find_for_owner(owner, id)
            .await?
            .ok_or_else(|| ClientError::NotFound {
                client_id: id.to_string(),
            })
    }

    /// List the owner's clients, newest first.
    pub async fn list(&self, owner: &OwnerId) -> Result<Vec<ClientDto>, ClientError> {
        let clients = self.repo.list_by_owner(owner).await?;
        Ok(clients.iter().map(ClientDto::from).collect())
    }

    /// Create a client record.
    pub async fn create(
        &self,
        owner: &OwnerId,
        request: CreateClientDto,
    ) -> Result<ClientDto, ClientError> {
        let client = Client::new(request.into_command(owner.clone())?)?;
        self.repo.save(&client).await?;

        tracing::info!(
            owner_id = %owner,
            client_id = %client.id(),
            profile_class = %client.profile_class(),
            "Client created"
        );

        Ok(ClientDto::from(&client))
    }

    /// Fetch one client record.
    pub async fn get(&self, owner: &OwnerId, id: &ClientId) -> Result<ClientDto, ClientError> {
        let client = self.load(owner, id).await?;
        Ok(ClientDto::from(&client))
    }

    /// Apply a partial update to a client record.
    pub async fn update(
        &self,
        owner: &OwnerId,
        id: &ClientId,
        request: UpdateClientDto,
    ) -> Result<ClientDto, ClientError> {
        let mut client = self.load(owner, id).await?;
        client.apply(request.into_command()?)?;
        self.repo.save(&client).await?;

        tracing::info!(owner_id = %owner, client_id = %id, "Client updated");

        Ok(ClientDto::from(&client))
    }

    /// Delete a client record.
    pub async fn delete(&self, owner: &OwnerId, id: &ClientId) -> Result<(), ClientError> {
        self.repo.delete(owner, id).await?;
        tracing::info!(owner_id = %owner, client_id = %id, "Client deleted");
        Ok(())
    }

    /// Main portfolio of a client record.
    pub async fn portfolio(
        &self,
        owner: &OwnerId,
        id: &ClientId,
    ) -> Result<PortfolioDto, ClientError> {
        let client = self.load(owner, id).await?;
        Ok(PortfolioDto::from(&client))
    }

    /// Passive drift of a client's stored portfolio.
    pub async fn drift(&self, owner: &OwnerId, id: &ClientId) -> Result<DriftReport, ClientError> {
        let client = self.load(owner, id).await?;
        let report = client.drift();
        observe(&report);
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::HoldingDto;
    use crate::domain::suitability::{DriftSeverity, ProfileClass};
    use crate::infrastructure::persistence::InMemoryClientRepository;
    use rust_decimal_macros::dec;

    fn use_case() -> ManageClientsUseCase<InMemoryClientRepository> {
        ManageClientsUseCase::new(Arc::new(InMemoryClientRepository::new()))
    }

    fn holding(name: &str, score: rust_decimal::Decimal, amount: rust_decimal::Decimal) -> HoldingDto {
        HoldingDto {
            name: Some(name.to_string()),
            risk_score: Some(score),
            amount_invested: Some(amount),
        }
    }

    fn create_request(name: &str) -> CreateClientDto {
        CreateClientDto {
            name: Some(name.to_string()),
            email: Some("maria@example.com".to_string()),
            profile_class: Some(ProfileClass::Moderate),
            max_risk_score: Some(dec!(2.5)),
            holdings: Some(vec![
                holding("Crypto", dec!(4.5), dec!(60000)),
                holding("Treasury", dec!(1.0), dec!(40000)),
            ]),
        }
    }

    #[tokio::test]
    async fn create_then_get() {
        let uc = use_case();
        let owner = OwnerId::new("advisor-1");

        let created = uc.create(&owner, create_request("Maria")).await.unwrap();
        let fetched = uc
            .get(&owner, &ClientId::new(created.id.clone()))
            .await
            .unwrap();

        assert_eq!(fetched.name, "Maria");
        assert_eq!(fetched.portfolio.current_risk, dec!(3.1));
    }

    #[tokio::test]
    async fn records_are_invisible_to_other_owners() {
        let uc = use_case();
        let owner = OwnerId::new("advisor-1");
        let other = OwnerId::new("advisor-2");

        let created = uc.create(&owner, create_request("Maria")).await.unwrap();
        let id = ClientId::new(created.id);

        assert!(matches!(
            uc.get(&other, &id).await,
            Err(ClientError::NotFound { .. })
        ));
        assert!(matches!(
            uc.delete(&other, &id).await,
            Err(ClientError::NotFound { .. })
        ));
        assert!(uc.list(&other).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_recomputes_portfolio() {
        let uc = use_case();
        let owner = OwnerId::new("advisor-1");
        let created = uc.create(&owner, create_request("Maria")).await.unwrap();
        let id = ClientId::new(created.id);

        let updated = uc
            .update(
                &owner,
                &id,
                UpdateClientDto {
                    holdings: Some(vec![holding("CDB", dec!(1), dec!(1000))]),
                    ..UpdateClientDto::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.portfolio.current_risk, dec!(1));
        let portfolio = uc.portfolio(&owner, &id).await.unwrap();
        assert_eq!(portfolio.total_value.amount(), dec!(1000));
    }

    #[tokio::test]
    async fn drift_of_stored_portfolio() {
        let uc = use_case();
        let owner = OwnerId::new("advisor-1");
        let created = uc.create(&owner, create_request("Maria")).await.unwrap();

        let report = uc.drift(&owner, &ClientId::new(created.id)).await.unwrap();
        assert!(report.is_out_of_band);
        assert_eq!(report.severity, DriftSeverity::High);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let uc = use_case();
        let owner = OwnerId::new("advisor-1");
        let created = uc.create(&owner, create_request("Maria")).await.unwrap();
        let id = ClientId::new(created.id);

        uc.delete(&owner, &id).await.unwrap();
        assert!(matches!(
            uc.get(&owner, &id).await,
            Err(ClientError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn invalid_create_is_rejected() {
        let uc = use_case();
        let mut request = create_request("Maria");
        request.email = Some("not-an-email".to_string());
        assert!(matches!(
            uc.create(&OwnerId::new("advisor-1"), request).await,
            Err(ClientError::InvalidParameters { .. })
        ));
    }
}
