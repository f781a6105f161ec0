//! Client DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::HoldingDto;
use crate::domain::client::{Client, ClientError, CreateClientCommand, UpdateClientCommand};
use crate::domain::shared::{Money, OwnerId};
use crate::domain::suitability::{Holding, ProfileClass};

fn convert_holdings(dtos: Vec<HoldingDto>) -> Result<Vec<Holding>, ClientError> {
    HoldingDto::convert_all(dtos, "holdings")
        .map_err(|(field, message)| ClientError::InvalidParameters { field, message })
}

fn required<T>(value: Option<T>, field: &str) -> Result<T, ClientError> {
    value.ok_or_else(|| ClientError::InvalidParameters {
        field: field.to_string(),
        message: "is required".to_string(),
    })
}

/// Request DTO for creating a client record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateClientDto {
    /// Client name.
    pub name: Option<String>,
    /// Client email.
    pub email: Option<String>,
    /// Investor profile class.
    pub profile_class: Option<ProfileClass>,
    /// Risk ceiling; defaults per profile class.
    pub max_risk_score: Option<Decimal>,
    /// Initial holdings.
    pub holdings: Option<Vec<HoldingDto>>,
}

impl CreateClientDto {
    /// Convert into a create command for `owner`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidParameters` for missing required fields
    /// or malformed holdings.
    pub fn into_command(self, owner_id: OwnerId) -> Result<CreateClientCommand, ClientError> {
        Ok(CreateClientCommand {
            owner_id,
            name: required(self.name, "name")?,
            email: required(self.email, "email")?,
            profile_class: required(self.profile_class, "profile_class")?,
            max_risk_score: self.max_risk_score,
            holdings: convert_holdings(self.holdings.unwrap_or_default())?,
        })
    }
}

/// Request DTO for updating a client record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateClientDto {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New profile class.
    pub profile_class: Option<ProfileClass>,
    /// New risk ceiling.
    pub max_risk_score: Option<Decimal>,
    /// Replacement holdings.
    pub holdings: Option<Vec<HoldingDto>>,
}

impl UpdateClientDto {
    /// Convert into an update command.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidParameters` for malformed holdings.
    pub fn into_command(self) -> Result<UpdateClientCommand, ClientError> {
        Ok(UpdateClientCommand {
            name: self.name,
            email: self.email,
            profile_class: self.profile_class,
            max_risk_score: self.max_risk_score,
            holdings: self.holdings.map(convert_holdings).transpose()?,
        })
    }
}

/// DTO for a client's main portfolio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioDto {
    /// Owning client.
    pub client_id: String,
    /// Holdings in insertion order.
    pub holdings: Vec<Holding>,
    /// Weighted-average risk.
    pub current_risk: Decimal,
    /// Total invested.
    pub total_value: Money,
}

impl From<&Client> for PortfolioDto {
    fn from(client: &Client) -> Self {
        let portfolio = client.portfolio();
        Self {
            client_id: client.id().to_string(),
            holdings: portfolio.holdings().to_vec(),
            current_risk: portfolio.current_risk(),
            total_value: portfolio.total_value(),
        }
    }
}

/// DTO for a client record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientDto {
    /// Client identifier.
    pub id: String,
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
    /// Investor profile class.
    pub profile_class: ProfileClass,
    /// Risk ceiling.
    pub max_risk_score: Decimal,
    /// Main portfolio.
    pub portfolio: PortfolioDto,
    /// Creation time (RFC 3339).
    pub created_at: String,
    /// Last update time (RFC 3339).
    pub updated_at: String,
}

impl From<&Client> for ClientDto {
    fn from(client: &Client) -> Self {
        Self {
            id: client.id().to_string(),
            name: client.name().to_string(),
            email: client.email().to_string(),
            profile_class: client.profile_class(),
            max_risk_score: client.max_risk_score(),
            portfolio: PortfolioDto::from(client),
            created_at: client.created_at().to_rfc3339(),
            updated_at: client.updated_at().to_rfc3339(),
        }
    }
}
