//! Client Aggregate Root
//!
//! A client record owned by one advisor: identification, investor profile
//! and the main portfolio.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Portfolio;
use crate::domain::client::errors::ClientError;
use crate::domain::shared::{ClientId, OwnerId, Timestamp, is_valid_email};
use crate::domain::suitability::engine;
use crate::domain::suitability::value_objects::validate_risk_score;
use crate::domain::suitability::{DriftReport, Holding, ProfileClass, RiskProfile};

/// Command to create a new client record.
#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    /// Owner of the new record.
    pub owner_id: OwnerId,
    /// Client name.
    pub name: String,
    /// Client email.
    pub email: String,
    /// Investor profile class.
    pub profile_class: ProfileClass,
    /// Explicit risk ceiling; the class default when absent.
    pub max_risk_score: Option<Decimal>,
    /// Initial holdings of the main portfolio.
    pub holdings: Vec<Holding>,
}

impl CreateClientCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if required parameters are missing or invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        if let Some(score) = self.max_risk_score {
            validate_risk_score("max_risk_score", score)?;
        }
        validate_holdings(&self.holdings)
    }
}

/// Partial update of a client record. Absent fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateClientCommand {
    /// New name.
    pub name: Option<String>,
    /// New email.
    pub email: Option<String>,
    /// New profile class.
    pub profile_class: Option<ProfileClass>,
    /// New risk ceiling.
    pub max_risk_score: Option<Decimal>,
    /// Replacement holdings for the main portfolio.
    pub holdings: Option<Vec<Holding>>,
}

impl UpdateClientCommand {
    /// Validate the fields that are present.
    ///
    /// # Errors
    ///
    /// Returns error if any present field is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(email) = &self.email {
            validate_email(email)?;
        }
        if let Some(score) = self.max_risk_score {
            validate_risk_score("max_risk_score", score)?;
        }
        if let Some(holdings) = &self.holdings {
            validate_holdings(holdings)?;
        }
        Ok(())
    }
}

fn validate_name(name: &str) -> Result<(), ClientError> {
    if name.trim().is_empty() {
        return Err(ClientError::InvalidParameters {
            field: "name".to_string(),
            message: "is required".to_string(),
        });
    }
    Ok(())
}

fn validate_email(email: &str) -> Result<(), ClientError> {
    if !is_valid_email(email) {
        return Err(ClientError::InvalidParameters {
            field: "email".to_string(),
            message: format!("'{email}' is not a valid email address"),
        });
    }
    Ok(())
}

fn validate_holdings(holdings: &[Holding]) -> Result<(), ClientError> {
    for (index, holding) in holdings.iter().enumerate() {
        holding
            .validate()
            .map_err(|e| ClientError::from(e).within(&format!("holdings[{index}]")))?;
    }
    if let Some(index) = engine::find_exposure_overflow(holdings) {
        return Err(ClientError::InvalidParameters {
            field: format!("holdings[{index}].amount_invested"),
            message: "is too large for the portfolio totals".to_string(),
        });
    }
    Ok(())
}

/// Client Aggregate Root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    id: ClientId,
    owner_id: OwnerId,
    name: String,
    email: String,
    profile_class: ProfileClass,
    max_risk_score: Decimal,
    portfolio: Portfolio,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Client {
    /// Create a new client record from a command.
    ///
    /// # Errors
    ///
    /// Returns error if command validation fails.
    pub fn new(cmd: CreateClientCommand) -> Result<Self, ClientError> {
        cmd.validate()?;

        let now = Timestamp::now();
        let max_risk_score = cmd
            .max_risk_score
            .unwrap_or_else(|| cmd.profile_class.default_max_risk_score());

        Ok(Self {
            id: ClientId::generate(),
            owner_id: cmd.owner_id,
            name: cmd.name.trim().to_string(),
            email: cmd.email,
            profile_class: cmd.profile_class,
            max_risk_score,
            portfolio: Portfolio::new(cmd.holdings),
            created_at: now,
            updated_at: now,
        })
    }

    /// Apply a partial update.
    ///
    /// Changing the profile class without an explicit ceiling resets the
    /// ceiling to the new class default.
    ///
    /// # Errors
    ///
    /// Returns error if any present field is invalid; the record is left
    /// untouched in that case.
    pub fn apply(&mut self, cmd: UpdateClientCommand) -> Result<(), ClientError> {
        cmd.validate()?;

        if let Some(name) = cmd.name {
            self.name = name.trim().to_string();
        }
        if let Some(email) = cmd.email {
            self.email = email;
        }
        if let Some(class) = cmd.profile_class {
            self.profile_class = class;
            if cmd.max_risk_score.is_none() {
                self.max_risk_score = class.default_max_risk_score();
            }
        }
        if let Some(score) = cmd.max_risk_score {
            self.max_risk_score = score;
        }
        if let Some(holdings) = cmd.holdings {
            self.portfolio.replace_holdings(holdings);
        }

        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Profile as consumed by the suitability engine.
    #[must_use]
    pub fn risk_profile(&self) -> RiskProfile {
        RiskProfile::new(
            self.name.clone(),
            self.email.clone(),
            self.profile_class,
            self.max_risk_score,
        )
    }

    /// Passive drift of the stored portfolio against the client's ceiling.
    #[must_use]
    pub fn drift(&self) -> DriftReport {
        engine::monitor_passive_drift(self.portfolio.holdings(), self.max_risk_score)
    }

    /// Whether the record belongs to `owner`.
    #[must_use]
    pub fn is_owned_by(&self, owner: &OwnerId) -> bool {
        &self.owner_id == owner
    }

    /// Client identifier.
    #[must_use]
    pub const fn id(&self) -> &ClientId {
        &self.id
    }

    /// Owner identifier.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Client name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Client email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Investor profile class.
    #[must_use]
    pub const fn profile_class(&self) -> ProfileClass {
        self.profile_class
    }

    /// Risk ceiling.
    #[must_use]
    pub const fn max_risk_score(&self) -> Decimal {
        self.max_risk_score
    }

    /// Main portfolio.
    #[must_use]
    pub const fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    /// Creation time.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Last update time.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}
