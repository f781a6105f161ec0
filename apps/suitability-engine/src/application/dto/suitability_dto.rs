//! Suitability DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::iter;

use crate::domain::shared::{DomainError, Money};
use crate::domain::suitability::value_objects::validate_risk_score;
use crate::domain::suitability::{
    Holding, ProfileClass, ProposedOrder, RiskProfile, SuitabilityError, SuitabilityReport,
    engine,
};

const OUT_OF_RANGE: &str = "is too large for the portfolio totals";

fn required<T>(value: Option<T>, field: &str) -> Result<T, DomainError> {
    value.ok_or_else(|| DomainError::InvalidValue {
        field: field.to_string(),
        message: "is required".to_string(),
    })
}

fn path(prefix: &str, err: DomainError) -> (String, String) {
    match err {
        DomainError::InvalidValue { field, message } => (format!("{prefix}.{field}"), message),
    }
}

/// DTO for a portfolio holding.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HoldingDto {
    /// Asset name.
    pub name: Option<String>,
    /// Risk score of the asset.
    pub risk_score: Option<Decimal>,
    /// Amount invested.
    pub amount_invested: Option<Decimal>,
}

impl HoldingDto {
    /// Convert into a validated holding.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidValue` naming the missing or invalid field.
    pub fn into_domain(self) -> Result<Holding, DomainError> {
        let holding = Holding::new(
            required(self.name, "name")?,
            required(self.risk_score, "risk_score")?,
            Money::new(required(self.amount_invested, "amount_invested")?),
        );
        holding.validate()?;
        Ok(holding)
    }

    /// Convert a list of holdings, prefixing errors with `prefix[index]`.
    ///
    /// # Errors
    ///
    /// Returns the first invalid holding as `(field path, message)`.
    pub fn convert_all(dtos: Vec<Self>, prefix: &str) -> Result<Vec<Holding>, (String, String)> {
        dtos.into_iter()
            .enumerate()
            .map(|(index, dto)| {
                dto.into_domain()
                    .map_err(|e| path(&format!("{prefix}[{index}]"), e))
            })
            .collect()
    }
}

impl From<&Holding> for HoldingDto {
    fn from(holding: &Holding) -> Self {
        Self {
            name: Some(holding.name.clone()),
            risk_score: Some(holding.risk_score),
            amount_invested: Some(holding.amount_invested.amount()),
        }
    }
}

/// Convert a required portfolio, rejecting holdings whose amounts push the
/// portfolio sums out of range.
fn convert_portfolio(dtos: Option<Vec<HoldingDto>>) -> Result<Vec<Holding>, SuitabilityError> {
    let portfolio = HoldingDto::convert_all(
        dtos.ok_or_else(|| SuitabilityError::InvalidPortfolio {
            field: "current_portfolio".to_string(),
            message: "is required".to_string(),
        })?,
        "current_portfolio",
    )
    .map_err(|(field, message)| SuitabilityError::InvalidPortfolio { field, message })?;

    if let Some(index) = engine::find_exposure_overflow(&portfolio) {
        return Err(SuitabilityError::InvalidPortfolio {
            field: format!("current_portfolio[{index}].amount_invested"),
            message: OUT_OF_RANGE.to_string(),
        });
    }
    Ok(portfolio)
}

/// DTO for the client risk profile in a validation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RiskProfileDto {
    /// Client name.
    pub name: Option<String>,
    /// Client email.
    pub email: Option<String>,
    /// Investor profile class.
    pub profile_class: Option<ProfileClass>,
    /// Risk ceiling.
    pub max_risk_score: Option<Decimal>,
}

impl RiskProfileDto {
    fn into_domain(self) -> Result<RiskProfile, DomainError> {
        let profile = RiskProfile::new(
            self.name.unwrap_or_default(),
            self.email.unwrap_or_default(),
            required(self.profile_class, "profile_class")?,
            required(self.max_risk_score, "max_risk_score")?,
        );
        profile.validate()?;
        Ok(profile)
    }
}

/// DTO for the proposed order in a validation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProposedOrderDto {
    /// Asset to be bought.
    pub asset_name: Option<String>,
    /// Risk score of the asset.
    pub risk_score: Option<Decimal>,
    /// Amount to be invested.
    pub order_amount: Option<Decimal>,
}

impl ProposedOrderDto {
    fn into_domain(self) -> Result<ProposedOrder, DomainError> {
        let order = ProposedOrder::new(
            required(self.asset_name, "asset_name")?,
            required(self.risk_score, "risk_score")?,
            Money::new(required(self.order_amount, "order_amount")?),
        );
        order.validate()?;
        Ok(order)
    }
}

/// Engine inputs extracted from a validation request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationInput {
    /// Client risk profile.
    pub profile: RiskProfile,
    /// Current portfolio.
    pub portfolio: Vec<Holding>,
    /// Proposed order.
    pub order: ProposedOrder,
}

/// Request DTO for a suitability validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidateSuitabilityRequestDto {
    /// Client risk profile.
    pub risk_profile: Option<RiskProfileDto>,
    /// Current portfolio.
    pub current_portfolio: Option<Vec<HoldingDto>>,
    /// Proposed order.
    pub proposed_order: Option<ProposedOrderDto>,
}

impl ValidateSuitabilityRequestDto {
    /// Validate the request and convert it into engine inputs.
    ///
    /// # Errors
    ///
    /// Returns a `SuitabilityError` for the section that fails first, in
    /// the order profile, portfolio, order.
    pub fn into_domain(self) -> Result<ValidationInput, SuitabilityError> {
        let profile = self
            .risk_profile
            .ok_or_else(|| missing_profile("risk_profile"))?
            .into_domain()
            .map_err(|e| {
                let (field, message) = path("risk_profile", e);
                SuitabilityError::InvalidProfile { field, message }
            })?;

        let portfolio = convert_portfolio(self.current_portfolio)?;

        let order = self
            .proposed_order
            .ok_or_else(|| SuitabilityError::InvalidOrder {
                field: "proposed_order".to_string(),
                message: "is required".to_string(),
            })?
            .into_domain()
            .map_err(|e| {
                let (field, message) = path("proposed_order", e);
                SuitabilityError::InvalidOrder { field, message }
            })?;

        let synthetic = order.as_holding();
        let projected = portfolio.iter().chain(iter::once(&synthetic));
        if engine::find_exposure_overflow(projected).is_some() {
            return Err(SuitabilityError::InvalidOrder {
                field: "proposed_order.order_amount".to_string(),
                message: OUT_OF_RANGE.to_string(),
            });
        }

        Ok(ValidationInput {
            profile,
            portfolio,
            order,
        })
    }
}

fn missing_profile(field: &str) -> SuitabilityError {
    SuitabilityError::InvalidProfile {
        field: field.to_string(),
        message: "is required".to_string(),
    }
}

/// Request DTO for a passive drift check.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DriftRequestDto {
    /// Current portfolio.
    pub current_portfolio: Option<Vec<HoldingDto>>,
    /// Risk ceiling.
    pub max_risk_score: Option<Decimal>,
}

impl DriftRequestDto {
    /// Validate the request and convert it into engine inputs.
    ///
    /// # Errors
    ///
    /// Returns `InvalidPortfolio` or `InvalidProfile` for the failing part.
    pub fn into_domain(self) -> Result<(Vec<Holding>, Decimal), SuitabilityError> {
        let portfolio = convert_portfolio(self.current_portfolio)?;

        let max_risk_score = self
            .max_risk_score
            .ok_or_else(|| missing_profile("max_risk_score"))?;
        validate_risk_score("max_risk_score", max_risk_score).map_err(|e| match e {
            DomainError::InvalidValue { field, message } => {
                SuitabilityError::InvalidProfile { field, message }
            }
        })?;

        Ok((portfolio, max_risk_score))
    }
}

/// Request DTO for rendering a report document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderReportRequestDto {
    /// Report previously returned by a validation.
    pub report: SuitabilityReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> ValidateSuitabilityRequestDto {
        serde_json::from_value(value).unwrap()
    }

    fn valid_request() -> serde_json::Value {
        json!({
            "risk_profile": {
                "name": "Maria Santos",
                "email": "maria@example.com",
                "profile_class": "Moderate",
                "max_risk_score": 2.5
            },
            "current_portfolio": [
                { "name": "CDB XPTO", "risk_score": 1.2, "amount_invested": 50000 },
                { "name": "Stock ABC", "risk_score": "4.0", "amount_invested": 10000 }
            ],
            "proposed_order": { "asset_name": "FII YYY", "risk_score": 3.5, "order_amount": 5000 }
        })
    }

    fn field_of(err: &SuitabilityError) -> &str {
        err.field()
    }

    #[test]
    fn valid_request_converts() {
        let input = parse(valid_request()).into_domain().unwrap();
        assert_eq!(input.profile.max_risk_score, dec!(2.5));
        assert_eq!(input.profile.profile_class, ProfileClass::Moderate);
        assert_eq!(input.portfolio.len(), 2);
        assert_eq!(input.portfolio[0].risk_score, dec!(1.2));
        assert_eq!(input.portfolio[1].risk_score, dec!(4.0));
        assert_eq!(input.order.order_amount, Money::new(dec!(5000)));
    }

    #[test]
    fn empty_portfolio_is_accepted() {
        let mut request = valid_request();
        request["current_portfolio"] = json!([]);
        let input = parse(request).into_domain().unwrap();
        assert!(input.portfolio.is_empty());
    }

    #[test]
    fn profile_name_and_email_may_be_absent() {
        let mut request = valid_request();
        request["risk_profile"] = json!({ "profile_class": "Aggressive", "max_risk_score": 5 });
        let input = parse(request).into_domain().unwrap();
        assert_eq!(input.profile.name, "");
        assert_eq!(input.profile.email, "");
    }

    #[test]
    fn missing_profile_is_invalid_profile() {
        let mut request = valid_request();
        request.as_object_mut().unwrap().remove("risk_profile");
        let err = parse(request).into_domain().unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidProfile { .. }));
        assert_eq!(field_of(&err), "risk_profile");
    }

    #[test]
    fn missing_max_score_is_invalid_profile() {
        let mut request = valid_request();
        request["risk_profile"]
            .as_object_mut()
            .unwrap()
            .remove("max_risk_score");
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "risk_profile.max_risk_score");
    }

    #[test]
    fn missing_profile_class_is_invalid_profile() {
        let mut request = valid_request();
        request["risk_profile"]
            .as_object_mut()
            .unwrap()
            .remove("profile_class");
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "risk_profile.profile_class");
    }

    #[test]
    fn max_score_out_of_range_is_rejected() {
        for bad in [json!(0), json!(-1), json!(5.5)] {
            let mut request = valid_request();
            request["risk_profile"]["max_risk_score"] = bad;
            let err = parse(request).into_domain().unwrap_err();
            assert!(matches!(err, SuitabilityError::InvalidProfile { .. }));
        }
    }

    #[test]
    fn max_score_of_five_is_accepted() {
        let mut request = valid_request();
        request["risk_profile"]["max_risk_score"] = json!(5);
        assert!(parse(request).into_domain().is_ok());
    }

    #[test]
    fn missing_portfolio_is_invalid_portfolio() {
        let mut request = valid_request();
        request.as_object_mut().unwrap().remove("current_portfolio");
        let err = parse(request).into_domain().unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidPortfolio { .. }));
    }

    #[test]
    fn non_array_portfolio_fails_to_deserialize() {
        let mut request = valid_request();
        request["current_portfolio"] = json!("not a list");
        assert!(serde_json::from_value::<ValidateSuitabilityRequestDto>(request).is_err());
    }

    #[test]
    fn invalid_holding_reports_index_and_field() {
        let mut request = valid_request();
        request["current_portfolio"][1]["amount_invested"] = json!(0);
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "current_portfolio[1].amount_invested");

        let mut request = valid_request();
        request["current_portfolio"][0]["risk_score"] = json!(-2);
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "current_portfolio[0].risk_score");

        let mut request = valid_request();
        request["current_portfolio"][0]
            .as_object_mut()
            .unwrap()
            .remove("name");
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "current_portfolio[0].name");
    }

    #[test]
    fn oversized_holding_amount_is_invalid_portfolio() {
        let mut request = valid_request();
        request["current_portfolio"][1]["amount_invested"] = json!("30000000000000000000000000000");
        let err = parse(request).into_domain().unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidPortfolio { .. }));
        assert_eq!(field_of(&err), "current_portfolio[1].amount_invested");
    }

    #[test]
    fn order_amount_overflowing_totals_is_invalid_order() {
        let mut request = valid_request();
        request["current_portfolio"][0]["amount_invested"] = json!("15000000000000000000000000000");
        request["current_portfolio"][0]["risk_score"] = json!(1);
        request["proposed_order"]["order_amount"] = json!("70000000000000000000000000000");
        let err = parse(request).into_domain().unwrap_err();
        assert!(matches!(err, SuitabilityError::InvalidOrder { .. }));
        assert_eq!(field_of(&err), "proposed_order.order_amount");
    }

    #[test]
    fn drift_request_rejects_oversized_holding() {
        let dto: DriftRequestDto = serde_json::from_value(json!({
            "current_portfolio": [
                { "name": "A", "risk_score": 4, "amount_invested": "30000000000000000000000000000" }
            ],
            "max_risk_score": 2.5
        }))
        .unwrap();
        let err = dto.into_domain().unwrap_err();
        assert_eq!(err.field(), "current_portfolio[0].amount_invested");
    }

    #[test]
    fn holding_score_above_scale_is_tolerated() {
        let mut request = valid_request();
        request["current_portfolio"][0]["risk_score"] = json!(6);
        assert!(parse(request).into_domain().is_ok());
    }

    #[test]
    fn order_fields_are_checked() {
        let cases = [
            ("asset_name", json!(""), "proposed_order.asset_name"),
            ("risk_score", json!(0), "proposed_order.risk_score"),
            ("risk_score", json!(5.01), "proposed_order.risk_score"),
            ("order_amount", json!(0), "proposed_order.order_amount"),
            ("order_amount", json!(-100), "proposed_order.order_amount"),
        ];
        for (key, value, expected) in cases {
            let mut request = valid_request();
            request["proposed_order"][key] = value;
            let err = parse(request).into_domain().unwrap_err();
            assert!(matches!(err, SuitabilityError::InvalidOrder { .. }));
            assert_eq!(field_of(&err), expected);
        }
    }

    #[test]
    fn missing_order_is_invalid_order() {
        let mut request = valid_request();
        request.as_object_mut().unwrap().remove("proposed_order");
        let err = parse(request).into_domain().unwrap_err();
        assert_eq!(field_of(&err), "proposed_order");
    }

    #[test]
    fn drift_request_converts_and_checks_ceiling() {
        let dto: DriftRequestDto = serde_json::from_value(json!({
            "current_portfolio": [{ "name": "A", "risk_score": 3, "amount_invested": 100 }],
            "max_risk_score": 2.5
        }))
        .unwrap();
        let (portfolio, max) = dto.into_domain().unwrap();
        assert_eq!(portfolio.len(), 1);
        assert_eq!(max, dec!(2.5));

        let dto: DriftRequestDto = serde_json::from_value(json!({
            "current_portfolio": [],
            "max_risk_score": 0
        }))
        .unwrap();
        assert!(matches!(
            dto.into_domain(),
            Err(SuitabilityError::InvalidProfile { .. })
        ));
    }

    #[test]
    fn holding_dto_from_domain() {
        let holding = Holding::new("FII", dec!(3), Money::new(dec!(10)));
        let dto = HoldingDto::from(&holding);
        assert_eq!(dto.name.as_deref(), Some("FII"));
        assert_eq!(dto.into_domain().unwrap(), holding);
    }
}
