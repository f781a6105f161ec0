//! Risk score scale shared by assets and profile ceilings.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::shared::DomainError;

/// Top of the risk scale.
pub const MAX_RISK_SCORE: Decimal = dec!(5);

/// Check that a score lies in `(0, MAX_RISK_SCORE]`.
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` naming `field` when out of range.
pub fn validate_risk_score(field: &str, score: Decimal) -> Result<(), DomainError> {
    if score <= Decimal::ZERO || score > MAX_RISK_SCORE {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: format!("must be in (0, {MAX_RISK_SCORE}], got {score}"),
        });
    }
    Ok(())
}

/// Check that a score is strictly positive.
///
/// Holdings are only required to carry a positive score; the upper bound is
/// enforced on profiles and new orders.
///
/// # Errors
///
/// Returns `DomainError::InvalidValue` naming `field` when not positive.
pub fn validate_positive_score(field: &str, score: Decimal) -> Result<(), DomainError> {
    if score <= Decimal::ZERO {
        return Err(DomainError::InvalidValue {
            field: field.to_string(),
            message: format!("must be greater than zero, got {score}"),
        });
    }
    Ok(())
}
