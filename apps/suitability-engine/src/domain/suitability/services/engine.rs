//! Suitability Engine
//!
//! Pure, stateless computation over a risk profile, a portfolio and one
//! proposed order. No I/O and no shared state: every function is
//! deterministic and may be called concurrently without coordination.
//!
//! Portfolio risk is the amount-weighted average of holding risk scores:
//!
//! ```text
//! RC = Σ(risk_i × amount_i) / Σ(amount_i)
//! ```
//!
//! Inputs are assumed pre-validated: positive amounts, scores in (0, 5],
//! and no exposure overflow as reported by [`find_exposure_overflow`]. The
//! only degenerate case handled here is a zero total, which yields a risk of
//! exactly 0.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::iter;

use crate::domain::shared::Money;
use crate::domain::suitability::value_objects::{
    DriftReport, DriftSeverity, Holding, ProposedOrder, RiskProfile, ValidationDetail,
    ValidationResult, ValidationStatus,
};

/// Tolerance band above the profile ceiling where orders raise an alert.
pub const ALERT_TOLERANCE: Decimal = dec!(1.1);

/// Drift above `alert_threshold × CRITICAL_DRIFT_FACTOR` is critical.
pub const CRITICAL_DRIFT_FACTOR: Decimal = dec!(1.2);

/// Drift above `max_risk_score × MEDIUM_DRIFT_FACTOR` is at least medium.
pub const MEDIUM_DRIFT_FACTOR: Decimal = dec!(1.05);

const ONE_HUNDRED: Decimal = dec!(100);

/// Weighted average over `(risk × amount, amount)` pairs; 0 when the
/// amounts sum to zero.
fn weighted_average(positions: impl IntoIterator<Item = (Decimal, Decimal)>) -> Decimal {
    let (weighted, total) = positions.into_iter().fold(
        (Decimal::ZERO, Decimal::ZERO),
        |(weighted, total), (risk_amount, amount)| (weighted + risk_amount, total + amount),
    );

    if total.is_zero() {
        return Decimal::ZERO;
    }

    weighted / total
}

fn exposure(holding: &Holding) -> (Decimal, Decimal) {
    (holding.weighted_risk(), holding.amount_invested.amount())
}

/// `numerator / denominator × 100`, saturating when the ratio cannot be
/// represented. `denominator` must be non-zero.
fn percent_of(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|ratio| ratio.checked_mul(ONE_HUNDRED))
        .unwrap_or(if numerator.is_sign_negative() {
            Decimal::MIN
        } else {
            Decimal::MAX
        })
}

/// Index of the first holding at which `Σ(risk × amount)` or `Σ(amount)`
/// leaves the representable range, if any.
///
/// Boundary code rejects such input; the other engine functions use
/// unchecked arithmetic on these sums.
#[must_use]
pub fn find_exposure_overflow<'a>(
    holdings: impl IntoIterator<Item = &'a Holding>,
) -> Option<usize> {
    let mut weighted = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    for (index, holding) in holdings.into_iter().enumerate() {
        let amount = holding.amount_invested.amount();
        let next = amount
            .checked_mul(holding.risk_score)
            .and_then(|risk_amount| weighted.checked_add(risk_amount))
            .zip(total.checked_add(amount));
        let Some((next_weighted, next_total)) = next else {
            return Some(index);
        };
        weighted = next_weighted;
        total = next_total;
    }
    None
}

/// Weighted-average risk of a portfolio.
///
/// Returns 0 for an empty portfolio or when the invested amounts sum to zero.
/// No rounding is applied.
#[must_use]
pub fn compute_portfolio_risk(portfolio: &[Holding]) -> Decimal {
    weighted_average(portfolio.iter().map(exposure))
}

/// Total amount invested across the portfolio.
#[must_use]
pub fn compute_portfolio_total(portfolio: &[Holding]) -> Money {
    portfolio.iter().map(|h| h.amount_invested).sum()
}

/// Portfolio risk after adding the order as one more holding.
///
/// The caller's portfolio is only borrowed; the synthetic holding never
/// becomes part of it.
#[must_use]
pub fn compute_projected_risk(portfolio: &[Holding], order: &ProposedOrder) -> Decimal {
    let synthetic = order.as_holding();
    weighted_average(
        portfolio
            .iter()
            .chain(iter::once(&synthetic))
            .map(exposure),
    )
}

/// Upper bound of the alert band: `max_risk_score × 1.1`.
#[must_use]
pub fn compute_alert_threshold(max_risk_score: Decimal) -> Decimal {
    max_risk_score * ALERT_TOLERANCE
}

/// Classify a projected risk. Boundaries belong to the lower-severity class.
#[must_use]
pub fn classify_status(
    projected_risk: Decimal,
    max_risk_score: Decimal,
    alert_threshold: Decimal,
) -> ValidationStatus {
    if projected_risk <= max_risk_score {
        ValidationStatus::Approved
    } else if projected_risk <= alert_threshold {
        ValidationStatus::Alert
    } else {
        ValidationStatus::Rejected
    }
}

/// Human-readable explanation for a status.
#[must_use]
pub fn compose_message(
    status: ValidationStatus,
    projected_risk: Decimal,
    alert_threshold: Decimal,
) -> String {
    // Decimal's precision formatting truncates; round first, then pad.
    let alert_threshold = alert_threshold.round_dp(2);
    let projected_risk = projected_risk.round_dp(4);
    match status {
        ValidationStatus::Approved => {
            "Order approved. Portfolio remains within the client's suitability profile.".to_string()
        }
        ValidationStatus::Alert => format!(
            "Attention: portfolio risk will exceed the profile limit, up to the alert threshold \
             of {alert_threshold:.2}. A client acknowledgement term is required."
        ),
        ValidationStatus::Rejected => format!(
            "Excessive risk. Projected portfolio risk of {projected_risk:.4} violates the \
             suitability policy."
        ),
    }
}

/// Validate a proposed order against the client's profile.
#[must_use]
pub fn validate_suitability(
    profile: &RiskProfile,
    current_portfolio: &[Holding],
    order: &ProposedOrder,
) -> ValidationResult {
    let current_risk = compute_portfolio_risk(current_portfolio);
    let current_total = compute_portfolio_total(current_portfolio);

    let projected_risk = compute_projected_risk(current_portfolio, order);
    let projected_total = current_total + order.order_amount;

    let max_permitted_score = profile.max_risk_score;
    let alert_threshold = compute_alert_threshold(max_permitted_score);
    let status = classify_status(projected_risk, max_permitted_score, alert_threshold);
    let message = compose_message(status, projected_risk, alert_threshold);

    // Relative to the pre-order risk, not the total.
    let risk_increase_percent = if current_risk.is_zero() {
        Decimal::ZERO
    } else {
        percent_of(projected_risk - current_risk, current_risk)
    };

    ValidationResult {
        status,
        current_risk,
        projected_risk,
        max_permitted_score,
        alert_threshold,
        message,
        detail: ValidationDetail {
            current_portfolio_total: current_total,
            current_portfolio_risk: current_risk,
            projected_portfolio_total: projected_total,
            projected_portfolio_risk: projected_risk,
            risk_increase_percent,
        },
        requires_acknowledgement: status.requires_acknowledgement(),
    }
}

/// Detect whether market movement alone pushed a portfolio out of its band.
#[must_use]
pub fn monitor_passive_drift(current_portfolio: &[Holding], max_risk_score: Decimal) -> DriftReport {
    let current_risk = compute_portfolio_risk(current_portfolio);
    let alert_threshold = compute_alert_threshold(max_risk_score);
    let is_out_of_band = current_risk > max_risk_score;

    let (excess_percent, severity) = if is_out_of_band {
        let excess = percent_of(current_risk - max_risk_score, max_risk_score);
        // Bands overlap arithmetically: keep most-severe-first.
        let severity = if current_risk > alert_threshold * CRITICAL_DRIFT_FACTOR {
            DriftSeverity::Critical
        } else if current_risk > alert_threshold {
            DriftSeverity::High
        } else if current_risk > max_risk_score * MEDIUM_DRIFT_FACTOR {
            DriftSeverity::Medium
        } else {
            DriftSeverity::Low
        };
        (excess, severity)
    } else {
        (Decimal::ZERO, DriftSeverity::Low)
    };

    DriftReport {
        is_out_of_band,
        current_risk,
        max_permitted_score: max_risk_score,
        excess_percent,
        severity,
    }
}
