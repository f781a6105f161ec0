//! Main portfolio of a client record.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{Money, PortfolioId};
use crate::domain::suitability::Holding;
use crate::domain::suitability::engine;

/// A client's stored portfolio with its derived risk and total.
///
/// `current_risk` and `total_value` are always the engine's figures for
/// `holdings`; they cannot be set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    id: PortfolioId,
    holdings: Vec<Holding>,
    current_risk: Decimal,
    total_value: Money,
}

impl Portfolio {
    /// Build a portfolio and derive its figures.
    #[must_use]
    pub fn new(holdings: Vec<Holding>) -> Self {
        let mut portfolio = Self {
            id: PortfolioId::generate(),
            holdings: Vec::new(),
            current_risk: Decimal::ZERO,
            total_value: Money::ZERO,
        };
        portfolio.replace_holdings(holdings);
        portfolio
    }

    /// Replace all holdings and recompute the derived figures.
    pub fn replace_holdings(&mut self, holdings: Vec<Holding>) {
        self.current_risk = engine::compute_portfolio_risk(&holdings);
        self.total_value = engine::compute_portfolio_total(&holdings);
        self.holdings = holdings;
    }

    /// Portfolio identifier.
    #[must_use]
    pub const fn id(&self) -> &PortfolioId {
        &self.id
    }

    /// Holdings in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Weighted-average risk of the holdings.
    #[must_use]
    pub const fn current_risk(&self) -> Decimal {
        self.current_risk
    }

    /// Total invested.
    #[must_use]
    pub const fn total_value(&self) -> Money {
        self.total_value
    }
}

impl Default for Portfolio {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn figures_follow_holdings() {
        let mut portfolio = Portfolio::new(vec![
            Holding::new("CDB", dec!(1), Money::new(dec!(3000))),
            Holding::new("Stock", dec!(4), Money::new(dec!(1000))),
        ]);
        assert_eq!(portfolio.current_risk(), dec!(1.75));
        assert_eq!(portfolio.total_value(), Money::new(dec!(4000)));

        portfolio.replace_holdings(vec![Holding::new("FII", dec!(3), Money::new(dec!(500)))]);
        assert_eq!(portfolio.current_risk(), dec!(3));
        assert_eq!(portfolio.total_value(), Money::new(dec!(500)));
        assert_eq!(portfolio.holdings().len(), 1);
    }

    #[test]
    fn empty_portfolio_is_zero() {
        let portfolio = Portfolio::default();
        assert!(portfolio.holdings().is_empty());
        assert_eq!(portfolio.current_risk(), Decimal::ZERO);
        assert!(portfolio.total_value().is_zero());
    }
}
