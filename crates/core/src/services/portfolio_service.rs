use crate::errors::CoreError;
use crate::models::holding::{Holding, HoldingRow, PortfolioTotals, PortfolioValuation};
use crate::models::snapshot::MarketSnapshot;

/// Validates portfolio entries and values holdings against the snapshot.
///
/// Pure business logic, no I/O. Easy to test.
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a prospective holding before it is stored.
    ///
    /// Rules:
    /// - Asset id must be non-empty
    /// - Quantity and buy price must be positive finite numbers
    pub fn validate_entry(&self, asset_id: &str, quantity: f64, buy_price: f64) -> Result<(), CoreError> {
        if asset_id.trim().is_empty() {
            return Err(CoreError::InvalidEntry("no asset selected".into()));
        }
        if !quantity.is_finite() || quantity <= 0.0 {
            return Err(CoreError::InvalidEntry(format!(
                "quantity must be a positive number, got {quantity}"
            )));
        }
        if !buy_price.is_finite() || buy_price <= 0.0 {
            return Err(CoreError::InvalidEntry(format!(
                "buy price must be a positive number, got {buy_price}"
            )));
        }
        Ok(())
    }

    /// Value `holdings` against `snapshot`.
    ///
    /// A holding whose asset is not in the snapshot is skipped from both
    /// rows and totals but stays stored; it is valued again once the asset
    /// reappears in the list. `totals` is `None` only when `holdings` is
    /// empty, so "nothing added yet" stays distinguishable from "worth
    /// nothing right now".
    pub fn valuate(&self, holdings: &[Holding], snapshot: &MarketSnapshot) -> PortfolioValuation {
        if holdings.is_empty() {
            return PortfolioValuation {
                rows: Vec::new(),
                totals: None,
            };
        }

        let mut rows = Vec::with_capacity(holdings.len());
        let mut total_invested = 0.0;
        let mut total_value = 0.0;

        for holding in holdings {
            let asset = match snapshot.get(&holding.asset_id) {
                Some(a) => a,
                // Asset fell out of the top list; keep the holding for later
                None => continue,
            };

            let invested = holding.buy_price * holding.quantity;
            let current_value = asset.current_price * holding.quantity;

            total_invested += invested;
            total_value += current_value;

            rows.push(HoldingRow {
                asset_id: holding.asset_id.clone(),
                name: asset.name.clone(),
                quantity: holding.quantity,
                buy_price: holding.buy_price,
                current_price: asset.current_price,
                current_value,
                invested,
                profit_loss: current_value - invested,
            });
        }

        PortfolioValuation {
            rows,
            totals: Some(PortfolioTotals {
                invested: total_invested,
                current_value: total_value,
                profit_loss: total_value - total_invested,
            }),
        }
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
