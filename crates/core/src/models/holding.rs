use serde::{Deserialize, Serialize};

/// One portfolio line item, persisted in the dashboard's historical JSON
/// shape: `{"id": "bitcoin", "qty": 0.5, "buyPrice": 30000}`.
///
/// The asset id is a weak reference into whatever snapshot is current at
/// valuation time; a holding whose asset is missing from the snapshot is
/// skipped, not deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Asset id the holding refers to
    #[serde(rename = "id")]
    pub asset_id: String,

    /// Units held, strictly positive
    #[serde(rename = "qty")]
    pub quantity: f64,

    /// Cost per unit in USD at purchase, strictly positive
    #[serde(rename = "buyPrice")]
    pub buy_price: f64,
}

/// Valuation of one holding against the current snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingRow {
    pub asset_id: String,
    /// Display name resolved from the snapshot
    pub name: String,
    pub quantity: f64,
    pub buy_price: f64,
    /// Snapshot price the row was valued at
    pub current_price: f64,
    pub current_value: f64,
    pub invested: f64,
    pub profit_loss: f64,
}

/// Portfolio-wide sums over the holdings that matched the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub invested: f64,
    pub current_value: f64,
    pub profit_loss: f64,
}

/// Output of one valuation pass.
///
/// `totals` is `None` only when no holdings exist at all, which is a
/// different statement than holdings that currently sum to zero (all of
/// them missing from the snapshot still yields zero totals).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    pub rows: Vec<HoldingRow>,
    pub totals: Option<PortfolioTotals>,
}
