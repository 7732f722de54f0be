use serde::{Deserialize, Serialize};

use super::history::PriceHistory;

/// Extended stats for one asset, the contents of the detail modal.
/// All monetary figures are USD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetDetail {
    pub id: String,
    pub name: String,
    /// Ticker symbol as delivered, lowercase
    pub symbol: String,
    /// Icon URL (small variant)
    pub image: String,
    pub current_price: f64,
    /// 24h change in percent, 0.0 when the API reports none
    pub change_24h: f64,
    /// Rank by market cap; unranked assets have none
    pub market_cap_rank: Option<u32>,
    pub high_24h: f64,
    pub low_24h: f64,
    /// All-time high
    pub ath: f64,
    /// All-time low
    pub atl: f64,
    pub market_cap: f64,
}

/// Everything the single-asset modal needs, fetched as one unit:
/// either both parts arrive or the whole view fails.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub detail: AssetDetail,
    /// 7-day hourly series behind the modal's line chart
    pub history: PriceHistory,
}

/// Side-by-side stats for compare mode, in selection order.
/// Compare mode has no chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareView {
    pub left: AssetDetail,
    pub right: AssetDetail,
}
