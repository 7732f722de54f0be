use serde::{Deserialize, Serialize};

/// One row of the market list, in the shape the markets endpoint returns it.
///
/// Rows are never edited in place: every refresh replaces the whole snapshot,
/// so an `Asset` is valid exactly as long as the snapshot that owns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// API identifier, unique within a snapshot (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol as delivered, lowercase (e.g., "btc")
    pub symbol: String,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: String,

    /// Icon URL
    pub image: String,

    /// Latest price in USD
    pub current_price: f64,

    /// Market capitalization in USD
    pub market_cap: f64,

    /// Trading volume over the last 24 hours, in USD
    pub total_volume: f64,

    /// Coins in circulation; the API omits this for some assets
    #[serde(default)]
    pub circulating_supply: Option<f64>,

    /// Price change over the last 24 hours, in percent.
    /// Absent for thinly traded assets; read through [`Asset::change_24h`].
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,

    /// Seven-day price trace for the card sparkline
    #[serde(default)]
    pub sparkline_in_7d: Option<Sparkline>,
}

/// Wrapper object the markets endpoint uses for the 7-day trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline {
    pub price: Vec<f64>,
}

impl Asset {
    /// 24h change with the missing-means-flat rule applied: an asset the API
    /// reports no change for is treated as 0.0%, not as an error.
    pub fn change_24h(&self) -> f64 {
        self.price_change_percentage_24h.unwrap_or(0.0)
    }

    /// Uppercased symbol for display ("btc" → "BTC").
    pub fn ticker(&self) -> String {
        self.symbol.to_uppercase()
    }

    /// Case-insensitive substring match against name or symbol.
    /// `needle` must already be trimmed and lowercased; an empty needle
    /// matches everything, callers guard against that.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.symbol.to_lowercase().contains(needle)
    }

    /// Sparkline prices, if the API delivered a non-empty trace.
    pub fn sparkline_prices(&self) -> Option<&[f64]> {
        self.sparkline_in_7d
            .as_ref()
            .map(|s| s.price.as_slice())
            .filter(|p| !p.is_empty())
    }
}
