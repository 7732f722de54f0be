use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::detail::AssetDetail;
use crate::models::history::PriceHistory;
use crate::models::news::NewsItem;

/// Trait abstraction for the market data backend.
///
/// The dashboard talks to one market API, but everything above this trait
/// only sees the trait: services and the facade are testable against mocks,
/// and a different data source can be swapped in without touching them.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataProvider: Send + Sync {
    /// Human-readable name of this provider (for errors).
    fn name(&self) -> &str;

    /// Fetch the top of the market: USD prices, market cap descending,
    /// one fixed page, 24h change and 7-day sparkline included.
    async fn fetch_markets(&self) -> Result<Vec<Asset>, CoreError>;

    /// Fetch extended stats for a single asset.
    async fn fetch_detail(&self, id: &str) -> Result<AssetDetail, CoreError>;

    /// Fetch the 7-day hourly USD price series for a single asset.
    async fn fetch_history(&self, id: &str) -> Result<PriceHistory, CoreError>;
}

/// Trait abstraction for the headline feed.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait NewsProvider: Send + Sync {
    /// Human-readable name of this provider (for errors).
    fn name(&self) -> &str;

    /// Fetch the latest headlines, newest first.
    async fn fetch_news(&self) -> Result<Vec<NewsItem>, CoreError>;
}
