use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::asset::Asset;
use crate::models::detail::AssetDetail;
use crate::models::history::{PriceHistory, PricePoint};
use super::traits::MarketDataProvider;

const BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// Number of assets requested per market snapshot.
pub const PER_PAGE: u32 = 50;

/// Length of the detail price history, in days.
pub const HISTORY_DAYS: u32 = 7;

/// CoinGecko API provider for market data.
///
/// - **Free**: no API key required for the public endpoints used here.
/// - **Endpoints**: `/coins/markets`, `/coins/{id}`, `/coins/{id}/market_chart`
/// - All requests are pinned to USD; asset ids are CoinGecko's lowercase
///   slugs ("bitcoin", "ethereum").
pub struct CoinGeckoProvider {
    client: Client,
}

impl CoinGeckoProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinGecko API response types ────────────────────────────────────

#[derive(Deserialize)]
struct CoinResponse {
    id: String,
    name: String,
    symbol: String,
    image: ImageSet,
    market_cap_rank: Option<u32>,
    market_data: MarketData,
}

#[derive(Deserialize)]
struct ImageSet {
    small: String,
}

#[derive(Deserialize)]
struct MarketData {
    current_price: CurrencyMap,
    price_change_percentage_24h: Option<f64>,
    high_24h: CurrencyMap,
    low_24h: CurrencyMap,
    ath: CurrencyMap,
    atl: CurrencyMap,
    market_cap: CurrencyMap,
}

/// One figure quoted per currency; only the USD quote is consumed.
#[derive(Deserialize, Default)]
struct CurrencyMap {
    #[serde(default)]
    usd: Option<f64>,
}

#[derive(Deserialize)]
struct MarketChartResponse {
    /// `[timestamp_ms, price]` pairs. Timestamps arrive as JSON numbers
    /// that are not always integral, hence f64.
    prices: Vec<(f64, f64)>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataProvider for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_markets(&self) -> Result<Vec<Asset>, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/markets?vs_currency=usd&order=market_cap_desc\
             &per_page={PER_PAGE}&page=1&sparkline=true&price_change_percentage=24h"
        );

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::Http {
                status: resp.status().as_u16(),
                context: "market list".into(),
            });
        }

        let assets: Vec<Asset> = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinGecko".into(),
            message: format!("Failed to parse market list: {e}"),
        })?;

        Ok(assets)
    }

    async fn fetch_detail(&self, id: &str) -> Result<AssetDetail, CoreError> {
        let url = format!("{BASE_URL}/coins/{id}?localization=false");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::Http {
                status: resp.status().as_u16(),
                context: format!("details for {id}"),
            });
        }

        let coin: CoinResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinGecko".into(),
            message: format!("Failed to parse details for {id}: {e}"),
        })?;

        // The price is the one figure the modal cannot render without; the
        // secondary stats fall back to zero like an unquoted figure would.
        let current_price = coin
            .market_data
            .current_price
            .usd
            .ok_or_else(|| CoreError::Api {
                provider: "CoinGecko".into(),
                message: format!("No USD price for {id}"),
            })?;

        Ok(AssetDetail {
            id: coin.id,
            name: coin.name,
            symbol: coin.symbol,
            image: coin.image.small,
            current_price,
            change_24h: coin.market_data.price_change_percentage_24h.unwrap_or(0.0),
            market_cap_rank: coin.market_cap_rank,
            high_24h: coin.market_data.high_24h.usd.unwrap_or(0.0),
            low_24h: coin.market_data.low_24h.usd.unwrap_or(0.0),
            ath: coin.market_data.ath.usd.unwrap_or(0.0),
            atl: coin.market_data.atl.usd.unwrap_or(0.0),
            market_cap: coin.market_data.market_cap.usd.unwrap_or(0.0),
        })
    }

    async fn fetch_history(&self, id: &str) -> Result<PriceHistory, CoreError> {
        let url = format!(
            "{BASE_URL}/coins/{id}/market_chart?vs_currency=usd&days={HISTORY_DAYS}&interval=hourly"
        );

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::Http {
                status: resp.status().as_u16(),
                context: format!("price history for {id}"),
            });
        }

        let chart: MarketChartResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinGecko".into(),
            message: format!("Failed to parse price history for {id}: {e}"),
        })?;

        let points: Vec<PricePoint> = chart
            .prices
            .iter()
            .filter_map(|&(ms, price)| {
                let timestamp = chrono::DateTime::from_timestamp_millis(ms as i64)?;
                Some(PricePoint { timestamp, price })
            })
            .collect();

        Ok(PriceHistory { points })
    }
}
