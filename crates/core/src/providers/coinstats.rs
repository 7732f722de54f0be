use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::errors::CoreError;
use crate::models::news::NewsItem;
use super::traits::NewsProvider;

const BASE_URL: &str = "https://api.coinstats.app/public/v1";

/// Number of headlines the dashboard consumes.
pub const NEWS_LIMIT: usize = 6;

/// CoinStats API provider for crypto headlines.
///
/// - **Free**: no API key required for the public news endpoint.
/// - **Endpoint**: `/news?skip=0&limit={NEWS_LIMIT}`
pub struct CoinStatsProvider {
    client: Client,
}

impl CoinStatsProvider {
    pub fn new() -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for CoinStatsProvider {
    fn default() -> Self {
        Self::new()
    }
}

// ── CoinStats API response types ────────────────────────────────────

#[derive(Deserialize)]
struct NewsResponse {
    news: Vec<NewsEntry>,
}

#[derive(Deserialize)]
struct NewsEntry {
    title: String,
    // Feed entries occasionally omit source or link
    #[serde(default)]
    source: String,
    #[serde(default)]
    link: String,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl NewsProvider for CoinStatsProvider {
    fn name(&self) -> &str {
        "CoinStats"
    }

    async fn fetch_news(&self) -> Result<Vec<NewsItem>, CoreError> {
        let url = format!("{BASE_URL}/news?skip=0&limit={NEWS_LIMIT}");

        let resp = self.client.get(&url).send().await?;
        if !resp.status().is_success() {
            return Err(CoreError::Http {
                status: resp.status().as_u16(),
                context: "news feed".into(),
            });
        }

        let feed: NewsResponse = resp.json().await.map_err(|e| CoreError::Api {
            provider: "CoinStats".into(),
            message: format!("Failed to parse news feed: {e}"),
        })?;

        let mut items: Vec<NewsItem> = feed
            .news
            .into_iter()
            .map(|n| NewsItem {
                title: n.title,
                source: n.source,
                link: n.link,
            })
            .collect();
        // The limit rides in the query, but the feed is not trusted to honor it
        items.truncate(NEWS_LIMIT);

        Ok(items)
    }
}
