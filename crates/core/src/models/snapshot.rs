use chrono::{DateTime, Utc};
use std::collections::HashMap;

use super::asset::Asset;

/// Lifecycle of the market list, drives the grid / error banner / retry
/// surface in whatever frontend embeds the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketStatus {
    /// First fetch not finished yet
    Loading,
    /// Last fetch succeeded; the snapshot is current
    Ready,
    /// Last fetch failed; the previous snapshot (if any) is still served
    Failed(String),
}

/// The most recent successful market fetch.
///
/// Replaced wholesale on every refresh, never merged or patched, so every
/// reader sees one internally consistent view. Order is the API's order
/// (market cap descending) and is preserved everywhere downstream.
#[derive(Debug, Clone, Default)]
pub struct MarketSnapshot {
    assets: Vec<Asset>,
    /// id → position in `assets`, for O(1) lookups during valuation
    index: HashMap<String, usize>,
    fetched_at: Option<DateTime<Utc>>,
}

impl MarketSnapshot {
    /// Build a snapshot from a fresh market fetch, stamped with the current
    /// time. Keeps the rows in the order they arrived.
    pub fn new(assets: Vec<Asset>) -> Self {
        let index = assets
            .iter()
            .enumerate()
            .map(|(i, a)| (a.id.clone(), i))
            .collect();
        Self {
            assets,
            index,
            fetched_at: Some(Utc::now()),
        }
    }

    /// The rows in API order.
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    /// Look up a row by asset id.
    pub fn get(&self, id: &str) -> Option<&Asset> {
        self.index.get(id).map(|&i| &self.assets[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// When this snapshot was fetched. None only for the empty pre-fetch
    /// snapshot a session starts with.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }
}
