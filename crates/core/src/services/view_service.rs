use crate::models::asset::Asset;
use crate::models::favorites::FavoriteSet;
use crate::models::snapshot::MarketSnapshot;
use crate::models::view::{Filter, TickerEntry};

/// Most matches the live search suggestion box will show.
pub const SUGGESTION_LIMIT: usize = 6;

/// Number of snapshot rows in the scrolling ticker.
pub const TICKER_LEN: usize = 15;

/// Derives every displayed collection from the snapshot plus view state.
///
/// Pure functions over the data model, no I/O. The facade owns the state,
/// this service owns the rules.
pub struct ViewService;

impl ViewService {
    pub fn new() -> Self {
        Self
    }

    /// The asset grid for the current `{filter, favorites, search_term}`.
    ///
    /// A non-empty search term matches name or symbol case-insensitively and
    /// takes precedence over the active filter: a search while the Favorites
    /// scope is on still scans the whole snapshot. That precedence is
    /// long-standing dashboard behavior, kept on purpose. Clearing the term
    /// reverts to the filter's scope. Output order is snapshot order.
    pub fn display_list<'a>(
        &self,
        snapshot: &'a MarketSnapshot,
        filter: Filter,
        favorites: &FavoriteSet,
        search_term: &str,
    ) -> Vec<&'a Asset> {
        let needle = search_term.trim().to_lowercase();
        if !needle.is_empty() {
            return snapshot
                .assets()
                .iter()
                .filter(|a| a.matches(&needle))
                .collect();
        }

        match filter {
            Filter::All => snapshot.assets().iter().collect(),
            Filter::Favorites => snapshot
                .assets()
                .iter()
                .filter(|a| favorites.contains(&a.id))
                .collect(),
        }
    }

    /// Live search suggestions: the first [`SUGGESTION_LIMIT`] matches in
    /// snapshot order. An empty or whitespace term yields nothing (the box
    /// is hidden, not showing everything).
    pub fn suggestions<'a>(&self, snapshot: &'a MarketSnapshot, term: &str) -> Vec<&'a Asset> {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        snapshot
            .assets()
            .iter()
            .filter(|a| a.matches(&needle))
            .take(SUGGESTION_LIMIT)
            .collect()
    }

    /// Ticker strip data: the top [`TICKER_LEN`] assets in the snapshot's
    /// own ordering, reduced to what the strip renders.
    pub fn ticker(&self, snapshot: &MarketSnapshot) -> Vec<TickerEntry> {
        snapshot
            .assets()
            .iter()
            .take(TICKER_LEN)
            .map(|a| TickerEntry {
                symbol: a.ticker(),
                price: a.current_price,
                change_24h: a.change_24h(),
            })
            .collect()
    }
}

impl Default for ViewService {
    fn default() -> Self {
        Self::new()
    }
}
