pub mod errors;
pub mod models;
pub mod providers;
pub mod services;
pub mod storage;

use models::{
    asset::Asset,
    chart::ChartSeries,
    detail::{CompareView, DetailView},
    favorites::FavoriteSet,
    holding::{Holding, PortfolioValuation},
    news::NewsItem,
    selection::CompareSelection,
    snapshot::{MarketSnapshot, MarketStatus},
    view::{Filter, TickerEntry},
};
use providers::coingecko::CoinGeckoProvider;
use providers::coinstats::CoinStatsProvider;
use providers::traits::{MarketDataProvider, NewsProvider};
use services::{
    chart_service::ChartService, detail_service::DetailService,
    portfolio_service::PortfolioService, view_service::ViewService,
};
use storage::kv::KeyValueStore;
use storage::prefs::{PreferenceStore, FAVORITES_KEY, PORTFOLIO_KEY};

use errors::CoreError;

/// How often the embedding driver should call [`CoinDeck::refresh`].
/// The schedule is unconditional: ticks are not skipped after a failure.
pub const REFRESH_INTERVAL: std::time::Duration = std::time::Duration::from_secs(120);

/// Main entry point for the CoinDeck core library.
///
/// Holds the one mutable copy of dashboard state (snapshot, view state,
/// favorites, holdings) and the services that operate on it. A frontend
/// adapts its events into these commands, re-reads the derived views, and
/// renders; nothing in here touches a pixel.
#[must_use]
pub struct CoinDeck {
    snapshot: MarketSnapshot,
    status: MarketStatus,
    favorites: FavoriteSet,
    holdings: Vec<Holding>,
    selection: CompareSelection,
    filter: Filter,
    search_term: String,
    /// Chart of the last opened detail view; cleared by compare mode
    detail_chart: Option<ChartSeries>,
    view_service: ViewService,
    portfolio_service: PortfolioService,
    detail_service: DetailService,
    chart_service: ChartService,
    market: Box<dyn MarketDataProvider>,
    news: Box<dyn NewsProvider>,
    prefs: PreferenceStore,
}

impl std::fmt::Debug for CoinDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoinDeck")
            .field("assets", &self.snapshot.len())
            .field("status", &self.status)
            .field("favorites", &self.favorites.len())
            .field("holdings", &self.holdings.len())
            .field("filter", &self.filter)
            .field("search_term", &self.search_term)
            .finish()
    }
}

impl CoinDeck {
    /// Build a session against the live CoinGecko and CoinStats APIs,
    /// restoring favorites and holdings from `store`.
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self::with_providers(
            store,
            Box::new(CoinGeckoProvider::new()),
            Box::new(CoinStatsProvider::new()),
        )
    }

    /// Build a session with explicit providers (tests, alternate backends).
    pub fn with_providers(
        store: Box<dyn KeyValueStore>,
        market: Box<dyn MarketDataProvider>,
        news: Box<dyn NewsProvider>,
    ) -> Self {
        let prefs = PreferenceStore::new(store);
        Self::build(prefs, market, news)
    }

    // ── Market Refresh ──────────────────────────────────────────────

    /// Fetch a fresh market snapshot and replace the cached one wholesale.
    ///
    /// On failure the previous snapshot stays in place and the status
    /// switches to `Failed` with a user-facing message; the only recovery
    /// is another call (retry button or the driver's periodic tick). When
    /// calls overlap, whichever completion is applied last wins.
    pub async fn refresh(&mut self) -> Result<(), CoreError> {
        match self.market.fetch_markets().await {
            Ok(assets) => {
                self.snapshot = MarketSnapshot::new(assets);
                self.status = MarketStatus::Ready;
                Ok(())
            }
            Err(e) => {
                self.status = MarketStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }

    // ── Search & Filter ─────────────────────────────────────────────

    /// Submit a search. An empty or whitespace-only term clears the search
    /// and reverts the grid to the active filter's scope.
    pub fn on_search(&mut self, term: impl Into<String>) {
        self.search_term = term.into().trim().to_string();
    }

    /// Apply a recognized voice utterance as the search term. Transcripts
    /// go through the same normalization as typed input.
    pub fn on_voice_transcript(&mut self, transcript: impl Into<String>) {
        self.on_search(transcript);
    }

    /// Switch the grid between the All and Favorites scopes.
    pub fn on_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    // ── Favorites ───────────────────────────────────────────────────

    /// Toggle an asset in the favorite set and persist the set. Returns
    /// whether the asset is a favorite after the toggle.
    ///
    /// The grid derives on read, so under the Favorites filter a
    /// de-favorited asset is gone from the very next `display_list()`.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool, CoreError> {
        let now_favorite = self.favorites.toggle(id);
        self.prefs.save(FAVORITES_KEY, &self.favorites)?;
        Ok(now_favorite)
    }

    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    // ── Compare Selection ───────────────────────────────────────────

    /// Apply a compare checkbox change. Selecting while two assets are
    /// already chosen fails with `SelectionFull` and leaves the selection
    /// untouched, so the caller can roll its checkbox back. Deselecting is
    /// always fine.
    pub fn toggle_compare(&mut self, id: &str, selected: bool) -> Result<(), CoreError> {
        if selected {
            self.selection.select(id)
        } else {
            self.selection.deselect(id);
            Ok(())
        }
    }

    // ── Detail & Compare ────────────────────────────────────────────

    /// Open the single-asset modal: extended stats plus the 7-day chart,
    /// fetched in parallel, all or nothing. List state is untouched, so a
    /// failure leaves the grid exactly as it was.
    pub async fn open_detail(&mut self, id: &str) -> Result<DetailView, CoreError> {
        let view = self.detail_service.load_detail(self.market.as_ref(), id).await?;
        self.detail_chart = Some(
            self.chart_service
                .history_chart(&view.history, &view.detail.name),
        );
        Ok(view)
    }

    /// Open compare mode for the two selected assets. Requires exactly two
    /// selections, otherwise `CompareNotReady`. Replaces any open detail
    /// view and clears its chart; compare mode has none.
    pub async fn open_compare(&mut self) -> Result<CompareView, CoreError> {
        let (left_id, right_id) = match self.selection.pair() {
            Some((a, b)) => (a.to_string(), b.to_string()),
            None => return Err(CoreError::CompareNotReady),
        };

        let view = self
            .detail_service
            .load_compare(self.market.as_ref(), &left_id, &right_id)
            .await?;
        self.detail_chart = None;
        Ok(view)
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Add a holding to the portfolio and persist it.
    ///
    /// Rejected with `InvalidEntry` (nothing stored) unless the id is
    /// non-empty and both quantity and buy price are positive finite
    /// numbers. Holdings are append-only; there is no edit or remove.
    pub fn add_holding(&mut self, asset_id: &str, quantity: f64, buy_price: f64) -> Result<(), CoreError> {
        self.portfolio_service
            .validate_entry(asset_id, quantity, buy_price)?;
        self.holdings.push(Holding {
            asset_id: asset_id.to_string(),
            quantity,
            buy_price,
        });
        self.prefs.save(PORTFOLIO_KEY, &self.holdings)
    }

    /// Value the holdings against the current snapshot.
    #[must_use]
    pub fn valuate(&self) -> PortfolioValuation {
        self.portfolio_service.valuate(&self.holdings, &self.snapshot)
    }

    /// The persisted holdings, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    // ── News ────────────────────────────────────────────────────────

    /// Fetch the latest headlines. A failure is the news panel's problem
    /// alone: market state and the grid are never affected.
    pub async fn fetch_news(&self) -> Result<Vec<NewsItem>, CoreError> {
        self.news.fetch_news().await
    }

    // ── Derived Views ───────────────────────────────────────────────

    /// The asset grid under the current filter, favorites, and search term.
    #[must_use]
    pub fn display_list(&self) -> Vec<&Asset> {
        self.view_service
            .display_list(&self.snapshot, self.filter, &self.favorites, &self.search_term)
    }

    /// Live suggestions for an in-progress search box value. The submitted
    /// search term is separate state; this never touches it.
    #[must_use]
    pub fn suggest(&self, term: &str) -> Vec<&Asset> {
        self.view_service.suggestions(&self.snapshot, term)
    }

    /// Ticker strip entries for the top of the snapshot.
    #[must_use]
    pub fn ticker(&self) -> Vec<TickerEntry> {
        self.view_service.ticker(&self.snapshot)
    }

    // ── State Access ────────────────────────────────────────────────

    #[must_use]
    pub fn snapshot(&self) -> &MarketSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn status(&self) -> &MarketStatus {
        &self.status
    }

    #[must_use]
    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// The currently submitted search term, already trimmed.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    #[must_use]
    pub fn compare_selection(&self) -> &CompareSelection {
        &self.selection
    }

    /// Chart of the most recently opened detail view, if a detail modal
    /// was opened and not replaced by compare mode since.
    #[must_use]
    pub fn detail_chart(&self) -> Option<&ChartSeries> {
        self.detail_chart.as_ref()
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(
        prefs: PreferenceStore,
        market: Box<dyn MarketDataProvider>,
        news: Box<dyn NewsProvider>,
    ) -> Self {
        let favorites: FavoriteSet = prefs.load(FAVORITES_KEY);
        let holdings: Vec<Holding> = prefs.load(PORTFOLIO_KEY);

        Self {
            snapshot: MarketSnapshot::default(),
            status: MarketStatus::Loading,
            favorites,
            holdings,
            selection: CompareSelection::new(),
            filter: Filter::All,
            search_term: String::new(),
            detail_chart: None,
            view_service: ViewService::new(),
            portfolio_service: PortfolioService::new(),
            detail_service: DetailService::new(),
            chart_service: ChartService::new(),
            market,
            news,
            prefs,
        }
    }
}
