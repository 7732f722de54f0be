use crate::errors::CoreError;
use crate::models::detail::{CompareView, DetailView};
use crate::providers::traits::MarketDataProvider;

/// On-demand fetches for the detail modal and compare mode.
///
/// Both views are all-or-nothing: their parts are fetched in parallel and a
/// failure on either side aborts the whole view, so a modal never renders
/// half loaded.
pub struct DetailService;

impl DetailService {
    pub fn new() -> Self {
        Self
    }

    /// Stats plus the 7-day hourly series for one asset, fetched as a unit.
    pub async fn load_detail(
        &self,
        provider: &dyn MarketDataProvider,
        id: &str,
    ) -> Result<DetailView, CoreError> {
        let (detail, history) =
            futures::try_join!(provider.fetch_detail(id), provider.fetch_history(id))?;
        Ok(DetailView { detail, history })
    }

    /// Stats for two assets side by side: two independent parallel fetches,
    /// no ordering between them. No chart in this mode.
    pub async fn load_compare(
        &self,
        provider: &dyn MarketDataProvider,
        left_id: &str,
        right_id: &str,
    ) -> Result<CompareView, CoreError> {
        let (left, right) =
            futures::try_join!(provider.fetch_detail(left_id), provider.fetch_detail(right_id))?;
        Ok(CompareView { left, right })
    }
}

impl Default for DetailService {
    fn default() -> Self {
        Self::new()
    }
}
