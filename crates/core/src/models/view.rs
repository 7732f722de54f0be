use serde::{Deserialize, Serialize};

/// The two scopes the asset grid can show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Filter {
    /// Every asset in the snapshot
    #[default]
    All,
    /// Only starred assets
    Favorites,
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Filter::All => write!(f, "All"),
            Filter::Favorites => write!(f, "Favorites"),
        }
    }
}

/// One cell of the scrolling price ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TickerEntry {
    /// Uppercased symbol ("BTC")
    pub symbol: String,
    /// Price in USD
    pub price: f64,
    /// 24h change in percent, 0.0 when unknown
    pub change_24h: f64,
}
