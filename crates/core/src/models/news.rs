use serde::{Deserialize, Serialize};

/// A headline from the news feed.
///
/// News is a side panel: fetching it never touches market state, and a
/// failed fetch is the panel's problem alone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    /// Publisher name
    pub source: String,
    /// URL of the full story
    pub link: String,
}
