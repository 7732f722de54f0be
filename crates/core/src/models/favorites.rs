use serde::{Deserialize, Serialize};

/// The set of starred asset ids.
///
/// Kept as an ordered Vec so it serializes to the same bare JSON array the
/// dashboard has always stored (`["bitcoin","solana"]`); set semantics are
/// enforced by [`FavoriteSet::toggle`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet(Vec<String>);

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|f| f == id)
    }

    /// Add `id` if absent, remove it if present. Returns whether `id` is a
    /// favorite after the call.
    ///
    /// Removal drops every occurrence, so a duplicated id in hand-edited
    /// stored data heals on the first toggle.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.0.retain(|f| f != id);
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}
