use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;

use super::kv::KeyValueStore;

/// Storage key for the favorite asset ids.
pub const FAVORITES_KEY: &str = "cryptoFavorites";

/// Storage key for the portfolio holdings.
pub const PORTFOLIO_KEY: &str = "portfolio";

/// JSON preference persistence over a [`KeyValueStore`].
///
/// Loads are tolerant by contract: a missing key, an unreadable store, or
/// corrupt JSON all degrade to the type's `Default`. Broken persisted state
/// must never keep a session from starting; the broken value is simply
/// overwritten by the next save.
pub struct PreferenceStore {
    store: Box<dyn KeyValueStore>,
}

impl PreferenceStore {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Load the value under `key`, falling back to `T::default()` on any
    /// failure. This method does not error.
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.store.get(key) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            Ok(None) | Err(_) => T::default(),
        }
    }

    /// Serialize `value` and overwrite `key` with it. Whole-value writes
    /// only; there are no partial updates and no migrations.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw)
    }
}

impl std::fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore").finish_non_exhaustive()
    }
}
