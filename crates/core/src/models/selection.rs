use crate::errors::CoreError;

/// Upper bound on side-by-side comparison.
pub const MAX_COMPARE: usize = 2;

/// Transient pick list for compare mode: at most [`MAX_COMPARE`] asset ids,
/// in selection order. Never persisted; a new session starts empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSelection(Vec<String>);

impl CompareSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `id` as selected.
    ///
    /// Selecting an already-selected id is a no-op. Selecting a third asset
    /// fails with [`CoreError::SelectionFull`] and leaves the selection
    /// untouched, so the caller can roll back whatever control triggered it.
    pub fn select(&mut self, id: &str) -> Result<(), CoreError> {
        if self.contains(id) {
            return Ok(());
        }
        if self.0.len() >= MAX_COMPARE {
            return Err(CoreError::SelectionFull);
        }
        self.0.push(id.to_string());
        Ok(())
    }

    /// Unmark `id`. Deselecting an id that was never selected is a no-op.
    pub fn deselect(&mut self, id: &str) {
        self.0.retain(|s| s != id);
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|s| s == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when exactly [`MAX_COMPARE`] assets are chosen, the only state
    /// compare mode can open from.
    pub fn is_ready(&self) -> bool {
        self.0.len() == MAX_COMPARE
    }

    /// The chosen pair in selection order, if the selection is ready.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match self.0.as_slice() {
            [a, b] => Some((a.as_str(), b.as_str())),
            _ => None,
        }
    }

    pub fn ids(&self) -> &[String] {
        &self.0
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
