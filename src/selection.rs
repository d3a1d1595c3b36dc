//! Identifier-keyed multi-selection scoped to the visible view.
//!
//! A [`Selection`] is a set of record identifiers. Operations that need to know
//! what is on screen take the visible identifiers explicitly, so the selection
//! itself never depends on filter or sort state. Because it is keyed by identifier,
//! re-sorting the same view leaves it intact. Filter changes do not prune it either:
//! an identifier that scrolls out of view stays selected until it is toggled off,
//! replaced by a select-all, or its record disappears from the collection.
//!
//! Transitions return a new `Selection`, matching the replace-not-mutate update
//! style of the rest of the view state.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of selected record identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    ids: BTreeSet<i64>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The header checkbox transition.
    ///
    /// When every visible identifier is already selected, the result is empty.
    /// Otherwise the result is exactly the visible set; earlier selections outside
    /// the view are replaced, not kept.
    #[must_use]
    pub fn select_all(&self, visible: &[i64]) -> Self {
        if self.all_selected(visible) {
            Self::default()
        } else {
            Self {
                ids: visible.iter().copied().collect(),
            }
        }
    }

    /// Adds `id` if absent, removes it if present.
    #[must_use]
    pub fn toggled(&self, id: i64) -> Self {
        let mut ids = self.ids.clone();
        if !ids.remove(&id) {
            ids.insert(id);
        }
        Self { ids }
    }

    /// Keeps only identifiers for which `exists` returns true.
    ///
    /// Used when the collection itself is reloaded, never on filter changes.
    #[must_use]
    pub fn retain_existing(&self, exists: impl Fn(i64) -> bool) -> Self {
        Self {
            ids: self.ids.iter().copied().filter(|id| exists(*id)).collect(),
        }
    }

    /// Every visible identifier is selected and at least one is visible.
    #[must_use]
    pub fn all_selected(&self, visible: &[i64]) -> bool {
        !visible.is_empty() && visible.iter().all(|id| self.ids.contains(id))
    }

    /// Some, but not all, visible identifiers are selected.
    #[must_use]
    pub fn some_selected(&self, visible: &[i64]) -> bool {
        visible.iter().any(|id| self.ids.contains(id)) && !self.all_selected(visible)
    }

    /// Number of selected identifiers that are not in `visible`.
    #[must_use]
    pub fn hidden_count(&self, visible: &[i64]) -> usize {
        let visible: BTreeSet<i64> = visible.iter().copied().collect();
        self.ids.difference(&visible).count()
    }

    #[must_use]
    pub fn contains(&self, id: i64) -> bool {
        self.ids.contains(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected identifiers in ascending order.
    #[must_use]
    pub fn ids(&self) -> Vec<i64> {
        self.ids.iter().copied().collect()
    }
}

impl FromIterator<i64> for Selection {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
