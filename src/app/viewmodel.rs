//! View model handed to the rendering layer.
//!
//! A [`CollectionView`] is an immutable snapshot computed from
//! [`AppState`](crate::app::AppState). It carries everything a table view needs:
//! the ordered rows, the filter and sort state for the controls, the derived
//! domain for dropdowns and range placeholders, and the selection flags for the
//! header checkbox and bulk-action toolbar.

use crate::domain::Bottle;
use crate::filter::{Domain, FilterState};
use crate::sort::SortState;
use serde::Serialize;

/// Renderable snapshot of the collection view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionView {
    /// Filtered and sorted records, in display order.
    pub rows: Vec<Bottle>,

    /// Size of the unfiltered collection.
    pub total_count: usize,

    /// Number of set filter constraints, for the "N filters active" badge.
    pub active_filter_count: usize,

    pub filters: FilterState,
    pub sort: SortState,
    pub domain: Domain,

    /// Selected identifiers in ascending order, visible or not.
    pub selected_ids: Vec<i64>,

    /// Header checkbox checked.
    pub all_selected: bool,

    /// Header checkbox indeterminate.
    pub some_selected: bool,

    /// Selected records currently hidden by filters.
    pub hidden_selected_count: usize,
}

impl CollectionView {
    /// Number of rows on screen.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.rows.len()
    }

    /// True when filters hide every record of a non-empty collection.
    #[must_use]
    pub fn is_filtered_empty(&self) -> bool {
        self.rows.is_empty() && self.total_count > 0
    }
}
