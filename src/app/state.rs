//! Application state and view model computation.
//!
//! This module defines [`AppState`], the single source of truth for the collection
//! view. It separates core data (the record collection) from view state (filters,
//! sort, selection) and from derived state (domain, visible rows), recomputing the
//! derived parts whenever their inputs are replaced.
//!
//! # State Components
//!
//! - **Records**: the full collection as supplied by the retrieval layer
//! - **Filters**: the current [`FilterState`]
//! - **Sort**: the active [`SortState`]
//! - **Selection**: identifiers picked for bulk actions
//! - **Domain**: option sets and ranges derived from the records
//! - **Visible**: records passing the filters, in sort order
//!
//! # Example
//!
//! ```
//! use dramlog::app::AppState;
//! use dramlog::sort::SortState;
//! use dramlog::Bottle;
//!
//! let state = AppState::new(vec![Bottle::new(1, "Lagavulin 16")], SortState::default());
//! assert_eq!(state.visible_ids(), [1]);
//! ```

use super::viewmodel::CollectionView;
use crate::domain::Bottle;
use crate::filter::{derive_domain, filter_records, Domain, FilterState};
use crate::selection::Selection;
use crate::sort::{sort_records, SortState};
use std::collections::HashSet;

/// Central state container for the collection view.
///
/// Mutated only by [`handle_event`](crate::app::handle_event). Each field of view
/// state is replaced wholesale rather than edited in place.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Full record collection, in retrieval order.
    pub records: Vec<Bottle>,

    /// Active filter constraints.
    ///
    /// Starts as [`FilterState::default`], which passes every record.
    pub filters: FilterState,

    /// Active sort column and direction.
    pub sort: SortState,

    /// Selected record identifiers.
    ///
    /// Survives filter changes untouched; only pruned when records leave the
    /// collection.
    pub selection: Selection,

    /// Filter options derived from `records`.
    ///
    /// Recomputed by `replace_records()`.
    pub domain: Domain,

    /// Records passing `filters`, ordered by `sort`.
    ///
    /// Recomputed by `refresh_visible()`.
    visible: Vec<Bottle>,
}

impl AppState {
    /// Creates state over `records` with no filters, no selection, and `sort` active.
    #[must_use]
    pub fn new(records: Vec<Bottle>, sort: SortState) -> Self {
        let mut state = Self {
            domain: derive_domain(&records),
            records,
            filters: FilterState::default(),
            sort,
            selection: Selection::default(),
            visible: vec![],
        };
        state.refresh_visible();
        state
    }

    /// Filtered and sorted records.
    #[must_use]
    pub fn visible(&self) -> &[Bottle] {
        &self.visible
    }

    /// Identifiers of the visible records, in display order.
    #[must_use]
    pub fn visible_ids(&self) -> Vec<i64> {
        self.visible.iter().map(|bottle| bottle.id).collect()
    }

    /// Looks up a record in the full collection.
    #[must_use]
    pub fn record(&self, id: i64) -> Option<&Bottle> {
        self.records.iter().find(|bottle| bottle.id == id)
    }

    /// Recomputes the visible rows from records, filters, and sort.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with the collection size and active filter count.
    pub fn refresh_visible(&mut self) {
        let _span = tracing::debug_span!(
            "refresh_visible",
            total_records = self.records.len(),
            active_filters = self.filters.active_count(),
            sort_column = %self.sort.column,
            sort_direction = %self.sort.direction
        )
        .entered();

        let filtered = filter_records(&self.records, &self.filters);
        self.visible = sort_records(&filtered, self.sort.column, self.sort.direction);

        tracing::debug!(visible_count = self.visible.len(), "visible rows recomputed");
    }

    /// Replaces the collection, recomputing the domain and visible rows.
    ///
    /// Selected identifiers whose records are gone are dropped; filters and sort are
    /// kept.
    pub fn replace_records(&mut self, records: Vec<Bottle>) {
        let ids: HashSet<i64> = records.iter().map(|bottle| bottle.id).collect();
        let before = self.selection.len();

        self.selection = self.selection.retain_existing(|id| ids.contains(&id));
        self.domain = derive_domain(&records);
        self.records = records;
        self.refresh_visible();

        tracing::debug!(
            total_records = self.records.len(),
            pruned_selection = before - self.selection.len(),
            "collection replaced"
        );
    }

    /// Computes the renderable view model from the current state.
    #[must_use]
    pub fn view(&self) -> CollectionView {
        let visible_ids = self.visible_ids();
        CollectionView {
            rows: self.visible.clone(),
            total_count: self.records.len(),
            active_filter_count: self.filters.active_count(),
            filters: self.filters.clone(),
            sort: self.sort,
            domain: self.domain.clone(),
            selected_ids: self.selection.ids(),
            all_selected: self.selection.all_selected(&visible_ids),
            some_selected: self.selection.some_selected(&visible_ids),
            hidden_selected_count: self.selection.hidden_count(&visible_ids),
        }
    }
}
