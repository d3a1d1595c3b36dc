//! Event handling and state transition logic.
//!
//! This module implements the dispatcher that turns user-driven events into state
//! replacements and side-effect actions. Events are processed one at a time by the
//! caller's event loop, so transitions are deterministic.
//!
//! # Event Types
//!
//! - **Filtering**: `SetFilter`, `SetFilterInput`, `ClearFilters`
//! - **Sorting**: `SetSort`
//! - **Selection**: `SelectAll`, `ToggleSelection`, `ClearSelection`
//! - **Collection**: `RecordsLoaded`
//! - **Bulk/Record actions**: `DeleteSelected`, `OpenRecord`
//!
//! # Example
//!
//! ```
//! use dramlog::app::{handle_event, AppState, Event};
//! use dramlog::sort::SortState;
//! use dramlog::Bottle;
//!
//! let mut state = AppState::new(vec![Bottle::new(1, "Yamazaki 18")], SortState::default());
//! let (changed, actions) = handle_event(&mut state, &Event::SelectAll)?;
//! assert!(changed);
//! assert!(actions.is_empty());
//! assert!(state.view().all_selected);
//! # Ok::<(), dramlog::DramlogError>(())
//! ```

use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::Bottle;
use crate::filter::{FilterState, FilterUpdate};
use crate::selection::Selection;
use crate::sort::SortColumn;

/// Discrete user-driven or data-driven transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Replaces one filter dimension.
    SetFilter(FilterUpdate),

    /// Replaces one filter dimension from raw UI text.
    ///
    /// The field name and value go through [`FilterUpdate::from_input`]; numeric text
    /// that does not parse clears the bound.
    SetFilterInput {
        /// Field name such as `"type"`, `"chill_filtered"` or `"priceMin"`.
        name: String,
        /// Raw text from the control.
        value: String,
    },

    /// Resets every filter dimension.
    ClearFilters,

    /// Column header click.
    SetSort(SortColumn),

    /// Header checkbox click.
    SelectAll,

    /// Row checkbox click.
    ToggleSelection(i64),

    /// Drops the whole selection.
    ClearSelection,

    /// A fresh collection arrived from the retrieval layer.
    RecordsLoaded(Vec<Bottle>),

    /// Requests deletion of every selected record.
    DeleteSelected,

    /// Requests the detail view of one record.
    OpenRecord(i64),
}

/// Processes an event, replaces state as needed, and returns actions to execute.
///
/// # Returns
///
/// `(changed, actions)`: whether the view needs re-rendering, and the side effects
/// for the surrounding application to run in order.
///
/// # Errors
///
/// Returns [`DramlogError::UnknownDimension`](crate::DramlogError::UnknownDimension)
/// for a `SetFilterInput` naming no known dimension. State is left untouched in that
/// case.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::SetFilter(update) => Ok((apply_filter(state, update.clone()), vec![])),
        Event::SetFilterInput { name, value } => {
            let update = FilterUpdate::from_input(name, value)?;
            Ok((apply_filter(state, update), vec![]))
        }
        Event::ClearFilters => {
            if state.filters.is_default() {
                tracing::debug!("filters already clear");
                return Ok((false, vec![]));
            }
            state.filters = FilterState::default();
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::SetSort(column) => {
            state.sort = state.sort.select(*column);
            tracing::debug!(
                column = %state.sort.column,
                direction = %state.sort.direction,
                "sort changed"
            );
            state.refresh_visible();
            Ok((true, vec![]))
        }
        Event::SelectAll => {
            let visible = state.visible_ids();
            state.selection = state.selection.select_all(&visible);
            tracing::debug!(
                visible = visible.len(),
                selected = state.selection.len(),
                "select all toggled"
            );
            Ok((true, vec![]))
        }
        Event::ToggleSelection(id) => {
            state.selection = state.selection.toggled(*id);
            tracing::trace!(id = id, selected = state.selection.contains(*id), "selection toggled");
            Ok((true, vec![]))
        }
        Event::ClearSelection => {
            if state.selection.is_empty() {
                return Ok((false, vec![]));
            }
            state.selection = Selection::default();
            Ok((true, vec![]))
        }
        Event::RecordsLoaded(records) => {
            if &state.records == records {
                tracing::debug!("records unchanged, skipping refresh");
                return Ok((false, vec![]));
            }
            state.replace_records(records.clone());
            Ok((true, vec![]))
        }
        Event::DeleteSelected => {
            if state.selection.is_empty() {
                tracing::debug!("nothing selected to delete");
                return Ok((false, vec![]));
            }
            let visible = state.visible_ids();
            let hidden = state.selection.hidden_count(&visible);
            if hidden > 0 {
                tracing::warn!(hidden, "bulk delete includes records hidden by filters");
            }
            Ok((
                false,
                vec![Action::DeleteRecords {
                    ids: state.selection.ids(),
                }],
            ))
        }
        Event::OpenRecord(id) => {
            if state.record(*id).is_none() {
                tracing::debug!(id = id, "record not in collection");
                return Ok((false, vec![]));
            }
            Ok((false, vec![Action::OpenRecord { id: *id }]))
        }
    }
}

fn apply_filter(state: &mut AppState, update: FilterUpdate) -> bool {
    let next = state.filters.apply(update);
    if next == state.filters {
        tracing::debug!("filter unchanged, skipping refresh");
        return false;
    }
    state.filters = next;
    state.refresh_visible();
    true
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::SetFilter(_) => "set_filter",
        Event::SetFilterInput { .. } => "set_filter_input",
        Event::ClearFilters => "clear_filters",
        Event::SetSort(_) => "set_sort",
        Event::SelectAll => "select_all",
        Event::ToggleSelection(_) => "toggle_selection",
        Event::ClearSelection => "clear_selection",
        Event::RecordsLoaded(_) => "records_loaded",
        Event::DeleteSelected => "delete_selected",
        Event::OpenRecord(_) => "open_record",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{CategoricalDimension, FlagDimension, TriState};
    use crate::sort::{SortDirection, SortState};
    use crate::DramlogError;

    fn state() -> AppState {
        let records = (1..=4)
            .map(|id| {
                let mut bottle = Bottle::new(id, format!("bottle-{id}"));
                bottle.is_opened = Some(id % 2 == 0);
                bottle
            })
            .collect();
        AppState::new(records, SortState::default())
    }

    #[test]
    fn unchanged_filter_does_not_refresh() {
        let mut state = state();
        let event = Event::SetFilter(FilterUpdate::Categorical(
            CategoricalDimension::Type,
            String::new(),
        ));
        assert_eq!(handle_event(&mut state, &event).unwrap(), (false, vec![]));
    }

    #[test]
    fn filter_input_narrows_and_clear_restores() {
        let mut state = state();
        let event = Event::SetFilterInput {
            name: "isOpened".into(),
            value: "true".into(),
        };
        assert!(handle_event(&mut state, &event).unwrap().0);
        assert_eq!(state.visible_ids(), [2, 4]);
        assert_eq!(state.filters.is_opened, TriState::Yes);

        assert!(handle_event(&mut state, &Event::ClearFilters).unwrap().0);
        assert_eq!(state.visible_ids(), [1, 2, 3, 4]);
        assert_eq!(state.filters, FilterState::default());
        assert!(!handle_event(&mut state, &Event::ClearFilters).unwrap().0);
    }

    #[test]
    fn unknown_filter_input_leaves_state_alone() {
        let mut state = state();
        let event = Event::SetFilterInput {
            name: "vintage".into(),
            value: "1990".into(),
        };
        assert!(matches!(
            handle_event(&mut state, &event),
            Err(DramlogError::UnknownDimension(_))
        ));
        assert!(state.filters.is_default());
    }

    #[test]
    fn repeated_sort_clicks_toggle_direction() {
        let mut state = state();
        handle_event(&mut state, &Event::SetSort(SortColumn::Name)).unwrap();
        assert_eq!(state.sort.direction, SortDirection::Descending);
        assert_eq!(state.visible_ids(), [4, 3, 2, 1]);

        handle_event(&mut state, &Event::SetSort(SortColumn::Age)).unwrap();
        assert_eq!(state.sort, SortState::new(SortColumn::Age, SortDirection::Ascending));
    }

    #[test]
    fn selection_is_scoped_to_visible_rows() {
        let mut state = state();
        handle_event(
            &mut state,
            &Event::SetFilter(FilterUpdate::Flag(FlagDimension::IsOpened, TriState::No)),
        )
        .unwrap();
        handle_event(&mut state, &Event::SelectAll).unwrap();
        assert_eq!(state.selection.ids(), [1, 3]);

        handle_event(&mut state, &Event::SelectAll).unwrap();
        assert!(state.selection.is_empty());
    }

    #[test]
    fn filter_change_keeps_hidden_selection() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleSelection(2)).unwrap();
        handle_event(
            &mut state,
            &Event::SetFilter(FilterUpdate::Flag(FlagDimension::IsOpened, TriState::No)),
        )
        .unwrap();
        assert!(state.selection.contains(2));

        let (_, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
        assert_eq!(actions, vec![Action::DeleteRecords { ids: vec![2] }]);
    }

    #[test]
    fn delete_without_selection_is_a_no_op() {
        let mut state = state();
        assert_eq!(handle_event(&mut state, &Event::DeleteSelected).unwrap(), (false, vec![]));
    }

    #[test]
    fn records_loaded_replaces_collection() {
        let mut state = state();
        handle_event(&mut state, &Event::ToggleSelection(4)).unwrap();

        let same = state.records.clone();
        assert!(!handle_event(&mut state, &Event::RecordsLoaded(same)).unwrap().0);

        let fewer = state.records[..2].to_vec();
        assert!(handle_event(&mut state, &Event::RecordsLoaded(fewer)).unwrap().0);
        assert_eq!(state.visible_ids(), [1, 2]);
        assert!(state.selection.is_empty());
    }

    #[test]
    fn open_record_checks_existence() {
        let mut state = state();
        assert_eq!(
            handle_event(&mut state, &Event::OpenRecord(3)).unwrap(),
            (false, vec![Action::OpenRecord { id: 3 }])
        );
        assert_eq!(handle_event(&mut state, &Event::OpenRecord(99)).unwrap(), (false, vec![]));
    }

    #[test]
    fn clear_selection() {
        let mut state = state();
        assert!(!handle_event(&mut state, &Event::ClearSelection).unwrap().0);
        handle_event(&mut state, &Event::ToggleSelection(1)).unwrap();
        assert!(handle_event(&mut state, &Event::ClearSelection).unwrap().0);
        assert!(state.selection.is_empty());
    }
}
