//! End-to-end behaviour of the collection view over a small reference shelf.

mod common;

use common::{ids, shelf};
use dramlog::app::{handle_event, AppState, Event};
use dramlog::filter::{
    derive_domain, filter_records, BoundSide, CategoricalDimension, FilterState, FilterUpdate,
    FlagDimension, NumericDimension, TriState,
};
use dramlog::sort::{sort_records, SortColumn, SortDirection, SortState};
use dramlog::{Action, Bottle, Selection};

fn state_with(updates: &[FilterUpdate]) -> FilterState {
    updates
        .iter()
        .cloned()
        .fold(FilterState::default(), |state, update| state.apply(update))
}

#[test]
fn type_filter_selects_bourbons() {
    let state = state_with(&[FilterUpdate::Categorical(
        CategoricalDimension::Type,
        "bourbon".into(),
    )]);
    assert_eq!(ids(&filter_records(&shelf(), &state)), [1, 2]);
}

#[test]
fn price_range_falls_back_to_msrp() {
    let state = state_with(&[
        FilterUpdate::Bound(NumericDimension::Price, BoundSide::Min, Some(60.0)),
        FilterUpdate::Bound(NumericDimension::Price, BoundSide::Max, Some(70.0)),
    ]);
    assert_eq!(ids(&filter_records(&shelf(), &state)), [5]);
}

#[test]
fn combined_filters_find_the_opened_chill_filtered_scotch() {
    let state = state_with(&[
        FilterUpdate::Categorical(CategoricalDimension::Type, "scotch".into()),
        FilterUpdate::Flag(FlagDimension::ChillFiltered, TriState::Yes),
        FilterUpdate::Flag(FlagDimension::IsOpened, TriState::Yes),
    ]);
    assert_eq!(ids(&filter_records(&shelf(), &state)), [3]);
}

#[test]
fn unknown_chill_filtering_is_excluded() {
    let mut records = shelf();
    records.push(Bottle::new(6, "Mystery Cask"));

    let yes = state_with(&[FilterUpdate::Flag(FlagDimension::ChillFiltered, TriState::Yes)]);
    assert_eq!(ids(&filter_records(&records, &yes)), [1, 3]);

    let no = state_with(&[FilterUpdate::Flag(FlagDimension::ChillFiltered, TriState::No)]);
    assert!(filter_records(&records, &no).is_empty());
}

#[test]
fn unopened_filter_includes_unknown_opened_state() {
    let state = state_with(&[FilterUpdate::Flag(FlagDimension::IsOpened, TriState::No)]);
    assert_eq!(ids(&filter_records(&shelf(), &state)), [2, 4, 5]);
}

#[test]
fn age_and_rating_bounds() {
    let state = state_with(&[
        FilterUpdate::Bound(NumericDimension::Age, BoundSide::Min, Some(12.0)),
        FilterUpdate::Bound(NumericDimension::Rating, BoundSide::Max, Some(9.5)),
    ]);
    assert_eq!(ids(&filter_records(&shelf(), &state)), [3, 4, 5]);
}

#[test]
fn name_sort_reverses_on_second_click() {
    let records = shelf();
    let asc = sort_records(&records, SortColumn::Name, SortDirection::Ascending);
    assert_eq!(ids(&asc), [1, 3, 2, 5, 4]);

    let sort = SortState::default().select(SortColumn::Name);
    let desc = sort_records(&records, sort.column, sort.direction);
    let mut reversed = ids(&asc);
    reversed.reverse();
    assert_eq!(ids(&desc), reversed);
}

#[test]
fn abv_ties_keep_collection_order() {
    let asc = sort_records(&shelf(), SortColumn::Abv, SortDirection::Ascending);
    assert_eq!(ids(&asc), [5, 3, 4, 1, 2]);
    let desc = sort_records(&shelf(), SortColumn::Abv, SortDirection::Descending);
    assert_eq!(ids(&desc), [2, 1, 3, 4, 5]);
}

#[test]
fn select_all_twice_on_three_visible_rows_clears() {
    let visible = [1, 3, 4];
    let selection = Selection::new().select_all(&visible);
    assert_eq!(selection.len(), 3);
    assert!(selection.select_all(&visible).is_empty());
}

#[test]
fn domain_reflects_the_shelf() {
    let domain = derive_domain(&shelf());
    assert_eq!(
        domain.options(CategoricalDimension::Type),
        ["bourbon", "irish", "japanese", "scotch"]
    );
    assert_eq!(
        domain.options(CategoricalDimension::Distillery),
        ["Buffalo Trace", "Lagavulin", "Midleton", "Yamazaki"]
    );
    let price = domain.range(NumericDimension::Price);
    assert_eq!((price.min, price.max, price.observed), (30.0, 2000.0, true));
    let age = domain.range(NumericDimension::Age);
    assert_eq!((age.min, age.max), (8.0, 20.0));
}

#[test]
fn event_flow_through_app_state() {
    let mut state = AppState::new(shelf(), SortState::default());

    let filter = Event::SetFilterInput {
        name: "country".into(),
        value: "USA".into(),
    };
    handle_event(&mut state, &filter).unwrap();
    handle_event(&mut state, &Event::SetSort(SortColumn::Rating)).unwrap();
    handle_event(&mut state, &Event::SetSort(SortColumn::Rating)).unwrap();
    assert_eq!(state.visible_ids(), [2, 1]);

    handle_event(&mut state, &Event::SelectAll).unwrap();
    let view = state.view();
    assert!(view.all_selected);
    assert_eq!(view.active_filter_count, 1);
    assert_eq!(view.total_count, 5);

    let bogus_bound = Event::SetFilterInput {
        name: "priceMax".into(),
        value: "cheap".into(),
    };
    let (changed, _) = handle_event(&mut state, &bogus_bound).unwrap();
    assert!(!changed);

    handle_event(&mut state, &Event::ClearFilters).unwrap();
    let view = state.view();
    assert_eq!(view.visible_count(), 5);
    assert!(view.some_selected);
    assert!(!view.all_selected);

    let (_, actions) = handle_event(&mut state, &Event::DeleteSelected).unwrap();
    assert_eq!(actions, vec![Action::DeleteRecords { ids: vec![1, 2] }]);
}

#[test]
fn empty_collection_is_handled_everywhere() {
    let mut state = AppState::new(vec![], SortState::default());
    handle_event(&mut state, &Event::SelectAll).unwrap();
    let view = state.view();
    assert!(view.rows.is_empty());
    assert!(!view.all_selected);
    assert!(!view.some_selected);
    assert!(!view.is_filtered_empty());
    assert!(!view.domain.range(NumericDimension::Abv).observed);
}
