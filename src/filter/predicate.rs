//! Predicate evaluation of a [`FilterState`] against records.
//!
//! The overall predicate is the conjunction of every set dimension; unset dimensions
//! are no-ops, so the default state passes every record. Evaluation order between
//! dimensions does not affect the result.
//!
//! Per-dimension policy:
//!
//! - **Categorical**: exact, case-sensitive equality. An absent value fails.
//! - **Flags**: an absent flag reads as `false`, except `chill_filtered`, which
//!   excludes records without a recorded value whenever the constraint is set.
//! - **Numeric ranges**: inclusive bounds. An absent value fails any set bound.
//! - **Price**: the same range rule applied to [`Bottle::effective_price`].

use super::state::{
    CategoricalDimension, FilterState, FlagDimension, NumericDimension, RangeBound, TriState,
};
use crate::domain::Bottle;

impl FilterState {
    /// Returns true if `bottle` satisfies every set dimension.
    #[must_use]
    pub fn matches(&self, bottle: &Bottle) -> bool {
        let categorical = CategoricalDimension::ALL
            .iter()
            .all(|dim| categorical_passes(self.categorical(*dim), dim.value_of(bottle)));
        let flags = FlagDimension::ALL.iter().all(|dim| {
            flag_passes(self.flag(*dim), dim.value_of(bottle), dim.requires_presence())
        });
        let ranges = NumericDimension::ALL
            .iter()
            .all(|dim| range_passes(self.range(*dim), dim.value_of(bottle)));
        categorical && flags && ranges
    }
}

fn categorical_passes(constraint: &str, value: Option<&str>) -> bool {
    constraint.is_empty() || value == Some(constraint)
}

fn flag_passes(constraint: TriState, value: Option<bool>, requires_presence: bool) -> bool {
    let Some(required) = constraint.required() else {
        return true;
    };
    match value {
        Some(actual) => actual == required,
        None if requires_presence => false,
        None => !required,
    }
}

fn range_passes(bound: RangeBound, value: Option<f64>) -> bool {
    if !bound.is_set() {
        return true;
    }
    let Some(v) = value else {
        return false;
    };
    bound.min.map_or(true, |min| v >= min) && bound.max.map_or(true, |max| v <= max)
}

/// Iterates over the records in `records` that satisfy `state`, in input order.
pub fn matching<'a>(
    records: &'a [Bottle],
    state: &'a FilterState,
) -> impl Iterator<Item = &'a Bottle> + 'a {
    records.iter().filter(move |bottle| state.matches(bottle))
}

/// Returns the order-preserving subsequence of `records` that satisfies `state`.
///
/// # Examples
///
/// ```
/// use dramlog::filter::{filter_records, CategoricalDimension, FilterState, FilterUpdate};
/// use dramlog::Bottle;
///
/// let mut bourbon = Bottle::new(1, "Buffalo Trace");
/// bourbon.whiskey_type = Some("bourbon".to_string());
/// let records = vec![bourbon, Bottle::new(2, "Mystery Sample")];
///
/// let state = FilterState::default()
///     .apply(FilterUpdate::Categorical(CategoricalDimension::Type, "bourbon".into()));
/// let filtered = filter_records(&records, &state);
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].id, 1);
///
/// assert_eq!(filter_records(&records, &FilterState::default()), records);
/// ```
#[must_use]
pub fn filter_records(records: &[Bottle], state: &FilterState) -> Vec<Bottle> {
    let _span = tracing::debug_span!(
        "filter_records",
        total = records.len(),
        active_filters = state.active_count()
    )
    .entered();

    if state.is_default() {
        return records.to_vec();
    }

    let filtered: Vec<Bottle> = matching(records, state).cloned().collect();
    tracing::debug!(matched = filtered.len(), "filters applied");
    filtered
}
