//! Derivation of filter option sets and numeric ranges from a collection.
//!
//! The [`Domain`] populates filter controls: dropdown options for categorical
//! dimensions and min/max placeholders for numeric ones. It is recomputed whenever
//! the collection changes and never feeds back into predicate evaluation.

use super::state::{CategoricalDimension, NumericDimension};
use crate::domain::Bottle;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Observed (or placeholder) bounds of a numeric dimension.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    /// False when no record carried the attribute and the bounds are placeholders.
    pub observed: bool,
}

impl Range {
    fn fallback(dim: NumericDimension) -> Self {
        let (min, max) = dim.fallback_range();
        Self {
            min,
            max,
            observed: false,
        }
    }
}

/// Legal values for every filter dimension, derived from the current collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub categorical: BTreeMap<CategoricalDimension, Vec<String>>,
    pub numeric: BTreeMap<NumericDimension, Range>,
}

impl Default for Domain {
    fn default() -> Self {
        derive_domain(&[])
    }
}

impl Domain {
    /// Sorted distinct values for a categorical dimension.
    #[must_use]
    pub fn options(&self, dim: CategoricalDimension) -> &[String] {
        self.categorical.get(&dim).map(Vec::as_slice).unwrap_or_default()
    }

    /// Observed range for a numeric dimension, or its placeholder.
    #[must_use]
    pub fn range(&self, dim: NumericDimension) -> Range {
        self.numeric
            .get(&dim)
            .copied()
            .unwrap_or_else(|| Range::fallback(dim))
    }
}

/// Computes the [`Domain`] of `records`.
///
/// Categorical options drop absent and empty values and are sorted ascending.
/// Numeric ranges cover present finite values only (price uses the coalesced
/// effective price) and fall back to fixed placeholders when nothing is present.
#[must_use]
pub fn derive_domain(records: &[Bottle]) -> Domain {
    let _span = tracing::debug_span!("derive_domain", total = records.len()).entered();

    let categorical = CategoricalDimension::ALL
        .into_iter()
        .map(|dim| {
            let values: BTreeSet<&str> = records
                .iter()
                .filter_map(|bottle| dim.value_of(bottle))
                .filter(|value| !value.is_empty())
                .collect();
            (dim, values.into_iter().map(String::from).collect())
        })
        .collect();

    let numeric = NumericDimension::ALL
        .into_iter()
        .map(|dim| {
            let range = records
                .iter()
                .filter_map(|bottle| dim.value_of(bottle))
                .fold(None, |acc: Option<(f64, f64)>, v| {
                    Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
                })
                .map_or_else(
                    || Range::fallback(dim),
                    |(min, max)| Range {
                        min,
                        max,
                        observed: true,
                    },
                );
            (dim, range)
        })
        .collect();

    Domain {
        categorical,
        numeric,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_uses_placeholders() {
        let domain = derive_domain(&[]);
        for dim in CategoricalDimension::ALL {
            assert!(domain.options(dim).is_empty());
        }
        assert_eq!(
            domain.range(NumericDimension::Age),
            Range { min: 0.0, max: 30.0, observed: false }
        );
        assert_eq!(domain.range(NumericDimension::Abv).min, 40.0);
        assert_eq!(domain.range(NumericDimension::Rating).max, 10.0);
        assert_eq!(domain.range(NumericDimension::Price).max, 500.0);
        assert_eq!(domain, Domain::default());
    }

    #[test]
    fn categorical_options_are_sorted_and_distinct() {
        let records: Vec<Bottle> = ["scotch", "bourbon", "", "scotch"]
            .iter()
            .enumerate()
            .map(|(i, t)| Bottle {
                id: i as i64,
                whiskey_type: Some((*t).to_string()),
                ..Bottle::default()
            })
            .chain(std::iter::once(Bottle::new(9, "untyped")))
            .collect();

        let domain = derive_domain(&records);
        assert_eq!(domain.options(CategoricalDimension::Type), ["bourbon", "scotch"]);
        assert!(domain.options(CategoricalDimension::Country).is_empty());
    }

    #[test]
    fn numeric_ranges_ignore_absent_values() {
        let mut young = Bottle::new(1, "young");
        young.age = Some(8.0);
        young.msrp = Some(65.0);
        let mut old = Bottle::new(2, "old");
        old.age = Some(20.0);
        old.purchase_price = Some(2000.0);
        let bare = Bottle::new(3, "bare");

        let domain = derive_domain(&[young, bare, old]);
        assert_eq!(
            domain.range(NumericDimension::Age),
            Range { min: 8.0, max: 20.0, observed: true }
        );
        assert_eq!(
            domain.range(NumericDimension::Price),
            Range { min: 65.0, max: 2000.0, observed: true }
        );
        assert!(!domain.range(NumericDimension::Rating).observed);
    }

    #[test]
    fn single_value_collapses_range() {
        let mut b = Bottle::new(1, "only");
        b.abv = Some(46.0);
        let range = derive_domain(&[b]).range(NumericDimension::Abv);
        assert_eq!((range.min, range.max), (46.0, 46.0));
    }
}
