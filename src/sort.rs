//! Column sorting of records with a fixed null policy.
//!
//! [`sort_records`] orders a copy of its input by one [`SortColumn`]. The ordering
//! rules are:
//!
//! - records missing the sort key come after every record that has it, in both
//!   directions
//! - text compares by collation key: transliterated to ASCII, case-folded, with the
//!   raw string breaking ties so distinct spellings never compare equal
//! - numbers compare numerically
//! - the sort is stable, so equal keys keep their input order
//!
//! The caller holds a [`SortState`]; [`SortState::select`] implements the header
//! click transition (same column flips direction, new column starts ascending).

use crate::domain::error::{DramlogError, Result};
use crate::domain::record::finite;
use crate::domain::Bottle;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl SortDirection {
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Applies this direction to an ascending ordering.
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = DramlogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(Self::Ascending),
            "desc" | "descending" => Ok(Self::Descending),
            _ => Err(DramlogError::UnknownDirection(s.to_string())),
        }
    }
}

/// A sortable table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    #[default]
    Name,
    Type,
    Distillery,
    Region,
    Country,
    Age,
    Abv,
    Rating,
    /// Effective price: purchase price, else market reference price.
    Price,
    PurchasePrice,
    Msrp,
    Quantity,
    PurchaseDate,
}

impl SortColumn {
    pub const ALL: [Self; 13] = [
        Self::Name,
        Self::Type,
        Self::Distillery,
        Self::Region,
        Self::Country,
        Self::Age,
        Self::Abv,
        Self::Rating,
        Self::Price,
        Self::PurchasePrice,
        Self::Msrp,
        Self::Quantity,
        Self::PurchaseDate,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Distillery => "distillery",
            Self::Region => "region",
            Self::Country => "country",
            Self::Age => "age",
            Self::Abv => "abv",
            Self::Rating => "rating",
            Self::Price => "price",
            Self::PurchasePrice => "purchase_price",
            Self::Msrp => "msrp",
            Self::Quantity => "quantity",
            Self::PurchaseDate => "purchase_date",
        }
    }

    fn key(self, bottle: &Bottle) -> Option<SortKey<'_>> {
        fn text(value: &Option<String>) -> Option<SortKey<'_>> {
            value.as_deref().map(SortKey::Text)
        }
        fn number(value: Option<f64>) -> Option<SortKey<'static>> {
            finite(value).map(SortKey::Number)
        }

        match self {
            Self::Name => text(&bottle.name),
            Self::Type => text(&bottle.whiskey_type),
            Self::Distillery => text(&bottle.distillery),
            Self::Region => text(&bottle.region),
            Self::Country => text(&bottle.country),
            Self::Age => number(bottle.age),
            Self::Abv => number(bottle.abv),
            Self::Rating => number(bottle.rating),
            Self::Price => bottle.effective_price().map(SortKey::Number),
            Self::PurchasePrice => number(bottle.purchase_price),
            Self::Msrp => number(bottle.msrp),
            Self::Quantity => bottle.quantity.map(|q| SortKey::Number(f64::from(q))),
            Self::PurchaseDate => bottle.purchase_date.map(SortKey::Date),
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortColumn {
    type Err = DramlogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim())
            .ok_or_else(|| DramlogError::UnknownColumn(s.to_string()))
    }
}

/// The active sort column and direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    #[must_use]
    pub const fn new(column: SortColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// Transition for a column header click.
    ///
    /// Selecting the active column flips the direction; any other column becomes
    /// active in ascending order.
    #[must_use]
    pub fn select(self, column: SortColumn) -> Self {
        if column == self.column {
            Self {
                column,
                direction: self.direction.flip(),
            }
        } else {
            Self {
                column,
                direction: SortDirection::Ascending,
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum SortKey<'a> {
    Text(&'a str),
    Number(f64),
    Date(chrono::NaiveDate),
}

impl SortKey<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Text(a), Self::Text(b)) => collate(a, b),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            // A column always yields one key kind.
            _ => Ordering::Equal,
        }
    }
}

/// Locale-style comparison of two strings.
///
/// Accented letters sort with their base letter and case is ignored; only when the
/// folded forms are equal does the raw string decide.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded_a = deunicode::deunicode(a).to_lowercase();
    let folded_b = deunicode::deunicode(b).to_lowercase();
    folded_a.cmp(&folded_b).then_with(|| a.cmp(b))
}

/// Compares two records on `column` in `direction`, placing missing keys last.
#[must_use]
pub fn compare_bottles(
    a: &Bottle,
    b: &Bottle,
    column: SortColumn,
    direction: SortDirection,
) -> Ordering {
    match (column.key(a), column.key(b)) {
        (Some(ka), Some(kb)) => direction.apply(ka.compare(&kb)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Returns a copy of `records` ordered by `column` in `direction`.
///
/// # Examples
///
/// ```
/// use dramlog::sort::{sort_records, SortColumn, SortDirection};
/// use dramlog::Bottle;
///
/// let mut old = Bottle::new(1, "Pappy 20");
/// old.age = Some(20.0);
/// let mut young = Bottle::new(2, "Buffalo Trace");
/// young.age = Some(8.0);
/// let unknown = Bottle::new(3, "Sample");
///
/// let records = vec![unknown, old, young];
/// let ids = |v: Vec<Bottle>| v.into_iter().map(|b| b.id).collect::<Vec<_>>();
///
/// assert_eq!(ids(sort_records(&records, SortColumn::Age, SortDirection::Ascending)), [2, 1, 3]);
/// assert_eq!(ids(sort_records(&records, SortColumn::Age, SortDirection::Descending)), [1, 2, 3]);
/// ```
#[must_use]
pub fn sort_records(
    records: &[Bottle],
    column: SortColumn,
    direction: SortDirection,
) -> Vec<Bottle> {
    let _span = tracing::debug_span!(
        "sort_records",
        total = records.len(),
        column = %column,
        direction = %direction
    )
    .entered();

    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| compare_bottles(a, b, column, direction));
    sorted
}
