//! Filter state, its dimensions, and the immutable update reducer.
//!
//! A [`FilterState`] holds one constraint per filter dimension. Constraints come in
//! three shapes:
//!
//! | Shape | Unset | Set |
//! |---|---|---|
//! | categorical | empty string | exact match |
//! | tri-state flag | [`TriState::Any`] | [`TriState::Yes`] / [`TriState::No`] |
//! | numeric range | `None` per bound | inclusive lower/upper bound |
//!
//! State is never mutated in place. [`FilterState::apply`] takes a [`FilterUpdate`]
//! that names exactly one dimension and returns a new state, so "clear all" is simply
//! a comparison against [`FilterState::default`].

use crate::domain::error::{DramlogError, Result};
use crate::domain::record::{finite, Bottle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A string-valued dimension matched by exact equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalDimension {
    Type,
    Distillery,
    Region,
    Country,
}

impl CategoricalDimension {
    pub const ALL: [Self; 4] = [Self::Type, Self::Distillery, Self::Region, Self::Country];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Distillery => "distillery",
            Self::Region => "region",
            Self::Country => "country",
        }
    }

    /// Reads this dimension's value from a record.
    #[must_use]
    pub fn value_of(self, bottle: &Bottle) -> Option<&str> {
        match self {
            Self::Type => bottle.whiskey_type.as_deref(),
            Self::Distillery => bottle.distillery.as_deref(),
            Self::Region => bottle.region.as_deref(),
            Self::Country => bottle.country.as_deref(),
        }
    }
}

/// A boolean attribute filtered through a [`TriState`] constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagDimension {
    LimitedEdition,
    ChillFiltered,
    NaturalColor,
    IsOpened,
}

impl FlagDimension {
    pub const ALL: [Self; 4] = [
        Self::LimitedEdition,
        Self::ChillFiltered,
        Self::NaturalColor,
        Self::IsOpened,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LimitedEdition => "limited_edition",
            Self::ChillFiltered => "chill_filtered",
            Self::NaturalColor => "natural_color",
            Self::IsOpened => "is_opened",
        }
    }

    #[must_use]
    pub const fn value_of(self, bottle: &Bottle) -> Option<bool> {
        match self {
            Self::LimitedEdition => bottle.limited_edition,
            Self::ChillFiltered => bottle.chill_filtered,
            Self::NaturalColor => bottle.natural_color,
            Self::IsOpened => bottle.is_opened,
        }
    }

    /// Whether an active constraint on this dimension excludes records that never
    /// recorded the flag.
    ///
    /// Only `chill_filtered` behaves this way. Every other flag reads a missing value
    /// as `false`.
    #[must_use]
    pub const fn requires_presence(self) -> bool {
        matches!(self, Self::ChillFiltered)
    }
}

/// A numeric attribute filtered through an inclusive [`RangeBound`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericDimension {
    Age,
    Abv,
    Rating,
    /// Purchase price, falling back to the market reference price.
    Price,
}

impl NumericDimension {
    pub const ALL: [Self; 4] = [Self::Age, Self::Abv, Self::Rating, Self::Price];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Abv => "abv",
            Self::Rating => "rating",
            Self::Price => "price",
        }
    }

    /// Reads this dimension's value from a record. Non-finite values read as absent.
    #[must_use]
    pub fn value_of(self, bottle: &Bottle) -> Option<f64> {
        match self {
            Self::Age => finite(bottle.age),
            Self::Abv => finite(bottle.abv),
            Self::Rating => finite(bottle.rating),
            Self::Price => bottle.effective_price(),
        }
    }

    /// Placeholder range shown when no record carries this attribute.
    #[must_use]
    pub const fn fallback_range(self) -> (f64, f64) {
        match self {
            Self::Age => (0.0, 30.0),
            Self::Abv => (40.0, 70.0),
            Self::Rating => (0.0, 10.0),
            Self::Price => (0.0, 500.0),
        }
    }
}

/// Which end of a numeric range a bound applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundSide {
    Min,
    Max,
}

/// A boolean constraint that can also be switched off.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriState {
    /// No constraint.
    #[default]
    Any,
    Yes,
    No,
}

impl TriState {
    /// Advances the toggle: `Any` → `Yes` → `No` → `Any`.
    #[must_use]
    pub const fn cycle(self) -> Self {
        match self {
            Self::Any => Self::Yes,
            Self::Yes => Self::No,
            Self::No => Self::Any,
        }
    }

    /// The required boolean, or `None` when unset.
    #[must_use]
    pub const fn required(self) -> Option<bool> {
        match self {
            Self::Any => None,
            Self::Yes => Some(true),
            Self::No => Some(false),
        }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        !matches!(self, Self::Any)
    }
}

impl From<Option<bool>> for TriState {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => Self::Any,
            Some(true) => Self::Yes,
            Some(false) => Self::No,
        }
    }
}

/// Inclusive numeric bounds; either end may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeBound {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl RangeBound {
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.min.is_some() || self.max.is_some()
    }

    #[must_use]
    pub const fn with(self, side: BoundSide, value: Option<f64>) -> Self {
        match side {
            BoundSide::Min => Self { min: value, ..self },
            BoundSide::Max => Self { max: value, ..self },
        }
    }

    fn set_count(&self) -> usize {
        usize::from(self.min.is_some()) + usize::from(self.max.is_some())
    }
}

/// One constraint per filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(rename = "type")]
    pub whiskey_type: String,
    pub distillery: String,
    pub region: String,
    pub country: String,

    pub limited_edition: TriState,
    pub chill_filtered: TriState,
    pub natural_color: TriState,
    pub is_opened: TriState,

    pub age: RangeBound,
    pub abv: RangeBound,
    pub rating: RangeBound,
    pub price: RangeBound,
}

/// A change to exactly one filter dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterUpdate {
    /// Sets a categorical constraint; an empty string clears it.
    Categorical(CategoricalDimension, String),
    /// Sets a flag constraint outright.
    Flag(FlagDimension, TriState),
    /// Advances a flag constraint one step through its cycle.
    CycleFlag(FlagDimension),
    /// Sets one end of a numeric range; `None` clears it.
    Bound(NumericDimension, BoundSide, Option<f64>),
}

impl FilterUpdate {
    /// Builds an update from a UI field name and its raw text.
    ///
    /// Field names follow the record's wire names, with numeric bounds suffixed by
    /// `_min`/`_max` (camel-case `Min`/`Max` is accepted too). Flag text is `"true"`,
    /// `"false"` or empty; numeric text goes through [`parse_bound`], so anything that
    /// is not a finite number clears the bound instead of failing.
    ///
    /// # Errors
    ///
    /// Returns [`DramlogError::UnknownDimension`] if `name` does not name a dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use dramlog::filter::{BoundSide, FilterUpdate, NumericDimension};
    ///
    /// let update = FilterUpdate::from_input("priceMin", "60").unwrap();
    /// assert_eq!(
    ///     update,
    ///     FilterUpdate::Bound(NumericDimension::Price, BoundSide::Min, Some(60.0))
    /// );
    ///
    /// let update = FilterUpdate::from_input("abv_max", "strong").unwrap();
    /// assert_eq!(update, FilterUpdate::Bound(NumericDimension::Abv, BoundSide::Max, None));
    /// ```
    pub fn from_input(name: &str, value: &str) -> Result<Self> {
        let key = normalize_key(name);

        if let Ok(dim) = key.parse::<CategoricalDimension>() {
            return Ok(Self::Categorical(dim, value.to_string()));
        }

        if let Ok(dim) = key.parse::<FlagDimension>() {
            let state = match value.trim() {
                v if v.eq_ignore_ascii_case("true") => TriState::Yes,
                v if v.eq_ignore_ascii_case("false") => TriState::No,
                _ => TriState::Any,
            };
            return Ok(Self::Flag(dim, state));
        }

        let (base, side) = if let Some(base) = key.strip_suffix("_min") {
            (base, BoundSide::Min)
        } else if let Some(base) = key.strip_suffix("_max") {
            (base, BoundSide::Max)
        } else {
            return Err(DramlogError::UnknownDimension(name.to_string()));
        };

        base
            .parse::<NumericDimension>()
            .map(|dim| Self::Bound(dim, side, parse_bound(value)))
            .map_err(|_| DramlogError::UnknownDimension(name.to_string()))
    }
}

/// Converts `camelCase` and `PascalCase` field names to `snake_case`.
fn normalize_key(name: &str) -> String {
    let mut key = String::with_capacity(name.len() + 4);
    for c in name.trim().chars() {
        if c.is_ascii_uppercase() {
            if !key.is_empty() {
                key.push('_');
            }
            key.push(c.to_ascii_lowercase());
        } else {
            key.push(c);
        }
    }
    key
}

/// Normalizes free-form numeric input into a bound.
///
/// Blank, non-numeric and non-finite input all mean "no bound".
#[must_use]
pub fn parse_bound(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl FilterState {
    /// Returns a new state with `update` applied and every other dimension unchanged.
    #[must_use]
    pub fn apply(&self, update: FilterUpdate) -> Self {
        let mut next = self.clone();
        match update {
            FilterUpdate::Categorical(dim, value) => *next.categorical_mut(dim) = value,
            FilterUpdate::Flag(dim, value) => *next.flag_mut(dim) = value,
            FilterUpdate::CycleFlag(dim) => {
                let current = next.flag(dim);
                *next.flag_mut(dim) = current.cycle();
            }
            FilterUpdate::Bound(dim, side, value) => {
                let bound = next.range(dim).with(side, value.filter(|v| v.is_finite()));
                *next.range_mut(dim) = bound;
            }
        }
        next
    }

    #[must_use]
    pub fn categorical(&self, dim: CategoricalDimension) -> &str {
        match dim {
            CategoricalDimension::Type => &self.whiskey_type,
            CategoricalDimension::Distillery => &self.distillery,
            CategoricalDimension::Region => &self.region,
            CategoricalDimension::Country => &self.country,
        }
    }

    #[must_use]
    pub const fn flag(&self, dim: FlagDimension) -> TriState {
        match dim {
            FlagDimension::LimitedEdition => self.limited_edition,
            FlagDimension::ChillFiltered => self.chill_filtered,
            FlagDimension::NaturalColor => self.natural_color,
            FlagDimension::IsOpened => self.is_opened,
        }
    }

    #[must_use]
    pub const fn range(&self, dim: NumericDimension) -> RangeBound {
        match dim {
            NumericDimension::Age => self.age,
            NumericDimension::Abv => self.abv,
            NumericDimension::Rating => self.rating,
            NumericDimension::Price => self.price,
        }
    }

    fn categorical_mut(&mut self, dim: CategoricalDimension) -> &mut String {
        match dim {
            CategoricalDimension::Type => &mut self.whiskey_type,
            CategoricalDimension::Distillery => &mut self.distillery,
            CategoricalDimension::Region => &mut self.region,
            CategoricalDimension::Country => &mut self.country,
        }
    }

    fn flag_mut(&mut self, dim: FlagDimension) -> &mut TriState {
        match dim {
            FlagDimension::LimitedEdition => &mut self.limited_edition,
            FlagDimension::ChillFiltered => &mut self.chill_filtered,
            FlagDimension::NaturalColor => &mut self.natural_color,
            FlagDimension::IsOpened => &mut self.is_opened,
        }
    }

    fn range_mut(&mut self, dim: NumericDimension) -> &mut RangeBound {
        match dim {
            NumericDimension::Age => &mut self.age,
            NumericDimension::Abv => &mut self.abv,
            NumericDimension::Rating => &mut self.rating,
            NumericDimension::Price => &mut self.price,
        }
    }

    /// True when no dimension is constrained.
    #[must_use]
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Number of constraints currently set; each range end counts separately.
    #[must_use]
    pub fn active_count(&self) -> usize {
        let categorical = CategoricalDimension::ALL
            .iter()
            .filter(|d| !self.categorical(**d).is_empty())
            .count();
        let flags = FlagDimension::ALL
            .iter()
            .filter(|d| self.flag(**d).is_set())
            .count();
        let bounds: usize = NumericDimension::ALL
            .iter()
            .map(|d| self.range(*d).set_count())
            .sum();
        categorical + flags + bounds
    }
}

impl fmt::Display for CategoricalDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for FlagDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NumericDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoricalDimension {
    type Err = DramlogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DramlogError::UnknownDimension(s.to_string()))
    }
}

impl FromStr for FlagDimension {
    type Err = DramlogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DramlogError::UnknownDimension(s.to_string()))
    }
}

impl FromStr for NumericDimension {
    type Err = DramlogError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| DramlogError::UnknownDimension(s.to_string()))
    }
}
