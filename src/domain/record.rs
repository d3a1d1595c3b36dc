//! Collection record model.
//!
//! This module defines [`Bottle`], one item of a personal whiskey collection. Every
//! attribute except the identifier is optional: a field that was never recorded is
//! `None`, which is distinct from a recorded falsy value such as `Some(false)` or
//! `Some(0.0)`.
//!
//! Records arrive from an external retrieval layer as JSON. Deserialization is
//! lenient per attribute: a field present with the wrong JSON type (a word where a
//! number belongs, an object where a string belongs) is read as absent instead of
//! rejecting the whole record. Numeric strings such as `"45.2"` are accepted, and
//! numbers outside the `f64` range read as absent.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One bottle in the collection.
///
/// Four kinds of attributes matter to the filtering core:
///
/// - categorical strings: `whiskey_type`, `distillery`, `region`, `country`
/// - boolean flags: `limited_edition`, `chill_filtered`, `natural_color`, `is_opened`
/// - numeric measures: `age`, `abv`, `rating`, `purchase_price`, `msrp`
/// - free text and metadata, carried through untouched
///
/// # Examples
///
/// ```
/// use dramlog::Bottle;
///
/// let bottle: Bottle = serde_json::from_str(
///     r#"{"id": 7, "name": "Redbreast 12", "type": "irish", "abv": "forty", "msrp": 65}"#,
/// ).unwrap();
///
/// assert_eq!(bottle.whiskey_type.as_deref(), Some("irish"));
/// assert_eq!(bottle.abv, None);
/// assert_eq!(bottle.effective_price(), Some(65.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bottle {
    pub id: i64,
    #[serde(default, deserialize_with = "lenient::integer")]
    pub user_id: Option<i64>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "lenient::string")]
    pub whiskey_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub distillery: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub region: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub country: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bottler: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub series: Option<String>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub age: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub abv: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub proof: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub rating: Option<f64>,
    /// What the owner paid. Preferred over `msrp` when filtering or sorting by price.
    #[serde(default, deserialize_with = "lenient::number")]
    pub purchase_price: Option<f64>,
    /// Market reference price, used when no purchase price was recorded.
    #[serde(default, deserialize_with = "lenient::number")]
    pub msrp: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub current_value: Option<f64>,
    #[serde(default, deserialize_with = "lenient::number")]
    pub remaining_percentage: Option<f64>,

    #[serde(default, deserialize_with = "lenient::flag")]
    pub limited_edition: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub chill_filtered: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub natural_color: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_opened: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub cask_strength: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub single_cask: Option<bool>,
    #[serde(default, deserialize_with = "lenient::flag")]
    pub is_favorite: Option<bool>,

    #[serde(default, deserialize_with = "lenient::count")]
    pub quantity: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub vintage_year: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bottling_year: Option<u32>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub bottles_produced: Option<u32>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub cask_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cask_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub cask_finish: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub mash_bill: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub batch_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub barrel_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bottle_number: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub bottle_size: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub nose: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub palate: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub finish: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub tasting_notes: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub notes: Option<String>,

    #[serde(default, deserialize_with = "lenient::date")]
    pub purchase_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub purchase_location: Option<String>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub opened_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "lenient::date")]
    pub bottled_date: Option<NaiveDate>,

    #[serde(default, deserialize_with = "lenient::string")]
    pub barcode: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::string")]
    pub external_url: Option<String>,

    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Bottle {
    /// Creates a record with only an identifier and a name set.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Returns the price used for filtering and sorting.
    ///
    /// The purchase price wins when recorded; otherwise the market reference price is
    /// used. Non-finite values count as absent.
    #[must_use]
    pub fn effective_price(&self) -> Option<f64> {
        finite(self.purchase_price).or_else(|| finite(self.msrp))
    }
}

/// Drops NaN and infinities, which can only appear through in-memory construction.
pub(crate) fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// Field readers that map wrongly-typed JSON values to `None`.
mod lenient {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    pub fn string<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => Some(s),
            _ => None,
        })
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        let parsed = match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        Ok(parsed.filter(|v| v.is_finite()))
    }

    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        })
    }

    pub fn count<'de, D: Deserializer<'de>>(d: D) -> Result<Option<u32>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse::<u32>().ok(),
            _ => None,
        })
    }

    pub fn flag<'de, D: Deserializer<'de>>(d: D) -> Result<Option<bool>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Bool(b) => Some(b),
            Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
            Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
            _ => None,
        })
    }

    pub fn date<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        Ok(match Value::deserialize(d)? {
            // Accepts both plain dates and full timestamps by reading the date prefix.
            Value::String(s) => s
                .get(..10)
                .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()),
            _ => None,
        })
    }

    pub fn timestamp<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::String(s) => DateTime::parse_from_rfc3339(&s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        })
    }
}
