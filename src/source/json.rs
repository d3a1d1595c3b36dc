//! JSON collection source.
//!
//! A collection document is a JSON array of record objects:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Buffalo Trace", "type": "bourbon", "abv": 45, "purchase_price": 30 },
//!   { "id": 5, "name": "Redbreast 12", "type": "irish", "msrp": 65 }
//! ]
//! ```
//!
//! Only the document shape is strict. Wrongly-typed attributes inside a record read as
//! absent (see [`Bottle`]); an element that cannot be keyed at all (not an object, or
//! no integer `id`) is skipped with a warning, and a repeated `id` keeps its first
//! occurrence.

use crate::domain::error::{DramlogError, Result};
use crate::domain::Bottle;
use crate::source::backend::RecordSource;
use serde_json::Value;
use std::collections::HashSet;
use std::path::PathBuf;

/// Parses a JSON collection document.
///
/// # Errors
///
/// Returns [`DramlogError::Parse`] if `json` is not valid JSON or its top level is
/// not an array.
pub fn parse_collection(json: &str) -> Result<Vec<Bottle>> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| DramlogError::Parse(format!("failed to parse JSON: {e}")))?;

    let Value::Array(elements) = document else {
        return Err(DramlogError::Parse(
            "collection must be a JSON array of records".to_string(),
        ));
    };

    let total = elements.len();
    let mut seen = HashSet::with_capacity(total);
    let mut records = Vec::with_capacity(total);

    for (index, element) in elements.into_iter().enumerate() {
        match serde_json::from_value::<Bottle>(element) {
            Ok(bottle) if seen.insert(bottle.id) => records.push(bottle),
            Ok(bottle) => {
                tracing::warn!(index, id = bottle.id, "skipping record with duplicate id");
            }
            Err(e) => {
                tracing::warn!(index, error = %e, "skipping record without a usable id");
            }
        }
    }

    tracing::debug!(total, loaded = records.len(), "collection parsed");
    Ok(records)
}

/// A collection stored as a JSON document on disk.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// Path to the JSON file.
    file_path: PathBuf,
}

impl JsonFileSource {
    #[must_use]
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl RecordSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Bottle>> {
        tracing::debug!(path = ?self.file_path, "loading collection");
        let contents = std::fs::read_to_string(&self.file_path)?;
        parse_collection(&contents)
    }
}
