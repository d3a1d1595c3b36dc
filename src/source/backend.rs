//! Record source abstraction.
//!
//! The view core needs the full collection at once and nothing else. Paging, writes
//! and queries belong to the retrieval layer.

use crate::domain::error::Result;
use crate::domain::Bottle;

/// Supplies the complete record collection.
///
/// # Implementations
///
/// - [`JsonFileSource`](super::JsonFileSource): reads a JSON array from disk
/// - [`MemorySource`]: returns a vector held in memory
pub trait RecordSource {
    /// Loads every record, in the order the source stores them.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying document cannot be read or is not a
    /// collection.
    fn load(&self) -> Result<Vec<Bottle>>;
}

/// A source backed by an in-memory vector.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<Bottle>,
}

impl MemorySource {
    #[must_use]
    pub const fn new(records: Vec<Bottle>) -> Self {
        Self { records }
    }
}

impl RecordSource for MemorySource {
    fn load(&self) -> Result<Vec<Bottle>> {
        Ok(self.records.clone())
    }
}
