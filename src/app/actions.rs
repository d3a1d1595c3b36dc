//! Actions representing side effects for collaborators outside the core.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The view
//! core never deletes or opens records itself; it names what should happen and
//! leaves execution to the CRUD layer that owns persistence and navigation.

use serde::{Deserialize, Serialize};

/// Commands produced by the event handler for the surrounding application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    /// Deletes the listed records.
    ///
    /// Carries the whole selection, including identifiers hidden by the current
    /// filters.
    DeleteRecords {
        /// Identifiers in ascending order.
        ids: Vec<i64>,
    },

    /// Opens the detail or edit view of a single record.
    OpenRecord {
        /// Identifier of a record present in the collection.
        id: i64,
    },
}
