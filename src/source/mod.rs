//! Record retrieval seam.
//!
//! The view core receives its collection whole from an external retrieval layer.
//! This module defines that boundary as the [`RecordSource`] trait and ships two
//! implementations: a JSON document on disk and an in-memory vector.
//!
//! # Modules
//!
//! - [`backend`]: The [`RecordSource`] trait and the in-memory source
//! - [`json`]: JSON collection parsing and the file-backed source

pub mod backend;
pub mod json;

pub use backend::{MemorySource, RecordSource};
pub use json::{parse_collection, JsonFileSource};
