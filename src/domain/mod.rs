//! Domain layer for dramlog.
//!
//! This module contains the collection item model and the crate error type,
//! independent of how records are retrieved or how views are rendered.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`record`]: The [`Bottle`] record model and its lenient field readers

pub mod error;
pub mod record;

pub use error::{DramlogError, Result};
pub use record::Bottle;
