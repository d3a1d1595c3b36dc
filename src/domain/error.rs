//! Error types for dramlog.
//!
//! This module defines the centralized error type [`DramlogError`] and a type alias
//! [`Result`] used throughout the crate. The filtering, sorting and selection core is
//! total and never produces these errors; they only arise at the edges, where records
//! are loaded, configuration is read, or UI strings are mapped onto typed dimensions.

use thiserror::Error;

/// The main error type for dramlog operations.
///
/// # Examples
///
/// ```
/// use dramlog::DramlogError;
///
/// fn pick_dimension(name: &str) -> Result<(), DramlogError> {
///     Err(DramlogError::UnknownDimension(name.to_string()))
/// }
///
/// assert!(pick_dimension("colour").is_err());
/// ```
#[derive(Debug, Error)]
pub enum DramlogError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations, typically while reading a
    /// collection file or a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A record collection could not be parsed.
    ///
    /// Raised when the collection document itself is malformed (not JSON, or not an
    /// array of records). Individual malformed attributes never raise this; they are
    /// read as absent.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Configuration is invalid.
    ///
    /// Occurs when a configuration file is not valid TOML or has values of the wrong
    /// shape.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A filter dimension name did not match any known dimension.
    #[error("Unknown filter dimension: {0}")]
    UnknownDimension(String),

    /// A sort column name did not match any sortable column.
    #[error("Unknown sort column: {0}")]
    UnknownColumn(String),

    /// A sort direction was neither ascending nor descending.
    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}

/// A specialized `Result` type for dramlog operations.
pub type Result<T> = std::result::Result<T, DramlogError>;
