//! dramlog: the filtering, sorting and selection core of a whiskey collection tracker.
//!
//! The surrounding application (accounts, forms, persistence, dashboards, CSV
//! import) is ordinary CRUD. This crate holds the part with real rules:
//! - Multi-dimensional filtering with per-dimension null policy
//! - Option sets and numeric ranges derived from the current collection
//! - Column sorting that keeps missing values last in both directions
//! - Identifier-keyed multi-selection scoped to the visible rows
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Event dispatch
//! │  - Events → state replacement → actions             │
//! │  - CollectionView for rendering                     │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ filter/       │   │ sort          │   │ selection     │
//! │ - FilterState │   │ - SortState   │   │ - Selection   │
//! │ - predicate   │   │ - comparator  │   │               │
//! │ - domain      │   │               │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and retrieval seam (source/)      │
//! │  - Bottle record model, error types                 │
//! │  - RecordSource trait, JSON file source             │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state, events, actions and the view model
//! - [`domain`]: The [`Bottle`] record and [`DramlogError`]
//! - [`filter`]: Filter state, predicate evaluation and domain derivation
//! - [`sort`]: Sort state and the record comparator
//! - [`selection`]: Multi-selection over record identifiers
//! - [`source`]: Record retrieval seam
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! ```toml
//! trace_level = "debug"
//! sort_column = "rating"
//! sort_direction = "desc"
//! collection_path = "/home/me/.local/share/dramlog/bottles.json"
//! ```
//!
//! # Example
//!
//! ```
//! use dramlog::app::{handle_event, Event};
//! use dramlog::filter::{CategoricalDimension, FilterUpdate};
//! use dramlog::source::MemorySource;
//! use dramlog::{initialize_from, Bottle, Config};
//!
//! let mut bourbon = Bottle::new(1, "Buffalo Trace");
//! bourbon.whiskey_type = Some("bourbon".to_string());
//! let source = MemorySource::new(vec![bourbon, Bottle::new(2, "Redbreast 12")]);
//!
//! let mut state = initialize_from(&Config::default(), &source)?;
//! let event = Event::SetFilter(FilterUpdate::Categorical(
//!     CategoricalDimension::Type,
//!     "bourbon".to_string(),
//! ));
//! handle_event(&mut state, &event)?;
//!
//! assert_eq!(state.visible_ids(), [1]);
//! # Ok::<(), dramlog::DramlogError>(())
//! ```

pub mod app;
pub mod domain;
pub mod filter;
pub mod observability;
pub mod selection;
pub mod sort;
pub mod source;

pub use app::{handle_event, Action, AppState, CollectionView, Event};
pub use domain::{Bottle, DramlogError, Result};
pub use filter::{FilterState, FilterUpdate, TriState};
pub use selection::Selection;
pub use sort::{SortColumn, SortDirection, SortState};

use serde::Deserialize;
use source::{JsonFileSource, RecordSource};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Tracing level filter for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// Sort applied before the user clicks any column header.
    ///
    /// Default: name, ascending.
    pub default_sort: SortState,

    /// JSON collection file opened by [`open`]. Default: none (empty collection).
    pub collection_path: Option<PathBuf>,
}

/// On-disk shape of the TOML configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    trace_level: Option<String>,
    sort_column: Option<SortColumn>,
    sort_direction: Option<SortDirection>,
    collection_path: Option<PathBuf>,
}

impl Config {
    /// Parses configuration from a flat string map, such as environment-style
    /// settings or a form submission.
    ///
    /// # Parsing Rules
    ///
    /// - `trace_level`: taken as-is when non-empty
    /// - `sort_column`: a [`SortColumn`] name; unknown names fall back to `name`
    /// - `sort_direction`: `asc`/`desc`; anything else falls back to `asc`
    /// - `collection_path`: taken as-is when non-empty
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use dramlog::{Config, SortColumn, SortDirection};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("sort_column".to_string(), "rating".to_string());
    /// map.insert("sort_direction".to_string(), "sideways".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.default_sort.column, SortColumn::Rating);
    /// assert_eq!(config.default_sort.direction, SortDirection::Ascending);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let column = config
            .get("sort_column")
            .and_then(|s| s.parse::<SortColumn>().ok())
            .unwrap_or_default();

        let direction = config
            .get("sort_direction")
            .and_then(|s| s.parse::<SortDirection>().ok())
            .unwrap_or_default();

        Self {
            trace_level: non_empty("trace_level"),
            default_sort: SortState::new(column, direction),
            collection_path: non_empty("collection_path").map(PathBuf::from),
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// Missing keys take their defaults; present keys must be well-formed.
    ///
    /// # Errors
    ///
    /// Returns [`DramlogError::Config`] if the text is not valid TOML or a value has
    /// the wrong shape (for example an unknown sort column).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(contents)
            .map_err(|e| DramlogError::Config(format!("failed to parse TOML: {e}")))?;

        Ok(Self {
            trace_level: file.trace_level,
            default_sort: SortState::new(
                file.sort_column.unwrap_or_default(),
                file.sort_direction.unwrap_or_default(),
            ),
            collection_path: file.collection_path,
        })
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`DramlogError::Io`] if the file cannot be read, or
    /// [`DramlogError::Config`] if it does not parse.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = ?path, "loading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}

/// Creates an empty application state using the configured default sort.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(
        sort_column = %config.default_sort.column,
        sort_direction = %config.default_sort.direction,
        "initializing collection view"
    );
    AppState::new(vec![], config.default_sort)
}

/// Creates application state populated from `source`.
///
/// # Errors
///
/// Propagates any error from [`RecordSource::load`].
pub fn initialize_from(config: &Config, source: &dyn RecordSource) -> Result<AppState> {
    let records = source.load()?;
    tracing::debug!(records = records.len(), "collection loaded");
    Ok(AppState::new(records, config.default_sort))
}

/// Creates application state from the configured collection file, or an empty
/// state when no file is configured.
///
/// # Errors
///
/// Returns an error if the configured file cannot be read or parsed.
pub fn open(config: &Config) -> Result<AppState> {
    match &config.collection_path {
        Some(path) => initialize_from(config, &JsonFileSource::new(path)),
        None => Ok(initialize(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_map_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config, Config::default());
        assert_eq!(config.default_sort, SortState::new(SortColumn::Name, SortDirection::Ascending));
    }

    #[test]
    fn from_map_reads_all_keys() {
        let map: BTreeMap<String, String> = [
            ("trace_level", "debug"),
            ("sort_column", "price"),
            ("sort_direction", "desc"),
            ("collection_path", "/tmp/bottles.json"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let config = Config::from_map(&map);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(
            config.default_sort,
            SortState::new(SortColumn::Price, SortDirection::Descending)
        );
        assert_eq!(config.collection_path, Some(PathBuf::from("/tmp/bottles.json")));
    }

    #[test]
    fn from_toml_str_parses_and_validates() {
        let config = Config::from_toml_str(concat!(
            "trace_level = \"warn\"\n",
            "sort_column = \"purchase_date\"\n",
            "sort_direction = \"descending\"\n",
        ))
        .unwrap();
        assert_eq!(
            config.default_sort,
            SortState::new(SortColumn::PurchaseDate, SortDirection::Descending)
        );
        assert_eq!(config.trace_level.as_deref(), Some("warn"));

        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
        assert!(matches!(
            Config::from_toml_str("sort_column = \"vibes\""),
            Err(DramlogError::Config(_))
        ));
        assert!(matches!(Config::from_toml_str("= broken"), Err(DramlogError::Config(_))));
    }

    #[test]
    fn from_toml_file_reads_settings() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "sort_column = \"abv\"\nsort_direction = \"desc\"\n").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(
            config.default_sort,
            SortState::new(SortColumn::Abv, SortDirection::Descending)
        );
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn from_toml_file_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::from_toml_file(dir.path().join("dramlog.toml"));
        assert!(matches!(result, Err(DramlogError::Io(_))));
    }

    #[test]
    fn initialize_uses_default_sort() {
        let config = Config {
            default_sort: SortState::new(SortColumn::Rating, SortDirection::Descending),
            ..Config::default()
        };
        let state = initialize(&config);
        assert_eq!(state.sort, config.default_sort);
        assert!(state.records.is_empty());
    }

    #[test]
    fn open_without_path_is_empty() {
        let state = open(&Config::default()).unwrap();
        assert!(state.visible().is_empty());
    }
}
