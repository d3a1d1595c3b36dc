//! Multi-dimensional filtering over a record collection.
//!
//! # Modules
//!
//! - [`state`]: [`FilterState`], its dimensions, and the immutable update reducer
//! - [`predicate`]: conjunctive evaluation of a state against records
//! - [`domain`]: option sets and numeric ranges derived from the collection

pub mod domain;
pub mod predicate;
pub mod state;

pub use domain::{derive_domain, Domain, Range};
pub use predicate::{filter_records, matching};
pub use state::{
    parse_bound, BoundSide, CategoricalDimension, FilterState, FilterUpdate, FlagDimension,
    NumericDimension, RangeBound, TriState,
};
