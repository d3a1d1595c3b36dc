//! Tracing subscriber setup.
//!
//! The crate logs through `tracing` spans and events. Nothing is recorded until an
//! embedding application installs a subscriber, either its own or the one built by
//! [`init_tracing`].
//!
//! # Configuration
//!
//! The level filter is resolved from:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in [`Config`](crate::Config)
//! 3. Default: `"info"`

mod init;

pub use init::init_tracing;
