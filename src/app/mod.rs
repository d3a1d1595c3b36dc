//! Application layer coordinating view state, events, and actions.
//!
//! This module sits between the UI event source and the pure filtering, sorting and
//! selection core. It follows a unidirectional data flow:
//!
//! ```text
//! User Input → Events → Event Handler → State Replacement → Actions → CRUD layer
//!                                             ↓
//!                                      CollectionView → Renderer
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`state`]: Central state container
//! - [`viewmodel`]: Renderable snapshot of the state

pub mod actions;
pub mod handler;
pub mod state;
pub mod viewmodel;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use state::AppState;
pub use viewmodel::CollectionView;
