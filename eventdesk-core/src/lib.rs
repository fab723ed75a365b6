//! Core types for eventdesk.
//!
//! This crate provides everything the front-ends share:
//! - `Event` and the wire types used against the remote collection
//! - `validate` for draft validation
//! - `store` with the `EventStore` seam and its HTTP client
//! - `editor` and `list`, the controllers behind the edit form and the list view

pub mod config;
pub mod editor;
pub mod error;
pub mod event;
pub mod generation;
pub mod list;
pub mod navigation;
pub mod palette;
pub mod store;
pub mod validate;

// Re-export the event types at crate root for convenience
pub use event::*;
