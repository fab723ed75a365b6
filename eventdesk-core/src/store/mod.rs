//! Access to the remote event collection.
//!
//! The store is the system of record. Everything here is plain network I/O:
//! nothing is cached and nothing is retried.

mod http;

#[cfg(test)]
pub(crate) mod fake;

pub use http::HttpEventStore;

use async_trait::async_trait;

use crate::error::EventDeskResult;
use crate::event::{Event, EventData, EventId, EventPatch};

/// CRUD over a collection of events addressed by numeric id.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// The whole collection, unpaginated.
    async fn list_all(&self) -> EventDeskResult<Vec<Event>>;

    /// Fails with `NotFound` when the store has no such id.
    async fn get_by_id(&self, id: EventId) -> EventDeskResult<Event>;

    /// The store assigns the id. No client-side uniqueness check is made.
    async fn create(&self, data: &EventData) -> EventDeskResult<Event>;

    /// Merge `patch` into the stored record and return the result.
    ///
    /// Whether absent fields are kept or cleared is up to the store. Callers
    /// that need a known outcome send a full patch.
    async fn replace(&self, id: EventId, patch: &EventPatch) -> EventDeskResult<Event>;

    /// Remove the record. An already-absent id is reported as `NotFound`.
    async fn delete(&self, id: EventId) -> EventDeskResult<()>;
}
