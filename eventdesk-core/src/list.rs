//! The controller behind the event list view.
//!
//! `EventList` holds the snapshot of the remote collection plus a loading
//! flag, an error slot and at most one selected event. The snapshot keeps
//! fetch order; `sorted` derives the display order.

use tracing::{info, warn};

use crate::error::EventDeskResult;
use crate::event::{Event, EventId};
use crate::generation::{Generation, Ticket};
use crate::navigation::Navigator;
use crate::store::EventStore;

#[derive(Debug, Default)]
pub struct EventList {
    events: Vec<Event>,
    loading: bool,
    error: Option<String>,
    selected: Option<EventId>,
    loads: Generation,
    deletes: Generation,
}

impl EventList {
    pub fn new() -> Self {
        Self::default()
    }

    /// The snapshot in fetch order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn selected(&self) -> Option<EventId> {
        self.selected
    }

    pub fn get(&self, id: EventId) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Display order: ascending by company, byte-wise and case-sensitive.
    /// Events of the same company keep their fetch order.
    pub fn sorted(&self) -> Vec<&Event> {
        let mut sorted: Vec<&Event> = self.events.iter().collect();
        sorted.sort_by(|a, b| a.data.company.cmp(&b.data.company));
        sorted
    }

    // --- loading ---

    pub fn begin_load(&mut self) -> Ticket {
        self.loading = true;
        self.loads.next()
    }

    /// Apply a `list_all` result. Returns false if the result was stale.
    pub fn finish_load(&mut self, ticket: Ticket, result: EventDeskResult<Vec<Event>>) -> bool {
        if !self.loads.is_current(ticket) {
            warn!("discarding stale event list");
            return false;
        }

        match result {
            Ok(events) => {
                info!(count = events.len(), "loaded events");
                self.events = events;
                self.error = None;
                if self.selected.is_some_and(|id| self.get(id).is_none()) {
                    self.selected = None;
                }
            }
            Err(err) => {
                warn!("error fetching events: {err}");
                self.error = Some("Error fetching Event Data.".to_string());
            }
        }
        self.loading = false;
        true
    }

    pub async fn load(&mut self, store: &dyn EventStore) {
        let ticket = self.begin_load();
        let result = store.list_all().await;
        self.finish_load(ticket, result);
    }

    // --- selection and navigation ---

    /// Toggle selection: picking the selected event deselects it.
    pub fn select(&mut self, id: EventId) {
        self.selected = if self.selected == Some(id) { None } else { Some(id) };
    }

    /// Open an event in the editor, whatever is selected.
    pub fn open(&self, id: EventId, navigator: &mut dyn Navigator) {
        navigator.to_edit(id);
    }

    pub fn create(&self, navigator: &mut dyn Navigator) {
        navigator.to_create();
    }

    // --- mutation ---

    /// Start deleting the selected event. `None` when nothing is selected.
    pub fn begin_delete(&mut self) -> Option<(Ticket, EventId)> {
        let id = self.selected?;
        Some((self.deletes.next(), id))
    }

    /// Apply a `delete` result. On success the event leaves the snapshot and
    /// the selection is cleared; on failure nothing changes but the error.
    pub fn finish_delete(&mut self, ticket: Ticket, id: EventId, result: EventDeskResult<()>) -> bool {
        if !self.deletes.is_current(ticket) {
            warn!(id, "discarding stale delete result");
            return false;
        }

        match result {
            Ok(()) => {
                info!(id, "event deleted");
                self.events.retain(|e| e.id != id);
                if self.selected == Some(id) {
                    self.selected = None;
                }
            }
            Err(err) => {
                warn!(id, "error deleting event: {err}");
                self.error = Some(format!("Error deleting event: {err}"));
            }
        }
        true
    }

    /// Delete the selected event. Returns true if it was removed.
    pub async fn delete_selected(&mut self, store: &dyn EventStore) -> bool {
        let Some((ticket, id)) = self.begin_delete() else {
            return false;
        };
        let result = store.delete(id).await;
        let removed = result.is_ok();
        self.finish_delete(ticket, id, result) && removed
    }

    /// Patch the snapshot with an event the editor just saved.
    pub fn apply_saved(&mut self, event: Event) {
        match self.events.iter_mut().find(|e| e.id == event.id) {
            Some(existing) => *existing = event,
            None => self.events.push(event),
        }
    }

    /// View teardown: results of requests still in flight are dropped.
    pub fn deactivate(&mut self) {
        self.loads.invalidate();
        self.deletes.invalidate();
        self.loading = false;
    }
}
