//! In-memory `EventStore` for controller tests. Records every call.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Event, EventData, EventId, EventPatch};
use crate::store::EventStore;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListAll,
    GetById(EventId),
    Create(EventData),
    Replace(EventId, EventPatch),
    Delete(EventId),
}

#[derive(Default)]
pub struct FakeStore {
    events: Mutex<Vec<Event>>,
    next_id: Mutex<EventId>,
    calls: Mutex<Vec<Call>>,
    /// When set, every call fails with this transport message.
    failure: Mutex<Option<String>>,
}

impl FakeStore {
    pub fn with_events(events: Vec<Event>) -> Self {
        let next_id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        FakeStore {
            events: Mutex::new(events),
            next_id: Mutex::new(next_id),
            ..Default::default()
        }
    }

    pub fn set_next_id(&self, id: EventId) {
        *self.next_id.lock().unwrap() = id;
    }

    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> EventDeskResult<()> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(EventDeskError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EventStore for FakeStore {
    async fn list_all(&self) -> EventDeskResult<Vec<Event>> {
        self.record(Call::ListAll)?;
        Ok(self.events())
    }

    async fn get_by_id(&self, id: EventId) -> EventDeskResult<Event> {
        self.record(Call::GetById(id))?;
        self.events()
            .into_iter()
            .find(|e| e.id == id)
            .ok_or(EventDeskError::NotFound(id))
    }

    async fn create(&self, data: &EventData) -> EventDeskResult<Event> {
        self.record(Call::Create(data.clone()))?;
        let mut next_id = self.next_id.lock().unwrap();
        let event = Event {
            id: (*next_id).max(1),
            data: data.clone(),
        };
        *next_id = event.id + 1;
        self.events.lock().unwrap().push(event.clone());
        Ok(event)
    }

    async fn replace(&self, id: EventId, patch: &EventPatch) -> EventDeskResult<Event> {
        self.record(Call::Replace(id, patch.clone()))?;
        let mut events = self.events.lock().unwrap();
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(EventDeskError::NotFound(id))?;

        let data = &mut event.data;
        let merge = |slot: &mut String, value: &Option<String>| {
            if let Some(value) = value {
                *slot = value.clone();
            }
        };
        merge(&mut data.name, &patch.name);
        merge(&mut data.description, &patch.description);
        merge(&mut data.company, &patch.company);
        merge(&mut data.color, &patch.color);
        merge(&mut data.phone, &patch.phone);
        merge(&mut data.email, &patch.email);
        merge(&mut data.address, &patch.address);
        merge(&mut data.image, &patch.image);
        merge(&mut data.date, &patch.date);
        merge(&mut data.time, &patch.time);
        merge(&mut data.created_on, &patch.created_on);
        if let Some(active) = patch.is_active {
            data.is_active = active;
        }

        Ok(event.clone())
    }

    async fn delete(&self, id: EventId) -> EventDeskResult<()> {
        self.record(Call::Delete(id))?;
        let mut events = self.events.lock().unwrap();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(EventDeskError::NotFound(id));
        }
        Ok(())
    }
}
