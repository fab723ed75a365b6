//! The draft controller behind the create/edit form.
//!
//! An editor owns exactly one draft. In edit mode the draft is loaded from
//! the store first; in create mode it starts from defaults. Edits mark fields
//! as touched, which only affects which errors are displayed: submitting
//! always validates every field.

use std::collections::BTreeSet;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::{EventDeskError, EventDeskResult};
use crate::event::{Event, EventData, EventId, EventPatch};
use crate::generation::{Generation, Ticket};
use crate::navigation::Navigator;
use crate::palette::Color;
use crate::store::EventStore;
use crate::validate::{Field, ValidationReport, validate};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    /// Waiting for the stored event (edit mode only).
    Loading,
    /// Draft in memory and editable.
    Ready,
    /// A create or replace is in flight.
    Submitting,
    /// Loading failed; this view cannot recover.
    Error(String),
    /// Saved or cancelled; control is back with navigation.
    Closed,
}

/// What a submit attempt ended in.
#[derive(Debug)]
pub enum SubmitOutcome {
    Saved(Event),
    /// Validation failed; nothing was sent.
    Invalid(ValidationReport),
    /// The store rejected the save. The draft is kept for another try.
    Failed(EventDeskError),
    /// The editor was not in `Ready`.
    NotReady,
    /// The view was torn down while the save was in flight.
    Stale,
}

/// The store call a submit turns into.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveRequest {
    Create(EventData),
    Replace(EventId, EventPatch),
}

impl SaveRequest {
    pub async fn send(&self, store: &dyn EventStore) -> EventDeskResult<Event> {
        match self {
            SaveRequest::Create(data) => store.create(data).await,
            SaveRequest::Replace(id, patch) => store.replace(*id, patch).await,
        }
    }
}

/// Called with the persisted event after a successful save.
pub type SavedHook = Box<dyn FnMut(&Event) + Send>;

pub struct EventEditor {
    id: Option<EventId>,
    draft: EventData,
    touched: BTreeSet<Field>,
    state: EditorState,
    error: Option<String>,
    generation: Generation,
    on_saved: Option<SavedHook>,
}

impl EventEditor {
    /// Start a new event. Date, time and creation stamp come from `now`.
    pub fn create(now: DateTime<Local>) -> Self {
        EventEditor {
            id: None,
            draft: EventData::draft(now),
            touched: BTreeSet::new(),
            state: EditorState::Ready,
            error: None,
            generation: Generation::default(),
            on_saved: None,
        }
    }

    /// Edit a stored event. Call `load` before anything else.
    pub fn edit(id: EventId) -> Self {
        EventEditor {
            id: Some(id),
            draft: EventData::default(),
            touched: BTreeSet::new(),
            state: EditorState::Loading,
            error: None,
            generation: Generation::default(),
            on_saved: None,
        }
    }

    pub fn with_on_saved(mut self, hook: impl FnMut(&Event) + Send + 'static) -> Self {
        self.on_saved = Some(Box::new(hook));
        self
    }

    pub fn id(&self) -> Option<EventId> {
        self.id
    }

    pub fn is_create(&self) -> bool {
        self.id.is_none()
    }

    pub fn draft(&self) -> &EventData {
        &self.draft
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Message from the last failed save, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched.contains(&field)
    }

    // --- loading ---

    pub fn begin_load(&mut self) -> Option<(Ticket, EventId)> {
        match (&self.state, self.id) {
            (EditorState::Loading, Some(id)) => Some((self.generation.next(), id)),
            _ => None,
        }
    }

    /// Apply a `get_by_id` result. Returns false if the result was stale.
    pub fn finish_load(&mut self, ticket: Ticket, result: EventDeskResult<Event>) -> bool {
        if !self.generation.is_current(ticket) {
            warn!(id = ?self.id, "discarding stale event load");
            return false;
        }

        match result {
            Ok(event) => {
                self.draft = event.data;
                self.state = EditorState::Ready;
            }
            Err(EventDeskError::NotFound(id)) => {
                warn!(id, "event to edit does not exist");
                self.state = EditorState::Error("Event not found.".to_string());
            }
            Err(err) => {
                warn!(id = ?self.id, "error fetching event: {err}");
                self.state = EditorState::Error("Error fetching event.".to_string());
            }
        }
        true
    }

    pub async fn load(&mut self, store: &dyn EventStore) {
        if let Some((ticket, id)) = self.begin_load() {
            let result = store.get_by_id(id).await;
            self.finish_load(ticket, result);
        }
    }

    // --- editing ---

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        if self.state != EditorState::Ready {
            return;
        }
        *field.get_mut(&mut self.draft) = value.into();
        self.touched.insert(field);
    }

    /// Colors come from the palette rather than free text.
    pub fn set_color(&mut self, color: Color) {
        self.set_field(Field::Color, color.as_str());
    }

    pub fn set_active(&mut self, active: bool) {
        if self.state == EditorState::Ready {
            self.draft.is_active = active;
        }
    }

    /// The user left a field without necessarily changing it.
    pub fn blur(&mut self, field: Field) {
        if self.state == EditorState::Ready {
            self.touched.insert(field);
        }
    }

    /// Errors to display right now: only for touched fields.
    pub fn visible_errors(&self) -> ValidationReport {
        validate(&self.draft).masked(&self.touched)
    }

    // --- submitting ---

    /// Validate the whole draft and, if it passes, move to `Submitting` and
    /// return the store call to make.
    pub fn begin_submit(&mut self) -> Result<(Ticket, SaveRequest), SubmitOutcome> {
        if self.state != EditorState::Ready {
            return Err(SubmitOutcome::NotReady);
        }

        let report = validate(&self.draft);
        if !report.is_valid() {
            self.touched.extend(Field::REQUIRED);
            self.touched.extend(report.fields());
            return Err(SubmitOutcome::Invalid(report));
        }

        let request = match self.id {
            Some(id) => SaveRequest::Replace(id, EventPatch::from(self.draft.clone())),
            None => SaveRequest::Create(self.draft.clone()),
        };

        self.state = EditorState::Submitting;
        self.error = None;
        Ok((self.generation.next(), request))
    }

    /// Apply the result of the store call made for `begin_submit`.
    pub fn finish_submit(
        &mut self,
        ticket: Ticket,
        result: EventDeskResult<Event>,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        if !self.generation.is_current(ticket) {
            warn!(id = ?self.id, "discarding stale save result");
            return SubmitOutcome::Stale;
        }

        match result {
            Ok(event) => {
                info!(id = event.id, "event saved");
                self.id = Some(event.id);
                self.draft = event.data.clone();
                if let Some(hook) = self.on_saved.as_mut() {
                    hook(&event);
                }
                self.state = EditorState::Closed;
                navigator.to_list();
                SubmitOutcome::Saved(event)
            }
            Err(err) => {
                warn!(id = ?self.id, "error saving event: {err}");
                self.state = EditorState::Ready;
                self.error = Some("Error saving event.".to_string());
                SubmitOutcome::Failed(err)
            }
        }
    }

    pub async fn submit(
        &mut self,
        store: &dyn EventStore,
        navigator: &mut dyn Navigator,
    ) -> SubmitOutcome {
        match self.begin_submit() {
            Ok((ticket, request)) => {
                let result = request.send(store).await;
                self.finish_submit(ticket, result, navigator)
            }
            Err(outcome) => outcome,
        }
    }

    /// Leave without saving. Anything still in flight is discarded.
    pub fn cancel(&mut self, navigator: &mut dyn Navigator) {
        self.generation.invalidate();
        self.state = EditorState::Closed;
        navigator.to_list();
    }
}
