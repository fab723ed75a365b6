//! Navigation capability the controllers need from whatever hosts them.

use crate::event::EventId;

/// The three views of the application. Controllers only ever ask to go
/// somewhere; the host decides how.
pub trait Navigator {
    fn to_list(&mut self);
    fn to_create(&mut self);
    fn to_edit(&mut self, id: EventId);
}

/// A navigation request, for hosts that drive a route loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Create,
    Edit(EventId),
}

/// Remembers the last requested route.
#[derive(Debug, Default)]
pub struct RouteRecorder {
    pub pending: Option<Route>,
}

impl RouteRecorder {
    /// Take the pending route, if any.
    pub fn take(&mut self) -> Option<Route> {
        self.pending.take()
    }
}

impl Navigator for RouteRecorder {
    fn to_list(&mut self) {
        self.pending = Some(Route::List);
    }

    fn to_create(&mut self) {
        self.pending = Some(Route::Create);
    }

    fn to_edit(&mut self, id: EventId) {
        self.pending = Some(Route::Edit(id));
    }
}
