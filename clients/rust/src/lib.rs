mod base;
mod cache;
mod event;
mod projection;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
pub use cache::{CachedEvent, CalendarSink, EventCache, EventForm, FormMode};
pub use event::{CalendarEventClient, CreateEventInput, GetEventsInput, UpdateEventInput};
pub use projection::{project, CalendarEntry, CalendarProjection};

// Domain
pub use agenda_api_structs::dtos::CalendarEventDTO as CalendarEvent;
pub use agenda_api_structs::delete_event::APIResponse as DeleteEventResponse;

use std::sync::Arc;

/// Agenda Server SDK
///
/// The SDK contains methods for interacting with the Agenda server
/// API.
#[derive(Clone)]
pub struct AgendaSDK {
    pub event: CalendarEventClient,
}

impl AgendaSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let event = CalendarEventClient::new(base);

        Self { event }
    }

    /// Attach a principal forwarded with every request. The server
    /// observes it for logging only; nothing is enforced.
    pub fn with_principal<T: Into<String>>(address: String, principal: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_principal(principal.into());
        let base = Arc::new(base);
        let event = CalendarEventClient::new(base);

        Self { event }
    }
}
