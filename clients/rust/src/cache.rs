use crate::event::{CalendarEventClient, CreateEventInput, GetEventsInput, UpdateEventInput};
use crate::projection::{project, CalendarProjection};
use crate::APIResponse;
use agenda_api_structs::dtos::CalendarEventDTO;
use agenda_api_structs::{create_event, delete_event, update_event};

/// Client-held copy of a server event. Dates stay as the serialized
/// RFC 3339 text received on the wire, not parsed date values.
#[derive(Debug, Clone, PartialEq)]
pub struct CachedEvent {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_recurring: bool,
    pub frequency: Option<String>,
    pub days_of_week: Option<String>,
}

impl From<CalendarEventDTO> for CachedEvent {
    fn from(dto: CalendarEventDTO) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            description: dto.description,
            start_date: dto.start_date.to_rfc3339(),
            end_date: dto.end_date.to_rfc3339(),
            is_recurring: dto.is_recurring,
            frequency: dto.frequency,
            days_of_week: dto.days_of_week,
        }
    }
}

/// The rendering collaborator. Receives the full recomputed projection
/// after every successful cache mutation and is otherwise opaque; it
/// never mutates server state.
pub trait CalendarSink {
    fn set_events(&mut self, projection: CalendarProjection);
}

/// Shared create/edit form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub end_date: String,
}

impl EventForm {
    fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.start_date.is_empty() && !self.end_date.is_empty()
    }
}

/// Form mode: `Idle` is create mode, `Editing` holds the id of the
/// entry whose fields pre-fill the form. The transient saving phase is
/// the in-flight section of each mutation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormMode {
    Idle,
    Editing(i64),
}

/// The single client-side source of truth for events.
///
/// The event list is only ever mutated from confirmed server
/// responses: nothing is applied optimistically before the round-trip
/// completes. Every mutation draws a sequence token before its request
/// and a completion whose token is no longer the newest issued one is
/// discarded instead of applied, so a slow superseded request can
/// never overwrite newer state.
pub struct EventCache {
    client: CalendarEventClient,
    sink: Box<dyn CalendarSink>,
    events: Vec<CachedEvent>,
    loading: bool,
    error: Option<String>,
    form: EventForm,
    mode: FormMode,
    issued_token: u64,
}

impl EventCache {
    pub fn new(client: CalendarEventClient, sink: Box<dyn CalendarSink>) -> Self {
        Self {
            client,
            sink,
            events: Vec::new(),
            loading: false,
            error: None,
            form: EventForm::default(),
            mode: FormMode::Idle,
            issued_token: 0,
        }
    }

    pub fn events(&self) -> &[CachedEvent] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn form(&self) -> &EventForm {
        &self.form
    }

    /// The UI types into the form through this.
    pub fn form_mut(&mut self) -> &mut EventForm {
        &mut self.form
    }

    pub fn mode(&self) -> FormMode {
        self.mode
    }

    /// Replaces the whole cache from an unfiltered list request. On
    /// failure the previous cache stays as it was; there is no partial
    /// replace.
    pub async fn load(&mut self) {
        self.loading = true;
        let token = self.begin_request();
        let result = self.client.list(GetEventsInput::default()).await;
        self.loading = false;
        self.apply_loaded(token, result);
    }

    /// Submits the form as a new event. Does nothing but set the error
    /// slot when required fields are missing.
    pub async fn create(&mut self) {
        self.error = None;
        if !self.form.is_complete() {
            self.error = Some("Please provide title, startDate and endDate.".into());
            return;
        }

        let token = self.begin_request();
        let input = CreateEventInput {
            title: self.form.title.clone(),
            description: if self.form.description.is_empty() {
                None
            } else {
                Some(self.form.description.clone())
            },
            start_date: self.form.start_date.clone(),
            end_date: self.form.end_date.clone(),
            is_recurring: None,
            frequency: None,
            days_of_week: None,
        };
        let result = self.client.create(input).await;
        self.apply_created(token, result);
    }

    /// Enters edit mode for an entry already in the cache, pre-filling
    /// the form with its fields (dates reduced to their day).
    pub fn start_edit(&mut self, event_id: i64) -> bool {
        let event = match self.events.iter().find(|e| e.id == event_id) {
            Some(event) => event.clone(),
            None => return false,
        };
        self.form = EventForm {
            title: event.title,
            description: event.description.unwrap_or_default(),
            start_date: date_only(&event.start_date),
            end_date: date_only(&event.end_date),
        };
        self.mode = FormMode::Editing(event_id);
        true
    }

    /// Leaves edit mode and empties the form.
    pub fn clear_form(&mut self) {
        self.form = EventForm::default();
        self.mode = FormMode::Idle;
        self.error = None;
    }

    /// Submits the form as a patch for the entry being edited. On
    /// failure the cache is untouched and the form stays in edit mode.
    pub async fn update(&mut self) {
        self.error = None;
        let event_id = match self.mode {
            FormMode::Editing(id) => id,
            FormMode::Idle => {
                self.error = Some("No event selected for editing".into());
                return;
            }
        };
        if !self.form.is_complete() {
            self.error = Some("Please provide title, startDate and endDate.".into());
            return;
        }

        let token = self.begin_request();
        let input = UpdateEventInput {
            event_id,
            title: Some(self.form.title.clone()),
            description: Some(if self.form.description.is_empty() {
                None
            } else {
                Some(self.form.description.clone())
            }),
            start_date: Some(self.form.start_date.clone()),
            end_date: Some(self.form.end_date.clone()),
            ..Default::default()
        };
        let result = self.client.update(input).await;
        self.apply_updated(token, result);
    }

    /// Deletes an entry after explicit confirmation; no request is
    /// issued when `confirm` answers false.
    pub async fn delete<F: FnOnce() -> bool>(&mut self, event_id: i64, confirm: F) {
        if !confirm() {
            return;
        }
        self.error = None;

        let token = self.begin_request();
        let result = self.client.delete(event_id).await;
        self.apply_deleted(token, event_id, result);
    }

    fn begin_request(&mut self) -> u64 {
        self.issued_token += 1;
        self.issued_token
    }

    /// A completion is only applied when it carries the newest issued
    /// token; anything older was superseded while in flight.
    fn accept(&self, token: u64) -> bool {
        token == self.issued_token
    }

    fn apply_loaded(&mut self, token: u64, result: APIResponse<Vec<CalendarEventDTO>>) {
        if !self.accept(token) {
            return;
        }
        match result {
            Ok(events) => {
                self.events = events.into_iter().map(CachedEvent::from).collect();
                self.sort_events();
                self.error = None;
                self.push_projection();
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    fn apply_created(&mut self, token: u64, result: APIResponse<create_event::APIResponse>) {
        if !self.accept(token) {
            return;
        }
        match result {
            Ok(created) => {
                self.events.push(created.into());
                self.sort_events();
                self.clear_form();
                self.push_projection();
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    fn apply_updated(&mut self, token: u64, result: APIResponse<update_event::APIResponse>) {
        if !self.accept(token) {
            return;
        }
        match result {
            Ok(updated) => {
                let updated: CachedEvent = updated.into();
                if let Some(entry) = self.events.iter_mut().find(|e| e.id == updated.id) {
                    *entry = updated;
                }
                self.sort_events();
                self.clear_form();
                self.push_projection();
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    fn apply_deleted(
        &mut self,
        token: u64,
        event_id: i64,
        result: APIResponse<delete_event::APIResponse>,
    ) {
        if !self.accept(token) {
            return;
        }
        match result {
            Ok(_ack) => {
                self.events.retain(|e| e.id != event_id);
                if self.mode == FormMode::Editing(event_id) {
                    self.clear_form();
                }
                self.push_projection();
            }
            Err(e) => self.error = Some(e.message()),
        }
    }

    fn sort_events(&mut self) {
        self.events
            .sort_by(|a, b| a.start_date.cmp(&b.start_date));
    }

    fn push_projection(&mut self) {
        self.sink.set_events(project(&self.events));
    }
}

/// First 10 characters of a serialized date, the `YYYY-MM-DD` part.
fn date_only(iso: &str) -> String {
    iso.chars().take(10).collect()
}
