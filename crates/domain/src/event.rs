use crate::shared::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted calendar event.
///
/// The `id` is assigned by the event store on insert and immutable
/// afterwards. `start_date <= end_date` is deliberately not enforced:
/// inverted ranges are stored as given. The recurrence fields
/// (`is_recurring`, `frequency`, `days_of_week`) are inert metadata,
/// stored and returned verbatim and never expanded into occurrences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_recurring: bool,
    pub frequency: Option<String>,
    pub days_of_week: Option<String>,
    pub created: DateTime<Utc>,
    pub updated: DateTime<Utc>,
}

impl Entity for CalendarEvent {
    fn id(&self) -> i64 {
        self.id
    }
}

/// A partial update where only explicitly present fields are applied.
///
/// Nullable fields are `Option<Option<_>>` so that an absent field
/// (outer `None`, leave untouched) can be told apart from an explicit
/// null (inner `None`, clear the value).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarEventPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub is_recurring: Option<bool>,
    pub frequency: Option<Option<String>>,
    pub days_of_week: Option<Option<String>>,
}

impl CalendarEvent {
    pub fn apply_patch(&mut self, patch: CalendarEventPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(is_recurring) = patch.is_recurring {
            self.is_recurring = is_recurring;
        }
        if let Some(frequency) = patch.frequency {
            self.frequency = frequency;
        }
        if let Some(days_of_week) = patch.days_of_week {
            self.days_of_week = days_of_week;
        }
    }
}
