use crate::{APIError, APIResponse, BaseClient};
use agenda_api_structs::dtos::CalendarEventDTO;
use agenda_api_structs::{create_event, delete_event, get_events, update_event};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CalendarEventClient {
    base: Arc<BaseClient>,
}

#[derive(Debug, Default)]
pub struct GetEventsInput {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Debug)]
pub struct CreateEventInput {
    pub title: String,
    pub description: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub is_recurring: Option<bool>,
    pub frequency: Option<String>,
    pub days_of_week: Option<String>,
}

/// Partial update; `None` fields are left out of the request entirely
/// while `Some(None)` sends an explicit null to clear the value.
#[derive(Debug, Default)]
pub struct UpdateEventInput {
    pub event_id: i64,
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub is_recurring: Option<bool>,
    pub frequency: Option<Option<String>>,
    pub days_of_week: Option<Option<String>>,
}

impl CalendarEventClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn list(&self, input: GetEventsInput) -> APIResponse<Vec<CalendarEventDTO>> {
        let mut query = Vec::new();
        if let Some(from) = &input.from {
            query.push(format!("from={}", from));
        }
        if let Some(to) = &input.to {
            query.push(format!("to={}", to));
        }
        let path = if query.is_empty() {
            "events".to_string()
        } else {
            format!("events?{}", query.join("&"))
        };

        match self.base.get(path, StatusCode::OK).await? {
            get_events::APIResponse::Many(events) => Ok(events),
            get_events::APIResponse::Single(event) => Ok(vec![event]),
        }
    }

    pub async fn get(&self, event_id: i64) -> APIResponse<CalendarEventDTO> {
        match self
            .base
            .get(format!("events?id={}", event_id), StatusCode::OK)
            .await?
        {
            get_events::APIResponse::Single(event) => Ok(event),
            get_events::APIResponse::Many(_) => Err(APIError::MalformedResponse),
        }
    }

    pub async fn create(&self, input: CreateEventInput) -> APIResponse<create_event::APIResponse> {
        let body = create_event::RequestBody {
            title: Some(input.title),
            description: input.description,
            start_date: Some(input.start_date),
            end_date: Some(input.end_date),
            is_recurring: input.is_recurring,
            frequency: input.frequency,
            days_of_week: input.days_of_week,
        };

        self.base
            .post(body, "events".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(&self, input: UpdateEventInput) -> APIResponse<update_event::APIResponse> {
        let event_id = input.event_id;
        let body = update_event::RequestBody {
            id: None,
            title: input.title,
            description: input.description,
            start_date: input.start_date,
            end_date: input.end_date,
            is_recurring: input.is_recurring,
            frequency: input.frequency,
            days_of_week: input.days_of_week,
        };

        self.base
            .put(body, format!("events?id={}", event_id), StatusCode::OK)
            .await
    }

    pub async fn delete(&self, event_id: i64) -> APIResponse<delete_event::APIResponse> {
        self.base
            .delete(format!("events?id={}", event_id), StatusCode::OK)
            .await
    }
}
