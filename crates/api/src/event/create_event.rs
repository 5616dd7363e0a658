use crate::error::ApiError;
use crate::shared::auth::log_principal;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agenda_api_structs::create_event::*;
use agenda_api_structs::dtos::CalendarEventDTO;
use agenda_domain::{parse_wire_date, CalendarEvent};
use agenda_infra::Context;
use chrono::{DateTime, Utc};

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::StorageError => ApiError::InternalError("Failed to create event".into()),
    }
}

pub async fn create_event_controller(
    http_req: HttpRequest,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    log_principal(&http_req);
    let body = body.into_inner();

    let (title, start_date, end_date) = match (body.title, body.start_date, body.end_date) {
        (Some(title), Some(start), Some(end))
            if !title.is_empty() && !start.is_empty() && !end.is_empty() =>
        {
            (title, start, end)
        }
        _ => {
            return Err(ApiError::BadClientData(
                "Missing required fields: title, startDate, endDate".into(),
            ))
        }
    };

    let start_date = parse_wire_date(&start_date);
    let end_date = parse_wire_date(&end_date);
    let (start_date, end_date) = match (start_date, end_date) {
        (Some(start), Some(end)) => (start, end),
        _ => return Err(ApiError::BadClientData("Invalid date format".into())),
    };

    let usecase = CreateEventUseCase {
        title,
        description: body.description,
        start_date,
        end_date,
        is_recurring: body.is_recurring.unwrap_or(false),
        frequency: body.frequency,
        days_of_week: body.days_of_week,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(CalendarEventDTO::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub title: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_recurring: bool,
    pub frequency: Option<String>,
    pub days_of_week: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        // The store assigns the real id on insert.
        let e = CalendarEvent {
            id: 0,
            title: self.title.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            is_recurring: self.is_recurring,
            frequency: self.frequency.clone(),
            days_of_week: self.days_of_week.clone(),
            created: now,
            updated: now,
        };

        ctx.repos
            .events
            .insert(&e)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
