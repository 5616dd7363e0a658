use crate::error::ApiError;
use crate::shared::auth::log_principal;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agenda_api_structs::dtos::CalendarEventDTO;
use agenda_api_structs::get_events::*;
use agenda_domain::{parse_wire_date, CalendarEvent};
use agenda_infra::{Context, DateRangeQuery};

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::NotFound(_) => ApiError::NotFound("Event not found".into()),
        UseCaseError::StorageError => ApiError::InternalError("Failed to fetch events".into()),
    }
}

pub async fn get_events_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    log_principal(&http_req);
    let query = query.into_inner();

    // An empty id parameter reads as no id at all
    if let Some(id) = query.id.filter(|id| !id.is_empty()) {
        let event_id: i64 = id
            .parse()
            .map_err(|_| ApiError::BadClientData("Invalid id".into()))?;

        let usecase = GetEventUseCase { event_id };
        return execute(usecase, &ctx)
            .await
            .map(|event| HttpResponse::Ok().json(APIResponse::Single(CalendarEventDTO::new(event))))
            .map_err(handle_error);
    }

    let mut range = DateRangeQuery::default();
    if let Some(from) = &query.from {
        range.from = Some(
            parse_wire_date(from)
                .ok_or_else(|| ApiError::BadClientData("Invalid from date".into()))?,
        );
    }
    if let Some(to) = &query.to {
        range.to = Some(
            parse_wire_date(to).ok_or_else(|| ApiError::BadClientData("Invalid to date".into()))?,
        );
    }

    let usecase = ListEventsUseCase { range };
    execute(usecase, &ctx)
        .await
        .map(|events| {
            let events = events.into_iter().map(CalendarEventDTO::new).collect();
            HttpResponse::Ok().json(APIResponse::Many(events))
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: i64,
}

#[derive(Debug)]
pub struct ListEventsUseCase {
    pub range: DateRangeQuery,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "GetEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find(self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.event_id))
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ListEventsUseCase {
    type Response = Vec<CalendarEvent>;

    type Error = UseCaseError;

    const NAME: &'static str = "ListEvents";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .find_in_range(&self.range)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use chrono::{TimeZone, Utc};

    async fn insert_event(ctx: &Context, day: u32) -> CalendarEvent {
        let usecase = CreateEventUseCase {
            title: format!("Event on day {}", day),
            description: None,
            start_date: Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2024, 1, day, 10, 0, 0).unwrap(),
            is_recurring: false,
            frequency: None,
            days_of_week: None,
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn finds_event_by_id() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx, 8).await;

        let usecase = GetEventUseCase { event_id: event.id };
        let found = execute(usecase, &ctx).await.unwrap();
        assert_eq!(found, event);
    }

    #[actix_web::test]
    async fn rejects_unknown_id() {
        let ctx = Context::create_inmemory();

        let usecase = GetEventUseCase { event_id: 999 };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(999));
    }

    #[actix_web::test]
    async fn store_failure_is_not_reported_as_absence() {
        let ctx = crate::event::test_helpers::create_context_with_down_store();

        let res = execute(GetEventUseCase { event_id: 1 }, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::StorageError);

        use actix_web::{http::StatusCode, ResponseError};
        assert_eq!(
            handle_error(UseCaseError::StorageError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            handle_error(UseCaseError::NotFound(1)).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn lists_events_within_range_sorted_by_start_date() {
        let ctx = Context::create_inmemory();
        for day in [20, 2, 14, 8] {
            insert_event(&ctx, day).await;
        }

        let usecase = ListEventsUseCase {
            range: DateRangeQuery {
                from: Some(Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap()),
                to: Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap()),
            },
        };
        let events = execute(usecase, &ctx).await.unwrap();

        assert_eq!(events.len(), 2);
        assert!(events[0].start_date <= events[1].start_date);
        for event in events {
            assert!(event.start_date >= Utc.with_ymd_and_hms(2024, 1, 5, 0, 0, 0).unwrap());
            assert!(event.end_date <= Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        }
    }

    #[actix_web::test]
    async fn lists_everything_without_filter() {
        let ctx = Context::create_inmemory();
        for day in [20, 2, 14] {
            insert_event(&ctx, day).await;
        }

        let usecase = ListEventsUseCase {
            range: DateRangeQuery::default(),
        };
        let events = execute(usecase, &ctx).await.unwrap();
        assert_eq!(events.len(), 3);
    }
}
