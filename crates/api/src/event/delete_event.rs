use crate::error::ApiError;
use crate::shared::auth::log_principal;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agenda_api_structs::delete_event::*;
use agenda_domain::CalendarEvent;
use agenda_infra::Context;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::NotFound(_) => ApiError::NotFound("Event not found".into()),
        UseCaseError::StorageError => ApiError::InternalError("Failed to delete event".into()),
    }
}

pub async fn delete_event_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    body: Option<web::Json<RequestBody>>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    log_principal(&http_req);

    // The query parameter takes precedence over the body id
    let event_id = match query.into_inner().id {
        Some(id) => id
            .parse::<i64>()
            .map_err(|_| ApiError::BadClientData("Missing or invalid id".into()))?,
        None => body
            .and_then(|body| body.into_inner().id)
            .ok_or_else(|| ApiError::BadClientData("Missing or invalid id".into()))?,
    };

    let usecase = DeleteEventUseCase { event_id };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse { success: true }))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteEventUseCase {
    pub event_id: i64,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .events
            .delete(self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.event_id))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use crate::event::get_events::{GetEventUseCase, UseCaseError as GetError};
    use chrono::{TimeZone, Utc};

    async fn insert_event(ctx: &Context) -> CalendarEvent {
        let day = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let usecase = CreateEventUseCase {
            title: "Standup".into(),
            description: None,
            start_date: day,
            end_date: day,
            is_recurring: false,
            frequency: None,
            days_of_week: None,
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn deletes_existing_event() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx).await;

        let deleted = execute(DeleteEventUseCase { event_id: event.id }, &ctx)
            .await
            .unwrap();
        assert_eq!(deleted, event);

        let res = execute(GetEventUseCase { event_id: event.id }, &ctx).await;
        assert_eq!(res.unwrap_err(), GetError::NotFound(event.id));
    }

    #[actix_web::test]
    async fn delete_of_unknown_id_fails_every_time() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx).await;

        execute(DeleteEventUseCase { event_id: event.id }, &ctx)
            .await
            .unwrap();

        // Repeating the delete is not a silent success
        for _ in 0..2 {
            let res = execute(DeleteEventUseCase { event_id: event.id }, &ctx).await;
            assert_eq!(res.unwrap_err(), UseCaseError::NotFound(event.id));
        }
    }

    #[actix_web::test]
    async fn store_failure_is_not_reported_as_absence() {
        let ctx = crate::event::test_helpers::create_context_with_down_store();

        let res = execute(DeleteEventUseCase { event_id: 1 }, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::StorageError);

        use actix_web::{http::StatusCode, ResponseError};
        assert_eq!(
            handle_error(UseCaseError::StorageError).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn delete_leaves_other_events_untouched() {
        let ctx = Context::create_inmemory();
        let keep = insert_event(&ctx).await;
        let remove = insert_event(&ctx).await;

        execute(DeleteEventUseCase { event_id: remove.id }, &ctx)
            .await
            .unwrap();

        let found = execute(GetEventUseCase { event_id: keep.id }, &ctx)
            .await
            .unwrap();
        assert_eq!(found, keep);
    }
}
