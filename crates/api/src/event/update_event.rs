use crate::error::ApiError;
use crate::shared::auth::log_principal;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpRequest, HttpResponse};
use agenda_api_structs::dtos::CalendarEventDTO;
use agenda_api_structs::update_event::*;
use agenda_domain::{parse_wire_date, CalendarEvent, CalendarEventPatch};
use agenda_infra::Context;

fn handle_error(e: UseCaseError) -> ApiError {
    match e {
        UseCaseError::NotFound(_) => ApiError::NotFound("Event not found".into()),
        UseCaseError::StorageError => ApiError::InternalError("Failed to update event".into()),
    }
}

pub async fn update_event_controller(
    http_req: HttpRequest,
    query: web::Query<QueryParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<Context>,
) -> Result<HttpResponse, ApiError> {
    log_principal(&http_req);
    let query = query.into_inner();
    let body = body.into_inner();

    // The query parameter takes precedence over the body id
    let event_id = match query.id {
        Some(id) => id
            .parse::<i64>()
            .map_err(|_| ApiError::BadClientData("Missing or invalid id".into()))?,
        None => body
            .id
            .ok_or_else(|| ApiError::BadClientData("Missing or invalid id".into()))?,
    };

    let mut patch = CalendarEventPatch {
        title: body.title,
        description: body.description,
        is_recurring: body.is_recurring,
        frequency: body.frequency,
        days_of_week: body.days_of_week,
        ..Default::default()
    };
    if let Some(start) = body.start_date {
        patch.start_date = Some(
            parse_wire_date(&start)
                .ok_or_else(|| ApiError::BadClientData("Invalid startDate".into()))?,
        );
    }
    if let Some(end) = body.end_date {
        patch.end_date = Some(
            parse_wire_date(&end)
                .ok_or_else(|| ApiError::BadClientData("Invalid endDate".into()))?,
        );
    }

    let usecase = UpdateEventUseCase { event_id, patch };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(CalendarEventDTO::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: i64,
    pub patch: CalendarEventPatch,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(i64),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = CalendarEvent;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateEvent";

    async fn execute(&mut self, ctx: &Context) -> Result<Self::Response, Self::Error> {
        let mut event = ctx
            .repos
            .events
            .find(self.event_id)
            .await
            .map_err(|_| UseCaseError::StorageError)?
            .ok_or(UseCaseError::NotFound(self.event_id))?;

        event.apply_patch(self.patch.clone());
        event.updated = ctx.sys.now();

        ctx.repos
            .events
            .save(&event)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(event)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::event::create_event::CreateEventUseCase;
    use chrono::{TimeZone, Utc};

    async fn insert_event(ctx: &Context) -> CalendarEvent {
        let day = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let usecase = CreateEventUseCase {
            title: "Standup".into(),
            description: Some("Daily sync".into()),
            start_date: day,
            end_date: day,
            is_recurring: false,
            frequency: None,
            days_of_week: None,
        };
        execute(usecase, ctx).await.unwrap()
    }

    #[actix_web::test]
    async fn title_only_patch_changes_only_the_title() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx).await;

        let usecase = UpdateEventUseCase {
            event_id: event.id,
            patch: CalendarEventPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.description, event.description);
        assert_eq!(updated.start_date, event.start_date);
        assert_eq!(updated.end_date, event.end_date);
        assert_eq!(updated.id, event.id);
        assert_eq!(updated.created, event.created);
    }

    #[actix_web::test]
    async fn explicit_null_clears_description() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx).await;

        let usecase = UpdateEventUseCase {
            event_id: event.id,
            patch: CalendarEventPatch {
                description: Some(None),
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();

        assert_eq!(updated.description, None);
        assert_eq!(updated.title, event.title);
    }

    #[actix_web::test]
    async fn update_refreshes_the_updated_stamp() {
        let ctx = Context::create_inmemory();
        let event = insert_event(&ctx).await;

        let usecase = UpdateEventUseCase {
            event_id: event.id,
            patch: CalendarEventPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        };
        let updated = execute(usecase, &ctx).await.unwrap();

        assert!(updated.updated >= event.updated);
        assert_eq!(updated.created, event.created);
    }

    #[actix_web::test]
    async fn store_failure_is_not_reported_as_absence() {
        let ctx = crate::event::test_helpers::create_context_with_down_store();

        let usecase = UpdateEventUseCase {
            event_id: 1,
            patch: CalendarEventPatch::default(),
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::StorageError);
    }

    #[actix_web::test]
    async fn rejects_unknown_id() {
        let ctx = Context::create_inmemory();

        let usecase = UpdateEventUseCase {
            event_id: 999,
            patch: CalendarEventPatch {
                title: Some("Renamed".into()),
                ..Default::default()
            },
        };
        let res = execute(usecase, &ctx).await;
        assert_eq!(res.unwrap_err(), UseCaseError::NotFound(999));
    }
}
