mod create_event;
mod delete_event;
mod get_events;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_events::get_events_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/events", web::get().to(get_events_controller));
    cfg.route("/events", web::post().to(create_event_controller));
    cfg.route("/events", web::put().to(update_event_controller));
    cfg.route("/events", web::delete().to(delete_event_controller));
}

#[cfg(test)]
pub(crate) mod test_helpers {
    use agenda_domain::CalendarEvent;
    use agenda_infra::{Context, DateRangeQuery, IEventRepo, Repos};
    use std::sync::Arc;

    struct DownEventRepo;

    #[async_trait::async_trait]
    impl IEventRepo for DownEventRepo {
        async fn insert(&self, _e: &CalendarEvent) -> anyhow::Result<CalendarEvent> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn save(&self, _e: &CalendarEvent) -> anyhow::Result<()> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn find(&self, _event_id: i64) -> anyhow::Result<Option<CalendarEvent>> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn find_in_range(
            &self,
            _query: &DateRangeQuery,
        ) -> anyhow::Result<Vec<CalendarEvent>> {
            Err(anyhow::anyhow!("connection refused"))
        }

        async fn delete(&self, _event_id: i64) -> anyhow::Result<Option<CalendarEvent>> {
            Err(anyhow::anyhow!("connection refused"))
        }
    }

    /// Context whose event store fails every call.
    pub fn create_context_with_down_store() -> Context {
        let mut ctx = Context::create_inmemory();
        ctx.repos = Repos {
            events: Arc::new(DownEventRepo),
        };
        ctx
    }
}
