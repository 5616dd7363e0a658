use super::IEventRepo;
use crate::repos::shared::inmemory_repo::*;
use crate::repos::shared::query_structs::DateRangeQuery;
use agenda_domain::CalendarEvent;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

pub struct InMemoryEventRepo {
    calendar_events: Mutex<Vec<CalendarEvent>>,
    id_seq: AtomicI64,
}

impl InMemoryEventRepo {
    pub fn new() -> Self {
        Self {
            calendar_events: Mutex::new(Vec::new()),
            id_seq: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryEventRepo {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl IEventRepo for InMemoryEventRepo {
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<CalendarEvent> {
        let mut stored = e.clone();
        stored.id = self.id_seq.fetch_add(1, Ordering::SeqCst);
        insert(&stored, &self.calendar_events);
        Ok(stored)
    }

    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()> {
        save(e, &self.calendar_events);
        Ok(())
    }

    async fn find(&self, event_id: i64) -> anyhow::Result<Option<CalendarEvent>> {
        Ok(find(event_id, &self.calendar_events))
    }

    async fn find_in_range(&self, query: &DateRangeQuery) -> anyhow::Result<Vec<CalendarEvent>> {
        let mut events = find_by(&self.calendar_events, |event| {
            query.matches(event.start_date, event.end_date)
        });
        events.sort_by(|a, b| a.start_date.cmp(&b.start_date).then(a.id.cmp(&b.id)));
        Ok(events)
    }

    async fn delete(&self, event_id: i64) -> anyhow::Result<Option<CalendarEvent>> {
        Ok(delete(event_id, &self.calendar_events))
    }
}
