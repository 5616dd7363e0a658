mod inmemory;
mod postgres;

use crate::repos::shared::query_structs::DateRangeQuery;
use agenda_domain::CalendarEvent;
pub use inmemory::InMemoryEventRepo;
pub use postgres::PostgresEventRepo;

#[async_trait::async_trait]
pub trait IEventRepo: Send + Sync {
    /// Assigns a fresh id and returns the record as stored.
    async fn insert(&self, e: &CalendarEvent) -> anyhow::Result<CalendarEvent>;
    /// Full-record overwrite addressed by id.
    async fn save(&self, e: &CalendarEvent) -> anyhow::Result<()>;
    /// `Ok(None)` means the id is absent; a store failure is an `Err`,
    /// never absence.
    async fn find(&self, event_id: i64) -> anyhow::Result<Option<CalendarEvent>>;
    /// Events matching the range filter, ordered by `start_date`
    /// ascending (id-tiebroken for determinism).
    async fn find_in_range(&self, query: &DateRangeQuery) -> anyhow::Result<Vec<CalendarEvent>>;
    /// Returns the deleted record, or `Ok(None)` when the id was absent.
    /// Deleting an already-deleted id reports absence again.
    async fn delete(&self, event_id: i64) -> anyhow::Result<Option<CalendarEvent>>;
}
