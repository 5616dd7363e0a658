use crate::cache::CachedEvent;
use agenda_domain::parse_wire_date;
use chrono::NaiveDate;
use tracing::warn;

/// A calendar-day entry handed to the rendering surface.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// The derived calendar view. Lossy by contract: an entry whose dates
/// cannot be reduced to a calendar day is dropped from `entries` and
/// reported in `dropped` instead of failing the whole projection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarProjection {
    pub entries: Vec<CalendarEntry>,
    pub dropped: Vec<i64>,
}

/// Pure derivation from the cached event list. Recomputed from scratch
/// after every successful cache mutation, never patched incrementally.
pub fn project(events: &[CachedEvent]) -> CalendarProjection {
    let mut projection = CalendarProjection::default();

    for event in events {
        match (calendar_day(&event.start_date), calendar_day(&event.end_date)) {
            (Some(start), Some(end)) => projection.entries.push(CalendarEntry {
                id: event.id.to_string(),
                title: event.title.clone(),
                start,
                end,
            }),
            _ => {
                warn!(
                    "Dropping event {} from the calendar projection: unparseable dates",
                    event.id
                );
                projection.dropped.push(event.id);
            }
        }
    }

    projection
}

/// Reduces a serialized date to its calendar day: the first 10
/// characters when they already read as `YYYY-MM-DD`, otherwise a full
/// parse of the whole string.
fn calendar_day(text: &str) -> Option<NaiveDate> {
    if let Some(prefix) = text.get(..10) {
        if let Ok(date) = NaiveDate::parse_from_str(prefix, "%Y-%m-%d") {
            return Some(date);
        }
    }
    parse_wire_date(text).map(|dt| dt.date_naive())
}

#[cfg(test)]
mod test {
    use super::*;

    fn cached(id: i64, start: &str, end: &str) -> CachedEvent {
        CachedEvent {
            id,
            title: format!("Event {}", id),
            description: None,
            start_date: start.into(),
            end_date: end.into(),
            is_recurring: false,
            frequency: None,
            days_of_week: None,
        }
    }

    #[test]
    fn truncates_rfc3339_dates_to_calendar_days() {
        let events = vec![cached(1, "2024-01-08T09:00:00+00:00", "2024-01-09T10:00:00+00:00")];
        let projection = project(&events);

        assert!(projection.dropped.is_empty());
        assert_eq!(projection.entries.len(), 1);
        let entry = &projection.entries[0];
        assert_eq!(entry.id, "1");
        assert_eq!(entry.start, NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(entry.end, NaiveDate::from_ymd_opt(2024, 1, 9).unwrap());
    }

    #[test]
    fn drops_entries_with_unparseable_dates() {
        let events = vec![
            cached(1, "2024-01-08", "2024-01-08"),
            cached(2, "not-a-date", "2024-01-09"),
            cached(3, "2024-01-10", "also-garbage"),
        ];
        let projection = project(&events);

        assert_eq!(projection.entries.len(), 1);
        assert_eq!(projection.entries[0].id, "1");
        assert_eq!(projection.dropped, vec![2, 3]);
    }

    #[test]
    fn empty_cache_projects_to_empty_view() {
        assert_eq!(project(&[]), CalendarProjection::default());
    }
}
