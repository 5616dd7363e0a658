use chrono::{DateTime, Utc};

/// Conjunctive date-range filter: `start_date >= from` (when given)
/// AND `end_date <= to` (when given). Both bounds optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRangeQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRangeQuery {
    pub fn matches(&self, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> bool {
        if let Some(from) = self.from {
            if start_date < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if end_date > to {
                return false;
            }
        }
        true
    }
}
