use chrono::prelude::*;

/// Parses a date value the way it appears on the wire.
///
/// Accepted shapes: RFC 3339, a plain `YYYY-MM-DD` calendar date
/// (taken as midnight UTC) and a naive `YYYY-MM-DDTHH:MM:SS`
/// (taken as UTC). Everything else is invalid.
pub fn parse_wire_date(datestr: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(datestr) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(datestr, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|ndt| Utc.from_utc_datetime(&ndt));
    }
    NaiveDateTime::parse_from_str(datestr, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}
