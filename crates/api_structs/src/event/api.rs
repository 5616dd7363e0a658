use crate::dtos::CalendarEventDTO;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserializes a field that was present in the payload, keeping the
/// inner `Option` so that an explicit `null` ("clear this value") can
/// be told apart from an absent field ("leave it untouched").
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

/// Accepts a body id sent either as a JSON number or as a numeric
/// string. A non-numeric string reads as absent, so the surface
/// answers with its own "Missing or invalid id" message.
pub fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum MaybeId {
        Number(i64),
        Text(String),
    }

    let raw: Option<MaybeId> = Deserialize::deserialize(deserializer)?;
    Ok(raw.and_then(|id| match id {
        MaybeId::Number(n) => Some(n),
        MaybeId::Text(s) => s.parse().ok(),
    }))
}

pub mod get_events {
    use super::*;

    /// `id` takes precedence over the range filter; all three are raw
    /// strings so the surface can reject non-numeric ids and
    /// unparseable dates with a 400 instead of an extractor error.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct QueryParams {
        pub id: Option<String>,
        pub from: Option<String>,
        pub to: Option<String>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(untagged)]
    pub enum APIResponse {
        Single(CalendarEventDTO),
        Many(Vec<CalendarEventDTO>),
    }
}

pub mod create_event {
    use super::*;

    /// `title`, `startDate` and `endDate` are required; they are
    /// optional here so the surface can answer with its own 400
    /// message when they are missing.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub title: Option<String>,
        pub description: Option<String>,
        pub start_date: Option<String>,
        pub end_date: Option<String>,
        pub is_recurring: Option<bool>,
        pub frequency: Option<String>,
        pub days_of_week: Option<String>,
    }

    pub type APIResponse = CalendarEventDTO;
}

pub mod update_event {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct QueryParams {
        pub id: Option<String>,
    }

    /// Partial patch: only fields present in the payload are applied.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(
            default,
            deserialize_with = "super::id_from_number_or_string",
            skip_serializing_if = "Option::is_none"
        )]
        pub id: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(
            default,
            deserialize_with = "super::double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub description: Option<Option<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub start_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub end_date: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub is_recurring: Option<bool>,
        #[serde(
            default,
            deserialize_with = "super::double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub frequency: Option<Option<String>>,
        #[serde(
            default,
            deserialize_with = "super::double_option",
            skip_serializing_if = "Option::is_none"
        )]
        pub days_of_week: Option<Option<String>>,
    }

    pub type APIResponse = CalendarEventDTO;
}

pub mod delete_event {
    use super::*;

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct QueryParams {
        pub id: Option<String>,
    }

    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct RequestBody {
        #[serde(default, deserialize_with = "super::id_from_number_or_string")]
        pub id: Option<i64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct APIResponse {
        pub success: bool,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn patch_body_distinguishes_absent_from_null() {
        let body: update_event::RequestBody =
            serde_json::from_str(r#"{"title":"Renamed","description":null}"#).unwrap();
        assert_eq!(body.title, Some("Renamed".into()));
        assert_eq!(body.description, Some(None));
        assert_eq!(body.frequency, None);
        assert_eq!(body.start_date, None);
    }

    #[test]
    fn body_id_accepts_number_or_numeric_string() {
        let body: update_event::RequestBody = serde_json::from_str(r#"{"id":"5"}"#).unwrap();
        assert_eq!(body.id, Some(5));

        let body: delete_event::RequestBody = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(body.id, Some(7));
        let body: delete_event::RequestBody = serde_json::from_str(r#"{"id":"12"}"#).unwrap();
        assert_eq!(body.id, Some(12));

        // Non-numeric text and null both read as no id
        let body: delete_event::RequestBody = serde_json::from_str(r#"{"id":"seven"}"#).unwrap();
        assert_eq!(body.id, None);
        let body: delete_event::RequestBody = serde_json::from_str(r#"{"id":null}"#).unwrap();
        assert_eq!(body.id, None);
    }

    #[test]
    fn patch_body_keeps_present_values() {
        let body: update_event::RequestBody =
            serde_json::from_str(r#"{"id":5,"daysOfWeek":"MO,WE","isRecurring":true}"#).unwrap();
        assert_eq!(body.id, Some(5));
        assert_eq!(body.days_of_week, Some(Some("MO,WE".into())));
        assert_eq!(body.is_recurring, Some(true));
        assert_eq!(body.description, None);
    }
}
