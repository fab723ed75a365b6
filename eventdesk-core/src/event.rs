//! Event types as they travel to and from the remote collection.
//!
//! The store speaks flat JSON objects with camelCase keys. `Event` is a
//! persisted record, `EventData` is everything but the id (the body of a
//! create), and `EventPatch` is a partial set of fields for a replace.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on creation.
pub type EventId = u64;

/// A persisted event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    #[serde(flatten)]
    pub data: EventData,
}

/// Every event attribute except the store-assigned id.
///
/// Missing keys in a store response fall back to empty strings and `false`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventData {
    pub name: String,
    pub description: String,
    pub company: String,
    pub color: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub image: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub is_active: bool,
    /// RFC 3339 timestamp, set once when the draft is started.
    pub created_on: String,
}

impl EventData {
    /// A fresh draft: required fields empty, date and time set to `now`.
    pub fn draft(now: DateTime<Local>) -> Self {
        EventData {
            date: now.format("%Y-%m-%d").to_string(),
            time: now.format("%H:%M").to_string(),
            created_on: now.to_rfc3339(),
            ..Default::default()
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.data.name, self.data.company)
    }
}

/// A partial update. Absent fields are left out of the request body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_on: Option<String>,
}

impl EventPatch {
    pub fn is_empty(&self) -> bool {
        *self == EventPatch::default()
    }
}

/// Full replacement: every field is sent.
impl From<EventData> for EventPatch {
    fn from(data: EventData) -> Self {
        EventPatch {
            name: Some(data.name),
            description: Some(data.description),
            company: Some(data.company),
            color: Some(data.color),
            phone: Some(data.phone),
            email: Some(data.email),
            address: Some(data.address),
            image: Some(data.image),
            date: Some(data.date),
            time: Some(data.time),
            is_active: Some(data.is_active),
            created_on: Some(data.created_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn event_serializes_flat_with_camel_case_keys() {
        let event = Event {
            id: 3,
            data: EventData {
                name: "Launch".into(),
                is_active: true,
                created_on: "2025-01-01T00:00:00Z".into(),
                ..Default::default()
            },
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["id"], 3);
        assert_eq!(value["name"], "Launch");
        assert_eq!(value["isActive"], true);
        assert_eq!(value["createdOn"], "2025-01-01T00:00:00Z");
        assert!(value.get("data").is_none());
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let event: Event = serde_json::from_value(json!({
            "id": 9,
            "name": "Sparse",
            "company": "Acme"
        }))
        .unwrap();

        assert_eq!(event.id, 9);
        assert_eq!(event.data.company, "Acme");
        assert_eq!(event.data.phone, "");
        assert!(!event.data.is_active);
    }

    #[test]
    fn draft_defaults_to_now() {
        let now = Local.with_ymd_and_hms(2025, 3, 20, 15, 4, 0).unwrap();
        let draft = EventData::draft(now);

        assert_eq!(draft.date, "2025-03-20");
        assert_eq!(draft.time, "15:04");
        assert_eq!(draft.created_on, now.to_rfc3339());
        assert!(draft.name.is_empty());
        assert!(draft.color.is_empty());
    }

    #[test]
    fn patch_omits_absent_fields() {
        let patch = EventPatch {
            phone: Some("555-123-4567".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value, json!({ "phone": "555-123-4567" }));
    }

    #[test]
    fn full_patch_carries_every_field() {
        let patch = EventPatch::from(EventData::default());
        let value = serde_json::to_value(&patch).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 12);
        assert!(!patch.is_empty());
    }
}
