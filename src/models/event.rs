use serde::{Deserialize, Serialize};

pub type EventId = i64;

/// A single event listing.
///
/// `date`, `time` and `image` are kept as opaque text; the catalog never
/// interprets them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub image: String,
}

/// Submission payload for a new event. The id is allocated by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub location: String,
    #[serde(rename = "type", default)]
    pub event_type: String,
    #[serde(default)]
    pub image: String,
}

impl NewEvent {
    pub fn into_record(self, id: EventId) -> EventRecord {
        EventRecord {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            event_type: self.event_type,
            image: self.image,
        }
    }
}

/// Partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    pub image: Option<String>,
}

impl EventPatch {
    pub fn apply_to(self, record: &mut EventRecord) {
        if let Some(title) = self.title {
            record.title = title;
        }
        if let Some(description) = self.description {
            record.description = description;
        }
        if let Some(date) = self.date {
            record.date = date;
        }
        if let Some(time) = self.time {
            record.time = time;
        }
        if let Some(location) = self.location {
            record.location = location;
        }
        if let Some(event_type) = self.event_type {
            record.event_type = event_type;
        }
        if let Some(image) = self.image {
            record.image = image;
        }
    }
}

/// Titles must carry at least one non-whitespace character.
pub fn is_valid_title(title: &str) -> bool {
    !title.trim().is_empty()
}
