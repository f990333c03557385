use serde::Serialize;

use crate::catalog::CatalogStore;
use crate::models::{EventId, EventRecord};
use crate::views::{detail_path, edit_path};

const SUMMARY_CHARS: usize = 100;

/// One card in the event grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventCard {
    pub id: EventId,
    pub title: String,
    pub summary: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub image: String,
    pub detail_path: String,
    pub edit_path: String,
}

impl From<&EventRecord> for EventCard {
    fn from(event: &EventRecord) -> Self {
        Self {
            id: event.id,
            title: event.title.clone(),
            summary: summarize(&event.description),
            date: event.date.clone(),
            time: event.time.clone(),
            location: event.location.clone(),
            event_type: event.event_type.clone(),
            image: event.image.clone(),
            detail_path: detail_path(event.id),
            edit_path: edit_path(event.id),
        }
    }
}

/// Searchable event grid. Rebuilt from the store on every request.
#[derive(Debug, Clone, Serialize)]
pub struct EventListView {
    pub search: String,
    pub total: usize,
    pub matched: usize,
    pub events: Vec<EventCard>,
}

impl EventListView {
    pub fn build(store: &CatalogStore, search: &str) -> Self {
        let events: Vec<EventCard> = store
            .filter(search)
            .into_iter()
            .map(EventCard::from)
            .collect();

        Self {
            search: search.to_string(),
            total: store.len(),
            matched: events.len(),
            events,
        }
    }
}

/// First 100 characters of the description, always followed by an ellipsis.
fn summarize(description: &str) -> String {
    let mut summary: String = description.chars().take(SUMMARY_CHARS).collect();
    summary.push_str("...");
    summary
}
