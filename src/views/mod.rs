//! Serializable view models. Front ends render these; no layout lives here.

use serde::Serialize;

pub mod detail;
pub mod list;
pub mod pages;

pub use detail::EventDetailView;
pub use list::{EventCard, EventListView};
pub use pages::{LandingPage, NavBar};

pub const EVENTS_PATH: &str = "/events";
pub const CREATE_EVENT_PATH: &str = "/create-event";

/// A navigation target. `path` is handed to the router untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: &'static str,
    pub path: String,
}

impl Link {
    pub fn new(label: &'static str, path: impl Into<String>) -> Self {
        Self {
            label,
            path: path.into(),
        }
    }
}

pub fn back_to_events() -> Link {
    Link::new("Back to Events", EVENTS_PATH)
}

pub fn detail_path(id: crate::models::EventId) -> String {
    format!("{EVENTS_PATH}/{id}")
}

pub fn edit_path(id: crate::models::EventId) -> String {
    format!("/edit-event/{id}")
}
