use serde::Serialize;

use crate::catalog::{resolve_param, CatalogError, CatalogStore};
use crate::models::EventRecord;
use crate::views::{back_to_events, Link};

pub const NOT_FOUND_MESSAGE: &str = "Event not found";

/// Single-event page, or the explicit "not found" state with a way back.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EventDetailView {
    Found {
        event: EventRecord,
        back: Link,
    },
    NotFound {
        message: &'static str,
        requested: String,
        back: Link,
    },
}

impl EventDetailView {
    pub fn resolve(store: &CatalogStore, raw_id: &str) -> Self {
        match resolve_param(store.list(), raw_id) {
            Ok(event) => Self::Found {
                event: event.clone(),
                back: back_to_events(),
            },
            Err(CatalogError::NotFound(requested)) => Self::not_found(requested),
            Err(_) => Self::not_found(raw_id.to_string()),
        }
    }

    pub fn not_found(requested: String) -> Self {
        Self::NotFound {
            message: NOT_FOUND_MESSAGE,
            requested,
            back: back_to_events(),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}
