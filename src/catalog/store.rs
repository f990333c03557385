use std::collections::HashSet;

use tracing::debug;

use crate::catalog::error::{CatalogError, CatalogResult};
use crate::models::event::is_valid_title;
use crate::models::{seed_events, EventId, EventPatch, EventRecord, NewEvent};

/// In-memory event catalog for one session.
///
/// Records keep their insertion order. Ids stay unique across every
/// mutation, and an id handed out by [`CatalogStore::create`] is never
/// handed out again, even after the record is removed.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    initial: Vec<EventRecord>,
    events: Vec<EventRecord>,
    next_id: EventId,
}

impl CatalogStore {
    /// Builds a store from an injected snapshot. Duplicate ids, blank
    /// titles and an id that leaves no room for new events are rejected.
    pub fn with_seed(initial: Vec<EventRecord>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(initial.len());
        for event in &initial {
            if !seen.insert(event.id) {
                return Err(CatalogError::Validation(format!(
                    "duplicate event id {} in seed",
                    event.id
                )));
            }
            if !is_valid_title(&event.title) {
                return Err(CatalogError::Validation(format!(
                    "event {} in seed has an empty title",
                    event.id
                )));
            }
        }
        if seen.contains(&EventId::MAX) {
            return Err(CatalogError::Validation(format!(
                "event id {} in seed leaves no room for new events",
                EventId::MAX
            )));
        }
        Ok(Self::from_unique(initial))
    }

    /// Store preloaded with the built-in mock catalog.
    pub fn seeded() -> Self {
        Self::from_unique(seed_events())
    }

    fn from_unique(initial: Vec<EventRecord>) -> Self {
        let next_id = initial
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max.saturating_add(1));
        Self {
            events: initial.clone(),
            initial,
            next_id,
        }
    }

    pub fn list(&self) -> &[EventRecord] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Records whose title, description or type contain `query`,
    /// ignoring case. An empty query matches everything.
    pub fn filter(&self, query: &str) -> Vec<&EventRecord> {
        let needle = query.to_lowercase();
        self.events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&needle)
                    || event.description.to_lowercase().contains(&needle)
                    || event.event_type.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Removes the record with `id`. Returns `false` when nothing matched.
    pub fn remove(&mut self, id: EventId) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        debug!(event_id = id, removed, "Catalog remove");
        removed
    }

    pub fn create(&mut self, new: NewEvent) -> CatalogResult<EventRecord> {
        if !is_valid_title(&new.title) {
            return Err(CatalogError::Validation("title must not be empty".to_string()));
        }

        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| CatalogError::Validation("no event ids left to allocate".to_string()))?;

        let record = new.into_record(id);
        self.events.push(record.clone());
        debug!(event_id = id, "Catalog create");
        Ok(record)
    }

    pub fn update(&mut self, id: EventId, patch: EventPatch) -> CatalogResult<EventRecord> {
        if let Some(title) = &patch.title {
            if !is_valid_title(title) {
                return Err(CatalogError::Validation("title must not be empty".to_string()));
            }
        }

        let record = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        patch.apply_to(record);
        debug!(event_id = id, "Catalog update");
        Ok(record.clone())
    }

    /// Restores the snapshot the store was built from.
    pub fn reset(&mut self) {
        self.events = self.initial.clone();
        debug!(count = self.events.len(), "Catalog reset");
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::seeded()
    }
}
