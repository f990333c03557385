use crate::catalog::error::{CatalogError, CatalogResult};
use crate::models::{EventId, EventRecord};

/// Looks up the record with `id` in a catalog snapshot.
pub fn find_by_id(catalog: &[EventRecord], id: EventId) -> CatalogResult<&EventRecord> {
    catalog
        .iter()
        .find(|event| event.id == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}

/// Parses an id taken from a route segment. Anything that is not a
/// base-10 integer is reported as not found.
pub fn parse_id(raw: &str) -> CatalogResult<EventId> {
    raw.trim()
        .parse::<EventId>()
        .map_err(|_| CatalogError::NotFound(raw.to_string()))
}

/// Resolves an untrusted route parameter against a catalog snapshot.
pub fn resolve_param<'a>(catalog: &'a [EventRecord], raw: &str) -> CatalogResult<&'a EventRecord> {
    let id = parse_id(raw)?;
    find_by_id(catalog, id)
}
