//! Catalog endpoints. Every response is re-derived from the shared store,
//! so a removed event never shows up again in a later read.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::catalog::{parse_id, CatalogError};
use crate::models::{EventPatch, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};
use crate::views::{EventDetailView, EventListView};

pub const DELETED_MESSAGE: &str = "Event deleted successfully!";

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub search: String,
}

#[derive(Debug, Serialize)]
pub struct DeleteOutcome {
    pub id: String,
    pub removed: bool,
}

/// GET /api/events?search=
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Response, AppError> {
    let view = state
        .catalog
        .read(|store| EventListView::build(store, &params.search))?;

    Ok(success(view, "Events loaded"))
}

/// GET /api/events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let view = state
        .catalog
        .read(|store| EventDetailView::resolve(store, &raw_id))?;

    match view {
        EventDetailView::Found { .. } => Ok(success(view, "Event loaded")),
        EventDetailView::NotFound { requested, .. } => Err(CatalogError::NotFound(requested).into()),
    }
}

/// POST /api/events
pub async fn create_event(
    State(state): State<AppState>,
    payload: Result<Json<NewEvent>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(new_event) = payload?;
    let record = state.catalog.create(new_event)?;
    info!(event_id = record.id, title = %record.title, "Event created");

    Ok(created(record, "Event created successfully!"))
}

/// PUT /api/events/:id
pub async fn update_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<EventPatch>, JsonRejection>,
) -> Result<Response, AppError> {
    let Json(patch) = payload?;
    let id = parse_id(&raw_id)?;
    let record = state.catalog.update(id, patch)?;
    info!(event_id = id, "Event updated");

    Ok(success(record, "Event updated successfully!"))
}

/// DELETE /api/events/:id
///
/// Idempotent: unknown and malformed ids succeed without touching the
/// catalog.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, AppError> {
    let removed = match parse_id(&raw_id) {
        Ok(id) => state.catalog.remove(id)?,
        Err(_) => false,
    };
    info!(event_id = %raw_id, removed, "{}", DELETED_MESSAGE);

    Ok(success(DeleteOutcome { id: raw_id, removed }, DELETED_MESSAGE))
}

/// POST /api/catalog/reset
pub async fn reset_catalog(State(state): State<AppState>) -> Result<Response, AppError> {
    state.catalog.reset()?;
    info!("Catalog reset to seed data");

    Ok(empty_success("Catalog reset to seed data"))
}
