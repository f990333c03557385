use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, create_security_headers_layer};
use crate::handlers::events::{
    create_event, delete_event, get_event, list_events, reset_catalog, update_event,
};
use crate::handlers::{health_check, landing_page, navigation};
use crate::state::AppState;

pub fn create_routes(state: AppState) -> Router {
    let config = state.config.clone();

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(create_security_headers_layer(&config))
        .layer(create_cors_layer(&config))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/nav", get(navigation))
        .route("/home", get(landing_page))
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/:id",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/catalog/reset", post(reset_catalog))
}
