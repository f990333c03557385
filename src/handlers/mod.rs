use axum::extract::State;
use axum::response::Response;
use serde::Serialize;

use crate::state::AppState;
use crate::utils::response::success;
use crate::views::{LandingPage, NavBar};

pub mod events;

#[derive(Serialize)]
struct HealthPayload {
    status: &'static str,
    service: &'static str,
    catalog_revision: u64,
}

pub async fn health_check(State(state): State<AppState>) -> Response {
    let payload = HealthPayload {
        status: "ok",
        service: "college-events",
        catalog_revision: state.catalog.revision(),
    };

    success(payload, "Health check successful")
}

pub async fn navigation() -> Response {
    success(NavBar::new(), "Navigation loaded")
}

pub async fn landing_page() -> Response {
    success(LandingPage::new(), "Landing page loaded")
}
