//! Integration tests for the static pages, health check and middleware.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get};
use tower::ServiceExt;

#[tokio::test]
async fn health_check_reports_revision() {
    let response = get(build_test_app(), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "ok");
    assert_eq!(json["data"]["catalog_revision"], 0);
}

#[tokio::test]
async fn navigation_lists_stub_auth_links() {
    let json = body_json(get(build_test_app(), "/api/nav").await).await;

    assert_eq!(json["data"]["brand"], "College Events");
    let paths: Vec<_> = json["data"]["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|link| link["path"].as_str().unwrap().to_string())
        .collect();
    assert!(paths.contains(&"/login".to_string()));
    assert!(paths.contains(&"/register".to_string()));
}

#[tokio::test]
async fn landing_page_links_to_catalog() {
    let json = body_json(get(build_test_app(), "/api/home").await).await;

    assert_eq!(json["data"]["hero"]["title"], "Welcome to College Events");
    assert_eq!(json["data"]["hero"]["actions"][0]["path"], "/events");
    assert_eq!(json["data"]["features"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let response = get(build_test_app(), "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_security_headers() {
    let response = get(build_test_app(), "/health").await;

    let headers = response.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert!(headers.get("strict-transport-security").is_none());
}

#[tokio::test]
async fn cors_preflight_allows_dev_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/events")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "DELETE")
        .body(Body::empty())
        .unwrap();

    let response = build_test_app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let allow_origin = response
        .headers()
        .get("access-control-allow-origin")
        .expect("Missing Access-Control-Allow-Origin header")
        .to_str()
        .unwrap();
    assert_eq!(allow_origin, "http://localhost:5173");
}
