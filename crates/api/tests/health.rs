mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, memory_app};
use tower::ServiceExt;

#[tokio::test]
async fn health_reports_ok_over_memory_store() {
    let (app, _store, _clock) = memory_app();

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let (app, _store, _clock) = memory_app();

    let response = get(app, "/nope").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let (app, _store, _clock) = memory_app();

    let response = get(app, "/health").await;

    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn incoming_request_id_is_propagated() {
    let (app, _store, _clock) = memory_app();

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "abc-123")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.headers()["x-request-id"], "abc-123");
}

#[tokio::test]
async fn cors_preflight_allows_configured_origin() {
    let (app, _store, _clock) = memory_app();

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/todos")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:5173"
    );
}

#[tokio::test]
async fn malformed_id_is_rejected_before_reaching_the_store() {
    let (app, store, _clock) = memory_app();

    let response = get(app, "/todo/not-a-uuid").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(store.is_empty().await);
}
