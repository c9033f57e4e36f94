#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, HeaderValue, Method, Request, Response, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use http_body_util::BodyExt;
use todos_core::clock::FixedClock;
use todos_core::types::EntityId;
use todos_db::models::todo::ToDo;
use todos_db::{InMemoryToDoStore, StoreError, ToDoStore};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use todos_api::config::{ServerConfig, StorageBackend};
use todos_api::routes;
use todos_api::service::ToDoService;
use todos_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 30,
        sweep_interval_secs: 5,
        storage_backend: StorageBackend::Memory,
        database_url: None,
    }
}

/// A fixed clock starting at 2024-06-01T12:00:00Z.
pub fn test_clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
    ))
}

/// Build the full application router with all middleware layers over the
/// given store and clock.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(store: Arc<dyn ToDoStore>, clock: Arc<FixedClock>) -> Router {
    let state = AppState {
        todos: ToDoService::new(Arc::clone(&store), clock),
        store,
    };

    let config = test_config();
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .map(|o| o.parse().unwrap())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(routes::api_routes())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Router over a fresh in-memory store, plus handles to the store and clock.
pub fn memory_app() -> (Router, Arc<InMemoryToDoStore>, Arc<FixedClock>) {
    let store = Arc::new(InMemoryToDoStore::new());
    let clock = test_clock();
    let app = build_test_app(store.clone(), clock.clone());
    (app, store, clock)
}

/// In-memory store that counts every `save` call.
#[derive(Default)]
pub struct CountingStore {
    pub inner: InMemoryToDoStore,
    saves: AtomicUsize,
}

impl CountingStore {
    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ToDoStore for CountingStore {
    async fn insert(&self, todo: &ToDo) -> Result<ToDo, StoreError> {
        self.inner.insert(todo).await
    }

    async fn get_by_id(&self, id: EntityId) -> Result<Option<ToDo>, StoreError> {
        self.inner.get_by_id(id).await
    }

    async fn list_not_done(&self) -> Result<Vec<ToDo>, StoreError> {
        self.inner.list_not_done().await
    }

    async fn save(&self, todo: &ToDo) -> Result<Option<ToDo>, StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(todo).await
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        self.inner.delete_all().await
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Router over a [`CountingStore`], plus handles to the store and clock.
pub fn counting_app() -> (Router, Arc<CountingStore>, Arc<FixedClock>) {
    let store = Arc::new(CountingStore::default());
    let clock = test_clock();
    let app = build_test_app(store.clone(), clock.clone());
    (app, store, clock)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Send a raw JSON-typed body, for malformed-input tests.
pub async fn post_raw(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

async fn send_json(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
