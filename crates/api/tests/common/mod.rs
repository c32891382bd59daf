#![allow(dead_code)]

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::NamedTempFile;
use tower::ServiceExt;

use storefront_api::catalog_source::CatalogSource;
use storefront_api::config::ServerConfig;
use storefront_api::router::build_app_router;
use storefront_api::state::AppState;
use storefront_core::feedback::{FeedbackEntry, FeedbackStore, NewFeedback, StorageError};
use storefront_db::store::MemoryFeedbackStore;

/// Build a test `ServerConfig` with safe defaults.
///
/// Any CORS origin, a 30-second request timeout, the default page size of
/// 12 and no static site directory.
pub fn test_config(catalog: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        catalog_source: catalog.display().to_string(),
        page_size: 12,
        site_name: "Steam".to_string(),
        site_dir: None,
        database_url: None,
    }
}

/// A running catalog file plus the router serving it.
///
/// The temp file lives as long as the harness so the catalog stays readable
/// for every request made through `app`.
pub struct TestApp {
    pub app: Router,
    _catalog: NamedTempFile,
}

impl TestApp {
    pub fn router(&self) -> Router {
        self.app.clone()
    }
}

/// Build the full application router over an in-memory catalog document
/// and the given feedback store.
pub fn build_test_app_with(catalog: &Value, feedback: Arc<dyn FeedbackStore>) -> TestApp {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(catalog.to_string().as_bytes()).unwrap();
    file.flush().unwrap();

    let config = test_config(file.path());
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(CatalogSource::from_location(&config.catalog_source)),
        feedback,
    };

    TestApp {
        app: build_app_router(state, &config),
        _catalog: file,
    }
}

/// Build the application with a fresh in-memory feedback store.
pub fn build_test_app(catalog: &Value) -> (TestApp, Arc<MemoryFeedbackStore>) {
    let store = Arc::new(MemoryFeedbackStore::new());
    let app = build_test_app_with(catalog, store.clone());
    (app, store)
}

/// Build the application over a catalog path that does not exist.
pub fn build_unreachable_catalog_app() -> Router {
    let config = test_config(Path::new("/nonexistent/storefront/games.json"));
    let state = AppState {
        config: Arc::new(config.clone()),
        catalog: Arc::new(CatalogSource::from_location(&config.catalog_source)),
        feedback: Arc::new(MemoryFeedbackStore::new()),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Catalog fixtures
// ---------------------------------------------------------------------------

/// One catalog entry with the fields every record carries.
pub fn game(id: i64, name: &str, price: f64) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": format!("{name} description"),
        "publisher": "Valve",
        "releaseDate": "2020-01-01",
        "price": price,
        "image": format!("img/{id}.jpg"),
        "platform": ["Windows"],
        "tags": ["Action"],
    })
}

/// Thirteen games; ids 1 and 2 are featured.
pub fn sample_catalog() -> Value {
    let mut games: Vec<Value> = (1..=13)
        .map(|id| game(id, &format!("Game {id}"), 9.99))
        .collect();

    games[0]["name"] = json!("Half-Life");
    games[0]["featured"] = json!(true);
    games[0]["featuredImage"] = json!("img/1-banner.jpg");
    games[0]["media"] = json!([
        {"type": "image", "url": "shots/1a.jpg"},
        {"type": "youtube", "url": "https://www.youtube.com/watch?v=dQw4w9WgXcQ"},
        {"type": "image", "url": "shots/1b.jpg"},
    ]);

    games[1]["name"] = json!("Dota 2");
    games[1]["price"] = json!(0);
    games[1]["featured"] = json!(true);
    games[1]["tags"] = json!(["MOBA", "Strategy"]);

    Value::Array(games)
}

// ---------------------------------------------------------------------------
// Feedback stores
// ---------------------------------------------------------------------------

/// A store whose every call fails, for exercising storage error paths.
pub struct FailingStore;

#[async_trait]
impl FeedbackStore for FailingStore {
    async fn insert(&self, _entry: &NewFeedback) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".into()))
    }

    async fn list_recent(&self) -> Result<Vec<FeedbackEntry>, StorageError> {
        Err(StorageError::Unavailable("connection refused".into()))
    }

    async fn health_check(&self) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("connection refused".into()))
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Boundary used by [`multipart_body`].
pub const MULTIPART_BOUNDARY: &str = "storefront-test-boundary";

/// Encode text fields as a `multipart/form-data` body.
pub fn multipart_body(fields: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (name, value) in fields {
        body.push_str(&format!(
            "--{MULTIPART_BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"{name}\"\r\n\r\n\
             {value}\r\n"
        ));
    }
    body.push_str(&format!("--{MULTIPART_BOUNDARY}--\r\n"));
    body
}

pub async fn post_multipart(app: Router, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            CONTENT_TYPE,
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
