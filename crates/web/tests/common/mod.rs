#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use limpeza_db::models::dataset::Dataset;
use limpeza_db::store::MemoryStore;
use limpeza_db::Db;
use tower::ServiceExt;

use limpeza_web::config::ServerConfig;
use limpeza_web::router::build_app_router;
use limpeza_web::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        data_path: PathBuf::from("unused.json"),
        public_dir: PathBuf::from("does-not-exist"),
        request_timeout_secs: 30,
    }
}

/// An application backed by an in-memory dataset.
///
/// Every call to [`TestApp::router`] shares the same store and write lock,
/// so state carries across requests.
pub struct TestApp {
    pub store: Arc<MemoryStore>,
    pub db: Db,
    pub config: ServerConfig,
}

impl TestApp {
    pub fn new(dataset: Dataset) -> Self {
        Self::with_config(dataset, test_config())
    }

    pub fn with_config(dataset: Dataset, config: ServerConfig) -> Self {
        let store = Arc::new(MemoryStore::new(dataset));
        let db = Db::new(store.clone());
        Self { store, db, config }
    }

    pub fn router(&self) -> Router {
        let state = AppState {
            db: self.db.clone(),
            config: Arc::new(self.config.clone()),
        };
        build_app_router(state, &self.config)
    }

    pub async fn dataset(&self) -> Dataset {
        self.store.snapshot().await
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an urlencoded form body, e.g. `"name=Acme&contact="`.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub fn location(response: &Response<Body>) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("redirect must carry a Location header")
        .to_str()
        .unwrap()
}
