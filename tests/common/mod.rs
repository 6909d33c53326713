#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use mediashelf::{
    AppState,
    config::Config,
    db,
    models::{CreateInput, Platform, Status, YearInput},
    routes,
    service::Catalog,
    store::{DEFAULT_SLOT, Store},
};
use tempfile::TempDir;
use tokio::sync::Mutex;
use tower::ServiceExt;

/// Keeps the database directory alive for the duration of a test.
pub struct TestDb {
    pub dir: TempDir,
    pub url: String,
}

impl TestDb {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let url = format!("sqlite://{}?mode=rwc", dir.path().join("media.db").display());
        Self { dir, url }
    }

    pub async fn store(&self) -> Store {
        let db = db::connect_and_migrate(&self.url).await.expect("database");
        Store::new(db)
    }

    pub async fn catalog(&self) -> Catalog {
        Catalog::new(self.store().await)
    }

    pub async fn app(&self) -> Router {
        let config = Config {
            addr: "127.0.0.1:0".parse().unwrap(),
            database_url: self.url.clone(),
            slot: DEFAULT_SLOT.to_string(),
        };
        let state = AppState {
            config: Arc::new(config),
            catalog: Mutex::new(self.catalog().await),
        };
        routes::router(Arc::new(state))
    }
}

pub fn dune() -> CreateInput {
    CreateInput {
        title: "Dune".into(),
        year: Some(YearInput::Number(2021)),
        description: "Spice must flow.".into(),
        status: Status::ToWatch,
        platform: Platform::Hbo,
        platform_other: String::new(),
        cover: "http://x/y.jpg".into(),
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.expect("request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
}
