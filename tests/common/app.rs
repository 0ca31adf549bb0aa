//! Router harness
//!
//! Builds the real router around a test store and sends requests through it
//! with `oneshot`, no socket involved.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use postboard::backend::auth::{PasswordHasher, TokenService};
use postboard::backend::routes::create_router;
use postboard::backend::server::AppState;
use postboard::backend::store::Store;
use serde_json::Value;
use tower::ServiceExt;

use super::database::memory_store;

pub const TEST_SECRET: &[u8] = b"integration-test-secret";
pub const TEST_TTL: Duration = Duration::from_secs(3600);

/// Lowest cost bcrypt accepts
pub const TEST_BCRYPT_COST: u32 = 4;

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over a fresh in-memory SQLite store
    pub async fn new() -> Self {
        Self::with_store(Arc::new(memory_store().await))
    }

    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let state = AppState::new(
            store,
            TokenService::new(TEST_SECRET, TEST_TTL),
            PasswordHasher::new(TEST_BCRYPT_COST),
        );
        Self {
            router: create_router(state.clone()),
            state,
        }
    }

    /// Send one request; an empty response body comes back as `Value::Null`
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let request = match body {
            Some(json) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(request).await
    }

    /// Send a prebuilt request
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Router is infallible");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response body is not JSON")
        };
        (status, body)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn put(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, token, Some(body)).await
    }
}
