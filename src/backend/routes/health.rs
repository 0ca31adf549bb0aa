/**
 * Health Check
 *
 * GET /health pings the store. 200 with `"status": "healthy"` when it
 * answers, 503 with `"status": "unhealthy"` when it does not. The store
 * error itself is only logged.
 */

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use crate::backend::store::Store;

pub async fn health_check(State(store): State<Arc<dyn Store>>) -> (StatusCode, Json<Value>) {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "status": "healthy",
                "service": env!("CARGO_PKG_NAME"),
                "timestamp": timestamp,
            })),
        ),
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "unhealthy",
                    "service": env!("CARGO_PKG_NAME"),
                    "message": "store unavailable",
                    "timestamp": timestamp,
                })),
            )
        }
    }
}
