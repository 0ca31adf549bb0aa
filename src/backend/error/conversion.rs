/**
 * Error Conversion
 *
 * Turns backend errors into HTTP responses and folds lower-level failures
 * (store, crypto, extractor rejections) into the `ApiError` taxonomy.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "post not found",
 *   "kind": "NotFound"
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

use crate::backend::auth::password::CryptoError;
use crate::backend::error::types::ApiError;
use crate::backend::store::StoreError;
use crate::shared::SharedError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = json!({
            "error": self.message(),
            "kind": self.kind(),
        });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UsernameTaken(username) => {
                ApiError::conflict(format!("username {} already exists", username))
            }
            StoreError::NotFound { entity, .. } => {
                ApiError::not_found(format!("{} not found", entity))
            }
            StoreError::NotOwner { .. } => ApiError::forbidden("permission denied"),
            StoreError::EmptyUpdate => {
                ApiError::Validation(SharedError::invalid_request("no info to update"))
            }
            other => {
                tracing::error!("Store failure: {}", other);
                ApiError::Internal
            }
        }
    }
}

impl From<CryptoError> for ApiError {
    fn from(err: CryptoError) -> Self {
        tracing::error!("Password hashing failure: {}", err);
        ApiError::Internal
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        ApiError::Validation(SharedError::invalid_request(format!(
            "invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        tracing::warn!("Rejected path parameter: {}", rejection.body_text());
        ApiError::validation("id", "invalid ID format")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::not_found("post not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "post not found", "kind": "NotFound"}));
    }

    #[tokio::test]
    async fn test_store_backend_failure_is_opaque() {
        let err: ApiError = StoreError::Database(sqlx::Error::PoolTimedOut).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["error"], "internal server error");
        assert!(!body.to_string().contains("pool"));
    }

    #[test]
    fn test_store_error_mapping() {
        let conflict: ApiError = StoreError::UsernameTaken("alice".to_string()).into();
        assert_eq!(conflict.status_code(), StatusCode::CONFLICT);

        let missing: ApiError = StoreError::NotFound { entity: "post", id: 9999 }.into();
        assert_eq!(missing.message(), "post not found");

        let forbidden: ApiError = StoreError::NotOwner { post_id: 1, user_id: 2 }.into();
        assert_eq!(forbidden.status_code(), StatusCode::FORBIDDEN);

        let empty: ApiError = StoreError::EmptyUpdate.into();
        assert_eq!(empty.status_code(), StatusCode::BAD_REQUEST);
    }
}
