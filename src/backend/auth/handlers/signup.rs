/**
 * Signup Handler
 *
 * POST /signup
 *
 * # Registration Process
 *
 * 1. Validate username, password and profile
 * 2. Hash the password with bcrypt on the blocking pool
 * 3. Insert the user; the store's unique index decides duplicates
 *
 * No token is issued here. Clients log in afterwards.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{MessageResponse, SignupRequest};
use crate::backend::error::ApiResult;
use crate::backend::server::state::AppState;

/// Sign up handler
///
/// # Errors
///
/// * `400 Bad Request` - body unreadable or a field fails validation
/// * `409 Conflict` - username already taken
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /signup HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "secret", "userProfile": "dev"}
/// ```
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(request) = payload?;
    tracing::info!("Signup request for username: {}", request.username);

    request.validate()?;

    let password_hash = state.passwords.hash_async(request.password).await?;

    let user = state
        .store
        .create_user(&request.username, &password_hash, &request.user_profile)
        .await
        .map_err(|e| {
            tracing::warn!("Signup failed for {}: {}", request.username, e);
            e
        })?;

    tracing::info!("User created successfully: {} ({})", user.username, user.id);

    Ok((StatusCode::CREATED, Json(MessageResponse::new("user created"))))
}
