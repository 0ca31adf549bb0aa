/**
 * Login Handler
 *
 * POST /login
 *
 * Looks the user up by username, verifies the password against the stored
 * digest and returns a freshly issued bearer token.
 *
 * Unknown usernames and wrong passwords both answer 401 `InvalidCredentials`
 * with the same message.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{LoginRequest, TokenResponse};
use crate::backend::error::{ApiResult, AuthError};
use crate::backend::server::state::AppState;

/// Login handler
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(request) = payload?;
    tracing::info!("Login request for: {}", request.username);

    request.validate()?;

    let user = state
        .store
        .get_user_by_username(&request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("User not found: {}", request.username);
            AuthError::InvalidCredentials
        })?;

    let valid = state
        .passwords
        .verify_async(user.password_hash.clone(), request.password)
        .await?;

    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(AuthError::InvalidCredentials.into());
    }

    let token = state.tokens.issue(user.id)?;

    tracing::info!("User logged in successfully: {} ({})", user.username, user.id);

    Ok(Json(TokenResponse { token }))
}
