/**
 * Profile Handlers
 *
 * GET /profile and PUT /profile. Both act on the authenticated caller only;
 * the target id always comes from the token, never from the request.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{MessageResponse, ProfileResponse, UpdateProfileRequest};
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::UserUpdate;

/// Return the caller's username and profile
pub async fn get_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let user = state
        .store
        .get_user_by_id(caller.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Token subject {} has no user record", caller.user_id);
            ApiError::not_found("user not found")
        })?;

    Ok(Json(ProfileResponse {
        username: user.username,
        user_profile: user.profile,
    }))
}

/// Change the caller's password and/or profile
///
/// A new password is hashed before it reaches the store. Supplying neither
/// field is a 400 `no info to update`.
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: Result<Json<UpdateProfileRequest>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let Json(request) = payload?;
    let (password, profile) = request.normalize()?;

    let password_hash = match password {
        Some(plain) => Some(state.passwords.hash_async(plain).await?),
        None => None,
    };

    let user = state
        .store
        .update_user(caller.user_id, UserUpdate { password_hash, profile })
        .await?;

    tracing::info!("User info updated: {} ({})", user.username, user.id);

    Ok(Json(MessageResponse::new("user info updated")))
}
