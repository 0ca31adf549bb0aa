/**
 * API Routes
 *
 * # Public
 * - `POST /signup` - User registration
 * - `POST /login` - Exchange credentials for a token
 * - `GET /health` - Store liveness
 *
 * # Protected (bearer token in `Authorization` or `?token=`)
 * - `GET /profile`, `PUT /profile`
 * - `POST /posts`
 * - `GET /posts/{id}`, `PUT /posts/{id}`
 * - `POST /posts/{id}/like`
 * - `POST /posts/{id}/comment`
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{get_profile, login, signup, update_profile};
use crate::backend::middleware::auth_middleware;
use crate::backend::posts::{comment_post, create_post, get_post, toggle_like, update_post};
use crate::backend::routes::health::health_check;
use crate::backend::server::state::AppState;

/// Routes reachable without a token
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/health", get(health_check))
}

/// Routes behind `auth_middleware`
///
/// The layer is added with `route_layer`, so unknown paths still answer 404
/// instead of 401.
pub fn protected_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/posts", post(create_post))
        .route("/posts/{id}", get(get_post).put(update_post))
        .route("/posts/{id}/like", post(toggle_like))
        .route("/posts/{id}/comment", post(comment_post))
        .route_layer(from_fn_with_state(state.clone(), auth_middleware))
}
