/**
 * Router Configuration
 *
 * Combines the public and protected route sets into one router, wraps it in
 * the HTTP trace layer and binds the application state.
 */

use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};

use crate::backend::error::ApiError;
use crate::backend::routes::api_routes::{protected_routes, public_routes};
use crate::backend::server::state::AppState;

pub fn create_router(app_state: AppState) -> Router<()> {
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
        .on_response(DefaultOnResponse::new().level(tracing::Level::INFO));

    Router::new()
        .merge(public_routes())
        .merge(protected_routes(&app_state))
        .fallback(|| async { ApiError::not_found("route not found") })
        .layer(ServiceBuilder::new().layer(trace))
        .with_state(app_state)
}
