/**
 * Application State Management
 *
 * `AppState` holds the explicit dependencies every handler may need: the
 * store handle, the token service and the password hasher. There are no
 * globals; everything arrives through axum state.
 *
 * The `FromRef` implementations let the auth middleware and other narrow
 * consumers extract just the part they use.
 *
 * # Example
 *
 * ```rust,no_run
 * use postboard::backend::server::state::AppState;
 * use axum::extract::State;
 *
 * async fn handler(State(state): State<AppState>) {
 *     let healthy = state.store.ping().await.is_ok();
 *     # let _ = healthy;
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::store::Store;

/// Application state shared across all request handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend
    pub store: Arc<dyn Store>,
    /// Issues and validates bearer tokens; immutable after startup
    pub tokens: Arc<TokenService>,
    /// bcrypt parameters
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService, passwords: PasswordHasher) -> Self {
        Self {
            store,
            tokens: Arc::new(tokens),
            passwords,
        }
    }
}

impl FromRef<AppState> for Arc<TokenService> {
    fn from_ref(state: &AppState) -> Self {
        state.tokens.clone()
    }
}

impl FromRef<AppState> for Arc<dyn Store> {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}
