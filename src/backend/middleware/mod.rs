//! Middleware Module
//!
//! HTTP middleware applied in front of handlers.
//!
//! - **`auth`** - Bearer token check for protected routes
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware::from_fn_with_state, routing::get, Router};
//! use postboard::backend::middleware::{auth_middleware, AuthUser};
//! use postboard::backend::auth::TokenService;
//! use std::{sync::Arc, time::Duration};
//!
//! async fn whoami(AuthUser(user): AuthUser) -> String {
//!     user.user_id.to_string()
//! }
//!
//! let tokens = Arc::new(TokenService::new(b"secret", Duration::from_secs(3600)));
//! let app: Router = Router::new()
//!     .route("/whoami", get(whoami))
//!     .route_layer(from_fn_with_state(tokens, auth_middleware));
//! ```

pub mod auth;

pub use auth::{auth_middleware, extract_token, AuthUser, AuthenticatedUser};
