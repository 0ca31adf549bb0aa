//! Backend Module
//!
//! This module contains all server-side code: the Axum router, the
//! authentication middleware, the request handlers and the storage backends.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state and app construction
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`auth`** - Password hashing, bearer tokens, signup/login/profile handlers
//! - **`middleware`** - Token extraction and identity binding
//! - **`posts`** - Post, like and comment handlers
//! - **`store`** - The `Store` contract plus the SQLite and JSON document backends
//! - **`error`** - HTTP-facing error taxonomy
//!
//! # Request Flow
//!
//! ```text
//! request -> auth_middleware (protected routes) -> handler -> Store -> response
//! ```
//!
//! The middleware places an `AuthenticatedUser` into the request extensions;
//! handlers read it through the `AuthUser` extractor and never look at the
//! token themselves.
//!
//! # Thread Safety
//!
//! `AppState` is cheap to clone: the store is an `Arc<dyn Store>`, the token
//! service is immutable after startup and shared through an `Arc`.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Posts, likes and comments
pub mod posts;

/// Resource store contract and backends
pub mod store;

/// Re-export commonly used types
pub use error::{ApiError, AuthError};
pub use server::create_app;
pub use store::{Store, StoreError};
