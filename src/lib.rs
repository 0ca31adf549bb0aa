//! Postboard - Main Library
//!
//! Postboard is a small social posting service: people sign up, log in with a
//! username and password, and receive a signed bearer token that unlocks the
//! protected endpoints (profile, posts, likes, comments).
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared by every layer
//!   - Domain records (users, posts, likes, comments)
//!   - Field validation errors
//!
//! - **`backend`** - The HTTP service
//!   - Axum router, middleware and handlers
//!   - Password hashing and bearer tokens
//!   - Storage backends (SQLite via sqlx, single JSON document)
//!
//! # Usage
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::Config, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Every fallible operation returns `Result`. Storage and crypto failures are
//! collapsed into an opaque internal error at the HTTP boundary; validation and
//! authentication failures are reported to the caller as-is.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
