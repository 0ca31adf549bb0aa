//! Backend Error Module
//!
//! This module defines the error taxonomy exposed over HTTP.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - ApiError and AuthError definitions
//! └── conversion.rs - IntoResponse and From implementations
//! ```
//!
//! # Error Kinds
//!
//! | Kind | Status |
//! |---|---|
//! | `ValidationError` | 400 |
//! | `MissingToken`, `MalformedToken`, `InvalidSignature`, `TokenExpired`, `InvalidCredentials` | 401 |
//! | `Forbidden` | 403 |
//! | `NotFound` | 404 |
//! | `Conflict` | 409 |
//! | `Internal` | 500 |
//!
//! Internal failures are logged where they are converted and rendered with a
//! fixed message, so driver or crypto detail never reaches the client.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{ApiError, ApiResult, AuthError};
