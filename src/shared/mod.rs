//! Shared Module
//!
//! This module contains the domain records and validation errors used by the
//! storage backends, the handlers and the tests.
//!
//! # Overview
//!
//! - `models` - users, posts, likes and comments as the store returns them
//! - `error` - field-level validation errors raised before domain logic runs

/// Domain records
pub mod models;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use models::{Comment, Like, LikeState, Post, User, UserUpdate};
