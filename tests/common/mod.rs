//! Common test utilities and helpers
//!
//! - Store fixtures (in-memory SQLite, file-backed SQLite, JSON document)
//! - A router harness driven through `tower::ServiceExt::oneshot`
//! - Signup/login helpers
//! - Assertion macros for error bodies

#![allow(dead_code, unused_imports)]

pub mod app;
pub mod assertions;
pub mod auth_helpers;
pub mod database;

pub use app::*;
pub use auth_helpers::*;
pub use database::*;
