//! Route Configuration Module
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation
//! ├── api_routes.rs   - Public and protected route sets
//! └── health.rs       - Health check handler
//! ```
//!
//! Protected routes carry `auth_middleware` as a route layer; public routes
//! (signup, login, health) do not.

/// Main router creation
pub mod router;

/// API route sets
pub mod api_routes;

/// Health check
pub mod health;

pub use router::create_router;
