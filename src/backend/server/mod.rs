//! Server Module
//!
//! Configuration, shared state and application construction.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - Environment configuration
//! └── init.rs         - Store opening and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `Config::from_env` reads and checks the environment
//! 2. **Store Opening**: SQLite pool with migrations, or the JSON document
//! 3. **State Creation**: token service and password hasher join the store in `AppState`
//! 4. **Router Creation**: public and protected routes plus the trace layer
//!
//! # Example
//!
//! ```rust,no_run
//! use postboard::backend::server::{config::Config, create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config::from_env()?;
//! let app = create_app(&config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{Config, ConfigError, StoreConfig};
pub use init::{create_app, create_state};
pub use state::AppState;
