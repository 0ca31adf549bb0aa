//! Authentication Module
//!
//! Password digests, bearer tokens and the account endpoints built on them.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - bcrypt hashing and verification
//! ├── sessions.rs     - Bearer token issue and validation
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types and field validation
//!     ├── signup.rs   - User registration handler
//!     ├── login.rs    - Token issuing handler
//!     └── profile.rs  - Read and update the caller's profile
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: username, password and profile → digest computed → user stored → 201
//! 2. **Login**: username and password → digest verified → token returned
//! 3. **Profile**: token verified by the middleware → caller's own record read or updated
//!
//! # Security
//!
//! - Passwords are stored as salted bcrypt digests and never serialized
//! - Tokens are HS256-signed and carry only the user id and timestamps
//! - Unknown user and wrong password produce the same `InvalidCredentials` response

/// Password hashing
pub mod password;

/// Bearer token generation and validation
pub mod sessions;

/// HTTP handlers for account endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{get_profile, login, signup, update_profile};
pub use password::{CryptoError, PasswordHasher};
pub use sessions::{TokenService, DEFAULT_TOKEN_TTL};
