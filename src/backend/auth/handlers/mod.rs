//! Account Handlers
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! └── profile.rs  - Profile read/update handlers
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /signup - User registration
//! - **`login`** - POST /login - Exchange credentials for a token
//! - **`get_profile`** - GET /profile - Caller's username and profile
//! - **`update_profile`** - PUT /profile - Change password and/or profile

/// Request and response types
pub mod types;

/// Signup handler
pub mod signup;

/// Login handler
pub mod login;

/// Profile handlers
pub mod profile;

// Re-export commonly used types
pub use types::{
    LoginRequest, MessageResponse, ProfileResponse, SignupRequest, TokenResponse,
    UpdateProfileRequest,
};

// Re-export handlers
pub use login::login;
pub use profile::{get_profile, update_profile};
pub use signup::signup;
