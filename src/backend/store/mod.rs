//! Resource Store
//!
//! The storage contract behind the handlers plus its two backends.
//!
//! # Module Structure
//!
//! ```text
//! store/
//! ├── mod.rs        - Store trait and StoreError
//! ├── sql.rs        - SQLite backend (sqlx, embedded migrations)
//! └── json_file.rs  - Single JSON document backend
//! ```
//!
//! # Guarantees
//!
//! Every backend enforces the same rules at the storage layer, not in the
//! handlers:
//!
//! - usernames are unique (`UsernameTaken`)
//! - a post's content changes only for its author (`NotOwner`)
//! - likes and comments need an existing post (`NotFound`)
//! - posts, likes and comments need an existing user (`NotFound`)
//! - `toggle_like` checks and mutates in one atomic step, so concurrent
//!   toggles by the same user never leave two likes behind

use async_trait::async_trait;
use thiserror::Error;

use crate::shared::{Comment, LikeState, Post, User, UserUpdate};

/// SQLite backend
pub mod sql;

/// JSON document backend
pub mod json_file;

pub use json_file::JsonFileStore;
pub use sql::SqlStore;

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store failures
///
/// The first four variants are domain outcomes and are reported to callers.
/// The rest are backend failures; they are logged and never rendered.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("username {0} already exists")]
    UsernameTaken(String),

    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: i64 },

    #[error("user {user_id} does not own post {post_id}")]
    NotOwner { post_id: i64, user_id: i64 },

    #[error("no info to update")]
    EmptyUpdate,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("document io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("document write task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl StoreError {
    pub(crate) fn user_not_found(id: i64) -> Self {
        Self::NotFound { entity: "user", id }
    }

    pub(crate) fn post_not_found(id: i64) -> Self {
        Self::NotFound { entity: "post", id }
    }
}

/// Persistence contract for users, posts, likes and comments
///
/// Lookups return `Option`; absence is never encoded as a zero id.
#[async_trait]
pub trait Store: Send + Sync {
    /// Insert a user; `UsernameTaken` if the name exists
    async fn create_user(&self, username: &str, password_hash: &str, profile: &str)
        -> StoreResult<User>;

    async fn get_user_by_id(&self, id: i64) -> StoreResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>>;

    /// Apply the supplied fields; `EmptyUpdate` if none, `NotFound` if the id is unknown
    async fn update_user(&self, id: i64, update: UserUpdate) -> StoreResult<User>;

    async fn create_post(&self, author_id: i64, content: &str) -> StoreResult<Post>;

    async fn get_post_by_id(&self, id: i64) -> StoreResult<Option<Post>>;

    /// Replace a post's content on behalf of `caller_id`
    ///
    /// `NotFound` if the post is missing, `NotOwner` if the caller is not the
    /// author. The content is untouched in both cases.
    async fn update_post(&self, id: i64, caller_id: i64, content: &str) -> StoreResult<Post>;

    /// Flip the like of `user_id` on `post_id`
    ///
    /// Absent becomes `Liked`, present becomes `Unliked`.
    async fn toggle_like(&self, post_id: i64, user_id: i64) -> StoreResult<LikeState>;

    async fn count_likes(&self, post_id: i64) -> StoreResult<i64>;

    /// Append a comment; `NotFound` if the post is missing
    async fn create_comment(&self, post_id: i64, author_id: i64, content: &str)
        -> StoreResult<Comment>;

    /// Comments on a post, oldest first
    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>>;

    /// Cheap liveness probe used by the health endpoint
    async fn ping(&self) -> StoreResult<()>;
}
