/**
 * Domain Records
 *
 * The records owned by the resource store. `User` carries the password digest
 * and therefore has no `Serialize` impl; handlers answer with dedicated
 * response types instead.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A registered identity
#[derive(Clone, sqlx::FromRow)]
pub struct User {
    /// Store-assigned identifier
    pub id: i64,
    /// Unique login name
    pub username: String,
    /// bcrypt digest of the password
    pub password_hash: String,
    /// Free-form profile text
    pub profile: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("profile", &self.profile)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Fields a user may change on their own account
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    pub password_hash: Option<String>,
    pub profile: Option<String>,
}

impl UserUpdate {
    /// True when the update would not change anything
    pub fn is_empty(&self) -> bool {
        self.password_hash.is_none() && self.profile.is_none()
    }
}

/// A post, owned by the user in `author_id`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A like relation; its presence is the liked state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
}

/// An append-only comment on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author_id: i64,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Outcome of a like toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LikeState {
    /// No like existed; one was created
    Liked,
    /// A like existed; it was removed
    Unliked,
}

impl LikeState {
    /// Human-readable confirmation returned by the like endpoint
    pub fn message(self) -> &'static str {
        match self {
            Self::Liked => "post liked",
            Self::Unliked => "post unliked",
        }
    }
}
