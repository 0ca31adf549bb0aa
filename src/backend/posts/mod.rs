//! Posts Module
//!
//! Handlers for posts, likes and comments. All of them sit behind the auth
//! middleware and act as the authenticated caller.
//!
//! # Handlers
//!
//! - **`create_post`** - POST /posts
//! - **`get_post`** - GET /posts/{id} - post with like count and comments
//! - **`update_post`** - PUT /posts/{id} - author only
//! - **`toggle_like`** - POST /posts/{id}/like
//! - **`comment_post`** - POST /posts/{id}/comment

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{comment_post, create_post, get_post, toggle_like, update_post};
pub use types::{ContentRequest, LikeResponse, PostView};
