/**
 * Post Handler Types
 */

use serde::{Deserialize, Serialize};

use crate::shared::{Comment, LikeState, Post, SharedError};

const CONTENT_MAX: usize = 5000;

/// Body of create-post, update-post and comment requests
#[derive(Deserialize, Debug)]
pub struct ContentRequest {
    pub content: String,
}

impl ContentRequest {
    /// Trim surrounding whitespace and check the length
    pub fn validate(self) -> Result<String, SharedError> {
        let content = self.content.trim();
        if content.is_empty() {
            return Err(SharedError::validation("content", "content cannot be empty"));
        }
        if content.chars().count() > CONTENT_MAX {
            return Err(SharedError::validation(
                "content",
                format!("content must be at most {} characters", CONTENT_MAX),
            ));
        }
        Ok(content.to_string())
    }
}

/// A post together with its like count and comments
#[derive(Serialize, Debug)]
pub struct PostView {
    #[serde(flatten)]
    pub post: Post,
    pub likes: i64,
    pub comments: Vec<Comment>,
}

/// Result of a like toggle
#[derive(Serialize, Debug)]
pub struct LikeResponse {
    pub msg: &'static str,
    pub state: LikeState,
}

impl From<LikeState> for LikeResponse {
    fn from(state: LikeState) -> Self {
        Self {
            msg: state.message(),
            state,
        }
    }
}
