//! JSON document backend
//!
//! The whole state lives in one JSON document on disk:
//!
//! ```json
//! {"idCount": 3, "users": [...], "posts": [...], "likes": [...], "comments": [...]}
//! ```
//!
//! `idCount` is a single counter shared by every entity kind. Writes take the
//! store-wide mutex, apply the change to a copy of the document, write the
//! copy to a temporary file, rename it over the original, and only then swap
//! the copy in. A failed write leaves both the file and the in-memory state as
//! they were. The file write and the swap run on the blocking pool while the
//! lock is held, so a caller that gives up mid-write cannot split them.
//!
//! Foreign keys are checked here: posts, likes and comments need an existing
//! user as well as (for likes and comments) an existing post.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use super::{Store, StoreError, StoreResult};
use crate::shared::{Comment, Like, LikeState, Post, User, UserUpdate};

/// Stored form of a user; unlike `User`, this one serializes its digest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserRecord {
    id: i64,
    username: String,
    password_hash: String,
    #[serde(default)]
    user_profile: String,
    created_at: DateTime<Utc>,
}

impl From<&UserRecord> for User {
    fn from(record: &UserRecord) -> Self {
        User {
            id: record.id,
            username: record.username.clone(),
            password_hash: record.password_hash.clone(),
            profile: record.user_profile.clone(),
            created_at: record.created_at,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Document {
    #[serde(default)]
    id_count: i64,
    #[serde(default)]
    users: Vec<UserRecord>,
    #[serde(default)]
    posts: Vec<Post>,
    #[serde(default)]
    likes: Vec<Like>,
    #[serde(default)]
    comments: Vec<Comment>,
}

impl Document {
    fn next_id(&mut self) -> i64 {
        self.id_count += 1;
        self.id_count
    }

    fn has_post(&self, id: i64) -> bool {
        self.posts.iter().any(|p| p.id == id)
    }

    fn has_user(&self, id: i64) -> bool {
        self.users.iter().any(|u| u.id == id)
    }

    fn require_user(&self, id: i64) -> StoreResult<()> {
        if self.has_user(id) {
            Ok(())
        } else {
            Err(StoreError::user_not_found(id))
        }
    }

    fn require_post(&self, id: i64) -> StoreResult<()> {
        if self.has_post(id) {
            Ok(())
        } else {
            Err(StoreError::post_not_found(id))
        }
    }
}

/// `Store` over a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    doc: Arc<Mutex<Document>>,
}

impl JsonFileStore {
    /// Load the document at `path`, creating an empty one if the file is missing
    pub async fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref().to_path_buf();

        let doc = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!("Creating empty document store at {}", path.display());
                let target = path.clone();
                tokio::task::spawn_blocking(move || persist(&target, &Document::default()))
                    .await??;
                Document::default()
            }
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            doc: Arc::new(Mutex::new(doc)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> T {
        let doc = self.doc.lock().await;
        f(&doc)
    }

    /// Run `f` against a draft and commit it only if `f` and the file write succeed
    ///
    /// The guard moves into the blocking task together with the draft, so
    /// the lock is released only once the file and memory agree again.
    async fn mutate<T>(&self, f: impl FnOnce(&mut Document) -> StoreResult<T>) -> StoreResult<T>
    where
        T: Send + 'static,
    {
        let mut doc = Arc::clone(&self.doc).lock_owned().await;
        let mut draft = doc.clone();
        let out = f(&mut draft)?;

        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            persist(&path, &draft)?;
            *doc = draft;
            Ok(out)
        })
        .await?
    }
}

fn persist(path: &Path, doc: &Document) -> StoreResult<()> {
    let bytes = serde_json::to_vec_pretty(doc)?;
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    fs::write(&tmp, &bytes)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

#[async_trait]
impl Store for JsonFileStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        profile: &str,
    ) -> StoreResult<User> {
        self.mutate(|doc| {
            if doc.users.iter().any(|u| u.username == username) {
                return Err(StoreError::UsernameTaken(username.to_string()));
            }
            let record = UserRecord {
                id: doc.next_id(),
                username: username.to_string(),
                password_hash: password_hash.to_string(),
                user_profile: profile.to_string(),
                created_at: Utc::now(),
            };
            let user = User::from(&record);
            doc.users.push(record);
            Ok(user)
        })
        .await
    }

    async fn get_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        Ok(self
            .read(|doc| doc.users.iter().find(|u| u.id == id).map(User::from))
            .await)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        Ok(self
            .read(|doc| doc.users.iter().find(|u| u.username == username).map(User::from))
            .await)
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> StoreResult<User> {
        if update.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }

        self.mutate(|doc| {
            let record = doc
                .users
                .iter_mut()
                .find(|u| u.id == id)
                .ok_or_else(|| StoreError::user_not_found(id))?;
            if let Some(hash) = update.password_hash {
                record.password_hash = hash;
            }
            if let Some(profile) = update.profile {
                record.user_profile = profile;
            }
            Ok(User::from(&*record))
        })
        .await
    }

    async fn create_post(&self, author_id: i64, content: &str) -> StoreResult<Post> {
        self.mutate(|doc| {
            doc.require_user(author_id)?;
            let post = Post {
                id: doc.next_id(),
                author_id,
                content: content.to_string(),
                created_at: Utc::now(),
            };
            doc.posts.push(post.clone());
            Ok(post)
        })
        .await
    }

    async fn get_post_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        Ok(self
            .read(|doc| doc.posts.iter().find(|p| p.id == id).cloned())
            .await)
    }

    async fn update_post(&self, id: i64, caller_id: i64, content: &str) -> StoreResult<Post> {
        self.mutate(|doc| {
            let post = doc
                .posts
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or_else(|| StoreError::post_not_found(id))?;
            if post.author_id != caller_id {
                return Err(StoreError::NotOwner {
                    post_id: id,
                    user_id: caller_id,
                });
            }
            post.content = content.to_string();
            Ok(post.clone())
        })
        .await
    }

    async fn toggle_like(&self, post_id: i64, user_id: i64) -> StoreResult<LikeState> {
        self.mutate(|doc| {
            doc.require_post(post_id)?;
            doc.require_user(user_id)?;
            let before = doc.likes.len();
            doc.likes.retain(|l| !(l.post_id == post_id && l.user_id == user_id));
            if doc.likes.len() < before {
                return Ok(LikeState::Unliked);
            }
            let like = Like {
                id: doc.next_id(),
                post_id,
                user_id,
                created_at: Utc::now(),
            };
            doc.likes.push(like);
            Ok(LikeState::Liked)
        })
        .await
    }

    async fn count_likes(&self, post_id: i64) -> StoreResult<i64> {
        let count = self
            .read(|doc| doc.likes.iter().filter(|l| l.post_id == post_id).count())
            .await;
        Ok(i64::try_from(count).unwrap_or(i64::MAX))
    }

    async fn create_comment(
        &self,
        post_id: i64,
        author_id: i64,
        content: &str,
    ) -> StoreResult<Comment> {
        self.mutate(|doc| {
            doc.require_post(post_id)?;
            doc.require_user(author_id)?;
            let comment = Comment {
                id: doc.next_id(),
                post_id,
                author_id,
                content: content.to_string(),
                created_at: Utc::now(),
            };
            doc.comments.push(comment.clone());
            Ok(comment)
        })
        .await
    }

    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        Ok(self
            .read(|doc| {
                doc.comments
                    .iter()
                    .filter(|c| c.post_id == post_id)
                    .cloned()
                    .collect()
            })
            .await)
    }

    async fn ping(&self) -> StoreResult<()> {
        tokio::fs::metadata(&self.path).await?;
        Ok(())
    }
}
