//! SQLite backend
//!
//! Schema comes from the embedded `migrations/` directory and is applied when
//! the store is opened. Uniqueness of usernames and of `(post_id, user_id)`
//! likes is enforced by the schema; existence and ownership checks are folded
//! into the write statements themselves. A foreign-key failure on insert means
//! the acting user does not exist and is reported as `NotFound`.

use std::str::FromStr;

use async_trait::async_trait;
use chrono::Utc;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::{Store, StoreError, StoreResult};
use crate::shared::{Comment, LikeState, Post, User, UserUpdate};

const MAX_CONNECTIONS: u32 = 8;

fn missing_user(err: sqlx::Error, user_id: i64) -> StoreError {
    match err {
        sqlx::Error::Database(e) if e.is_foreign_key_violation() => {
            StoreError::user_not_found(user_id)
        }
        e => e.into(),
    }
}

/// `Store` over a SQLite connection pool
#[derive(Debug, Clone)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    /// Open (creating if needed) the database at `url` and run migrations
    pub async fn connect(url: &str) -> StoreResult<Self> {
        tracing::info!("Connecting to database...");

        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(options)
            .await?;

        tracing::info!("Database connection pool created successfully");
        Self::from_pool(pool).await
    }

    /// Private in-memory database
    ///
    /// Every SQLite connection to `:memory:` is its own database, so the pool
    /// is pinned to one connection that is never recycled.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::from_pool(pool).await
    }

    /// Wrap an existing pool, applying migrations first
    pub async fn from_pool(pool: SqlitePool) -> StoreResult<Self> {
        tracing::info!("Running database migrations...");
        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database migrations completed successfully");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn post_exists(&self, id: i64) -> StoreResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE id = ?1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }
}

#[async_trait]
impl Store for SqlStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        profile: &str,
    ) -> StoreResult<User> {
        let result = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, profile, created_at)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING id, username, password_hash, profile, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(profile)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(user) => Ok(user),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
                Err(StoreError::UsernameTaken(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn get_user_by_id(&self, id: i64) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, profile, created_at FROM users WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn get_user_by_username(&self, username: &str) -> StoreResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, profile, created_at FROM users WHERE username = ?1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    async fn update_user(&self, id: i64, update: UserUpdate) -> StoreResult<User> {
        if update.is_empty() {
            return Err(StoreError::EmptyUpdate);
        }

        // NULL parameters keep the stored column.
        let user = sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET password_hash = COALESCE(?2, password_hash),
                profile = COALESCE(?3, profile)
            WHERE id = ?1
            RETURNING id, username, password_hash, profile, created_at
            "#,
        )
        .bind(id)
        .bind(update.password_hash)
        .bind(update.profile)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or_else(|| StoreError::user_not_found(id))
    }

    async fn create_post(&self, author_id: i64, content: &str) -> StoreResult<Post> {
        let post = sqlx::query_as::<_, Post>(
            r#"
            INSERT INTO posts (author_id, content, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, author_id, content, created_at
            "#,
        )
        .bind(author_id)
        .bind(content)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| missing_user(e, author_id))?;
        Ok(post)
    }

    async fn get_post_by_id(&self, id: i64) -> StoreResult<Option<Post>> {
        let post = sqlx::query_as::<_, Post>(
            "SELECT id, author_id, content, created_at FROM posts WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(post)
    }

    async fn update_post(&self, id: i64, caller_id: i64, content: &str) -> StoreResult<Post> {
        let updated = sqlx::query_as::<_, Post>(
            r#"
            UPDATE posts
            SET content = ?3
            WHERE id = ?1 AND author_id = ?2
            RETURNING id, author_id, content, created_at
            "#,
        )
        .bind(id)
        .bind(caller_id)
        .bind(content)
        .fetch_optional(&self.pool)
        .await?;

        match updated {
            Some(post) => Ok(post),
            None if self.post_exists(id).await? => Err(StoreError::NotOwner {
                post_id: id,
                user_id: caller_id,
            }),
            None => Err(StoreError::post_not_found(id)),
        }
    }

    async fn toggle_like(&self, post_id: i64, user_id: i64) -> StoreResult<LikeState> {
        let mut tx = self.pool.begin().await?;

        // The delete comes first so the transaction holds the write lock
        // before anything is read.
        let removed = sqlx::query("DELETE FROM likes WHERE post_id = ?1 AND user_id = ?2")
            .bind(post_id)
            .bind(user_id)
            .execute(&mut *tx)
            .await?
            .rows_affected();

        if removed > 0 {
            tx.commit().await?;
            return Ok(LikeState::Unliked);
        }

        let inserted = sqlx::query(
            r#"
            INSERT INTO likes (post_id, user_id, created_at)
            SELECT ?1, ?2, ?3
            WHERE EXISTS (SELECT 1 FROM posts WHERE id = ?1)
            "#,
        )
        .bind(post_id)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await
        .map_err(|e| missing_user(e, user_id))?
        .rows_affected();

        if inserted == 0 {
            return Err(StoreError::post_not_found(post_id));
        }

        tx.commit().await?;
        Ok(LikeState::Liked)
    }

    async fn count_likes(&self, post_id: i64) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM likes WHERE post_id = ?1")
            .bind(post_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create_comment(
        &self,
        post_id: i64,
        author_id: i64,
        content: &str,
    ) -> StoreResult<Comment> {
        let comment = sqlx::query_as::<_, Comment>(
            r#"
            INSERT INTO comments (post_id, author_id, content, created_at)
            SELECT ?1, ?2, ?3, ?4
            WHERE EXISTS (SELECT 1 FROM posts WHERE id = ?1)
            RETURNING id, post_id, author_id, content, created_at
            "#,
        )
        .bind(post_id)
        .bind(author_id)
        .bind(content)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| missing_user(e, author_id))?;

        comment.ok_or_else(|| StoreError::post_not_found(post_id))
    }

    async fn list_comments(&self, post_id: i64) -> StoreResult<Vec<Comment>> {
        let comments = sqlx::query_as::<_, Comment>(
            r#"
            SELECT id, post_id, author_id, content, created_at
            FROM comments
            WHERE post_id = ?1
            ORDER BY id ASC
            "#,
        )
        .bind(post_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(comments)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
