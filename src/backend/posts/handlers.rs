/**
 * Post Handlers
 *
 * Thin orchestration: validate the body, read the caller from the request
 * extensions, call the store. Existence and ownership are decided by the
 * store; the handlers only translate its answer.
 */

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::MessageResponse;
use crate::backend::error::{ApiError, ApiResult};
use crate::backend::middleware::AuthUser;
use crate::backend::posts::types::{ContentRequest, LikeResponse, PostView};
use crate::backend::server::state::AppState;

type PostId = Result<Path<i64>, PathRejection>;
type ContentBody = Result<Json<ContentRequest>, JsonRejection>;

/// POST /posts
pub async fn create_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    payload: ContentBody,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Json(request) = payload?;
    let content = request.validate()?;

    let post = state.store.create_post(caller.user_id, &content).await?;
    tracing::info!("Post {} created by user {}", post.id, caller.user_id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("post created", post.id)),
    ))
}

/// GET /posts/{id}
pub async fn get_post(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
    id: PostId,
) -> ApiResult<Json<PostView>> {
    let Path(id) = id?;

    let post = state
        .store
        .get_post_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("post not found"))?;
    let likes = state.store.count_likes(id).await?;
    let comments = state.store.list_comments(id).await?;

    Ok(Json(PostView {
        post,
        likes,
        comments,
    }))
}

/// PUT /posts/{id}
///
/// Only the author may change a post; anyone else gets 403 and the content
/// stays as it was.
pub async fn update_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    id: PostId,
    payload: ContentBody,
) -> ApiResult<Json<MessageResponse>> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let content = request.validate()?;

    state
        .store
        .update_post(id, caller.user_id, &content)
        .await
        .map_err(|e| {
            tracing::warn!("Update of post {} by user {} refused: {}", id, caller.user_id, e);
            e
        })?;

    tracing::info!("Post {} updated", id);
    Ok(Json(MessageResponse::new("post updated")))
}

/// POST /posts/{id}/like
///
/// Toggles: the first call likes the post, the next one unlikes it.
pub async fn toggle_like(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    id: PostId,
) -> ApiResult<Json<LikeResponse>> {
    let Path(id) = id?;

    let like_state = state.store.toggle_like(id, caller.user_id).await?;
    tracing::debug!("User {} toggled like on post {}: {:?}", caller.user_id, id, like_state);

    Ok(Json(LikeResponse::from(like_state)))
}

/// POST /posts/{id}/comment
pub async fn comment_post(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    id: PostId,
    payload: ContentBody,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    let Path(id) = id?;
    let Json(request) = payload?;
    let content = request.validate()?;

    let comment = state
        .store
        .create_comment(id, caller.user_id, &content)
        .await?;
    tracing::info!("Comment {} added to post {}", comment.id, id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::created("comment submitted", comment.id)),
    ))
}
