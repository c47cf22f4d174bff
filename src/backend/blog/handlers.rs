//! Blog HTTP Handlers
//!
//! Handlers for `/blog`. The auth gate has already run for every one of
//! them, so `AuthUser` is always present when the route is reached.

use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;
use uuid::Uuid;

use super::db;
use super::types::{CreatePostResponse, GetPostResponse, ListPostsResponse};
use crate::backend::error::conversion::is_foreign_key_violation;
use crate::backend::error::BackendError;
use crate::backend::middleware::{AuthUser, ValidatedJson};
use crate::shared::{CreateBlogInput, UpdateBlogInput};

/// Confirmation body for a successful update
pub const UPDATED_MESSAGE: &str = "updated post";

/// Create a post
///
/// POST /blog/ - `{title, content}` → `{id}`
pub async fn create_post(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    ValidatedJson(request): ValidatedJson<CreateBlogInput>,
) -> Result<Json<CreatePostResponse>, BackendError> {
    let post = db::create_post(&pool, user.user_id, &request.title, &request.content)
        .await
        .map_err(|e| {
            // Token names a user that is not in the database
            if is_foreign_key_violation(&e) {
                tracing::warn!("Post author does not exist: {}", user.user_id);
                BackendError::Unauthorized
            } else {
                BackendError::Store(e)
            }
        })?;

    tracing::info!("Post {} created by {}", post.id, user.user_id);

    Ok(Json(CreatePostResponse { id: post.id }))
}

/// Update a post owned by the caller
///
/// PUT /blog/ - `{id, title, content}` → `updated post`
///
/// A post that does not exist and a post owned by someone else both answer
/// 404, so the response does not reveal which posts exist.
pub async fn update_post(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
    ValidatedJson(request): ValidatedJson<UpdateBlogInput>,
) -> Result<&'static str, BackendError> {
    let updated = db::update_post(
        &pool,
        request.id,
        user.user_id,
        &request.title,
        &request.content,
    )
    .await?;

    if updated == 0 {
        tracing::warn!(
            "Update of post {} by {} matched no rows",
            request.id,
            user.user_id
        );
        return Err(BackendError::NotFound);
    }

    tracing::info!("Post {} updated by {}", request.id, user.user_id);

    Ok(UPDATED_MESSAGE)
}

/// List every post
///
/// GET /blog/bulk - no ownership filter
pub async fn list_posts(
    AuthUser(user): AuthUser,
    State(pool): State<SqlitePool>,
) -> Result<Json<ListPostsResponse>, BackendError> {
    let posts = db::list_posts(&pool).await?;
    tracing::debug!("Listing {} posts for {}", posts.len(), user.user_id);
    Ok(Json(ListPostsResponse { posts }))
}

/// Get a post by ID
///
/// GET /blog/{id} - `{post}`, with `post: null` when no post has that ID.
/// An ID that is not a UUID cannot match any post and gets the same answer.
pub async fn get_post(
    AuthUser(_user): AuthUser,
    State(pool): State<SqlitePool>,
    Path(id): Path<String>,
) -> Result<Json<GetPostResponse>, BackendError> {
    let post = match Uuid::parse_str(&id) {
        Ok(id) => db::get_post_by_id(&pool, id).await?,
        Err(_) => {
            tracing::debug!("Post lookup with non-UUID id: {}", id);
            None
        }
    };

    Ok(Json(GetPostResponse { post }))
}
