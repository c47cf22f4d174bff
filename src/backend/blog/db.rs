//! Database operations for blog posts
//!
//! Ownership is enforced in SQL: updates match on both the post ID and the
//! author ID in one statement, so a non-owner's update affects zero rows.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A stored blog post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    /// Owning user
    pub author_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create a new post owned by `author_id`
pub async fn create_post(
    pool: &SqlitePool,
    author_id: Uuid,
    title: &str,
    content: &str,
) -> Result<Post, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (id, title, content, author_id, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        RETURNING id, title, content, author_id, created_at, updated_at
        "#
    )
    .bind(id)
    .bind(title)
    .bind(content)
    .bind(author_id)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Update a post's title and content if `author_id` owns it
///
/// # Returns
/// Number of rows updated: 1 on success, 0 when the post does not exist or
/// belongs to someone else.
pub async fn update_post(
    pool: &SqlitePool,
    id: Uuid,
    author_id: Uuid,
    title: &str,
    content: &str,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = ?, content = ?, updated_at = ?
        WHERE id = ? AND author_id = ?
        "#
    )
    .bind(title)
    .bind(content)
    .bind(Utc::now())
    .bind(id)
    .bind(author_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Get all posts, newest first
pub async fn list_posts(pool: &SqlitePool) -> Result<Vec<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        "#
    )
    .fetch_all(pool)
    .await
}

/// Get a post by ID
pub async fn get_post_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author_id, created_at, updated_at
        FROM posts
        WHERE id = ?
        "#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
