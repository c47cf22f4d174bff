//! Blog response bodies

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::db::Post;

/// Response to a successful create
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatePostResponse {
    pub id: Uuid,
}

/// Response listing every post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
}

/// Response to a lookup by ID; `post` is `null` when nothing matched
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GetPostResponse {
    pub post: Option<Post>,
}
