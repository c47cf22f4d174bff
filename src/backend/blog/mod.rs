//! Blog Module
//!
//! Blog post storage and the HTTP handlers for `/blog`. Every handler here
//! runs behind the auth gate; mutations use the gate's user ID, never an ID
//! from the request body.

/// Database operations for posts
pub mod db;

/// Response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use db::Post;
pub use handlers::{create_post, get_post, list_posts, update_post};
