//! Inkpost - Main Library
//!
//! Inkpost is a small blogging backend built on Axum and SQLx. Users sign up
//! and sign in with an email and password and receive a signed bearer token;
//! with that token they create, update, list and read blog posts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared with clients
//!   - Signup, signin and post input schemas
//!   - Validation rules and error types
//!
//! - **`backend`** - Server-side code
//!   - Axum router, auth gate and handlers
//!   - JWT issuing and verification
//!   - SQLite persistence for users and posts
//!
//! # Usage
//!
//! ```rust,no_run
//! use inkpost::backend::server::{config::ServerConfig, init::create_app};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::SharedError` for input validation failures
//! - `backend::BackendError` for everything a handler can fail with; it
//!   converts directly into an HTTP response

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
