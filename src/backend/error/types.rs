/**
 * Backend Error Types
 *
 * Every way a handler can fail, with the HTTP status and JSON body the
 * client sees for it.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - Body failed to decode or validate
 * - Missing or invalid bearer token
 * - Wrong email or password at signin
 * - Update targeted a post that does not exist or is not the caller's
 * - Signup with an email that is already registered
 *
 * ## Server Errors
 *
 * - Database failures
 * - Token signing failures
 * - Password hashing failures
 * - Blocking tasks that panicked or were cancelled
 */

use axum::http::StatusCode;
use serde_json::{json, Value};
use thiserror::Error;

use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use inkpost::backend::error::BackendError;
/// use axum::http::StatusCode;
///
/// let err = BackendError::Unauthorized;
/// assert_eq!(err.status_code(), StatusCode::UNAUTHORIZED);
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Request body failed to decode or validate
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] SharedError),

    /// Missing, malformed or unverifiable bearer token
    #[error("Unauthorized")]
    Unauthorized,

    /// Signin credentials did not match any user
    #[error("Invalid credentials")]
    Forbidden,

    /// Post does not exist, or the caller does not own it
    #[error("Post not found")]
    NotFound,

    /// Signup email is already registered
    #[error("Email already registered")]
    Conflict,

    /// Database error
    #[error("Database error: {0}")]
    Store(#[from] sqlx::Error),

    /// Token signing error
    #[error("Token error: {0}")]
    Token(#[from] jsonwebtoken::errors::Error),

    /// Password hashing or verification error
    #[error("Password hashing error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// Work moved to the blocking pool did not complete
    #[error("Blocking task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl BackendError {
    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `InvalidInput` - 411 Length Required
    /// - `Unauthorized` - 401 Unauthorized
    /// - `Forbidden` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Conflict` - 409 Conflict
    /// - `Store`, `Token`, `PasswordHash`, `Task` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) => StatusCode::LENGTH_REQUIRED,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Conflict => StatusCode::CONFLICT,
            Self::Store(_) | Self::Token(_) | Self::PasswordHash(_) | Self::Task(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON body sent to the client
    ///
    /// Internal details never leave the server; server errors share one body.
    pub fn body(&self) -> Value {
        match self {
            Self::InvalidInput(_) => json!({ "message": "Invalid input" }),
            Self::Unauthorized => json!({ "error": "unauthorized" }),
            Self::Forbidden => json!({ "error": "user not found" }),
            Self::NotFound => json!({ "message": "post not found" }),
            Self::Conflict => json!({ "message": "Email already registered" }),
            Self::Store(_) | Self::Token(_) | Self::PasswordHash(_) | Self::Task(_) => {
                json!({ "message": "internal server error" })
            }
        }
    }

    /// Whether this error is the server's fault
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }
}
