//! Authentication Handlers Module
//!
//! HTTP handlers for the public user endpoints.
//!
//! # Handlers
//!
//! - **`signup`** - POST /user/signup - User registration
//! - **`signin`** - POST /user/signin - User authentication
//!
//! Both respond with `{"jwt": "<token>"}` on success.
//!
//! Both hash and verify passwords on the blocking thread pool through
//! `run_blocking`.

use crate::backend::error::BackendError;

/// Response types
pub mod types;

/// Signup handler
pub mod signup;

/// Signin handler
pub mod signin;

pub use types::AuthResponse;

pub use signin::signin;
pub use signup::signup;

/// Run a bcrypt operation on the blocking thread pool
pub(crate) async fn run_blocking<T, F>(op: F) -> Result<T, BackendError>
where
    F: FnOnce() -> Result<T, bcrypt::BcryptError> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(op).await??)
}
