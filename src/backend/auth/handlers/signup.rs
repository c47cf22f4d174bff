/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /user/signup.
 *
 * # Registration Process
 *
 * 1. Decode and validate the body (`SignupInput`)
 * 2. Hash the password using bcrypt, off the async workers
 * 3. Create the user in the database
 * 4. Issue a token bound to the new user ID
 *
 * # Errors
 *
 * - `411` - Body missing, malformed, or failing validation; nothing is written
 * - `409` - Email already registered
 * - `500` - Hashing, database or token failure
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::run_blocking;
use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::{create_user, PasswordHasher};
use crate::backend::error::conversion::is_unique_violation;
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::SignupInput;

/// Sign up handler
///
/// # Example Request
///
/// ```http
/// POST /user/signup HTTP/1.1
/// Content-Type: application/json
///
/// { "email": "user@example.com", "password": "securepassword123" }
/// ```
///
/// # Example Response
///
/// ```json
/// { "jwt": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..." }
/// ```
pub async fn signup(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenKeys>>,
    State(hasher): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<SignupInput>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Signup request for email: {}", request.email);

    let password = request.password;
    let password_hash = run_blocking(move || hasher.hash(&password)).await?;

    let user = create_user(&pool, &request.email, &password_hash)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                tracing::warn!("Email already exists: {}", request.email);
                BackendError::Conflict
            } else {
                BackendError::Store(e)
            }
        })?;

    let jwt = tokens.issue(user.id)?;

    tracing::info!("User created successfully: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse { jwt }))
}
