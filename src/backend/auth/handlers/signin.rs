/**
 * Signin Handler
 *
 * This module implements the user authentication handler for POST /user/signin.
 *
 * # Authentication Process
 *
 * 1. Decode and validate the body (`SigninInput`)
 * 2. Look up the user by email
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a token
 *
 * # Security
 *
 * - Unknown email and wrong password both return 403 with the same body
 * - An unknown email still pays for one bcrypt run, so response time does
 *   not reveal which emails are registered
 * - Passwords are never logged or returned in responses
 */

use std::sync::Arc;

use axum::{extract::State, response::Json};
use sqlx::SqlitePool;

use crate::backend::auth::handlers::run_blocking;
use crate::backend::auth::handlers::types::AuthResponse;
use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::{get_user_by_email, PasswordHasher};
use crate::backend::error::BackendError;
use crate::backend::middleware::ValidatedJson;
use crate::shared::SigninInput;

/// Signin handler
///
/// # Errors
///
/// * `411` - Body missing, malformed, or failing validation
/// * `403` - No user with this email, or the password does not match
/// * `500` - Database, hash verification or token failure
pub async fn signin(
    State(pool): State<SqlitePool>,
    State(tokens): State<Arc<TokenKeys>>,
    State(hasher): State<PasswordHasher>,
    ValidatedJson(request): ValidatedJson<SigninInput>,
) -> Result<Json<AuthResponse>, BackendError> {
    tracing::info!("Signin request for: {}", request.email);

    let Some(user) = get_user_by_email(&pool, &request.email).await? else {
        let password = request.password;
        run_blocking(move || hasher.verify_absent(&password)).await?;
        tracing::warn!("User not found: {}", request.email);
        return Err(BackendError::Forbidden);
    };

    let password = request.password;
    let password_hash = user.password_hash.clone();
    if !run_blocking(move || hasher.verify(&password, &password_hash)).await? {
        tracing::warn!("Invalid password for user: {}", request.email);
        return Err(BackendError::Forbidden);
    }

    let jwt = tokens.issue(user.id)?;

    tracing::info!("User signed in successfully: {} ({})", user.id, user.email);

    Ok(Json(AuthResponse { jwt }))
}
