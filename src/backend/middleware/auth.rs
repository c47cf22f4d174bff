/**
 * Authentication Middleware
 *
 * This module provides the auth gate that protects every blog route. It
 * extracts and verifies the bearer token from the Authorization header and
 * hands the user ID to handlers through request extensions.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from the bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Extract the token from an `Authorization` header value
///
/// The value must be the scheme `Bearer` (any ASCII case) followed by the
/// token, separated by whitespace. Anything after the token is rejected.
pub fn bearer_token(header_value: &str) -> Option<&str> {
    let mut parts = header_value.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if !scheme.eq_ignore_ascii_case("Bearer") || parts.next().is_some() {
        return None;
    }

    Some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the token from the Authorization header
/// 2. Verifies the token
/// 3. Attaches the user ID to request extensions for use in handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid. The
/// handler does not run in that case.
pub async fn auth_middleware(
    State(tokens): State<Arc<TokenKeys>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::Unauthorized
        })?;

    let token = bearer_token(auth_header).ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        BackendError::Unauthorized
    })?;

    let claims = tokens.verify(token).ok_or_else(|| {
        tracing::warn!("Invalid or expired token");
        BackendError::Unauthorized
    })?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id: claims.id });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Reads the user set by `auth_middleware`. On a route without the gate
/// the extension is absent and extraction fails with 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::Unauthorized
            })?;

        Ok(AuthUser(user))
    }
}
