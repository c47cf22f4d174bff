/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` is the single container handed to the router. It holds:
 * - The process-wide SQLite connection pool
 * - The token signing/verification keys
 * - The password hasher
 *
 * Nothing in it is mutable after startup, so there are no locks. Each field
 * is cheap to clone: the pool and the keys are reference counted and the
 * hasher is `Copy`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers ask for only what they use:
 *
 * ```rust,ignore
 * async fn handler(State(pool): State<SqlitePool>, State(tokens): State<Arc<TokenKeys>>) {
 *     // ...
 * }
 * ```
 */

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::backend::auth::sessions::TokenKeys;
use crate::backend::auth::users::PasswordHasher;
use crate::backend::server::config::ServerConfig;

/// Application state shared by every handler
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,

    /// Keys for issuing and verifying bearer tokens
    pub tokens: Arc<TokenKeys>,

    /// bcrypt hasher configured with the server's work factor
    pub hasher: PasswordHasher,
}

impl AppState {
    /// Build state from an open pool and the server configuration
    pub fn new(db_pool: SqlitePool, config: &ServerConfig) -> Self {
        Self {
            db_pool,
            tokens: Arc::new(TokenKeys::new(config.jwt_secret.as_bytes(), config.token_ttl)),
            hasher: PasswordHasher::new(config.bcrypt_cost),
        }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract the database pool directly
/// from `AppState`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Implement FromRef for the token keys
impl FromRef<AppState> for Arc<TokenKeys> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}

/// Implement FromRef for PasswordHasher
impl FromRef<AppState> for PasswordHasher {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.hasher
    }
}
