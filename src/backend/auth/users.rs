/**
 * User Model and Database Operations
 *
 * This module handles user data, password hashing and the user table.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::shared::inputs::MAX_PASSWORD_BYTES;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// bcrypt hashing with a fixed work factor
///
/// Passwords longer than `MAX_PASSWORD_BYTES` are never truncated: hashing
/// one is an error and verifying one is a mismatch, so two passwords that
/// share a long prefix can never stand in for each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password with a fresh salt
    pub fn hash(&self, password: &str) -> Result<String, bcrypt::BcryptError> {
        bcrypt::non_truncating_hash(password, self.cost)
    }

    /// Check a plaintext password against a stored hash
    pub fn verify(&self, password: &str, password_hash: &str) -> Result<bool, bcrypt::BcryptError> {
        if password.len() > MAX_PASSWORD_BYTES {
            return self.verify_absent(password);
        }
        bcrypt::non_truncating_verify(password, password_hash)
    }

    /// Do the work of a verification when there is no stored hash
    ///
    /// Signin for an unknown email calls this so it costs as much as a wrong
    /// password. Always reports a mismatch.
    pub fn verify_absent(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        bcrypt::hash(password, self.cost).map(|_| false)
    }
}

/// Create a new user
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `email` - User email
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user, or the store error. A duplicate email surfaces as a
/// unique-constraint violation.
pub async fn create_user(
    pool: &SqlitePool,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let user = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, email, password_hash, created_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, email, password_hash, created_at
        "#
    )
    .bind(id)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .fetch_one(pool)
    .await?;

    Ok(user)
}

/// Get user by email
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, password_hash, created_at
        FROM users
        WHERE email = ?
        "#
    )
    .bind(email)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}
