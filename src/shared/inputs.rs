/**
 * Input Schemas
 *
 * Request bodies accepted by the user and blog endpoints, and the rules
 * each one must satisfy before the server acts on it.
 *
 * Validation is purely structural: nothing here touches the database, so
 * the same checks can run in a client before a request is ever sent.
 */
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::SharedError;

/// Minimum accepted password length, in characters
pub const MIN_PASSWORD_LEN: usize = 6;

/// Maximum accepted password length at signup, in bytes
///
/// bcrypt reads 72 bytes including a terminating NUL, so anything longer
/// than this would be truncated.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// Structural validation for a decoded request body
pub trait Validate {
    /// Check every field rule, returning the first violation found
    fn validate(&self) -> Result<(), SharedError>;
}

/// Signup request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignupInput {
    /// Email address, unique across users
    pub email: String,
    /// Plaintext password (hashed before storage)
    pub password: String,
}

/// Signin request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

/// Body for creating a blog post
///
/// The author is never taken from the body; it comes from the verified token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBlogInput {
    pub title: String,
    pub content: String,
}

/// Body for updating a blog post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateBlogInput {
    /// Post to update
    pub id: Uuid,
    pub title: String,
    pub content: String,
}

/// Basic email shape check: `local@domain.tld`, no whitespace
///
/// # Example
/// ```rust
/// use inkpost::shared::inputs::is_valid_email;
///
/// assert!(is_valid_email("a@x.com"));
/// assert!(!is_valid_email("a@x"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs at least two non-empty labels
    let labels: Vec<&str> = domain.split('.').collect();
    labels.len() >= 2 && labels.iter().all(|label| !label.is_empty())
}

fn check_credentials(email: &str, password: &str) -> Result<(), SharedError> {
    if !is_valid_email(email) {
        return Err(SharedError::validation("email", "must look like an email address"));
    }

    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SharedError::validation(
            "password",
            format!("must be at least {} characters", MIN_PASSWORD_LEN),
        ));
    }

    Ok(())
}

fn check_not_blank(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, "must not be empty"));
    }
    Ok(())
}

impl Validate for SignupInput {
    fn validate(&self) -> Result<(), SharedError> {
        check_credentials(&self.email, &self.password)?;

        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(SharedError::validation(
                "password",
                format!("must be at most {} bytes", MAX_PASSWORD_BYTES),
            ));
        }

        Ok(())
    }
}

impl Validate for SigninInput {
    fn validate(&self) -> Result<(), SharedError> {
        check_credentials(&self.email, &self.password)
    }
}

impl Validate for CreateBlogInput {
    fn validate(&self) -> Result<(), SharedError> {
        check_not_blank("title", &self.title)?;
        check_not_blank("content", &self.content)
    }
}

impl Validate for UpdateBlogInput {
    fn validate(&self) -> Result<(), SharedError> {
        check_not_blank("title", &self.title)?;
        check_not_blank("content", &self.content)
    }
}
