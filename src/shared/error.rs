//! Input Errors
//!
//! Why a request body was turned away. Decoding failures and rule
//! violations are kept apart so logs say which one happened; clients see
//! the same "Invalid input" response for both.
//!
//! ```rust
//! use inkpost::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "must look like an email address");
//! assert!(error.to_string().contains("email"));
//! ```
use thiserror::Error;

/// A request body that was rejected before reaching a handler
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Body was not JSON of the expected shape
    #[error("Malformed body: {message}")]
    SerializationError { message: String },

    /// Body decoded but `field` breaks one of its rules
    #[error("Field '{field}' {message}")]
    ValidationError { field: String, message: String },
}

impl SharedError {
    /// Body could not be decoded
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// `field` broke a rule; `message` reads as a sentence after the field name
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}
