//! Shared Module
//!
//! Request body types and validation rules that any client of the blog API
//! can depend on without pulling in the server. The backend validates every
//! incoming body against these schemas before touching the database.
//!
//! # Overview
//!
//! - **`inputs`** - Signup, signin and blog post input schemas
//! - **`error`** - Validation and serialization error types

/// Input schemas and validation rules
pub mod inputs;

/// Shared error types
pub mod error;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use inputs::{CreateBlogInput, SigninInput, SignupInput, UpdateBlogInput, Validate};
