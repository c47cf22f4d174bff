//! Backend Error Module
//!
//! Error types returned by HTTP handlers and their conversion into
//! responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - IntoResponse and store error translation
//! ```
//!
//! # Response Bodies
//!
//! Client errors keep the wire shapes existing clients depend on:
//!
//! | Error | Status | Body |
//! |---|---|---|
//! | Invalid input | 411 | `{"message":"Invalid input"}` |
//! | Unauthorized | 401 | `{"error":"unauthorized"}` |
//! | Bad credentials | 403 | `{"error":"user not found"}` |
//! | Unknown post | 404 | `{"message":"post not found"}` |
//! | Duplicate email | 409 | `{"message":"Email already registered"}` |
//!
//! Store, token and hashing failures are logged and reported as a bare 500.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
