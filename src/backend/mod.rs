//! Backend Module
//!
//! All server-side code for Inkpost: an Axum HTTP server exposing the user
//! and blog endpoints, backed by a SQLite connection pool.
//!
//! # Architecture
//!
//! - **`server`** - Configuration, application state, initialization
//! - **`routes`** - Route configuration and router assembly
//! - **`auth`** - Users, JWT tokens, signup and signin handlers
//! - **`blog`** - Post storage and handlers
//! - **`middleware`** - Auth gate and validated JSON extraction
//! - **`error`** - Backend error type and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state and initialization
//! ├── routes/         - Route configuration
//! ├── auth/           - Users and tokens
//! ├── blog/           - Blog posts
//! ├── middleware/     - Request middleware and extractors
//! └── error/          - Error types
//! ```
//!
//! # Request Flow
//!
//! ```text
//! client -> auth gate (/blog routes) -> handler -> SQLite -> response
//! ```
//!
//! The only shared state is `AppState`: the connection pool plus the token
//! and hashing settings. It is cheap to clone and needs no locking.

/// Server setup and configuration
pub mod server;

/// Route configuration
pub mod routes;

/// Authentication and user management
pub mod auth;

/// Blog post storage and handlers
pub mod blog;

/// Middleware for request processing
pub mod middleware;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use error::BackendError;
pub use server::create_app;
